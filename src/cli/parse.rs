use routegraph_core::format::OutputFormat;

/// Parse output format from string
pub fn parse_format(s: &str) -> std::result::Result<OutputFormat, String> {
    s.parse::<OutputFormat>().map_err(|e| e.to_string())
}

/// Parse a search limit (must be at least 1)
pub fn parse_limit(s: &str) -> std::result::Result<usize, String> {
    let value = s
        .parse::<usize>()
        .map_err(|_| format!("'{}' is not a positive integer", s))?;
    if value == 0 {
        return Err("limit must be at least 1".to_string());
    }
    Ok(value)
}
