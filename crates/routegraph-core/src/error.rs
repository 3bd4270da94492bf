//! Error types and exit codes for routegraph
//!
//! Exit codes:
//! - 0: Success
//! - 1: Generic failure
//! - 2: Usage error (bad flags/args, unsupported operation)
//! - 3: Data error (unknown node, invalid weight, unreadable network file)

mod macros;

use thiserror::Error;

/// Process exit codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success (0)
    Success = 0,
    /// Generic failure (1)
    Failure = 1,
    /// Usage error - bad flags/args (2)
    Usage = 2,
    /// Data error - unknown node, bad network definition (3)
    Data = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

/// Errors that can occur while building or querying a graph
#[derive(Error, Debug)]
pub enum RouteError {
    // Usage errors (exit code 2)
    #[error("unknown format: {0} (expected: human, json, or records)")]
    UnknownFormat(String),

    #[error("{0}")]
    UsageError(String),

    #[error("operation not supported: {operation}")]
    NotSupported { operation: String },

    #[error("invalid {context}: {value}")]
    InvalidValue { context: String, value: String },

    // Data errors (exit code 3)
    #[error("node not found: {node}")]
    NodeNotFound { node: String },

    #[error("invalid weight {weight} for edge {from} -- {to} (weights must be non-negative)")]
    InvalidWeight {
        from: String,
        to: String,
        weight: i64,
    },

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("cannot read network file {path}: {source}")]
    NetworkFile {
        path: String,
        source: std::io::Error,
    },

    // Generic failures (exit code 1)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{0}")]
    Other(String),
}

impl RouteError {
    /// Create an error for a node the graph has never seen
    pub fn node_not_found(node: impl Into<String>) -> Self {
        RouteError::NodeNotFound { node: node.into() }
    }

    /// Create an error for an operation the graph deliberately does not offer
    pub fn not_supported(operation: impl Into<String>) -> Self {
        RouteError::NotSupported {
            operation: operation.into(),
        }
    }

    /// Create an error for an invalid value or configuration
    pub fn invalid_value(context: &str, value: impl std::fmt::Display) -> Self {
        RouteError::InvalidValue {
            context: context.to_string(),
            value: value.to_string(),
        }
    }

    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            RouteError::UnknownFormat(_)
            | RouteError::UsageError(_)
            | RouteError::NotSupported { .. }
            | RouteError::InvalidValue { .. } => ExitCode::Usage,

            RouteError::NodeNotFound { .. }
            | RouteError::InvalidWeight { .. }
            | RouteError::Toml(_)
            | RouteError::NetworkFile { .. } => ExitCode::Data,

            RouteError::Io(_) | RouteError::Json(_) | RouteError::Other(_) => ExitCode::Failure,
        }
    }

    /// Get the error type identifier
    pub fn error_type(&self) -> &'static str {
        match self {
            RouteError::UnknownFormat(_) => "unknown_format",
            RouteError::UsageError(_) => "usage_error",
            RouteError::NotSupported { .. } => "not_supported",
            RouteError::InvalidValue { .. } => "invalid_value",
            RouteError::NodeNotFound { .. } => "node_not_found",
            RouteError::InvalidWeight { .. } => "invalid_weight",
            RouteError::Toml(_) => "toml_error",
            RouteError::NetworkFile { .. } => "network_file",
            RouteError::Io(_) => "io_error",
            RouteError::Json(_) => "json_error",
            RouteError::Other(_) => "other",
        }
    }

    /// Convert error to JSON representation for structured error output.
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "error": {
                "code": self.exit_code() as i32,
                "type": self.error_type(),
                "message": self.to_string(),
            }
        })
    }
}

/// Result type alias for routegraph operations
pub type Result<T> = std::result::Result<T, RouteError>;
