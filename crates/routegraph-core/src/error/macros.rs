//! Error macros for routegraph

/// Macro for creating invalid value errors
#[macro_export]
macro_rules! bail_invalid {
    ($context:expr, $value:expr) => {
        return Err($crate::error::RouteError::invalid_value($context, $value))
    };
}

/// Macro for rejecting operations the graph does not offer
#[macro_export]
macro_rules! bail_not_supported {
    ($operation:expr) => {
        return Err($crate::error::RouteError::not_supported($operation))
    };
}
