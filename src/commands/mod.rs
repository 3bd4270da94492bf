//! Command implementations for routegraph

pub mod dispatch;
pub mod output;
