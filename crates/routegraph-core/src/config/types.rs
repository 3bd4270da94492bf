//! Network definition types

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::graph::SearchLimits;

/// A network of locations loaded from TOML
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NetworkConfig {
    /// Undirected weighted roads, replayed in file order
    #[serde(default)]
    pub edges: Vec<EdgeSpec>,

    /// Point-of-interest labels keyed by node
    #[serde(default)]
    pub points_of_interest: BTreeMap<String, Vec<String>>,

    /// Default enumeration limits
    #[serde(default)]
    pub search: SearchLimits,
}

/// One road between two locations
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EdgeSpec {
    pub from: String,
    pub to: String,
    /// Signed so negative weights reach the graph and are rejected there
    pub weight: i64,
}
