use serde::{Deserialize, Serialize};

/// Non-negative edge weight and accumulated path distance
pub type Weight = u64;

pub const TRUNCATED_MAX_PATHS: &str = "max_paths";
pub const TRUNCATED_MAX_EXPANSIONS: &str = "max_expansions";

/// One directed half of an undirected edge, stored under its source node
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Neighbor {
    pub node: String,
    pub weight: Weight,
}

/// A path paired with its cumulative edge weight.
///
/// An empty node list with distance 0 means no path was found.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RoutePath {
    pub nodes: Vec<String>,
    pub distance: Weight,
}

impl RoutePath {
    pub fn not_found() -> Self {
        RoutePath {
            nodes: Vec::new(),
            distance: 0,
        }
    }

    pub fn found(&self) -> bool {
        !self.nodes.is_empty()
    }

    /// Number of edges walked
    pub fn hops(&self) -> usize {
        self.nodes.len().saturating_sub(1)
    }
}

/// A path paired with its hop count.
///
/// `stops` is `None` when the destination is unreachable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HopPath {
    pub nodes: Vec<String>,
    pub stops: Option<usize>,
}

impl HopPath {
    pub fn unreachable() -> Self {
        HopPath {
            nodes: Vec::new(),
            stops: None,
        }
    }

    pub fn found(&self) -> bool {
        self.stops.is_some()
    }
}

impl From<RoutePath> for HopPath {
    fn from(path: RoutePath) -> Self {
        if !path.found() {
            return HopPath::unreachable();
        }
        let stops = path.hops();
        HopPath {
            nodes: path.nodes,
            stops: Some(stops),
        }
    }
}

/// Every path produced by one enumeration query
#[derive(Debug, Clone, Serialize)]
pub struct PathSet {
    pub from: String,
    pub to: String,
    pub paths: Vec<RoutePath>,
    pub truncated: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub truncation_reason: Option<String>,
}

impl PathSet {
    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    pub fn len(&self) -> usize {
        self.paths.len()
    }
}

/// A single answer drawn from an enumeration, marked when a search limit
/// ended that enumeration before every candidate was seen
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Bounded<T> {
    #[serde(flatten)]
    pub result: T,
    pub truncated: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub truncation_reason: Option<String>,
}

impl<T> Bounded<T> {
    pub fn new(result: T, truncation: Option<&str>) -> Self {
        Bounded {
            result,
            truncated: truncation.is_some(),
            truncation_reason: truncation.map(str::to_string),
        }
    }
}

/// Caps on path enumeration. `None` leaves the search unbounded.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchLimits {
    /// Stop after recording this many paths
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_paths: Option<usize>,
    /// Stop after entering this many nodes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_expansions: Option<usize>,
}

impl SearchLimits {
    pub fn unbounded() -> Self {
        Self::default()
    }

    /// Fill unset limits from `fallback`
    pub fn or(self, fallback: SearchLimits) -> Self {
        SearchLimits {
            max_paths: self.max_paths.or(fallback.max_paths),
            max_expansions: self.max_expansions.or(fallback.max_expansions),
        }
    }
}
