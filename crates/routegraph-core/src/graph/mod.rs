//! Graph store and route queries
//!
//! - `store`: the undirected weighted graph and its points of interest
//! - `shortest`: Dijkstra shortest path with node exclusion
//! - `enumerate`: backtracking simple-path search driven by policies
//! - `finder`: the query front end used by callers

pub mod enumerate;
pub mod finder;
pub mod shortest;
pub mod store;
pub mod types;

pub use enumerate::{backtrack, PathPolicy, Walk};
pub use finder::PathFinder;
pub use shortest::dijkstra_shortest_path;
pub use store::Graph;
pub use types::{Bounded, HopPath, Neighbor, PathSet, RoutePath, SearchLimits, Weight};
