//! Routegraph Core Library
//!
//! Route queries over small weighted, undirected networks of named
//! locations: shortest paths, simple-path enumeration, distance-bounded and
//! fewest-stop searches, and ordered-waypoint routing.

pub mod config;
pub mod error;
pub mod format;
pub mod graph;
pub mod logging;
