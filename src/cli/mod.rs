//! CLI argument parsing for routegraph
//!
//! Global flags: --graph, --format, --quiet, --verbose, --max-paths, --max-expansions

pub mod parse;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

pub use routegraph_core::format::OutputFormat;
use routegraph_core::graph::SearchLimits;

use parse::{parse_format, parse_limit};

/// Routegraph - route queries over a weighted network of locations
#[derive(Parser, Debug)]
#[command(name = "routegraph")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Network definition file (TOML); the built-in sample network is used when absent
    #[arg(long, global = true, env = "ROUTEGRAPH_GRAPH")]
    pub graph: Option<PathBuf>,

    /// Output format (human, json, records)
    #[arg(long, global = true, default_value = "human", value_parser = parse_format)]
    pub format: OutputFormat,

    /// Suppress non-essential output
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Report timing for major phases
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Log level or filter directive (overrides --verbose)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Emit logs as JSON on stderr
    #[arg(long, global = true)]
    pub log_json: bool,

    /// Stop path enumeration after this many paths
    #[arg(long, global = true, value_parser = parse_limit)]
    pub max_paths: Option<usize>,

    /// Stop path enumeration after entering this many nodes
    #[arg(long, global = true, value_parser = parse_limit)]
    pub max_expansions: Option<usize>,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Search limits given on the command line
    pub fn limits(&self) -> SearchLimits {
        SearchLimits {
            max_paths: self.max_paths,
            max_expansions: self.max_expansions,
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List every location with its neighbor count and points of interest
    Nodes {
        /// Only list locations carrying this point of interest
        #[arg(long)]
        poi: Option<String>,
    },

    /// Show the roads leaving a location
    Neighbors {
        /// Location name (case-sensitive)
        node: String,
    },

    /// Enumerate every simple path between two locations
    Paths { from: String, to: String },

    /// Find the shortest path, optionally avoiding locations
    Shortest {
        from: String,
        to: String,

        /// Location to avoid (can be specified multiple times)
        #[arg(long, action = clap::ArgAction::Append)]
        avoid: Vec<String>,
    },

    /// Enumerate paths whose total distance is at most MAX_DISTANCE
    Within {
        from: String,
        to: String,
        max_distance: u64,
    },

    /// Find the path with the fewest stops
    FewestStops { from: String, to: String },

    /// Find the first path visiting waypoints in order
    Via {
        from: String,
        to: String,

        /// Waypoint to visit, in order (can be specified multiple times)
        #[arg(long = "waypoint", short = 'w', action = clap::ArgAction::Append)]
        waypoints: Vec<String>,
    },

    /// Change the weight of a road (not supported)
    UpdateWeight {
        from: String,
        to: String,
        #[arg(allow_hyphen_values = true)]
        weight: i64,
    },

    /// Remove a location (not supported)
    RemoveNode { node: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_format() {
        let cli = Cli::try_parse_from(["routegraph", "--format", "json", "nodes"]).unwrap();
        assert_eq!(cli.format, OutputFormat::Json);
    }

    #[test]
    fn test_format_default_human() {
        let cli = Cli::try_parse_from(["routegraph", "nodes"]).unwrap();
        assert_eq!(cli.format, OutputFormat::Human);
    }

    #[test]
    fn test_unknown_format_rejected() {
        assert!(Cli::try_parse_from(["routegraph", "--format", "yaml", "nodes"]).is_err());
    }

    #[test]
    fn test_repeated_avoid_and_waypoints() {
        let cli = Cli::try_parse_from([
            "routegraph",
            "shortest",
            "A",
            "Z",
            "--avoid",
            "B",
            "--avoid",
            "C",
        ])
        .unwrap();
        match cli.command {
            Commands::Shortest { avoid, .. } => assert_eq!(avoid, vec!["B", "C"]),
            other => panic!("unexpected command {:?}", other),
        }

        let cli =
            Cli::try_parse_from(["routegraph", "via", "A", "Z", "-w", "D", "-w", "C"]).unwrap();
        match cli.command {
            Commands::Via { waypoints, .. } => assert_eq!(waypoints, vec!["D", "C"]),
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_global_limits_after_subcommand() {
        let cli = Cli::try_parse_from(["routegraph", "paths", "A", "Z", "--max-paths", "3"])
            .unwrap();
        assert_eq!(cli.limits().max_paths, Some(3));
        assert_eq!(cli.limits().max_expansions, None);
    }

    #[test]
    fn test_negative_max_distance_rejected() {
        assert!(Cli::try_parse_from(["routegraph", "within", "A", "Z", "-5"]).is_err());
    }

    #[test]
    fn test_negative_weight_parses_for_update() {
        let cli =
            Cli::try_parse_from(["routegraph", "update-weight", "A", "B", "-3"]).unwrap();
        assert!(matches!(cli.command, Commands::UpdateWeight { weight: -3, .. }));
    }
}
