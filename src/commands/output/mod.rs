//! Rendering of query results in the selected output format

mod human;
mod json;
mod records;

use routegraph_core::error::Result;
use routegraph_core::graph::{Graph, HopPath, Neighbor, PathSet, RoutePath};

use crate::cli::{Cli, OutputFormat};

/// A computed result ready for rendering
pub enum Report<'a> {
    Nodes {
        graph: &'a Graph,
        nodes: Vec<&'a str>,
    },
    Neighbors {
        node: &'a str,
        neighbors: &'a [Neighbor],
        points_of_interest: &'a [String],
    },
    Paths {
        mode: &'static str,
        set: &'a PathSet,
    },
    Route {
        mode: &'static str,
        from: &'a str,
        to: &'a str,
        path: &'a RoutePath,
        truncation: Option<&'a str>,
    },
    Hops {
        from: &'a str,
        to: &'a str,
        path: &'a HopPath,
        truncation: Option<&'a str>,
    },
}

pub fn emit(cli: &Cli, report: &Report<'_>) -> Result<()> {
    match cli.format {
        OutputFormat::Human => {
            for line in human::render(report, cli.quiet) {
                println!("{}", line);
            }
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&json::render(report)?)?);
        }
        OutputFormat::Records => {
            for line in records::render(report) {
                println!("{}", line);
            }
        }
    }
    Ok(())
}

/// Join node names with arrows
pub(crate) fn arrow_path(nodes: &[String]) -> String {
    nodes.join(" -> ")
}
