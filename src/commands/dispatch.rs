//! Build the network and route one query to the engine

use std::collections::HashSet;
use std::time::Instant;

use tracing::debug;

use routegraph_core::config::NetworkConfig;
use routegraph_core::error::Result;
use routegraph_core::graph::PathFinder;
use routegraph_core::trace_time;

use crate::cli::{Cli, Commands};
use crate::commands::output::{self, Report};

fn load_network(cli: &Cli) -> Result<NetworkConfig> {
    match &cli.graph {
        Some(path) => {
            debug!(path = %path.display(), "loading network");
            NetworkConfig::load(path)
        }
        None => Ok(NetworkConfig::sample()),
    }
}

pub fn run(cli: &Cli, start: Instant) -> Result<()> {
    let network = load_network(cli)?;
    let mut graph = network.build_graph()?;
    trace_time!(start, "build_graph", nodes = graph.node_count());

    let finder = PathFinder::new(&graph).with_limits(cli.limits().or(network.search));

    match &cli.command {
        Commands::Nodes { poi } => {
            let graph = finder.graph();
            let nodes = match poi {
                Some(label) => graph.nodes_with_point_of_interest(label),
                None => graph.nodes(),
            };
            output::emit(cli, &Report::Nodes { graph, nodes })?;
        }
        Commands::Neighbors { node } => {
            let report = Report::Neighbors {
                node,
                neighbors: graph.neighbors(node)?,
                points_of_interest: graph.points_of_interest(node)?,
            };
            output::emit(cli, &report)?;
        }
        Commands::Paths { from, to } => {
            let set = finder.find_all_paths(from, to)?;
            output::emit(cli, &Report::Paths { mode: "paths", set: &set })?;
        }
        Commands::Shortest { from, to, avoid } => {
            let excluded: HashSet<String> = avoid.iter().cloned().collect();
            let path = finder.shortest_path(from, to, &excluded)?;
            output::emit(
                cli,
                &Report::Route {
                    mode: "shortest",
                    from,
                    to,
                    path: &path,
                    truncation: None,
                },
            )?;
        }
        Commands::Within {
            from,
            to,
            max_distance,
        } => {
            let set = finder.find_paths_within_distance(from, to, *max_distance)?;
            output::emit(cli, &Report::Paths { mode: "within", set: &set })?;
        }
        Commands::FewestStops { from, to } => {
            let best = finder.find_path_with_fewest_stops(from, to)?;
            let report = Report::Hops {
                from,
                to,
                path: &best.result,
                truncation: best.truncation_reason.as_deref(),
            };
            output::emit(cli, &report)?;
        }
        Commands::Via {
            from,
            to,
            waypoints,
        } => {
            let via = finder.find_path_through_waypoints(from, waypoints, to)?;
            output::emit(
                cli,
                &Report::Route {
                    mode: "via",
                    from,
                    to,
                    path: &via.result,
                    truncation: via.truncation_reason.as_deref(),
                },
            )?;
        }
        Commands::UpdateWeight { from, to, weight } => {
            graph.update_edge_weight(from, to, *weight)?;
        }
        Commands::RemoveNode { node } => {
            graph.remove_node(node)?;
        }
    }

    trace_time!(start, "execute_command");
    Ok(())
}
