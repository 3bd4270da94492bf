use super::{arrow_path, Report};

fn truncation_note(reason: &str) -> String {
    format!("Search stopped early ({}); results are incomplete", reason)
}

/// Output in human-readable format
pub fn render(report: &Report<'_>, quiet: bool) -> Vec<String> {
    let mut lines = Vec::new();
    match report {
        Report::Nodes { graph, nodes } => {
            if nodes.is_empty() && !quiet {
                lines.push(if graph.node_count() == 0 {
                    "Network is empty".to_string()
                } else {
                    "No matching locations".to_string()
                });
            }
            for &node in nodes {
                let degree = graph.neighbors(node).map(|n| n.len()).unwrap_or_default();
                let pois = graph.points_of_interest(node).unwrap_or_default();
                let mut line = format!("{} (roads: {})", node, degree);
                if !pois.is_empty() {
                    line.push_str(&format!(" [{}]", pois.join(", ")));
                }
                lines.push(line);
            }
        }
        Report::Neighbors {
            node,
            neighbors,
            points_of_interest,
        } => {
            if neighbors.is_empty() {
                if !quiet {
                    lines.push(format!("No roads leave {}", node));
                }
            } else {
                for neighbor in neighbors.iter() {
                    lines.push(format!("-- {} ({})", neighbor.node, neighbor.weight));
                }
            }
            if !points_of_interest.is_empty() {
                lines.push(format!("Points of interest: {}", points_of_interest.join(", ")));
            }
        }
        Report::Paths { set, .. } => {
            if set.is_empty() {
                if !quiet {
                    lines.push(format!("No paths found from {} to {}", set.from, set.to));
                }
            } else {
                for (i, path) in set.paths.iter().enumerate() {
                    lines.push(format!(
                        "{}. {} (distance {})",
                        i + 1,
                        arrow_path(&path.nodes),
                        path.distance
                    ));
                }
            }
            if let Some(reason) = &set.truncation_reason {
                lines.push(truncation_note(reason));
            }
        }
        Report::Route {
            from,
            to,
            path,
            truncation,
            ..
        } => {
            if path.found() {
                lines.push(format!(
                    "{} (distance {})",
                    arrow_path(&path.nodes),
                    path.distance
                ));
            } else if !quiet {
                lines.push(format!("No path from {} to {}", from, to));
            }
            lines.extend(truncation.map(truncation_note));
        }
        Report::Hops {
            from,
            to,
            path,
            truncation,
        } => {
            match path.stops {
                Some(stops) => {
                    lines.push(format!("{} ({} stops)", arrow_path(&path.nodes), stops));
                }
                None if !quiet => lines.push(format!("No path from {} to {}", from, to)),
                None => {}
            }
            lines.extend(truncation.map(truncation_note));
        }
    }
    lines
}
