//! Line-oriented records: one `H` header line, then one line per item.
//! Node names are quoted so names containing spaces stay unambiguous.

use routegraph_core::graph::RoutePath;

use super::Report;

fn quoted(nodes: &[String]) -> String {
    nodes
        .iter()
        .map(|n| format!("\"{}\"", n))
        .collect::<Vec<_>>()
        .join(" ")
}

fn truncated(reason: Option<&str>) -> &str {
    reason.unwrap_or("false")
}

fn path_record(index: usize, path: &RoutePath) -> String {
    format!(
        "P {} distance={} stops={} {}",
        index,
        path.distance,
        path.hops(),
        quoted(&path.nodes)
    )
}

/// Output in records format
pub fn render(report: &Report<'_>) -> Vec<String> {
    let mut lines = Vec::new();
    match report {
        Report::Nodes { graph, nodes } => {
            lines.push(format!(
                "H routegraph=1 records=1 mode=nodes count={}",
                nodes.len()
            ));
            for &node in nodes {
                let degree = graph.neighbors(node).map(|n| n.len()).unwrap_or_default();
                let pois = graph.points_of_interest(node).unwrap_or_default();
                let line = format!("N \"{}\" roads={} {}", node, degree, quoted(pois));
                lines.push(line.trim_end().to_string());
            }
        }
        Report::Neighbors {
            node, neighbors, ..
        } => {
            lines.push(format!(
                "H routegraph=1 records=1 mode=neighbors node=\"{}\" count={}",
                node,
                neighbors.len()
            ));
            for neighbor in neighbors.iter() {
                lines.push(format!("E \"{}\" weight={}", neighbor.node, neighbor.weight));
            }
        }
        Report::Paths { mode, set } => {
            lines.push(format!(
                "H routegraph=1 records=1 mode={} from=\"{}\" to=\"{}\" count={} truncated={}",
                mode,
                set.from,
                set.to,
                set.len(),
                truncated(set.truncation_reason.as_deref())
            ));
            for (i, path) in set.paths.iter().enumerate() {
                lines.push(path_record(i + 1, path));
            }
        }
        Report::Route {
            mode,
            from,
            to,
            path,
            truncation,
        } => {
            lines.push(format!(
                "H routegraph=1 records=1 mode={} from=\"{}\" to=\"{}\" found={} truncated={}",
                mode,
                from,
                to,
                path.found(),
                truncated(*truncation)
            ));
            if path.found() {
                lines.push(path_record(1, path));
            }
        }
        Report::Hops {
            from,
            to,
            path,
            truncation,
        } => {
            lines.push(format!(
                "H routegraph=1 records=1 mode=fewest-stops from=\"{}\" to=\"{}\" found={} truncated={}",
                from,
                to,
                path.found(),
                truncated(*truncation)
            ));
            if let Some(stops) = path.stops {
                lines.push(format!("P 1 stops={} {}", stops, quoted(&path.nodes)));
            }
        }
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use routegraph_core::graph::{Graph, HopPath, PathSet};

    #[test]
    fn test_path_records() {
        let set = PathSet {
            from: "Negombo".into(),
            to: "Kandy".into(),
            paths: vec![RoutePath {
                nodes: vec!["Negombo".into(), "Kandy".into()],
                distance: 20,
            }],
            truncated: true,
            truncation_reason: Some("max_paths".into()),
        };
        let lines = render(&Report::Paths {
            mode: "paths",
            set: &set,
        });
        assert_eq!(
            lines[0],
            "H routegraph=1 records=1 mode=paths from=\"Negombo\" to=\"Kandy\" count=1 truncated=max_paths"
        );
        assert_eq!(lines[1], "P 1 distance=20 stops=1 \"Negombo\" \"Kandy\"");
    }

    #[test]
    fn test_route_not_found_has_only_header() {
        let path = RoutePath::not_found();
        let lines = render(&Report::Route {
            mode: "via",
            from: "A",
            to: "B",
            path: &path,
            truncation: None,
        });
        assert_eq!(lines.len(), 1);
        assert!(lines[0].ends_with("found=false truncated=false"));
    }

    #[test]
    fn test_capped_hops_header_names_reason() {
        let path = HopPath {
            nodes: vec!["A".into(), "Z".into()],
            stops: Some(1),
        };
        let lines = render(&Report::Hops {
            from: "A",
            to: "Z",
            path: &path,
            truncation: Some("max_expansions"),
        });
        assert!(lines[0].ends_with("found=true truncated=max_expansions"));
        assert_eq!(lines[1], "P 1 stops=1 \"A\" \"Z\"");
    }

    #[test]
    fn test_node_records_follow_selection() {
        let mut graph = Graph::new();
        graph.add_edge("A", "B", 1).unwrap();
        graph.add_point_of_interest("B", "Harbour");
        let lines = render(&Report::Nodes {
            graph: &graph,
            nodes: graph.nodes_with_point_of_interest("Harbour"),
        });
        assert_eq!(lines[0], "H routegraph=1 records=1 mode=nodes count=1");
        assert_eq!(lines[1], "N \"B\" roads=1 \"Harbour\"");
    }
}
