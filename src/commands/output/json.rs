use serde_json::{json, Value};

use routegraph_core::error::Result;

use super::Report;

/// Output in JSON format
pub fn render(report: &Report<'_>) -> Result<Value> {
    let value = match report {
        Report::Nodes { graph, nodes } => {
            let nodes: Vec<Value> = nodes
                .iter()
                .map(|&node| -> Result<Value> {
                    Ok(json!({
                        "name": node,
                        "roads": graph.neighbors(node)?.len(),
                        "points_of_interest": graph.points_of_interest(node)?,
                    }))
                })
                .collect::<Result<_>>()?;
            json!({ "nodes": nodes })
        }
        Report::Neighbors {
            node,
            neighbors,
            points_of_interest,
        } => json!({
            "node": node,
            "neighbors": neighbors,
            "points_of_interest": points_of_interest,
        }),
        Report::Paths { mode, set } => {
            let mut value = serde_json::to_value(set)?;
            value["mode"] = json!(mode);
            value["count"] = json!(set.len());
            value
        }
        Report::Route {
            mode,
            from,
            to,
            path,
            truncation,
        } => with_truncation(
            json!({
                "mode": mode,
                "from": from,
                "to": to,
                "found": path.found(),
                "nodes": path.nodes,
                "distance": path.distance,
            }),
            *truncation,
        ),
        Report::Hops {
            from,
            to,
            path,
            truncation,
        } => with_truncation(
            json!({
                "mode": "fewest-stops",
                "from": from,
                "to": to,
                "found": path.found(),
                "nodes": path.nodes,
                "stops": path.stops,
            }),
            *truncation,
        ),
    };
    Ok(value)
}

/// Mark a single-answer result the same way path sets are marked
fn with_truncation(mut value: Value, truncation: Option<&str>) -> Value {
    value["truncated"] = json!(truncation.is_some());
    if let Some(reason) = truncation {
        value["truncation_reason"] = json!(reason);
    }
    value
}
