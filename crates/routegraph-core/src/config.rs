//! Network definition files
//!
//! A network is described in TOML and replayed into a [`Graph`] at startup:
//!
//! ```toml
//! [[edges]]
//! from = "Negombo"
//! to = "Marawila"
//! weight = 4
//!
//! [points_of_interest]
//! Kandy = ["Temple of the Tooth"]
//!
//! [search]
//! max_paths = 1000
//! ```

pub mod types;

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use crate::error::{Result, RouteError};
use crate::graph::Graph;

pub use types::{EdgeSpec, NetworkConfig};

impl NetworkConfig {
    /// Load a network definition from a file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|source| RouteError::NetworkFile {
            path: path.display().to_string(),
            source,
        })?;
        Self::parse(&content)
    }

    /// Parse a network definition from TOML text
    pub fn parse(content: &str) -> Result<Self> {
        let config: NetworkConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        for edge in &self.edges {
            if edge.from.is_empty() || edge.to.is_empty() {
                crate::bail_invalid!("edge endpoint", format!("'{}' -- '{}'", edge.from, edge.to));
            }
        }
        if self.search.max_paths == Some(0) {
            crate::bail_invalid!("search.max_paths", 0);
        }
        if self.search.max_expansions == Some(0) {
            crate::bail_invalid!("search.max_expansions", 0);
        }
        Ok(())
    }

    /// Build a graph by replaying every edge, then every point of interest
    #[tracing::instrument(skip(self), fields(edges = self.edges.len()))]
    pub fn build_graph(&self) -> Result<Graph> {
        let mut graph = Graph::new();
        for edge in &self.edges {
            graph.add_edge(edge.from.as_str(), edge.to.as_str(), edge.weight)?;
        }
        for (node, labels) in &self.points_of_interest {
            for label in labels {
                graph.add_point_of_interest(node.as_str(), label.as_str());
            }
        }
        tracing::debug!(
            nodes = graph.node_count(),
            edges = graph.edge_count(),
            "graph built"
        );
        Ok(graph)
    }

    /// The built-in road network between Negombo and Kandy
    pub fn sample() -> Self {
        let edges: Vec<EdgeSpec> = [
            ("Negombo", "Marawila", 4),
            ("Negombo", "Kuliyapitiya", 2),
            ("Marawila", "Kuliyapitiya", 1),
            ("Marawila", "Kurunagala", 5),
            ("Kuliyapitiya", "Kurunagala", 8),
            ("Kuliyapitiya", "Galagedara", 10),
            ("Kurunagala", "Galagedara", 2),
            ("Kurunagala", "Kandy", 6),
            ("Galagedara", "Kandy", 3),
        ]
        .into_iter()
        .map(|(from, to, weight)| EdgeSpec {
            from: from.to_string(),
            to: to.to_string(),
            weight,
        })
        .collect();

        let points_of_interest: BTreeMap<String, Vec<String>> = [
            ("Negombo", vec!["Negombo Lagoon", "Dutch Fort"]),
            ("Kurunagala", vec!["Athugala Rock"]),
            ("Kandy", vec!["Temple of the Tooth", "Kandy Lake"]),
        ]
        .into_iter()
        .map(|(node, labels)| {
            (
                node.to_string(),
                labels.into_iter().map(str::to_string).collect::<Vec<_>>(),
            )
        })
        .collect();

        NetworkConfig {
            edges,
            points_of_interest,
            search: Default::default(),
        }
    }
}
