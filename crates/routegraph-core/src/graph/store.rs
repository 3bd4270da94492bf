//! In-memory store of locations, weighted roads, and points of interest

use std::collections::HashMap;

use crate::bail_not_supported;
use crate::error::{Result, RouteError};
use crate::graph::types::{Neighbor, Weight};

/// Undirected weighted graph keyed by case-sensitive node names.
///
/// Nodes are created implicitly by [`Graph::add_edge`] and
/// [`Graph::add_point_of_interest`]. Each edge is stored twice, once under
/// each endpoint, and neighbor lists keep insertion order.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    adjacency: HashMap<String, Vec<Neighbor>>,
    points_of_interest: HashMap<String, Vec<String>>,
}

impl Graph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an undirected edge. Repeated calls add parallel edges.
    pub fn add_edge(
        &mut self,
        from: impl Into<String>,
        to: impl Into<String>,
        weight: i64,
    ) -> Result<()> {
        let from = from.into();
        let to = to.into();
        let weight = Weight::try_from(weight).map_err(|_| RouteError::InvalidWeight {
            from: from.clone(),
            to: to.clone(),
            weight,
        })?;

        self.adjacency
            .entry(from.clone())
            .or_default()
            .push(Neighbor {
                node: to.clone(),
                weight,
            });
        self.adjacency.entry(to).or_default().push(Neighbor {
            node: from,
            weight,
        });
        Ok(())
    }

    /// Attach a point-of-interest label to a node, creating the node if needed
    pub fn add_point_of_interest(&mut self, node: impl Into<String>, label: impl Into<String>) {
        let node = node.into();
        self.adjacency.entry(node.clone()).or_default();
        self.points_of_interest
            .entry(node)
            .or_default()
            .push(label.into());
    }

    /// Neighbor records of `node` in insertion order
    pub fn neighbors(&self, node: &str) -> Result<&[Neighbor]> {
        self.adjacency
            .get(node)
            .map(Vec::as_slice)
            .ok_or_else(|| RouteError::node_not_found(node))
    }

    /// Point-of-interest labels attached to `node`
    pub fn points_of_interest(&self, node: &str) -> Result<&[String]> {
        self.resolve(node)?;
        Ok(self
            .points_of_interest
            .get(node)
            .map(Vec::as_slice)
            .unwrap_or_default())
    }

    /// Nodes carrying `label`, sorted by name
    pub fn nodes_with_point_of_interest(&self, label: &str) -> Vec<&str> {
        let mut nodes: Vec<&str> = self
            .points_of_interest
            .iter()
            .filter(|(_, labels)| labels.iter().any(|l| l == label))
            .map(|(node, _)| node.as_str())
            .collect();
        nodes.sort_unstable();
        nodes
    }

    /// Look up the stored key for `node`, borrowing from the graph
    pub(crate) fn resolve(&self, node: &str) -> Result<&str> {
        self.adjacency
            .get_key_value(node)
            .map(|(key, _)| key.as_str())
            .ok_or_else(|| RouteError::node_not_found(node))
    }

    pub fn contains(&self, node: &str) -> bool {
        self.adjacency.contains_key(node)
    }

    /// All node names, sorted
    pub fn nodes(&self) -> Vec<&str> {
        let mut nodes: Vec<&str> = self.adjacency.keys().map(String::as_str).collect();
        nodes.sort_unstable();
        nodes
    }

    pub fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Number of undirected edges, counting parallel edges separately
    pub fn edge_count(&self) -> usize {
        self.adjacency.values().map(Vec::len).sum::<usize>() / 2
    }

    pub fn update_edge_weight(&mut self, _from: &str, _to: &str, _weight: i64) -> Result<()> {
        bail_not_supported!("update edge weight")
    }

    pub fn remove_node(&mut self, _node: &str) -> Result<()> {
        bail_not_supported!("remove node")
    }
}
