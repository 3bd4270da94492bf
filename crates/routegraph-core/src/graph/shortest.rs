//! Single-source shortest path (Dijkstra) with an optional exclusion set

use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashMap, HashSet};

use crate::error::Result;
use crate::graph::store::Graph;
use crate::graph::types::{RoutePath, Weight};

/// Frontier entry for the min-heap.
///
/// Ordered by distance, then by insertion sequence, so among equal
/// distances the entry pushed first is extracted first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeapEntry<'g> {
    pub node: &'g str,
    pub distance: Weight,
    pub seq: u64,
}

impl PartialOrd for HeapEntry<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for HeapEntry<'_> {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.distance
            .cmp(&other.distance)
            .then_with(|| self.seq.cmp(&other.seq))
    }
}

/// State tracked during one Dijkstra run
struct DijkstraState<'g> {
    distances: HashMap<&'g str, Weight>,
    predecessors: HashMap<&'g str, &'g str>,
    settled: HashSet<&'g str>,
    heap: BinaryHeap<Reverse<HeapEntry<'g>>>,
    next_seq: u64,
}

impl<'g> DijkstraState<'g> {
    fn new(start: &'g str) -> Self {
        let mut state = Self {
            distances: HashMap::new(),
            predecessors: HashMap::new(),
            settled: HashSet::new(),
            heap: BinaryHeap::new(),
            next_seq: 0,
        };
        state.push(start, 0);
        state
    }

    fn push(&mut self, node: &'g str, distance: Weight) {
        self.distances.insert(node, distance);
        self.heap.push(Reverse(HeapEntry {
            node,
            distance,
            seq: self.next_seq,
        }));
        self.next_seq += 1;
    }

    fn relax(&mut self, from: &'g str, to: &'g str, distance: Weight) {
        if self.distances.get(to).is_none_or(|&best| distance < best) {
            self.predecessors.insert(to, from);
            self.push(to, distance);
        }
    }

    fn reconstruct(&self, start: &str, end: &'g str, distance: Weight) -> RoutePath {
        let mut nodes = vec![end.to_string()];
        let mut current = end;
        while current != start {
            match self.predecessors.get(current) {
                Some(pred) => {
                    current = *pred;
                    nodes.push(current.to_string());
                }
                None => break,
            }
        }
        nodes.reverse();
        RoutePath { nodes, distance }
    }
}

/// Find the minimum-weight path from `start` to `end` that avoids every node
/// in `excluded`.
///
/// Unknown `start`/`end` fail with `NodeNotFound`. Unreachable destinations,
/// or an excluded `start`/`end`, yield [`RoutePath::not_found`].
#[tracing::instrument(
    skip(graph, excluded),
    fields(start = %start, end = %end, excluded = excluded.len())
)]
pub fn dijkstra_shortest_path(
    graph: &Graph,
    start: &str,
    end: &str,
    excluded: &HashSet<String>,
) -> Result<RoutePath> {
    let start = graph.resolve(start)?;
    let end = graph.resolve(end)?;

    if excluded.contains(start) || excluded.contains(end) {
        tracing::debug!("endpoint excluded");
        return Ok(RoutePath::not_found());
    }

    let mut state = DijkstraState::new(start);

    while let Some(Reverse(HeapEntry { node, distance, .. })) = state.heap.pop() {
        // Stale entry for an already finalized node
        if !state.settled.insert(node) {
            continue;
        }

        if node == end {
            let path = state.reconstruct(start, end, distance);
            tracing::debug!(
                distance,
                hops = path.hops(),
                settled = state.settled.len(),
                "path found"
            );
            return Ok(path);
        }

        for neighbor in graph.neighbors(node)? {
            let next = neighbor.node.as_str();
            if excluded.contains(next) || state.settled.contains(next) {
                continue;
            }
            state.relax(node, next, distance.saturating_add(neighbor.weight));
        }
    }

    tracing::debug!(settled = state.settled.len(), "destination unreachable");
    Ok(RoutePath::not_found())
}
