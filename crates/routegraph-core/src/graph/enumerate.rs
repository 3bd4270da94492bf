//! Backtracking enumeration of simple paths
//!
//! One iterative depth-first search drives every enumeration query. A
//! [`PathPolicy`] decides which edges may be followed, which walks that reach
//! the destination are recorded, and whether the search ends at the first
//! recorded path. The search keeps its own stack, so graph depth is not bound
//! by the call stack.

use std::collections::HashSet;

use crate::error::Result;
use crate::graph::store::Graph;
use crate::graph::types::{
    Neighbor, RoutePath, SearchLimits, Weight, TRUNCATED_MAX_EXPANSIONS, TRUNCATED_MAX_PATHS,
};

/// Acceptance and pruning rules for one enumeration
pub trait PathPolicy {
    /// Waypoint progress after entering `node`
    fn progress(&self, matched: usize, _node: &str) -> usize {
        matched
    }

    /// Whether an edge bringing the walk to `distance` may be followed
    fn admits(&self, _distance: Weight) -> bool {
        true
    }

    /// Whether a walk that reached the destination is recorded
    fn accepts(&self, _distance: Weight, _matched: usize) -> bool {
        true
    }

    /// End the search at the first recorded path
    fn first_only(&self) -> bool {
        false
    }
}

/// Every simple path
#[derive(Debug, Clone, Copy, Default)]
pub struct Unconstrained;

impl PathPolicy for Unconstrained {}

/// Simple paths whose cumulative weight stays within `max_distance`
#[derive(Debug, Clone, Copy)]
pub struct WithinDistance {
    pub max_distance: Weight,
}

impl PathPolicy for WithinDistance {
    fn admits(&self, distance: Weight) -> bool {
        distance <= self.max_distance
    }

    fn accepts(&self, distance: Weight, _matched: usize) -> bool {
        distance <= self.max_distance
    }
}

/// First simple path containing `waypoints` as an ordered subsequence
#[derive(Debug, Clone, Copy)]
pub struct OrderedWaypoints<'w> {
    pub waypoints: &'w [String],
}

impl PathPolicy for OrderedWaypoints<'_> {
    fn progress(&self, matched: usize, node: &str) -> usize {
        match self.waypoints.get(matched) {
            Some(next) if next == node => matched + 1,
            _ => matched,
        }
    }

    fn accepts(&self, _distance: Weight, matched: usize) -> bool {
        matched == self.waypoints.len()
    }

    fn first_only(&self) -> bool {
        true
    }
}

/// Paths recorded by one enumeration, in traversal order
#[derive(Debug, Clone, Default)]
pub struct Walk {
    pub paths: Vec<RoutePath>,
    /// Set when a [`SearchLimits`] cap ended the search early
    pub truncation: Option<&'static str>,
    /// Nodes entered during the search
    pub expansions: usize,
}

struct Frame<'g> {
    neighbors: &'g [Neighbor],
    next: usize,
    distance: Weight,
    matched: usize,
}

/// State tracked during one enumeration; never shared between calls
struct BacktrackState<'g> {
    visited: HashSet<&'g str>,
    path: Vec<&'g str>,
    stack: Vec<Frame<'g>>,
    walk: Walk,
}

impl<'g> BacktrackState<'g> {
    fn new() -> Self {
        Self {
            visited: HashSet::new(),
            path: Vec::new(),
            stack: Vec::new(),
            walk: Walk::default(),
        }
    }

    /// Enter `node`. Returns true when the search should stop.
    #[allow(clippy::too_many_arguments)]
    fn enter<P: PathPolicy>(
        &mut self,
        graph: &'g Graph,
        node: &'g str,
        end: &str,
        distance: Weight,
        matched: usize,
        policy: &P,
        limits: &SearchLimits,
    ) -> Result<bool> {
        self.walk.expansions += 1;

        // The destination is never expanded: once on the path it cannot be
        // reached again, so no extension of this walk could be recorded.
        if node == end {
            if !policy.accepts(distance, matched) {
                return Ok(false);
            }
            // A further path exists past the cap: stop without recording it
            if limits
                .max_paths
                .is_some_and(|max| self.walk.paths.len() >= max)
            {
                self.walk.truncation = Some(TRUNCATED_MAX_PATHS);
                return Ok(true);
            }
            let mut nodes: Vec<String> = self.path.iter().map(|n| n.to_string()).collect();
            nodes.push(node.to_string());
            self.walk.paths.push(RoutePath { nodes, distance });
            return Ok(policy.first_only());
        }

        self.visited.insert(node);
        self.path.push(node);
        self.stack.push(Frame {
            neighbors: graph.neighbors(node)?,
            next: 0,
            distance,
            matched,
        });
        Ok(false)
    }

    fn leave(&mut self) {
        self.stack.pop();
        if let Some(node) = self.path.pop() {
            self.visited.remove(node);
        }
    }

    fn expansion_limit_reached(&self, limits: &SearchLimits) -> bool {
        limits
            .max_expansions
            .is_some_and(|max| self.walk.expansions >= max)
    }
}

/// Enumerate simple paths from `start` to `end` under `policy`.
///
/// Neighbors are explored in insertion order, so the order of the returned
/// paths is deterministic for a given graph.
pub fn backtrack<P: PathPolicy>(
    graph: &Graph,
    start: &str,
    end: &str,
    policy: &P,
    limits: &SearchLimits,
) -> Result<Walk> {
    let start = graph.resolve(start)?;
    let end = graph.resolve(end)?;

    let mut state = BacktrackState::new();
    let matched = policy.progress(0, start);
    if state.enter(graph, start, end, 0, matched, policy, limits)? {
        return Ok(state.walk);
    }

    while let Some(frame) = state.stack.last_mut() {
        let neighbors = frame.neighbors;
        let Some(edge) = neighbors.get(frame.next) else {
            state.leave();
            continue;
        };
        frame.next += 1;
        let (base_distance, base_matched) = (frame.distance, frame.matched);

        let next = edge.node.as_str();
        if state.visited.contains(next) {
            continue;
        }
        let distance = base_distance.saturating_add(edge.weight);
        if !policy.admits(distance) {
            continue;
        }
        if state.expansion_limit_reached(limits) {
            state.walk.truncation = Some(TRUNCATED_MAX_EXPANSIONS);
            break;
        }

        let matched = policy.progress(base_matched, next);
        if state.enter(graph, next, end, distance, matched, policy, limits)? {
            break;
        }
    }

    tracing::debug!(
        paths = state.walk.paths.len(),
        expansions = state.walk.expansions,
        truncated = ?state.walk.truncation,
        "enumeration finished"
    );
    Ok(state.walk)
}
