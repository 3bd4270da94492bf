use std::collections::HashSet;

use crate::error::Result;
use crate::graph::enumerate::{backtrack, OrderedWaypoints, Unconstrained, Walk, WithinDistance};
use crate::graph::shortest::dijkstra_shortest_path;
use crate::graph::store::Graph;
use crate::graph::types::{Bounded, HopPath, PathSet, RoutePath, SearchLimits, Weight};

/// Read-only query front end over a [`Graph`].
///
/// Every query allocates its own search state, so a `PathFinder` (and the
/// graph behind it) may be shared across threads.
#[derive(Debug, Clone, Copy)]
pub struct PathFinder<'g> {
    graph: &'g Graph,
    limits: SearchLimits,
}

impl<'g> PathFinder<'g> {
    pub fn new(graph: &'g Graph) -> Self {
        Self {
            graph,
            limits: SearchLimits::unbounded(),
        }
    }

    pub fn with_limits(mut self, limits: SearchLimits) -> Self {
        self.limits = limits;
        self
    }

    pub fn graph(&self) -> &'g Graph {
        self.graph
    }

    pub fn limits(&self) -> SearchLimits {
        self.limits
    }

    /// Minimum-weight path avoiding `excluded`. Not affected by search limits.
    pub fn shortest_path(
        &self,
        start: &str,
        end: &str,
        excluded: &HashSet<String>,
    ) -> Result<RoutePath> {
        dijkstra_shortest_path(self.graph, start, end, excluded)
    }

    /// Every simple path from `start` to `end`, in traversal order
    #[tracing::instrument(skip(self), fields(start = %start, end = %end))]
    pub fn find_all_paths(&self, start: &str, end: &str) -> Result<PathSet> {
        let walk = backtrack(self.graph, start, end, &Unconstrained, &self.limits)?;
        Ok(path_set(start, end, walk))
    }

    /// Every simple path whose cumulative weight is at most `max_distance`
    #[tracing::instrument(skip(self), fields(start = %start, end = %end))]
    pub fn find_paths_within_distance(
        &self,
        start: &str,
        end: &str,
        max_distance: Weight,
    ) -> Result<PathSet> {
        let policy = WithinDistance { max_distance };
        let walk = backtrack(self.graph, start, end, &policy, &self.limits)?;
        Ok(path_set(start, end, walk))
    }

    /// Path with the fewest hops, chosen by enumerating every simple path.
    /// Ties go to the path enumerated first. When a limit cut the search
    /// short the result is the best seen so far and is marked truncated.
    #[tracing::instrument(skip(self), fields(start = %start, end = %end))]
    pub fn find_path_with_fewest_stops(&self, start: &str, end: &str) -> Result<Bounded<HopPath>> {
        let walk = backtrack(self.graph, start, end, &Unconstrained, &self.limits)?;
        warn_if_truncated(&walk);
        let best = walk
            .paths
            .into_iter()
            .min_by_key(RoutePath::hops)
            .map(HopPath::from)
            .unwrap_or_else(HopPath::unreachable);
        Ok(Bounded::new(best, walk.truncation))
    }

    /// First path, in traversal order, that visits `waypoints` in order before
    /// ending at `end`. Not necessarily the shortest such path.
    #[tracing::instrument(skip(self), fields(start = %start, end = %end, waypoints = ?waypoints))]
    pub fn find_path_through_waypoints(
        &self,
        start: &str,
        waypoints: &[String],
        end: &str,
    ) -> Result<Bounded<RoutePath>> {
        for waypoint in waypoints {
            self.graph.resolve(waypoint)?;
        }
        let policy = OrderedWaypoints { waypoints };
        let walk = backtrack(self.graph, start, end, &policy, &self.limits)?;
        warn_if_truncated(&walk);
        let first = walk
            .paths
            .into_iter()
            .next()
            .unwrap_or_else(RoutePath::not_found);
        Ok(Bounded::new(first, walk.truncation))
    }
}

fn path_set(start: &str, end: &str, walk: Walk) -> PathSet {
    PathSet {
        from: start.to_string(),
        to: end.to_string(),
        paths: walk.paths,
        truncated: walk.truncation.is_some(),
        truncation_reason: walk.truncation.map(str::to_string),
    }
}

fn warn_if_truncated(walk: &Walk) {
    if let Some(reason) = walk.truncation {
        tracing::warn!(
            reason,
            expansions = walk.expansions,
            "search limit reached; result covers only the paths enumerated so far"
        );
    }
}

#[cfg(test)]
mod tests;
