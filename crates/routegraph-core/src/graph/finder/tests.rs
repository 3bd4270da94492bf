use super::*;
use crate::error::RouteError;
use crate::graph::fixtures::{names, scenario};

fn edge_weight(graph: &Graph, from: &str, to: &str) -> Weight {
    graph
        .neighbors(from)
        .unwrap()
        .iter()
        .filter(|n| n.node == to)
        .map(|n| n.weight)
        .min()
        .expect("consecutive path nodes must be adjacent")
}

fn assert_simple_and_consistent(graph: &Graph, path: &RoutePath) {
    let unique: HashSet<&String> = path.nodes.iter().collect();
    assert_eq!(unique.len(), path.nodes.len(), "repeated node in {:?}", path);

    let total: Weight = path
        .nodes
        .windows(2)
        .map(|pair| edge_weight(graph, &pair[0], &pair[1]))
        .sum();
    assert_eq!(total, path.distance);
}

#[test]
fn test_all_paths_are_simple_with_correct_distances() {
    let graph = scenario();
    let finder = PathFinder::new(&graph);
    for (start, end) in [("A", "Z"), ("Z", "A"), ("B", "E"), ("C", "C")] {
        let set = finder.find_all_paths(start, end).unwrap();
        assert!(!set.is_empty());
        for path in &set.paths {
            assert_simple_and_consistent(&graph, path);
            assert_eq!(path.nodes.first().map(String::as_str), Some(start));
            assert_eq!(path.nodes.last().map(String::as_str), Some(end));
        }
    }
}

#[test]
fn test_shortest_never_exceeds_enumerated() {
    let graph = scenario();
    let finder = PathFinder::new(&graph);
    let nodes = graph.nodes();
    for start in &nodes {
        for end in &nodes {
            let shortest = finder.shortest_path(start, end, &HashSet::new()).unwrap();
            let all = finder.find_all_paths(start, end).unwrap();
            assert!(all.paths.iter().all(|p| shortest.distance <= p.distance));
            assert!(all.paths.iter().any(|p| p.distance == shortest.distance));
        }
    }
}

#[test]
fn test_within_distance_is_filtered_all_paths() {
    let graph = scenario();
    let finder = PathFinder::new(&graph);
    let all = finder.find_all_paths("A", "Z").unwrap();

    for max in [0, 10, 13, 15, 20, 100] {
        let bounded = finder.find_paths_within_distance("A", "Z", max).unwrap();
        let expected: Vec<RoutePath> = all
            .paths
            .iter()
            .filter(|p| p.distance <= max)
            .cloned()
            .collect();
        assert_eq!(bounded.paths, expected, "max_distance {max}");
    }
}

#[test]
fn test_within_ten_excludes_every_scenario_path() {
    let graph = scenario();
    let finder = PathFinder::new(&graph);
    let bounded = finder.find_paths_within_distance("A", "Z", 10).unwrap();
    let all = finder.find_all_paths("A", "Z").unwrap();

    assert!(bounded.is_empty());
    assert!(all.paths.iter().any(|p| p.distance > 10));
    assert_eq!(bounded.from, "A");
    assert_eq!(bounded.to, "Z");
}

#[test]
fn test_fewest_stops_scenario() {
    let graph = scenario();
    let finder = PathFinder::new(&graph);
    let best = finder.find_path_with_fewest_stops("A", "Z").unwrap();

    assert!(!best.truncated);
    assert_eq!(best.result.stops, Some(3));
    // First three-hop path in traversal order
    assert_eq!(best.result.nodes, names(&["A", "B", "D", "Z"]));
}

#[test]
fn test_fewest_stops_trivial_and_unreachable() {
    let mut graph = scenario();
    graph.add_point_of_interest("Island", "ferry terminal");
    let finder = PathFinder::new(&graph);

    let trivial = finder.find_path_with_fewest_stops("E", "E").unwrap().result;
    assert_eq!(trivial.stops, Some(0));
    assert_eq!(trivial.nodes, names(&["E"]));

    let unreachable = finder.find_path_with_fewest_stops("A", "Island").unwrap();
    assert_eq!(unreachable, Bounded::new(HopPath::unreachable(), None));
}

#[test]
fn test_fewest_stops_with_path_cap_is_marked_truncated() {
    let graph = scenario();
    let finder = PathFinder::new(&graph).with_limits(SearchLimits {
        max_paths: Some(2),
        max_expansions: None,
    });
    let best = finder.find_path_with_fewest_stops("A", "Z").unwrap();
    // Best of the enumerated prefix, not the true three-stop minimum
    assert_eq!(best.result.nodes, names(&["A", "B", "C", "D", "Z"]));
    assert_eq!(best.result.stops, Some(4));
    assert!(best.truncated);
    assert_eq!(best.truncation_reason.as_deref(), Some("max_paths"));

    let value = serde_json::to_value(&best).unwrap();
    assert_eq!(value["stops"], 4);
    assert_eq!(value["truncated"], true);
    assert_eq!(value["truncation_reason"], "max_paths");
}

#[test]
fn test_waypoints_with_expansion_cap_are_marked_truncated() {
    let graph = scenario();
    let finder = PathFinder::new(&graph).with_limits(SearchLimits {
        max_paths: None,
        max_expansions: Some(3),
    });
    let via = finder
        .find_path_through_waypoints("A", &names(&["E"]), "Z")
        .unwrap();
    assert!(!via.result.found());
    assert!(via.truncated);
    assert_eq!(via.truncation_reason.as_deref(), Some("max_expansions"));
}

#[test]
fn test_waypoints_empty_matches_first_path() {
    let graph = scenario();
    let finder = PathFinder::new(&graph);
    let first = finder.find_all_paths("A", "Z").unwrap().paths[0].clone();
    let via = finder.find_path_through_waypoints("A", &[], "Z").unwrap();
    assert_eq!(via, Bounded::new(first, None));
}

#[test]
fn test_waypoints_form_a_subsequence() {
    let graph = scenario();
    let finder = PathFinder::new(&graph);

    let via = finder
        .find_path_through_waypoints("A", &names(&["C", "B"]), "Z")
        .unwrap()
        .result;
    assert_eq!(via.nodes, names(&["A", "C", "B", "D", "E", "Z"]));
    assert_eq!(via.distance, 13);
    assert_simple_and_consistent(&graph, &via);

    let via_e = finder
        .find_path_through_waypoints("A", &names(&["E"]), "Z")
        .unwrap()
        .result;
    assert_eq!(via_e.nodes, names(&["A", "B", "C", "D", "E", "Z"]));
}

#[test]
fn test_waypoint_matching_start() {
    let graph = scenario();
    let finder = PathFinder::new(&graph);
    let via = finder
        .find_path_through_waypoints("A", &names(&["A"]), "Z")
        .unwrap()
        .result;
    assert_eq!(via.nodes, names(&["A", "B", "C", "D", "E", "Z"]));
}

#[test]
fn test_waypoints_impossible_order() {
    let mut graph = Graph::new();
    graph.add_edge("A", "B", 1).unwrap();
    graph.add_edge("B", "C", 1).unwrap();
    let finder = PathFinder::new(&graph);

    // C is the destination, so nothing can follow it
    let via = finder
        .find_path_through_waypoints("A", &names(&["C", "B"]), "C")
        .unwrap()
        .result;
    assert!(!via.found());
    assert_eq!(via.distance, 0);
}

#[test]
fn test_unknown_waypoint_is_an_error() {
    let graph = scenario();
    let finder = PathFinder::new(&graph);
    let err = finder
        .find_path_through_waypoints("A", &names(&["Atlantis"]), "Z")
        .unwrap_err();
    assert!(matches!(err, RouteError::NodeNotFound { ref node } if node == "Atlantis"));
}

#[test]
fn test_truncation_is_reported_on_path_sets() {
    let graph = scenario();
    let finder = PathFinder::new(&graph).with_limits(SearchLimits {
        max_paths: None,
        max_expansions: Some(3),
    });
    let set = finder.find_all_paths("A", "Z").unwrap();
    assert!(set.truncated);
    assert_eq!(set.truncation_reason.as_deref(), Some("max_expansions"));
    assert_eq!(finder.limits().max_expansions, Some(3));
}

#[test]
fn test_queries_share_graph_across_threads() {
    let graph = scenario();
    let finder = PathFinder::new(&graph);

    std::thread::scope(|scope| {
        let handles: Vec<_> = (0..4)
            .map(|_| scope.spawn(|| finder.find_all_paths("A", "Z").unwrap().len()))
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), 13);
        }
    });
}
