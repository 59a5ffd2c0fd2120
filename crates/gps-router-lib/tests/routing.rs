mod common;

use gps_router_lib::{
    euclidean, plan_route, shortest_path_all_pairs, shortest_path_single_source, AllPairsTable,
    Error, Metric, RouteAlgorithm, RouteRequest, SingleSourceTable,
};

use common::{build, fixture_graph};

const TOLERANCE: f64 = 1e-9;

#[test]
fn single_node_routes_to_itself_with_both_algorithms() {
    let graph = build(&[("A", 7.0, 3.0)], &[]);
    for result in [
        shortest_path_single_source(&graph, "A", "A", &euclidean).unwrap(),
        shortest_path_all_pairs(&graph, "A", "A", &euclidean).unwrap(),
    ] {
        assert_eq!(result.steps, vec!["A"]);
        assert_eq!(result.distance, 0.0);
    }
}

#[test]
fn directed_pair_is_one_way() {
    let graph = build(&[("A", 0.0, 0.0), ("B", 3.0, 4.0)], &[("A", "B")]);

    let forward = shortest_path_single_source(&graph, "A", "B", &euclidean).unwrap();
    assert_eq!(forward.steps, vec!["A", "B"]);
    assert_eq!(forward.distance, 5.0);

    let backward = shortest_path_single_source(&graph, "B", "A", &euclidean).unwrap_err();
    assert!(matches!(backward, Error::NoPathExists { .. }));
    let backward = shortest_path_all_pairs(&graph, "B", "A", &euclidean).unwrap_err();
    assert!(matches!(backward, Error::NoPathExists { .. }));
}

#[test]
fn equal_cost_alternatives_report_same_distance() {
    let graph = build(
        &[("A", 0.0, 0.0), ("B", 1.0, 0.0), ("C", 2.0, 0.0)],
        &[("A", "B"), ("B", "C"), ("A", "C")],
    );

    let single = shortest_path_single_source(&graph, "A", "C", &euclidean).unwrap();
    let all = shortest_path_all_pairs(&graph, "A", "C", &euclidean).unwrap();
    assert_eq!(single.distance, 2.0);
    assert_eq!(all.distance, 2.0);

    for _ in 0..5 {
        assert_eq!(
            shortest_path_single_source(&graph, "A", "C", &euclidean).unwrap(),
            single
        );
        assert_eq!(
            shortest_path_all_pairs(&graph, "A", "C", &euclidean).unwrap(),
            all
        );
    }
}

#[test]
fn unknown_labels_fail_before_routing() {
    let graph = build(&[("A", 0.0, 0.0)], &[]);
    for error in [
        shortest_path_single_source(&graph, "A", "Z", &euclidean).unwrap_err(),
        shortest_path_single_source(&graph, "Z", "A", &euclidean).unwrap_err(),
        shortest_path_all_pairs(&graph, "A", "Z", &euclidean).unwrap_err(),
        shortest_path_all_pairs(&graph, "Z", "A", &euclidean).unwrap_err(),
    ] {
        assert!(matches!(error, Error::UnknownNode { ref label, .. } if label == "Z"));
    }
}

#[test]
fn unknown_source_is_reported_before_unknown_destination() {
    let graph = build(&[("A", 0.0, 0.0)], &[]);
    for error in [
        shortest_path_single_source(&graph, "X", "Y", &euclidean).unwrap_err(),
        shortest_path_all_pairs(&graph, "X", "Y", &euclidean).unwrap_err(),
    ] {
        assert!(matches!(error, Error::UnknownNode { ref label, .. } if label == "X"));
    }
}

#[test]
fn large_but_valid_coordinates_keep_their_edges() {
    let graph = build(&[("A", 0.0, 0.0), ("B", 1e200, 0.0)], &[("A", "B")]);
    for result in [
        shortest_path_single_source(&graph, "A", "B", &euclidean).unwrap(),
        shortest_path_all_pairs(&graph, "A", "B", &euclidean).unwrap(),
    ] {
        assert_eq!(result.steps, vec!["A", "B"]);
        assert_eq!(result.distance, 1e200);
    }
}

#[test]
fn disconnected_labels_have_no_path() {
    let graph = fixture_graph();
    for algorithm in [RouteAlgorithm::SingleSource, RouteAlgorithm::AllPairs] {
        let request = RouteRequest {
            algorithm,
            ..RouteRequest::single_source("1", "8")
        };
        let error = plan_route(&graph, &request).unwrap_err();
        assert!(format!("{error}").contains("no path exists between 1 and 8"));
    }
}

#[test]
fn fixture_unique_route_matches_for_both_algorithms() {
    let graph = fixture_graph();
    for request in [
        RouteRequest::single_source("4", "3"),
        RouteRequest::all_pairs("4", "3"),
    ] {
        let plan = plan_route(&graph, &request).unwrap();
        assert_eq!(plan.algorithm, request.algorithm);
        assert_eq!(plan.steps, vec!["4", "1", "2", "3"]);
        assert!((plan.distance - 130.0).abs() < TOLERANCE);
        assert_eq!(plan.hop_count(), 3);
    }
}

#[test]
fn fixture_tied_route_reports_shared_distance() {
    let graph = fixture_graph();
    let single = plan_route(&graph, &RouteRequest::single_source("1", "7")).unwrap();
    let all = plan_route(&graph, &RouteRequest::all_pairs("1", "7")).unwrap();
    assert!((single.distance - 160.0).abs() < TOLERANCE);
    assert!((all.distance - 160.0).abs() < TOLERANCE);
    assert_eq!(single.steps.first().map(String::as_str), Some("1"));
    assert_eq!(all.steps.last().map(String::as_str), Some("7"));
}

#[test]
fn precomputed_tables_answer_repeated_queries() {
    let graph = fixture_graph();
    let single = SingleSourceTable::compute(&graph, "1", &Metric::Euclidean).unwrap();
    let all = AllPairsTable::compute(&graph, &Metric::Euclidean);

    for goal in ["2", "3", "4", "5", "6", "7"] {
        let a = single.route_to(goal).unwrap();
        let b = all.route("1", goal).unwrap();
        assert!((a.distance - b.distance).abs() < TOLERANCE, "goal {goal}");
        assert_eq!(single.distance(goal), all.distance("1", goal));
    }
    assert!(!single.is_reachable("8"));
    assert_eq!(all.next_hop("1", "3"), Some("2"));
}

#[test]
fn geographic_metric_changes_weights_not_topology() {
    let graph = build(
        &[("Krakow", 19.9383, 50.0614), ("Warsaw", 21.0122, 52.2297)],
        &[("Krakow", "Warsaw")],
    );
    let plan = plan_route(
        &graph,
        &RouteRequest::all_pairs("Krakow", "Warsaw").with_metric(Metric::Geographic),
    )
    .unwrap();
    assert_eq!(plan.metric, Metric::Geographic);
    assert_eq!(plan.steps, vec!["Krakow", "Warsaw"]);
    assert!((plan.distance - 252_466.0).abs() < 100.0, "got {}", plan.distance);
}

#[test]
fn custom_closure_metric_is_accepted() {
    let graph = build(
        &[("A", 0.0, 0.0), ("B", 3.0, 4.0), ("C", 3.0, 0.0)],
        &[("A", "B"), ("A", "C"), ("C", "B")],
    );
    let manhattan = |a: &gps_router_lib::Coordinate, b: &gps_router_lib::Coordinate| {
        (a.longitude - b.longitude).abs() + (a.latitude - b.latitude).abs()
    };
    let single = shortest_path_single_source(&graph, "A", "B", &manhattan).unwrap();
    let all = shortest_path_all_pairs(&graph, "A", "B", &manhattan).unwrap();
    assert_eq!(single.distance, 7.0);
    assert_eq!(all.distance, 7.0);
}
