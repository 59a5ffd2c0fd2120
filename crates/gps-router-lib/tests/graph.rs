mod common;

use gps_router_lib::{Coordinate, Error, Graph};

use common::{build, fixture_graph};

#[test]
fn repeated_construction_is_idempotent() {
    let mut graph = build(&[("A", 0.0, 0.0), ("B", 1.0, 1.0)], &[("A", "B")]);
    let labels_before: Vec<String> = graph.labels().map(str::to_string).collect();

    assert!(!graph.add_node("A", Coordinate::new(0.0, 0.0)).unwrap());
    assert!(!graph.add_edge("A", "B").unwrap());

    let labels_after: Vec<String> = graph.labels().map(str::to_string).collect();
    assert_eq!(labels_before, labels_after);
    assert_eq!(graph.node_count(), 2);
    assert_eq!(graph.edge_count(), 1);
    assert_eq!(graph.neighbors("A").unwrap(), vec!["B"]);
}

#[test]
fn neighbors_keep_edge_insertion_order() {
    let graph = build(
        &[("A", 0.0, 0.0), ("B", 1.0, 0.0), ("C", 2.0, 0.0), ("D", 3.0, 0.0)],
        &[("A", "D"), ("A", "B"), ("A", "C")],
    );
    assert_eq!(graph.neighbors("A").unwrap(), vec!["D", "B", "C"]);
}

#[test]
fn neighbors_of_unknown_label_fail() {
    let graph = Graph::new();
    assert!(matches!(
        graph.neighbors("nowhere"),
        Err(Error::UnknownNode { .. })
    ));
}

#[test]
fn fixture_has_expected_shape() {
    let graph = fixture_graph();
    assert_eq!(graph.node_count(), 8);
    assert_eq!(graph.edge_count(), 12);
    assert!(graph.is_connected("1", "2"));
    assert!(graph.is_connected("2", "1"));
    assert!(graph.is_connected("6", "7"));
    assert!(!graph.is_connected("7", "6"));
    assert_eq!(graph.description("5"), Some("Library"));
    assert_eq!(graph.coordinate("3"), Some(Coordinate::new(60.0, 40.0)));
}
