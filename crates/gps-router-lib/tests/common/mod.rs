use std::path::PathBuf;

use gps_router_lib::{load_graph, Graph};

pub fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../docs/fixtures")
}

pub fn fixture_graph() -> Graph {
    load_graph(&fixtures_dir().join("nodes_db.json")).expect("fixture loads")
}

/// Build a graph from `(label, lon, lat)` triples and directed `(from, to)` pairs.
pub fn build(nodes: &[(&str, f64, f64)], edges: &[(&str, &str)]) -> Graph {
    let mut graph = Graph::new();
    for &(label, lon, lat) in nodes {
        graph
            .add_node(label, (lon, lat).into())
            .expect("coordinate within bounds");
    }
    for &(from, to) in edges {
        graph.add_edge(from, to).expect("known endpoints");
    }
    graph
}
