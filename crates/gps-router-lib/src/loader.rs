//! Graph document loading.
//!
//! A graph document is JSON of the form:
//!
//! ```json
//! {"nodes": [{"id": "1", "lon": 12.0, "lat": 40.5, "connections": ["2"]}]}
//! ```
//!
//! Nodes are inserted first, then every listed connection becomes a directed
//! edge from the listing node.

use std::fs;
use std::path::Path;

use serde::Deserialize;
use tracing::{info, warn};

use crate::coordinate::Coordinate;
use crate::error::{Error, Result};
use crate::graph::Graph;

/// Top-level graph document.
#[derive(Debug, Clone, Deserialize)]
pub struct GraphDocument {
    pub nodes: Vec<NodeRecord>,
}

/// One node entry in a [`GraphDocument`].
#[derive(Debug, Clone, Deserialize)]
pub struct NodeRecord {
    pub id: String,
    pub lon: f64,
    pub lat: f64,
    #[serde(default)]
    pub connections: Vec<String>,
    #[serde(default)]
    pub description: Option<String>,
}

impl GraphDocument {
    /// Build a graph, failing with [`Error::InvalidGraph`] on dangling connections.
    pub fn into_graph(self) -> Result<Graph> {
        let mut graph = Graph::new();
        let mut duplicate_nodes = 0usize;

        for record in &self.nodes {
            let coordinate = Coordinate::new(record.lon, record.lat);
            if graph.add_node(record.id.as_str(), coordinate)? {
                if let Some(description) = &record.description {
                    graph.set_description(&record.id, description.as_str())?;
                }
            } else {
                duplicate_nodes += 1;
            }
        }

        let mut duplicate_edges = 0usize;
        for record in &self.nodes {
            for target in &record.connections {
                if !graph.contains(target) {
                    return Err(Error::InvalidGraph {
                        message: format!(
                            "node {} lists connection to unknown node {}",
                            record.id, target
                        ),
                    });
                }
                if !graph.add_edge(&record.id, target)? {
                    duplicate_edges += 1;
                }
            }
        }

        if duplicate_nodes > 0 {
            warn!(duplicate_nodes, "ignored repeated node ids; first entry kept");
        }
        if duplicate_edges > 0 {
            warn!(duplicate_edges, "ignored repeated connections");
        }

        Ok(graph)
    }
}

/// Parse a graph document from a JSON string.
pub fn parse_graph(json: &str) -> Result<Graph> {
    let document: GraphDocument = serde_json::from_str(json)?;
    document.into_graph()
}

/// Load a graph document from disk.
pub fn load_graph(path: &Path) -> Result<Graph> {
    let raw = fs::read_to_string(path)?;
    let graph = parse_graph(&raw)?;
    info!(
        path = %path.display(),
        nodes = graph.node_count(),
        edges = graph.edge_count(),
        "loaded graph document"
    );
    Ok(graph)
}
