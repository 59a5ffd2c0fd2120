use std::collections::HashMap;

use crate::coordinate::Coordinate;
use crate::error::{Error, Result};

/// Position of a node inside its owning [`Graph`].
pub(crate) type NodeIndex = usize;

/// Jaro-Winkler score below which a label is not offered as a suggestion.
const SUGGESTION_THRESHOLD: f64 = 0.7;

/// Number of suggestions attached to [`Error::UnknownNode`].
const MAX_SUGGESTIONS: usize = 3;

/// A labelled point with its outgoing directed edges.
#[derive(Debug, Clone)]
pub struct Node {
    label: String,
    coordinate: Coordinate,
    description: Option<String>,
    edges: Vec<NodeIndex>,
}

impl Node {
    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn coordinate(&self) -> Coordinate {
        self.coordinate
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }
}

/// Directed graph of labelled, coordinate-tagged nodes.
///
/// Nodes are stored in insertion order and never removed, so iteration is
/// deterministic and edge indices stay valid for the lifetime of the graph.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    nodes: Vec<Node>,
    index: HashMap<String, NodeIndex>,
}

impl Graph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a node unless the label is already present.
    ///
    /// Returns `Ok(true)` when the node was inserted and `Ok(false)` when an
    /// existing node with the same label was kept. Non-finite coordinates
    /// are rejected with [`Error::InvalidGraph`].
    pub fn add_node(&mut self, label: impl Into<String>, coordinate: Coordinate) -> Result<bool> {
        let label = label.into();
        if self.index.contains_key(&label) {
            return Ok(false);
        }
        if !coordinate.is_within_bounds() {
            return Err(Error::InvalidGraph {
                message: format!(
                    "node {label} has a coordinate that is non-finite or exceeds {:e}",
                    Coordinate::MAX_MAGNITUDE
                ),
            });
        }

        let idx = self.nodes.len();
        self.index.insert(label.clone(), idx);
        self.nodes.push(Node {
            label,
            coordinate,
            description: None,
            edges: Vec::new(),
        });
        Ok(true)
    }

    /// Append the directed edge `source -> target` unless it already exists.
    ///
    /// Returns `Ok(true)` when a new edge was added.
    pub fn add_edge(&mut self, source: &str, target: &str) -> Result<bool> {
        let from = self.require(source)?;
        let to = self.require(target)?;
        let edges = &mut self.nodes[from].edges;
        if edges.contains(&to) {
            return Ok(false);
        }
        edges.push(to);
        Ok(true)
    }

    /// Labels reachable through one outgoing edge, in insertion order.
    pub fn neighbors(&self, label: &str) -> Result<Vec<&str>> {
        let idx = self.require(label)?;
        Ok(self.nodes[idx]
            .edges
            .iter()
            .map(|&target| self.nodes[target].label.as_str())
            .collect())
    }

    /// `true` when a direct edge `a -> b` exists. Not transitive.
    pub fn is_connected(&self, a: &str, b: &str) -> bool {
        match (self.index_of(a), self.index_of(b)) {
            (Some(from), Some(to)) => self.nodes[from].edges.contains(&to),
            _ => false,
        }
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Total number of directed edges.
    pub fn edge_count(&self) -> usize {
        self.nodes.iter().map(|node| node.edges.len()).sum()
    }

    /// Node labels in insertion order.
    pub fn labels(&self) -> impl Iterator<Item = &str> + '_ {
        self.nodes.iter().map(|node| node.label.as_str())
    }

    /// Nodes in insertion order.
    pub fn nodes(&self) -> impl Iterator<Item = &Node> + '_ {
        self.nodes.iter()
    }

    pub fn contains(&self, label: &str) -> bool {
        self.index.contains_key(label)
    }

    pub fn node(&self, label: &str) -> Option<&Node> {
        self.index_of(label).map(|idx| &self.nodes[idx])
    }

    pub fn coordinate(&self, label: &str) -> Option<Coordinate> {
        self.node(label).map(Node::coordinate)
    }

    pub fn description(&self, label: &str) -> Option<&str> {
        self.node(label).and_then(Node::description)
    }

    /// Attach free-text information to a node. Ignored by the algorithms.
    pub fn set_description(&mut self, label: &str, description: impl Into<String>) -> Result<()> {
        let idx = self.require(label)?;
        self.nodes[idx].description = Some(description.into());
        Ok(())
    }

    /// Labels that closely resemble `label`, best match first.
    pub fn fuzzy_matches(&self, label: &str, limit: usize) -> Vec<String> {
        let needle = label.to_lowercase();
        let mut scored: Vec<(f64, &str)> = self
            .nodes
            .iter()
            .map(|node| {
                let score = strsim::jaro_winkler(&needle, &node.label.to_lowercase());
                (score, node.label.as_str())
            })
            .filter(|(score, _)| *score >= SUGGESTION_THRESHOLD)
            .collect();
        scored.sort_by(|a, b| b.0.total_cmp(&a.0).then_with(|| a.1.cmp(b.1)));
        scored
            .into_iter()
            .take(limit)
            .map(|(_, label)| label.to_string())
            .collect()
    }

    pub(crate) fn index_of(&self, label: &str) -> Option<NodeIndex> {
        self.index.get(label).copied()
    }

    /// Resolve a label or fail with [`Error::UnknownNode`] carrying suggestions.
    pub(crate) fn require(&self, label: &str) -> Result<NodeIndex> {
        self.index_of(label).ok_or_else(|| Error::UnknownNode {
            label: label.to_string(),
            suggestions: self.fuzzy_matches(label, MAX_SUGGESTIONS),
        })
    }

    pub(crate) fn label_at(&self, idx: NodeIndex) -> &str {
        &self.nodes[idx].label
    }

    pub(crate) fn coordinate_at(&self, idx: NodeIndex) -> &Coordinate {
        &self.nodes[idx].coordinate
    }

    pub(crate) fn targets_at(&self, idx: NodeIndex) -> &[NodeIndex] {
        &self.nodes[idx].edges
    }
}
