//! Shortest-path algorithms over a [`Graph`].
//!
//! Two algorithms are provided:
//! - [`SingleSourceTable`] - label-correcting relaxation (Bellman-Ford-Moore)
//!   from one source to every node.
//! - [`AllPairsTable`] - dynamic programming over intermediate nodes
//!   (Floyd-Warshall) producing distance and next-hop matrices.
//!
//! Both tables borrow the graph immutably, so the graph cannot change while a
//! table built from it is alive. The single-shot entry points
//! [`shortest_path_single_source`] and [`shortest_path_all_pairs`] compute a
//! table and answer exactly one query from it.

mod all_pairs;
mod reconstruct;
mod single_source;

pub use all_pairs::AllPairsTable;
pub use single_source::SingleSourceTable;

use serde::Serialize;

use crate::error::Result;
use crate::graph::Graph;
use crate::metric::DistanceMetric;

/// Ordered route between two labels, both endpoints included.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PathResult {
    pub steps: Vec<String>,
    /// Total distance as recorded in the algorithm's distance table.
    pub distance: f64,
}

impl PathResult {
    /// Number of edges traversed.
    pub fn hop_count(&self) -> usize {
        self.steps.len().saturating_sub(1)
    }

    pub fn start(&self) -> Option<&str> {
        self.steps.first().map(String::as_str)
    }

    pub fn goal(&self) -> Option<&str> {
        self.steps.last().map(String::as_str)
    }
}

/// Shortest route from `source` to `destination` using iterative relaxation.
pub fn shortest_path_single_source<M>(
    graph: &Graph,
    source: &str,
    destination: &str,
    metric: &M,
) -> Result<PathResult>
where
    M: DistanceMetric + ?Sized,
{
    graph.require(source)?;
    graph.require(destination)?;
    SingleSourceTable::compute(graph, source, metric)?.route_to(destination)
}

/// Shortest route from `source` to `destination` using the all-pairs matrices.
///
/// Labels are validated before the `O(V^3)` table is built.
pub fn shortest_path_all_pairs<M>(
    graph: &Graph,
    source: &str,
    destination: &str,
    metric: &M,
) -> Result<PathResult>
where
    M: DistanceMetric + ?Sized,
{
    graph.require(source)?;
    graph.require(destination)?;
    AllPairsTable::compute(graph, metric).route(source, destination)
}
