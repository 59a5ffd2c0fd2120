//! Route planning strategies.
//!
//! Each [`RoutePlanner`] wraps one shortest-path algorithm. The set is closed:
//! one planner per [`RouteAlgorithm`] variant.

use crate::error::Result;
use crate::graph::Graph;
use crate::metric::DistanceMetric;
use crate::path::{shortest_path_all_pairs, shortest_path_single_source, PathResult};

use super::RouteAlgorithm;

/// Trait for route planning strategies.
pub trait RoutePlanner: Send + Sync {
    /// The algorithm identifier for this planner.
    fn algorithm(&self) -> RouteAlgorithm;

    /// Execute the pathfinding algorithm on the given graph.
    fn find_path(
        &self,
        graph: &Graph,
        start: &str,
        goal: &str,
        metric: &dyn DistanceMetric,
    ) -> Result<PathResult>;
}

/// Bellman-Ford-Moore planner.
///
/// Relaxes every edge `|V| - 1` times from the start node: `O(V * E)`.
#[derive(Debug, Clone, Default)]
pub struct SingleSourcePlanner;

impl RoutePlanner for SingleSourcePlanner {
    fn algorithm(&self) -> RouteAlgorithm {
        RouteAlgorithm::SingleSource
    }

    fn find_path(
        &self,
        graph: &Graph,
        start: &str,
        goal: &str,
        metric: &dyn DistanceMetric,
    ) -> Result<PathResult> {
        shortest_path_single_source(graph, start, goal, metric)
    }
}

/// Floyd-Warshall planner.
///
/// Builds the full distance and next-hop matrices: `O(V^3)` per query.
#[derive(Debug, Clone, Default)]
pub struct AllPairsPlanner;

impl RoutePlanner for AllPairsPlanner {
    fn algorithm(&self) -> RouteAlgorithm {
        RouteAlgorithm::AllPairs
    }

    fn find_path(
        &self,
        graph: &Graph,
        start: &str,
        goal: &str,
        metric: &dyn DistanceMetric,
    ) -> Result<PathResult> {
        shortest_path_all_pairs(graph, start, goal, metric)
    }
}

/// Select the planner implementing `algorithm`.
pub fn select_planner(algorithm: RouteAlgorithm) -> Box<dyn RoutePlanner> {
    match algorithm {
        RouteAlgorithm::SingleSource => Box::new(SingleSourcePlanner),
        RouteAlgorithm::AllPairs => Box::new(AllPairsPlanner),
    }
}
