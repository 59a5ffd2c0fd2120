//! Route planning facade.
//!
//! This module provides:
//! - [`RouteAlgorithm`] - Supported routing algorithms (Bellman-Ford, Floyd-Warshall)
//! - [`RouteRequest`] - High-level route planning request
//! - [`RoutePlan`] - Planned route result
//! - [`plan_route`] - Main entry point for computing routes
//!
//! # Strategy Pattern
//!
//! Each algorithm is wrapped in a [`RoutePlanner`] implementation and chosen
//! through [`select_planner`], so callers never branch on the algorithm
//! themselves.
//!
//! # Example
//!
//! ```ignore
//! use gps_router_lib::{load_graph, plan_route, RouteRequest};
//!
//! let graph = load_graph("nodes_db.json")?;
//! let plan = plan_route(&graph, &RouteRequest::single_source("1", "7"))?;
//! println!("{} hops, {:.2}", plan.hop_count(), plan.distance);
//! ```

mod planner;

pub use planner::{select_planner, AllPairsPlanner, RoutePlanner, SingleSourcePlanner};

use std::fmt;
use std::str::FromStr;

use serde::Serialize;
use tracing::debug;

use crate::error::Result;
use crate::graph::Graph;
use crate::metric::Metric;

/// Supported routing algorithms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Default)]
pub enum RouteAlgorithm {
    /// Single-source label-correcting relaxation (Bellman-Ford-Moore).
    #[default]
    #[serde(rename = "bellman-ford")]
    SingleSource,
    /// All-pairs dynamic programming (Floyd-Warshall).
    #[serde(rename = "floyd-warshall")]
    AllPairs,
}

impl fmt::Display for RouteAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = match self {
            RouteAlgorithm::SingleSource => "bellman-ford",
            RouteAlgorithm::AllPairs => "floyd-warshall",
        };
        f.write_str(value)
    }
}

impl FromStr for RouteAlgorithm {
    type Err = String;

    fn from_str(value: &str) -> std::result::Result<Self, Self::Err> {
        match value.to_ascii_lowercase().as_str() {
            "bellman-ford" | "single-source" => Ok(RouteAlgorithm::SingleSource),
            "floyd-warshall" | "all-pairs" => Ok(RouteAlgorithm::AllPairs),
            other => Err(format!("unknown routing algorithm '{other}'")),
        }
    }
}

/// High-level route planning request.
#[derive(Debug, Clone)]
pub struct RouteRequest {
    pub start: String,
    pub goal: String,
    pub algorithm: RouteAlgorithm,
    pub metric: Metric,
}

impl RouteRequest {
    /// Single-source request using the Euclidean metric.
    pub fn single_source(start: impl Into<String>, goal: impl Into<String>) -> Self {
        Self {
            start: start.into(),
            goal: goal.into(),
            algorithm: RouteAlgorithm::SingleSource,
            metric: Metric::Euclidean,
        }
    }

    /// All-pairs request using the Euclidean metric.
    pub fn all_pairs(start: impl Into<String>, goal: impl Into<String>) -> Self {
        Self {
            algorithm: RouteAlgorithm::AllPairs,
            ..Self::single_source(start, goal)
        }
    }

    pub fn with_metric(mut self, metric: Metric) -> Self {
        self.metric = metric;
        self
    }
}

/// Planned route returned by the library.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RoutePlan {
    pub algorithm: RouteAlgorithm,
    pub metric: Metric,
    pub steps: Vec<String>,
    pub distance: f64,
}

impl RoutePlan {
    /// Number of hops in the route.
    pub fn hop_count(&self) -> usize {
        self.steps.len().saturating_sub(1)
    }
}

/// Compute a route using the requested algorithm and metric.
pub fn plan_route(graph: &Graph, request: &RouteRequest) -> Result<RoutePlan> {
    let planner = select_planner(request.algorithm);
    debug!(
        algorithm = %planner.algorithm(),
        metric = %request.metric,
        start = %request.start,
        goal = %request.goal,
        "planning route"
    );

    let path = planner.find_path(graph, &request.start, &request.goal, &request.metric)?;

    Ok(RoutePlan {
        algorithm: request.algorithm,
        metric: request.metric,
        steps: path.steps,
        distance: path.distance,
    })
}
