//! GPS router library entry points.
//!
//! This crate owns the coordinate-tagged [`Graph`], the edge-weight metrics,
//! and the two shortest-path algorithms (single-source relaxation and
//! all-pairs matrices) together with route reconstruction. Loading a graph
//! document and resolving its location are provided as helpers; consoles,
//! prompts and argument parsing live in the CLI crate and should only call
//! the functions exported here.
//!

#![deny(warnings)]

pub mod coordinate;
pub mod dataset;
pub mod error;
pub mod graph;
pub mod loader;
pub mod metric;
pub mod output;
pub mod path;
pub mod routing;

pub use coordinate::Coordinate;
pub use dataset::{default_nodes_path, resolve_nodes_path};
pub use error::{Error, Result};
pub use graph::{Graph, Node};
pub use loader::{load_graph, parse_graph, GraphDocument, NodeRecord};
pub use metric::{euclidean, geographic, DistanceMetric, Metric};
pub use output::{RouteEndpoint, RouteRenderMode, RouteStep, RouteSummary};
pub use path::{
    shortest_path_all_pairs, shortest_path_single_source, AllPairsTable, PathResult,
    SingleSourceTable,
};
pub use routing::{plan_route, select_planner, RouteAlgorithm, RoutePlan, RoutePlanner, RouteRequest};
