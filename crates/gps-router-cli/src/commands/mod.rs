// Module exports for CLI subcommands.
//
// Each module handles one subcommand; main.rs only parses arguments and dispatches.

pub mod interactive;
pub mod nodes;
pub mod route;

use clap::ValueEnum;
use gps_router_lib::{Metric, RouteAlgorithm};

/// `--algorithm` values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum AlgorithmArg {
    /// Single-source relaxation from the start node.
    #[default]
    BellmanFord,
    /// All-pairs matrices; answers any start/end pair once built.
    FloydWarshall,
}

impl From<AlgorithmArg> for RouteAlgorithm {
    fn from(value: AlgorithmArg) -> Self {
        match value {
            AlgorithmArg::BellmanFord => RouteAlgorithm::SingleSource,
            AlgorithmArg::FloydWarshall => RouteAlgorithm::AllPairs,
        }
    }
}

/// `--metric` values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum MetricArg {
    /// Planar distance between longitude/latitude pairs.
    #[default]
    Euclidean,
    /// Great-circle distance in metres.
    Geographic,
}

impl From<MetricArg> for Metric {
    fn from(value: MetricArg) -> Self {
        match value {
            MetricArg::Euclidean => Metric::Euclidean,
            MetricArg::Geographic => Metric::Geographic,
        }
    }
}
