//! Route command handler for a single start/goal query.

use std::io::Write;

use anyhow::{Context, Result};
use clap::Args;

use gps_router_lib::{plan_route, Graph, RouteRequest, RouteSummary};

use super::{AlgorithmArg, MetricArg};
use crate::output::{render_summary, OutputFormat};

/// Arguments for the route command.
#[derive(Debug, Clone, Args)]
pub struct RouteCommandArgs {
    /// Starting node label.
    #[arg(long = "from")]
    pub from: String,
    /// Destination node label.
    #[arg(long = "to")]
    pub to: String,
    /// Algorithm to use when planning the route.
    #[arg(long, value_enum, default_value_t = AlgorithmArg::default())]
    pub algorithm: AlgorithmArg,
    /// Metric used to weight edges.
    #[arg(long, value_enum, default_value_t = MetricArg::default())]
    pub metric: MetricArg,
}

impl RouteCommandArgs {
    /// Convert CLI args to a library RouteRequest.
    pub fn to_request(&self) -> RouteRequest {
        RouteRequest {
            start: self.from.clone(),
            goal: self.to.clone(),
            algorithm: self.algorithm.into(),
            metric: self.metric.into(),
        }
    }
}

/// Handle the route subcommand.
pub fn handle_route_command<W: Write>(
    graph: &Graph,
    args: &RouteCommandArgs,
    format: OutputFormat,
    out: &mut W,
) -> Result<()> {
    let plan = plan_route(graph, &args.to_request())?;
    let summary = RouteSummary::from_plan(graph, &plan)?;
    render_summary(&summary, format, out).context("failed to write route output")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use gps_router_lib::{parse_graph, Error, Metric, RouteAlgorithm};

    fn graph() -> Graph {
        parse_graph(
            r#"{"nodes": [
                {"id": "A", "lon": 0, "lat": 0, "connections": ["B"]},
                {"id": "B", "lon": 3, "lat": 4}
            ]}"#,
        )
        .unwrap()
    }

    fn args(from: &str, to: &str) -> RouteCommandArgs {
        RouteCommandArgs {
            from: from.to_string(),
            to: to.to_string(),
            algorithm: AlgorithmArg::FloydWarshall,
            metric: MetricArg::Euclidean,
        }
    }

    #[test]
    fn request_maps_cli_enums() {
        let request = args("A", "B").to_request();
        assert_eq!(request.algorithm, RouteAlgorithm::AllPairs);
        assert_eq!(request.metric, Metric::Euclidean);
    }

    #[test]
    fn route_is_written() {
        let mut out = Vec::new();
        handle_route_command(&graph(), &args("A", "B"), OutputFormat::Basic, &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "+ A\n- B\ndistance 5.00\n");
    }

    #[test]
    fn library_errors_are_preserved() {
        let mut out = Vec::new();
        let error =
            handle_route_command(&graph(), &args("B", "A"), OutputFormat::Text, &mut out)
                .unwrap_err();
        assert!(matches!(
            error.downcast_ref::<Error>(),
            Some(Error::NoPathExists { .. })
        ));
    }
}
