//! Interactive query loop.
//!
//! One shortest-path table is computed up front and every query read from
//! the input is answered from it. Unknown labels re-prompt; a missing route
//! is reported and the loop carries on.

use std::io::{BufRead, Write};

use anyhow::{anyhow, bail, Result};
use clap::Args;
use tracing::debug;

use gps_router_lib::{
    AllPairsTable, Error as LibError, Graph, Metric, PathResult, RouteAlgorithm, RoutePlan,
    RouteSummary, SingleSourceTable,
};

use super::{AlgorithmArg, MetricArg};
use crate::output::{render_summary, OutputFormat};

const SUGGESTION_LIMIT: usize = 3;

/// Arguments for the interactive command.
#[derive(Debug, Clone, Args)]
pub struct InteractiveCommandArgs {
    /// Fixed starting node. Required for bellman-ford; optional for floyd-warshall,
    /// which otherwise asks for a start on every query.
    #[arg(long = "from")]
    pub from: Option<String>,
    /// Algorithm used to precompute the query table.
    #[arg(long, value_enum, default_value_t = AlgorithmArg::default())]
    pub algorithm: AlgorithmArg,
    /// Metric used to weight edges.
    #[arg(long, value_enum, default_value_t = MetricArg::default())]
    pub metric: MetricArg,
}

enum Precomputed<'g> {
    SingleSource(SingleSourceTable<'g>),
    AllPairs {
        table: AllPairsTable<'g>,
        fixed_start: Option<String>,
    },
}

impl Precomputed<'_> {
    fn route(&self, start: &str, goal: &str) -> gps_router_lib::Result<PathResult> {
        match self {
            Precomputed::SingleSource(table) => table.route_to(goal),
            Precomputed::AllPairs { table, .. } => table.route(start, goal),
        }
    }
}

/// Run the query loop until the user declines to continue or input ends.
pub fn run_session<R: BufRead, W: Write>(
    graph: &Graph,
    args: &InteractiveCommandArgs,
    format: OutputFormat,
    input: &mut R,
    out: &mut W,
) -> Result<()> {
    if format == OutputFormat::Json {
        bail!("--format json is not supported by interactive; use the route command instead");
    }
    let algorithm: RouteAlgorithm = args.algorithm.into();
    let metric: Metric = args.metric.into();

    let tables = match algorithm {
        RouteAlgorithm::SingleSource => {
            let start = args
                .from
                .as_deref()
                .ok_or_else(|| anyhow!("--from is required with --algorithm bellman-ford"))?;
            Precomputed::SingleSource(SingleSourceTable::compute(graph, start, &metric)?)
        }
        RouteAlgorithm::AllPairs => {
            if let Some(start) = args.from.as_deref() {
                if !graph.contains(start) {
                    return Err(unknown_node(graph, start).into());
                }
            }
            Precomputed::AllPairs {
                table: AllPairsTable::compute(graph, &metric),
                fixed_start: args.from.clone(),
            }
        }
    };
    debug!(%algorithm, %metric, "query table ready");

    loop {
        let start = match &tables {
            Precomputed::SingleSource(table) => table.source().to_string(),
            Precomputed::AllPairs {
                fixed_start: Some(start),
                ..
            } => start.clone(),
            Precomputed::AllPairs {
                fixed_start: None, ..
            } => match prompt_label(graph, "Type in starting point: ", input, out)? {
                Some(label) => label,
                None => break,
            },
        };
        let Some(goal) = prompt_label(graph, "Type in ending point: ", input, out)? else {
            break;
        };

        match tables.route(&start, &goal) {
            Ok(path) => {
                let plan = RoutePlan {
                    algorithm,
                    metric,
                    steps: path.steps,
                    distance: path.distance,
                };
                let summary = RouteSummary::from_plan(graph, &plan)?;
                render_summary(&summary, format, out)?;
            }
            Err(LibError::NoPathExists { start, goal }) => {
                writeln!(out, "No route found between {start} and {goal}.")?;
            }
            Err(other) => return Err(other.into()),
        }

        if !prompt_continue(input, out)? {
            break;
        }
    }

    Ok(())
}

fn unknown_node(graph: &Graph, label: &str) -> LibError {
    LibError::UnknownNode {
        label: label.to_string(),
        suggestions: graph.fuzzy_matches(label, SUGGESTION_LIMIT),
    }
}

fn read_trimmed<R: BufRead>(input: &mut R) -> Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

/// Ask for a label until a known one is entered. `None` on end of input.
fn prompt_label<R: BufRead, W: Write>(
    graph: &Graph,
    prompt: &str,
    input: &mut R,
    out: &mut W,
) -> Result<Option<String>> {
    loop {
        writeln!(out, "{prompt}")?;
        out.flush()?;
        let Some(label) = read_trimmed(input)? else {
            return Ok(None);
        };
        if graph.contains(&label) {
            return Ok(Some(label));
        }
        writeln!(out, "{}", unknown_node(graph, &label))?;
    }
}

/// Ask whether to run another query. End of input counts as "no".
fn prompt_continue<R: BufRead, W: Write>(input: &mut R, out: &mut W) -> Result<bool> {
    loop {
        writeln!(out, "Do you wish to continue? (y - yes, n - no): ")?;
        out.flush()?;
        match read_trimmed(input)?.as_deref() {
            Some("y") => return Ok(true),
            Some("n") | None => return Ok(false),
            Some(_) => continue,
        }
    }
}
