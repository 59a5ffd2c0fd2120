use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use gps_router_cli::commands::interactive::{run_session, InteractiveCommandArgs};
use gps_router_cli::commands::nodes::handle_nodes_command;
use gps_router_cli::commands::route::{handle_route_command, RouteCommandArgs};
use gps_router_cli::output::OutputFormat;
use gps_router_lib::{load_graph, resolve_nodes_path, Error as LibError, Graph};

#[derive(Parser, Debug)]
#[command(author, version, about = "Shortest routes over coordinate-tagged graphs")]
struct Cli {
    /// Graph document to load, or a directory containing nodes_db.json.
    /// Falls back to GPS_ROUTER_NODES, then the platform data directory.
    #[arg(long, global = true)]
    nodes: Option<PathBuf>,

    /// Output format for routes and listings.
    #[arg(long, value_enum, global = true, default_value_t = OutputFormat::default())]
    format: OutputFormat,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Compute one route between two node labels.
    Route(RouteCommandArgs),
    /// Precompute a table and answer routes read from stdin.
    Interactive(InteractiveCommandArgs),
    /// List the nodes and connections of the loaded graph.
    Nodes,
}

fn main() -> ExitCode {
    init_tracing();
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            report_error(&error);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let graph = load(cli.nodes.as_deref())?;
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Command::Route(args) => handle_route_command(&graph, &args, cli.format, &mut out),
        Command::Interactive(args) => {
            let stdin = io::stdin();
            let mut input = stdin.lock();
            run_session(&graph, &args, cli.format, &mut input, &mut out)
        }
        Command::Nodes => handle_nodes_command(&graph, cli.format, &mut out),
    }?;

    out.flush().context("failed to flush output")
}

fn load(target: Option<&Path>) -> Result<Graph> {
    let path = resolve_nodes_path(target).context("failed to locate the graph document")?;
    load_graph(&path).with_context(|| format!("failed to load graph from {}", path.display()))
}

fn report_error(error: &anyhow::Error) {
    match error.downcast_ref::<LibError>() {
        Some(LibError::UnknownNode { label, suggestions }) => {
            if suggestions.is_empty() {
                eprintln!("Unknown node '{label}'.");
            } else {
                let quoted = suggestions
                    .iter()
                    .map(|s| format!("'{s}'"))
                    .collect::<Vec<_>>()
                    .join(", ");
                eprintln!("Unknown node '{label}'. Did you mean {quoted}?");
            }
        }
        Some(LibError::NoPathExists { start, goal }) => {
            eprintln!("No route found between {start} and {goal}.");
            eprintln!(
                "Edges are directed: check the connections listed for each node, or try the reverse direction."
            );
        }
        _ => eprintln!("error: {error:#}"),
    }
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(io::stderr)
        .finish();

    let _ = tracing::subscriber::set_global_default(subscriber);
}
