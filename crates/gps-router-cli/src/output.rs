//! Output formatting for route rendering.

use std::io::{self, Write};

use clap::ValueEnum;
use serde::Serialize;

use gps_router_lib::{Graph, RouteRenderMode, RouteSummary};

/// Output format selected with `--format`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Route line followed by the total distance.
    #[default]
    Text,
    /// Markdown-flavoured listing with per-leg distances.
    Rich,
    /// One label per line with `+`/`|`/`-` markers.
    Basic,
    /// Pretty-printed JSON route summary.
    Json,
}

/// Render a route summary in the requested format.
pub fn render_summary<W: Write>(
    summary: &RouteSummary,
    format: OutputFormat,
    out: &mut W,
) -> io::Result<()> {
    match format {
        OutputFormat::Text => out.write_all(summary.render(RouteRenderMode::PlainText).as_bytes()),
        OutputFormat::Rich => out.write_all(summary.render(RouteRenderMode::RichText).as_bytes()),
        OutputFormat::Basic => render_basic(summary, out),
        OutputFormat::Json => render_json(summary, out),
    }
}

/// Render a route summary in basic path format.
///
/// Uses `+`/`|`/`-` prefixes for first/middle/last steps.
fn render_basic<W: Write>(summary: &RouteSummary, out: &mut W) -> io::Result<()> {
    let len = summary.steps.len();
    for (i, step) in summary.steps.iter().enumerate() {
        let prefix = if i == 0 {
            '+'
        } else if i + 1 == len {
            '-'
        } else {
            '|'
        };
        writeln!(out, "{} {}", prefix, step.label)?;
    }
    writeln!(out, "distance {:.2}", summary.distance)
}

fn render_json<W: Write, T: Serialize>(value: &T, out: &mut W) -> io::Result<()> {
    serde_json::to_writer_pretty(&mut *out, value).map_err(io::Error::other)?;
    out.write_all(b"\n")
}

#[derive(Debug, Serialize)]
struct NodeListing<'a> {
    id: &'a str,
    lon: f64,
    lat: f64,
    connections: Vec<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<&'a str>,
}

/// Render every node of the graph with its outgoing connections.
pub fn render_nodes<W: Write>(graph: &Graph, format: OutputFormat, out: &mut W) -> io::Result<()> {
    let listings: Vec<NodeListing<'_>> = graph
        .nodes()
        .map(|node| NodeListing {
            id: node.label(),
            lon: node.coordinate().longitude,
            lat: node.coordinate().latitude,
            connections: graph.neighbors(node.label()).unwrap_or_default(),
            description: node.description(),
        })
        .collect();

    if format == OutputFormat::Json {
        return render_json(&listings, out);
    }

    for listing in &listings {
        write!(out, "{} ({}, {})", listing.id, listing.lon, listing.lat)?;
        if !listing.connections.is_empty() {
            write!(out, " -> {}", listing.connections.join(", "))?;
        }
        if let Some(description) = listing.description {
            write!(out, " [{description}]")?;
        }
        writeln!(out)?;
    }
    Ok(())
}
