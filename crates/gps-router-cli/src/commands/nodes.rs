//! Nodes command handler: list the loaded graph.

use std::io::Write;

use anyhow::{Context, Result};

use gps_router_lib::Graph;

use crate::output::{render_nodes, OutputFormat};

pub fn handle_nodes_command<W: Write>(graph: &Graph, format: OutputFormat, out: &mut W) -> Result<()> {
    render_nodes(graph, format, out).context("failed to write node listing")
}
