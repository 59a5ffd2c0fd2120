use crate::error::{Error, Result};
use crate::graph::{Graph, NodeIndex};

use super::PathResult;

/// Walk a predecessor map backwards from `destination` to `source`.
///
/// `distance` is taken from the distance table as-is.
pub(crate) fn from_predecessors(
    graph: &Graph,
    predecessors: &[Option<NodeIndex>],
    source: NodeIndex,
    destination: NodeIndex,
    distance: f64,
) -> Result<PathResult> {
    let missing = || Error::no_path(graph.label_at(source), graph.label_at(destination));

    let mut reversed = Vec::new();
    let mut current = destination;
    loop {
        reversed.push(current);
        if current == source {
            break;
        }
        // A well-formed map never revisits a node.
        if reversed.len() > predecessors.len() {
            return Err(missing());
        }
        current = predecessors
            .get(current)
            .copied()
            .flatten()
            .ok_or_else(missing)?;
    }

    let steps = reversed
        .into_iter()
        .rev()
        .map(|idx| graph.label_at(idx).to_string())
        .collect();
    Ok(PathResult { steps, distance })
}

/// Walk a row-major next-hop matrix forwards from `start` to `end`.
pub(crate) fn from_next_hops(
    graph: &Graph,
    next_hop: &[Option<NodeIndex>],
    width: usize,
    start: NodeIndex,
    end: NodeIndex,
    distance: f64,
) -> Result<PathResult> {
    let missing = || Error::no_path(graph.label_at(start), graph.label_at(end));

    let mut steps = Vec::new();
    let mut current = start;
    loop {
        steps.push(graph.label_at(current).to_string());
        if current == end {
            break;
        }
        if steps.len() > width {
            return Err(missing());
        }
        current = next_hop
            .get(current * width + end)
            .copied()
            .flatten()
            .ok_or_else(missing)?;
    }

    Ok(PathResult { steps, distance })
}
