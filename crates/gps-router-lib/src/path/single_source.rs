use tracing::{debug, trace};

use crate::error::{Error, Result};
use crate::graph::{Graph, NodeIndex};
use crate::metric::DistanceMetric;

use super::reconstruct::from_predecessors;
use super::PathResult;

/// Distances and predecessors from one source to every node.
///
/// Unreachable nodes keep a distance of `f64::INFINITY` and no predecessor.
#[derive(Debug, Clone)]
pub struct SingleSourceTable<'g> {
    graph: &'g Graph,
    source: NodeIndex,
    distances: Vec<f64>,
    predecessors: Vec<Option<NodeIndex>>,
}

impl<'g> SingleSourceTable<'g> {
    /// Run `|V| - 1` full relaxation passes from `source`.
    ///
    /// The pass count is fixed rather than stopping at a fixed point, which
    /// bounds the work at `O(V * E)` metric evaluations.
    pub fn compute<M>(graph: &'g Graph, source: &str, metric: &M) -> Result<Self>
    where
        M: DistanceMetric + ?Sized,
    {
        let source_idx = graph.require(source)?;
        let node_count = graph.node_count();

        let mut distances = vec![f64::INFINITY; node_count];
        let mut predecessors = vec![None; node_count];
        distances[source_idx] = 0.0;

        let passes = node_count.saturating_sub(1);
        debug!(source, nodes = node_count, passes, "running single-source relaxation");

        for pass in 0..passes {
            let mut updates = 0usize;
            for from in 0..node_count {
                let base = distances[from];
                if !base.is_finite() {
                    continue;
                }
                let origin = graph.coordinate_at(from);
                for &to in graph.targets_at(from) {
                    let candidate = base + metric.distance(origin, graph.coordinate_at(to));
                    if candidate < distances[to] {
                        distances[to] = candidate;
                        predecessors[to] = Some(from);
                        updates += 1;
                    }
                }
            }
            trace!(pass, updates, "relaxation pass complete");
        }

        Ok(Self {
            graph,
            source: source_idx,
            distances,
            predecessors,
        })
    }

    pub fn source(&self) -> &str {
        self.graph.label_at(self.source)
    }

    /// Shortest distance to `label`; `None` when the label is not in the graph.
    pub fn distance(&self, label: &str) -> Option<f64> {
        self.graph.index_of(label).map(|idx| self.distances[idx])
    }

    /// Immediate predecessor of `label` on its shortest path from the source.
    pub fn predecessor(&self, label: &str) -> Option<&str> {
        let idx = self.graph.index_of(label)?;
        self.predecessors[idx].map(|pred| self.graph.label_at(pred))
    }

    pub fn is_reachable(&self, label: &str) -> bool {
        self.distance(label).is_some_and(f64::is_finite)
    }

    /// Reconstruct the shortest route from the source to `destination`.
    pub fn route_to(&self, destination: &str) -> Result<PathResult> {
        let goal = self.graph.require(destination)?;
        let distance = self.distances[goal];
        if !distance.is_finite() {
            return Err(Error::no_path(self.source(), destination));
        }
        from_predecessors(self.graph, &self.predecessors, self.source, goal, distance)
    }
}
