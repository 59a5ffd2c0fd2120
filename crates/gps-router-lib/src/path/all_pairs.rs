use tracing::debug;

use crate::error::{Error, Result};
use crate::graph::{Graph, NodeIndex};
use crate::metric::DistanceMetric;

use super::reconstruct::from_next_hops;
use super::PathResult;

/// Distance and next-hop matrices for every ordered pair of nodes.
///
/// `next_hop(i, j)` names the node visited immediately after `i` on a
/// shortest path towards `j`, so routes are rebuilt front to back.
#[derive(Debug, Clone)]
pub struct AllPairsTable<'g> {
    graph: &'g Graph,
    width: usize,
    distances: Vec<f64>,
    next_hop: Vec<Option<NodeIndex>>,
}

impl<'g> AllPairsTable<'g> {
    /// Build both `|V| x |V|` matrices in `O(V^3)`.
    pub fn compute<M>(graph: &'g Graph, metric: &M) -> Self
    where
        M: DistanceMetric + ?Sized,
    {
        let width = graph.node_count();
        debug!(nodes = width, "running all-pairs relaxation");

        let mut distances = vec![f64::INFINITY; width * width];
        let mut next_hop = vec![None; width * width];

        for i in 0..width {
            for j in 0..width {
                let cell = i * width + j;
                if graph.label_at(i) == graph.label_at(j) {
                    distances[cell] = 0.0;
                    next_hop[cell] = Some(i);
                }
            }
            let origin = graph.coordinate_at(i);
            for &j in graph.targets_at(i) {
                let cell = i * width + j;
                if next_hop[cell].is_none() {
                    distances[cell] = metric.distance(origin, graph.coordinate_at(j));
                    next_hop[cell] = Some(j);
                }
            }
        }

        for k in 0..width {
            for i in 0..width {
                let via = distances[i * width + k];
                if !via.is_finite() {
                    continue;
                }
                let first_hop = next_hop[i * width + k];
                for j in 0..width {
                    let candidate = via + distances[k * width + j];
                    let cell = i * width + j;
                    if candidate < distances[cell] {
                        distances[cell] = candidate;
                        next_hop[cell] = first_hop;
                    }
                }
            }
        }

        Self {
            graph,
            width,
            distances,
            next_hop,
        }
    }

    /// Shortest distance from `from` to `to`; `None` when either label is unknown.
    pub fn distance(&self, from: &str, to: &str) -> Option<f64> {
        let i = self.graph.index_of(from)?;
        let j = self.graph.index_of(to)?;
        Some(self.distances[i * self.width + j])
    }

    /// Node following `from` on a shortest path towards `to`.
    pub fn next_hop(&self, from: &str, to: &str) -> Option<&str> {
        let i = self.graph.index_of(from)?;
        let j = self.graph.index_of(to)?;
        self.next_hop[i * self.width + j].map(|hop| self.graph.label_at(hop))
    }

    /// Reconstruct the shortest route from `start` to `end`.
    pub fn route(&self, start: &str, end: &str) -> Result<PathResult> {
        let i = self.graph.require(start)?;
        let j = self.graph.require(end)?;
        let distance = self.distances[i * self.width + j];
        if !distance.is_finite() {
            return Err(Error::no_path(start, end));
        }
        from_next_hops(self.graph, &self.next_hop, self.width, i, j, distance)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coordinate::Coordinate;
    use crate::metric::euclidean;

    fn square() -> Graph {
        // A -> B -> C -> D around a unit square, plus a long A -> D edge.
        let mut graph = Graph::new();
        graph.add_node("A", Coordinate::new(0.0, 0.0)).unwrap();
        graph.add_node("B", Coordinate::new(1.0, 0.0)).unwrap();
        graph.add_node("C", Coordinate::new(1.0, 1.0)).unwrap();
        graph.add_node("D", Coordinate::new(0.0, 1.0)).unwrap();
        graph.add_edge("A", "B").unwrap();
        graph.add_edge("B", "C").unwrap();
        graph.add_edge("C", "D").unwrap();
        graph
    }

    #[test]
    fn diagonal_is_zero_and_points_at_self() {
        let graph = square();
        let table = AllPairsTable::compute(&graph, &euclidean);
        for label in graph.labels() {
            assert_eq!(table.distance(label, label), Some(0.0));
            assert_eq!(table.next_hop(label, label), Some(label));
        }
    }

    #[test]
    fn next_hop_points_at_first_step() {
        let graph = square();
        let table = AllPairsTable::compute(&graph, &euclidean);
        assert_eq!(table.next_hop("A", "D"), Some("B"));
        assert_eq!(table.next_hop("B", "D"), Some("C"));
        assert_eq!(table.next_hop("C", "D"), Some("D"));
        assert_eq!(table.distance("A", "D"), Some(3.0));

        let route = table.route("A", "D").unwrap();
        assert_eq!(route.steps, vec!["A", "B", "C", "D"]);
        assert_eq!(route.distance, 3.0);
    }

    #[test]
    fn unreachable_pairs_have_no_hop() {
        let graph = square();
        let table = AllPairsTable::compute(&graph, &euclidean);
        assert_eq!(table.distance("D", "A"), Some(f64::INFINITY));
        assert_eq!(table.next_hop("D", "A"), None);
        assert!(matches!(
            table.route("D", "A"),
            Err(Error::NoPathExists { .. })
        ));
    }

    #[test]
    fn self_loops_do_not_override_diagonal() {
        let mut graph = square();
        graph.add_edge("A", "A").unwrap();
        let table = AllPairsTable::compute(&graph, &euclidean);
        assert_eq!(table.distance("A", "A"), Some(0.0));
        assert_eq!(table.route("A", "A").unwrap().steps, vec!["A"]);
    }

    #[test]
    fn unknown_labels_are_rejected() {
        let graph = square();
        let table = AllPairsTable::compute(&graph, &euclidean);
        assert!(matches!(
            table.route("A", "Z"),
            Err(Error::UnknownNode { .. })
        ));
        assert_eq!(table.distance("Z", "A"), None);
    }

    #[test]
    fn empty_graph_builds_empty_table() {
        let graph = Graph::new();
        let table = AllPairsTable::compute(&graph, &euclidean);
        assert!(matches!(
            table.route("A", "A"),
            Err(Error::UnknownNode { .. })
        ));
    }
}
