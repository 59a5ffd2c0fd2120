use std::fmt::Write;

use serde::Serialize;

use crate::coordinate::Coordinate;
use crate::error::{Error, Result};
use crate::graph::Graph;
use crate::metric::{DistanceMetric, Metric};
use crate::routing::{RouteAlgorithm, RoutePlan};

/// Presentation style for turning a [`RouteSummary`] into text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteRenderMode {
    PlainText,
    RichText,
}

/// Endpoint within a planned route.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct RouteEndpoint {
    pub label: String,
    pub coordinate: Coordinate,
}

/// Step taken during traversal of a planned route.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct RouteStep {
    pub index: usize,
    pub label: String,
    pub coordinate: Coordinate,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Metric distance of the edge that reached this step; absent for the start.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub leg_distance: Option<f64>,
}

/// Structured representation of a planned route that higher-level consumers can serialise.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct RouteSummary {
    pub algorithm: RouteAlgorithm,
    pub metric: Metric,
    pub hops: usize,
    pub distance: f64,
    pub start: RouteEndpoint,
    pub goal: RouteEndpoint,
    pub steps: Vec<RouteStep>,
}

impl RouteSummary {
    /// Convert a [`RoutePlan`] into a structured summary with resolved coordinates.
    pub fn from_plan(graph: &Graph, plan: &RoutePlan) -> Result<Self> {
        let mut steps = Vec::with_capacity(plan.steps.len());
        let mut previous: Option<Coordinate> = None;
        for (index, label) in plan.steps.iter().enumerate() {
            let node = graph
                .node(label)
                .ok_or_else(|| Error::unknown_node(label.as_str()))?;
            let coordinate = node.coordinate();
            steps.push(RouteStep {
                index,
                label: label.clone(),
                coordinate,
                description: node.description().map(str::to_string),
                leg_distance: previous.map(|from| plan.metric.distance(&from, &coordinate)),
            });
            previous = Some(coordinate);
        }

        let (Some(first), Some(last)) = (steps.first(), steps.last()) else {
            return Err(Error::EmptyRoutePlan);
        };
        let start = RouteEndpoint {
            label: first.label.clone(),
            coordinate: first.coordinate,
        };
        let goal = RouteEndpoint {
            label: last.label.clone(),
            coordinate: last.coordinate,
        };

        Ok(Self {
            algorithm: plan.algorithm,
            metric: plan.metric,
            hops: plan.hop_count(),
            distance: plan.distance,
            start,
            goal,
            steps,
        })
    }

    /// Render the summary using the requested textual mode.
    pub fn render(&self, mode: RouteRenderMode) -> String {
        match mode {
            RouteRenderMode::PlainText => self.render_plain(),
            RouteRenderMode::RichText => self.render_rich(),
        }
    }

    fn render_plain(&self) -> String {
        let mut buffer = String::new();
        let _ = writeln!(
            buffer,
            "Route: {} -> {} ({} hops, algorithm: {}, metric: {})",
            self.start.label, self.goal.label, self.hops, self.algorithm, self.metric
        );
        let joined = self
            .steps
            .iter()
            .map(|step| step.label.as_str())
            .collect::<Vec<_>>()
            .join(" ");
        let _ = writeln!(buffer, "Your route is: {joined}");
        let _ = writeln!(buffer, "Distance: {:.2}", self.distance);
        buffer
    }

    fn render_rich(&self) -> String {
        let mut buffer = String::new();
        let _ = writeln!(
            buffer,
            "**Route** — _{} → {}_ ({} hops, algorithm: `{}`, metric: `{}`)",
            self.start.label, self.goal.label, self.hops, self.algorithm, self.metric
        );
        for step in &self.steps {
            match step.leg_distance {
                Some(leg) => {
                    let _ = writeln!(buffer, "* {:>2}. **{}** (+{:.2})", step.index, step.label, leg);
                }
                None => {
                    let _ = writeln!(buffer, "* {:>2}. **{}**", step.index, step.label);
                }
            }
        }
        let _ = writeln!(buffer, "\nDistance: {:.2}", self.distance);
        buffer
    }
}
