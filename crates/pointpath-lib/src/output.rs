use std::fmt::Write;

use serde::Serialize;

use crate::network::Network;
use crate::path::PathResult;
use crate::point::{round_distance, PointId};

/// Presentation style for turning a [`PathSummary`] into text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PathRenderMode {
    /// One line per step with coordinates and leg distances.
    #[default]
    PlainText,
    /// Single line joining the identifiers with arrows.
    Compact,
}

/// Step taken along a computed path.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PathStep {
    pub index: usize,
    pub id: PointId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub x: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub y: Option<f64>,
    /// Distance of the union leading into this step; absent for the start.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub leg_distance: Option<f64>,
    pub cumulative_distance: f64,
}

/// Structured representation of a computed path that higher-level consumers
/// can serialise.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PathSummary {
    pub algorithm: String,
    pub start: PointId,
    pub end: PointId,
    pub hops: usize,
    pub path: Vec<PointId>,
    pub total_distance: f64,
    pub steps: Vec<PathStep>,
}

impl PathSummary {
    /// Convert a [`PathResult`] into a summary with coordinates and leg
    /// distances resolved from `network`.
    pub fn from_result(network: &Network, result: &PathResult, algorithm: &str) -> Self {
        let mut cumulative = 0.0;
        let mut steps = Vec::with_capacity(result.path().len());
        for (index, id) in result.path().iter().enumerate() {
            let leg_distance = if index == 0 {
                None
            } else {
                let previous = &result.path()[index - 1];
                network
                    .union_between(previous, id)
                    .map(|union| union.distance())
            };
            cumulative += leg_distance.unwrap_or(0.0);

            let point = network.point(id);
            steps.push(PathStep {
                index,
                id: id.clone(),
                x: point.map(|p| p.x()),
                y: point.map(|p| p.y()),
                leg_distance,
                cumulative_distance: round_distance(cumulative),
            });
        }

        Self {
            algorithm: algorithm.to_string(),
            start: result.start().to_string(),
            end: result.end().to_string(),
            hops: result.hop_count(),
            path: result.path().to_vec(),
            total_distance: result.total_distance(),
            steps,
        }
    }

    /// Render the summary using the requested textual mode.
    pub fn render(&self, mode: PathRenderMode) -> String {
        match mode {
            PathRenderMode::PlainText => self.render_plain(),
            PathRenderMode::Compact => self.render_compact(),
        }
    }

    fn render_plain(&self) -> String {
        let mut buffer = String::new();
        let _ = writeln!(
            buffer,
            "Path: {} -> {} ({} hops, algorithm: {})",
            self.start, self.end, self.hops, self.algorithm
        );
        for step in &self.steps {
            let _ = write!(buffer, "{:>3}: {}", step.index, step.id);
            if let (Some(x), Some(y)) = (step.x, step.y) {
                let _ = write!(buffer, " ({x:.2}, {y:.2})");
            }
            if let Some(leg) = step.leg_distance {
                let _ = write!(buffer, " +{leg:.2}");
            }
            let _ = writeln!(buffer);
        }
        let _ = writeln!(buffer, "Total distance: {:.2}", self.total_distance);
        buffer
    }

    fn render_compact(&self) -> String {
        format!(
            "{} [{:.2}]\n",
            self.path.join(" -> "),
            self.total_distance
        )
    }
}
