use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap, HashSet};

use serde::Serialize;
use tracing::debug;

use crate::error::{Error, Result};
use crate::graph::Graph;
use crate::point::{round_distance, PointId};

/// Shortest path between two points and its total distance.
///
/// The path always starts at the requested start point and ends at the
/// requested end point; consecutive entries are joined by a union. It is
/// never empty and the total distance is finite and non-negative.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PathResult {
    path: Vec<PointId>,
    total_distance: f64,
}

impl PathResult {
    /// Build a result, rejecting an empty path or a distance that is not a
    /// finite, non-negative number.
    pub fn new(path: Vec<PointId>, total_distance: f64) -> Result<Self> {
        if path.is_empty() {
            return Err(Error::EmptyPath);
        }
        if !total_distance.is_finite() || total_distance < 0.0 {
            return Err(Error::InvalidPathDistance {
                distance: total_distance,
            });
        }
        Ok(Self {
            path,
            total_distance,
        })
    }

    /// Ordered point identifiers from start to end.
    pub fn path(&self) -> &[PointId] {
        &self.path
    }

    /// Sum of the union distances along the path, rounded to two decimals.
    pub fn total_distance(&self) -> f64 {
        self.total_distance
    }

    /// Number of unions traversed.
    pub fn hop_count(&self) -> usize {
        self.path.len().saturating_sub(1)
    }

    pub fn start(&self) -> &str {
        &self.path[0]
    }

    pub fn end(&self) -> &str {
        &self.path[self.path.len() - 1]
    }

    pub fn into_path(self) -> Vec<PointId> {
        self.path
    }
}

/// Run Dijkstra's algorithm from `start`, stopping once `end` is settled.
///
/// Both endpoints must be vertices of `graph`; callers normally check this
/// before searching, and a violation is reported as [`Error::PointsNotFound`].
/// An unreachable `end` yields [`Error::NoPath`]. Partial sums that overflow
/// `f64` are discarded; when `end` is only reachable through such sums the
/// search fails with [`Error::DistanceOverflow`].
///
/// When several shortest paths share the minimal distance, which one is
/// returned is unspecified and may differ between calls: neighbour iteration
/// order is not stable. The reported distance is always the same.
pub fn find_path<'a>(graph: &'a Graph, start: &'a str, end: &'a str) -> Result<PathResult> {
    let missing: Vec<String> = [start, end]
        .into_iter()
        .filter(|point| !graph.contains(point))
        .map(str::to_string)
        .collect();
    if !missing.is_empty() {
        return Err(Error::PointsNotFound {
            missing,
            suggestions: Vec::new(),
        });
    }

    if start == end {
        return PathResult::new(vec![start.to_string()], 0.0);
    }

    // A point without an entry has not been reached yet.
    let mut distances: HashMap<&str, f64> = HashMap::new();
    let mut predecessors: HashMap<&str, &str> = HashMap::new();
    let mut settled: HashSet<&str> = HashSet::new();
    let mut frontier = BinaryHeap::new();
    let mut overflowed = false;

    distances.insert(start, 0.0);
    frontier.push(QueueEntry::new(start, 0.0));

    while let Some(entry) = frontier.pop() {
        // Improvements push fresh entries instead of decreasing keys, so
        // stale duplicates surface here and are skipped.
        if !settled.insert(entry.node) {
            continue;
        }

        if entry.node == end {
            break;
        }

        let current_distance = entry.cost.0;
        for (next, weight) in graph.neighbours(entry.node) {
            if settled.contains(next) {
                continue;
            }

            let candidate = current_distance + weight;
            if !candidate.is_finite() {
                overflowed = true;
                continue;
            }
            if distances.get(next).is_none_or(|known| candidate < *known) {
                distances.insert(next, candidate);
                predecessors.insert(next, entry.node);
                frontier.push(QueueEntry::new(next, candidate));
            }
        }
    }

    debug!(
        start,
        end,
        settled = settled.len(),
        reached = distances.len(),
        "dijkstra search finished"
    );

    let Some(&total) = distances.get(end) else {
        if overflowed {
            return Err(Error::DistanceOverflow {
                start: start.to_string(),
                end: end.to_string(),
            });
        }
        return Err(no_path(start, end));
    };

    let path = reconstruct_path(&predecessors, start, end)?;
    PathResult::new(path, round_distance(total))
}

fn reconstruct_path(
    predecessors: &HashMap<&str, &str>,
    start: &str,
    end: &str,
) -> Result<Vec<PointId>> {
    let mut path = vec![end.to_string()];
    let mut current = end;
    while let Some(&previous) = predecessors.get(current) {
        // A chain longer than the number of links can only be a cycle.
        if path.len() > predecessors.len() {
            return Err(no_path(start, end));
        }
        path.push(previous.to_string());
        current = previous;
    }
    path.reverse();

    if path.first().map(String::as_str) != Some(start) {
        return Err(no_path(start, end));
    }
    Ok(path)
}

fn no_path(start: &str, end: &str) -> Error {
    Error::NoPath {
        start: start.to_string(),
        end: end.to_string(),
    }
}

#[derive(Copy, Clone, Debug, Default)]
struct FloatOrd(f64);

impl PartialEq for FloatOrd {
    fn eq(&self, other: &Self) -> bool {
        self.0.eq(&other.0)
    }
}

impl Eq for FloatOrd {}

impl PartialOrd for FloatOrd {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FloatOrd {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
struct QueueEntry<'a> {
    node: &'a str,
    cost: FloatOrd,
}

impl<'a> QueueEntry<'a> {
    fn new(node: &'a str, cost: f64) -> Self {
        Self {
            node,
            cost: FloatOrd(cost),
        }
    }
}

impl Ord for QueueEntry<'_> {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse ordering so BinaryHeap becomes a min-heap by cost.
        other
            .cost
            .cmp(&self.cost)
            .then_with(|| other.node.cmp(self.node))
    }
}

impl PartialOrd for QueueEntry<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
