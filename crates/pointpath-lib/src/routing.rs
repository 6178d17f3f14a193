//! Path-finding orchestration.
//!
//! This module provides:
//! - [`PathFinder`] - strategy trait for shortest-path algorithms
//! - [`Dijkstra`] - the label-setting implementation
//! - [`PathRequest`] - start and end identifiers for one query
//! - [`PathFindingService`] - resolves endpoints against the stores, builds a
//!   fresh graph and runs the finder
//! - [`plan_path`] - convenience entry point over a [`Network`]
//!
//! # Example
//!
//! ```
//! use pointpath_lib::{plan_path, Network, PathRequest, Point};
//!
//! let mut network = Network::new();
//! network.insert_point(Point::new("A", 0.0, 0.0)?)?;
//! network.insert_point(Point::new("B", 1.0, 1.0)?)?;
//! network.upsert_union("A", "B", Some(1.41), None)?;
//!
//! let result = plan_path(&network, &PathRequest::new("A", "B"))?;
//! assert_eq!(result.path(), ["A", "B"]);
//! assert_eq!(result.total_distance(), 1.41);
//! # Ok::<(), pointpath_lib::Error>(())
//! ```

use tracing::{debug, info};

use crate::error::{Error, Result};
use crate::graph::{build_union_graph, Graph};
use crate::network::Network;
use crate::path::{find_path, PathResult};
use crate::store::{PointStore, UnionStore};

/// Number of identifier suggestions attached to a "points not found" error.
const MAX_SUGGESTIONS: usize = 3;

/// Strategy trait for shortest-path algorithms.
///
/// Implementations must be stateless across calls so that concurrent queries
/// need no synchronisation.
pub trait PathFinder: Send + Sync {
    /// Short algorithm name used in logs and output.
    fn name(&self) -> &'static str;

    /// Find a shortest path from `start` to `end` over `graph`.
    fn find_path(&self, graph: &Graph, start: &str, end: &str) -> Result<PathResult>;
}

/// Dijkstra's algorithm with early exit once the end point is settled.
#[derive(Debug, Clone, Copy, Default)]
pub struct Dijkstra;

impl PathFinder for Dijkstra {
    fn name(&self) -> &'static str {
        "dijkstra"
    }

    fn find_path(&self, graph: &Graph, start: &str, end: &str) -> Result<PathResult> {
        find_path(graph, start, end)
    }
}

/// Start and end point identifiers of a shortest-path query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathRequest {
    pub start: String,
    pub end: String,
}

impl PathRequest {
    pub fn new(start: impl Into<String>, end: impl Into<String>) -> Self {
        Self {
            start: start.into(),
            end: end.into(),
        }
    }
}

/// Answers shortest-path queries against a point store and a union store.
///
/// Each query snapshots both stores and builds its own graph, so the service
/// holds no per-query state.
#[derive(Debug, Clone)]
pub struct PathFindingService<P, U, F = Dijkstra> {
    points: P,
    unions: U,
    finder: F,
}

impl<P, U> PathFindingService<P, U, Dijkstra>
where
    P: PointStore,
    U: UnionStore,
{
    /// Create a service that uses [`Dijkstra`].
    pub fn new(points: P, unions: U) -> Self {
        Self::with_finder(points, unions, Dijkstra)
    }
}

impl<P, U, F> PathFindingService<P, U, F>
where
    P: PointStore,
    U: UnionStore,
    F: PathFinder,
{
    pub fn with_finder(points: P, unions: U, finder: F) -> Self {
        Self {
            points,
            unions,
            finder,
        }
    }

    /// Compute the shortest path for `request`.
    ///
    /// Unknown endpoints are reported as [`Error::PointsNotFound`] before any
    /// graph is built; an unreachable end point yields [`Error::NoPath`].
    pub fn shortest_path(&self, request: &PathRequest) -> Result<PathResult> {
        self.resolve_endpoints(request)?;

        let points = self.points.all_points();
        let unions = self.unions.all_unions();
        let graph = build_union_graph(&points, &unions)?;

        debug!(
            algorithm = self.finder.name(),
            start = %request.start,
            end = %request.end,
            points = graph.point_count(),
            unions = graph.union_count(),
            "searching for shortest path"
        );

        let result = self
            .finder
            .find_path(&graph, &request.start, &request.end)?;
        info!(
            start = %request.start,
            end = %request.end,
            hops = result.hop_count(),
            distance = result.total_distance(),
            "shortest path found"
        );
        Ok(result)
    }

    fn resolve_endpoints(&self, request: &PathRequest) -> Result<()> {
        let mut missing = Vec::new();
        let mut suggestions = Vec::new();

        for id in [&request.start, &request.end] {
            if self.points.find_point(id).is_some() || missing.contains(id) {
                continue;
            }
            for suggestion in self.points.similar_point_ids(id, MAX_SUGGESTIONS) {
                if !suggestions.contains(&suggestion) {
                    suggestions.push(suggestion);
                }
            }
            missing.push(id.clone());
        }

        if missing.is_empty() {
            Ok(())
        } else {
            Err(Error::PointsNotFound {
                missing,
                suggestions,
            })
        }
    }
}

/// Compute a shortest path over a network snapshot using [`Dijkstra`].
pub fn plan_path(network: &Network, request: &PathRequest) -> Result<PathResult> {
    PathFindingService::new(network, network).shortest_path(request)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::point::Point;

    fn chain() -> Network {
        let mut network = Network::new();
        for (id, x) in [("A", 0.0), ("B", 1.0), ("C", 2.0)] {
            network.insert_point(Point::new(id, x, x).unwrap()).unwrap();
        }
        network.upsert_union("A", "B", Some(1.41), None).unwrap();
        network.upsert_union("B", "C", Some(1.41), None).unwrap();
        network
    }

    #[test]
    fn plans_linear_chain() {
        let network = chain();
        let result = plan_path(&network, &PathRequest::new("A", "C")).expect("route exists");
        assert_eq!(result.path(), ["A", "B", "C"]);
        assert_eq!(result.total_distance(), 2.82);
    }

    #[test]
    fn unknown_endpoints_are_rejected_before_search() {
        let network = chain();
        let err = plan_path(&network, &PathRequest::new("A", "Q")).expect_err("unknown");
        match err {
            Error::PointsNotFound { missing, .. } => assert_eq!(missing, vec!["Q".to_string()]),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn unknown_endpoint_reported_once_when_repeated() {
        let network = chain();
        let err = plan_path(&network, &PathRequest::new("Q", "Q")).expect_err("unknown");
        match err {
            Error::PointsNotFound { missing, .. } => assert_eq!(missing.len(), 1),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn custom_finder_is_used() {
        struct Refusing;

        impl PathFinder for Refusing {
            fn name(&self) -> &'static str {
                "refusing"
            }

            fn find_path(&self, _graph: &Graph, start: &str, end: &str) -> Result<PathResult> {
                Err(Error::NoPath {
                    start: start.to_string(),
                    end: end.to_string(),
                })
            }
        }

        let network = chain();
        let service = PathFindingService::with_finder(&network, &network, Refusing);
        let err = service
            .shortest_path(&PathRequest::new("A", "C"))
            .expect_err("finder refuses");
        assert!(err.is_no_path());
    }

    #[test]
    fn dijkstra_reports_its_name() {
        assert_eq!(Dijkstra.name(), "dijkstra");
    }
}
