use std::collections::HashMap;
use std::sync::Arc;

use tracing::{debug, warn};

use crate::error::{Error, Result};
use crate::point::{Point, PointId};
use crate::union::PointUnion;

/// Weighted edge-list entry consumed by [`build_graph`].
///
/// The endpoints are unordered; the builder records the distance in both
/// directions.
#[derive(Debug, Clone, PartialEq)]
pub struct Connection {
    pub start: PointId,
    pub end: PointId,
    pub distance: f64,
}

impl Connection {
    pub fn new(start: impl Into<PointId>, end: impl Into<PointId>, distance: f64) -> Self {
        Self {
            start: start.into(),
            end: end.into(),
            distance,
        }
    }
}

/// Adjacency representation used by the path finders.
///
/// Every declared point is a key, isolated points included. Each neighbour
/// map holds the effective weight of the union in that direction; the map is
/// symmetric by construction.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    adjacency: Arc<HashMap<PointId, HashMap<PointId, f64>>>,
}

impl Graph {
    /// Whether `point` is a vertex of the graph.
    pub fn contains(&self, point: &str) -> bool {
        self.adjacency.contains_key(point)
    }

    /// Number of vertices.
    pub fn point_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Number of undirected edges.
    pub fn union_count(&self) -> usize {
        self.adjacency.values().map(HashMap::len).sum::<usize>() / 2
    }

    /// Iterate over the identifiers of all vertices, in no particular order.
    pub fn points(&self) -> impl Iterator<Item = &str> {
        self.adjacency.keys().map(String::as_str)
    }

    /// Return the neighbours of `point` with their edge weights.
    ///
    /// Unknown points have no neighbours. Iteration order is unspecified.
    pub fn neighbours(&self, point: &str) -> impl Iterator<Item = (&str, f64)> {
        self.adjacency
            .get(point)
            .into_iter()
            .flat_map(|edges| edges.iter().map(|(id, weight)| (id.as_str(), *weight)))
    }

    /// Weight of the edge between `a` and `b`, if any.
    pub fn weight(&self, a: &str, b: &str) -> Option<f64> {
        self.adjacency.get(a).and_then(|edges| edges.get(b)).copied()
    }
}

/// Build a graph from declared point identifiers and an edge list.
///
/// Each connection is inserted in both directions. When the same unordered
/// pair appears more than once the later distance replaces the earlier one.
/// Connections naming an undeclared point add that point as a vertex so the
/// adjacency stays closed over its keys.
pub fn build_graph<P, C>(points: P, connections: C) -> Result<Graph>
where
    P: IntoIterator,
    P::Item: AsRef<str>,
    C: IntoIterator<Item = Connection>,
{
    let mut adjacency: HashMap<PointId, HashMap<PointId, f64>> = HashMap::new();
    for point in points {
        adjacency.entry(point.as_ref().to_string()).or_default();
    }

    for connection in connections {
        validate_connection(&connection.start, &connection.end, connection.distance)?;

        for endpoint in [&connection.start, &connection.end] {
            if !adjacency.contains_key(endpoint.as_str()) {
                warn!(point = %endpoint, "connection references an undeclared point");
                adjacency.insert(endpoint.clone(), HashMap::new());
            }
        }

        insert_directed(
            &mut adjacency,
            &connection.start,
            &connection.end,
            connection.distance,
        );
        insert_directed(
            &mut adjacency,
            &connection.end,
            &connection.start,
            connection.distance,
        );
    }

    let graph = Graph {
        adjacency: Arc::new(adjacency),
    };
    debug!(
        points = graph.point_count(),
        unions = graph.union_count(),
        "built point graph"
    );
    Ok(graph)
}

/// Build a graph from point and union entities.
pub fn build_union_graph(points: &[Point], unions: &[PointUnion]) -> Result<Graph> {
    build_graph(
        points.iter().map(Point::id),
        unions.iter().map(Connection::from),
    )
}

/// Check the invariants shared by unions and connections: distinct endpoints
/// and a finite, non-negative distance.
pub(crate) fn validate_connection(start: &str, end: &str, distance: f64) -> Result<()> {
    let reason = if start == end {
        "endpoints must differ"
    } else if !distance.is_finite() {
        "distance must be a finite number"
    } else if distance < 0.0 {
        "distance must not be negative"
    } else {
        return Ok(());
    };

    Err(Error::InvalidUnion {
        point1: start.to_string(),
        point2: end.to_string(),
        reason: reason.to_string(),
    })
}

fn insert_directed(
    adjacency: &mut HashMap<PointId, HashMap<PointId, f64>>,
    from: &str,
    to: &str,
    distance: f64,
) {
    let edges = adjacency.entry(from.to_string()).or_default();
    if let Some(previous) = edges.insert(to.to_string(), distance) {
        if previous != distance {
            debug!(from, to, previous, distance, "union weight replaced");
        }
    }
}
