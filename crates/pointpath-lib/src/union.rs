use serde::Serialize;
use uuid::Uuid;

use crate::error::{Error, Result};
use crate::graph::{validate_connection, Connection};
use crate::point::{euclidean_distance, Point, PointId};

/// Undirected, weighted connection between two distinct points.
///
/// Unions are identified by a UUID. The pair of endpoints is unordered:
/// a union from `A` to `B` is the same connection as one from `B` to `A`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PointUnion {
    id: String,
    point1: PointId,
    point2: PointId,
    distance: f64,
}

impl PointUnion {
    /// Create a union with an explicit identifier.
    pub fn new(
        id: impl Into<String>,
        point1: &Point,
        point2: &Point,
        distance: f64,
    ) -> Result<Self> {
        let id = id.into();
        if Uuid::parse_str(&id).is_err() {
            return Err(Error::InvalidUnionId { id });
        }
        validate_connection(point1.id(), point2.id(), distance)?;

        Ok(Self {
            id,
            point1: point1.id().to_string(),
            point2: point2.id().to_string(),
            distance,
        })
    }

    /// Create a union, generating a random identifier when none is supplied.
    pub fn create(point1: &Point, point2: &Point, distance: f64, id: Option<&str>) -> Result<Self> {
        match id {
            Some(id) => Self::new(id, point1, point2, distance),
            None => Self::new(Uuid::new_v4().to_string(), point1, point2, distance),
        }
    }

    /// Create a union weighted by the Euclidean distance between its endpoints.
    pub fn between(point1: &Point, point2: &Point) -> Result<Self> {
        Self::create(point1, point2, euclidean_distance(point1, point2), None)
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn point1(&self) -> &str {
        &self.point1
    }

    pub fn point2(&self) -> &str {
        &self.point2
    }

    pub fn distance(&self) -> f64 {
        self.distance
    }

    /// Replace the distance, keeping identifier and endpoints.
    pub fn set_distance(&mut self, distance: f64) -> Result<()> {
        validate_connection(&self.point1, &self.point2, distance)?;
        self.distance = distance;
        Ok(())
    }

    /// Whether this union joins `a` and `b`, in either order.
    pub fn connects(&self, a: &str, b: &str) -> bool {
        (self.point1 == a && self.point2 == b) || (self.point1 == b && self.point2 == a)
    }
}

impl From<&PointUnion> for Connection {
    fn from(union: &PointUnion) -> Self {
        Connection::new(union.point1(), union.point2(), union.distance())
    }
}
