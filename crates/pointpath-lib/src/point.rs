use serde::Serialize;

use crate::error::{Error, Result};

/// Identifier type for points. Identifiers are opaque, case-sensitive strings.
pub type PointId = String;

/// Longest identifier accepted for a point, counted in characters.
pub const MAX_POINT_ID_LEN: usize = 255;

/// Named location in the network with planar coordinates.
///
/// Points are immutable once constructed. The coordinates are not used by the
/// search itself; they back [`euclidean_distance`] for callers that want
/// auto-computed union weights.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Point {
    id: PointId,
    x: f64,
    y: f64,
}

impl Point {
    /// Create a point, validating the identifier and coordinates.
    pub fn new(id: impl Into<PointId>, x: f64, y: f64) -> Result<Self> {
        let id = id.into();

        if id.is_empty() {
            return Err(invalid(&id, "identifier must not be empty"));
        }
        let len = id.chars().count();
        if len > MAX_POINT_ID_LEN {
            return Err(invalid(
                &id,
                format!("identifier is {len} characters long; the maximum is {MAX_POINT_ID_LEN}"),
            ));
        }
        if !x.is_finite() || !y.is_finite() {
            return Err(invalid(&id, "coordinates must be finite numbers"));
        }

        Ok(Self { id, x, y })
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn x(&self) -> f64 {
        self.x
    }

    pub fn y(&self) -> f64 {
        self.y
    }

    /// Calculate the Euclidean distance to another point.
    pub fn distance_to(&self, other: &Self) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }
}

/// Euclidean distance between two points rounded to two decimal places.
pub fn euclidean_distance(a: &Point, b: &Point) -> f64 {
    round_distance(a.distance_to(b))
}

/// Round a distance to two decimal places, the precision used for reporting.
///
/// Values too large to scale are returned unchanged.
pub fn round_distance(value: f64) -> f64 {
    let scaled = value * 100.0;
    if scaled.is_finite() {
        scaled.round() / 100.0
    } else {
        value
    }
}

fn invalid(id: &str, reason: impl Into<String>) -> Error {
    Error::InvalidPoint {
        id: id.to_string(),
        reason: reason.into(),
    }
}
