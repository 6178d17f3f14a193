//! Read-only access to stored points and unions.
//!
//! The path-finding service only needs to enumerate everything and look up
//! single entries; persistence and mutation belong to the implementer.
//! [`crate::Network`] is the in-memory implementation shipped with the crate.

use crate::point::Point;
use crate::union::PointUnion;

/// Source of points known to the system.
pub trait PointStore {
    /// Return every stored point.
    fn all_points(&self) -> Vec<Point>;

    /// Look up a single point by identifier.
    fn find_point(&self, id: &str) -> Option<Point>;

    /// Identifiers similar to `id`, best match first, used for error hints.
    fn similar_point_ids(&self, id: &str, limit: usize) -> Vec<String> {
        let ids: Vec<String> = self
            .all_points()
            .into_iter()
            .map(|point| point.id().to_string())
            .collect();
        crate::network::fuzzy_matches(ids.iter().map(String::as_str), id, limit)
    }
}

/// Source of unions known to the system.
pub trait UnionStore {
    /// Return every stored union.
    fn all_unions(&self) -> Vec<PointUnion>;

    /// Look up a single union by identifier.
    fn find_union(&self, id: &str) -> Option<PointUnion>;
}

impl<T: PointStore + ?Sized> PointStore for &T {
    fn all_points(&self) -> Vec<Point> {
        (**self).all_points()
    }

    fn find_point(&self, id: &str) -> Option<Point> {
        (**self).find_point(id)
    }

    fn similar_point_ids(&self, id: &str, limit: usize) -> Vec<String> {
        (**self).similar_point_ids(id, limit)
    }
}

impl<T: UnionStore + ?Sized> UnionStore for &T {
    fn all_unions(&self) -> Vec<PointUnion> {
        (**self).all_unions()
    }

    fn find_union(&self, id: &str) -> Option<PointUnion> {
        (**self).find_union(id)
    }
}
