use std::collections::HashMap;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use serde::Deserialize;
use tracing::{debug, info};

use crate::error::{Error, Result};
use crate::graph::{build_union_graph, Graph};
use crate::point::{euclidean_distance, Point, PointId};
use crate::store::{PointStore, UnionStore};
use crate::union::PointUnion;

/// Default filename for the network snapshot.
const NETWORK_FILENAME: &str = "network.json";

/// Environment variable overriding the snapshot location.
pub const NETWORK_PATH_ENV: &str = "POINTPATH_NETWORK";

/// Minimum Jaro-Winkler similarity for an identifier to be suggested.
const SUGGESTION_THRESHOLD: f64 = 0.8;

/// In-memory snapshot of points and the unions between them.
///
/// Points keep their insertion order. At most one union is stored per
/// unordered pair of points; [`Network::upsert_union`] replaces the distance of
/// an existing union instead of adding a second one.
#[derive(Debug, Clone, Default)]
pub struct Network {
    points: Vec<Point>,
    index: HashMap<PointId, usize>,
    unions: Vec<PointUnion>,
    union_index: HashMap<(PointId, PointId), usize>,
}

impl Network {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a point. Identifiers must be unique within the network.
    pub fn insert_point(&mut self, point: Point) -> Result<()> {
        if self.index.contains_key(point.id()) {
            return Err(Error::DuplicatePoint {
                id: point.id().to_string(),
            });
        }
        self.index.insert(point.id().to_string(), self.points.len());
        self.points.push(point);
        Ok(())
    }

    /// Create a union between two known points, or update the distance of the
    /// union that already joins them.
    ///
    /// A missing `distance` is filled in with the rounded Euclidean distance
    /// between the points. `id` is only used when a new union is created.
    pub fn upsert_union(
        &mut self,
        point1: &str,
        point2: &str,
        distance: Option<f64>,
        id: Option<&str>,
    ) -> Result<&PointUnion> {
        let label = id
            .map(str::to_string)
            .unwrap_or_else(|| format!("{point1}-{point2}"));
        let first = self.resolve_endpoint(&label, point1)?;
        let second = self.resolve_endpoint(&label, point2)?;
        let distance = distance.unwrap_or_else(|| euclidean_distance(first, second));

        let key = pair_key(point1, point2);
        if let Some(&position) = self.union_index.get(&key) {
            let union = &mut self.unions[position];
            debug!(
                union = union.id(),
                previous = union.distance(),
                distance,
                "updating union distance"
            );
            union.set_distance(distance)?;
            return Ok(&self.unions[position]);
        }

        let union = PointUnion::create(first, second, distance, id)?;
        self.union_index.insert(key, self.unions.len());
        self.unions.push(union);
        Ok(&self.unions[self.unions.len() - 1])
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn unions(&self) -> &[PointUnion] {
        &self.unions
    }

    /// Lookup the union joining `point1` and `point2`, in either order.
    pub fn union_between(&self, point1: &str, point2: &str) -> Option<&PointUnion> {
        self.union_index
            .get(&pair_key(point1, point2))
            .map(|&position| &self.unions[position])
    }

    /// Lookup a point by its case-sensitive identifier.
    pub fn point(&self, id: &str) -> Option<&Point> {
        self.index.get(id).map(|&position| &self.points[position])
    }

    pub fn contains_point(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    /// Build the adjacency graph for the current snapshot.
    pub fn graph(&self) -> Result<Graph> {
        build_union_graph(&self.points, &self.unions)
    }

    /// Point identifiers resembling `query`, best match first.
    pub fn fuzzy_point_matches(&self, query: &str, limit: usize) -> Vec<String> {
        fuzzy_matches(self.points.iter().map(Point::id), query, limit)
    }

    /// Parse a JSON snapshot.
    ///
    /// Every point is validated, point identifiers must be unique and every
    /// union must reference declared points. Later unions for the same pair
    /// override earlier ones.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let file: NetworkFile = serde_json::from_str(json)?;

        let mut network = Network::new();
        for record in file.points {
            network.insert_point(Point::new(record.id, record.x, record.y)?)?;
        }
        for record in file.unions {
            network.upsert_union(
                &record.point1,
                &record.point2,
                record.distance,
                record.id.as_deref(),
            )?;
        }
        Ok(network)
    }

    fn resolve_endpoint(&self, union: &str, point: &str) -> Result<&Point> {
        self.point(point).ok_or_else(|| Error::UnknownUnionEndpoint {
            union: union.to_string(),
            point: point.to_string(),
        })
    }
}

impl PointStore for Network {
    fn all_points(&self) -> Vec<Point> {
        self.points.clone()
    }

    fn find_point(&self, id: &str) -> Option<Point> {
        self.point(id).cloned()
    }

    fn similar_point_ids(&self, id: &str, limit: usize) -> Vec<String> {
        self.fuzzy_point_matches(id, limit)
    }
}

impl UnionStore for Network {
    fn all_unions(&self) -> Vec<PointUnion> {
        self.unions.clone()
    }

    fn find_union(&self, id: &str) -> Option<PointUnion> {
        self.unions.iter().find(|union| union.id() == id).cloned()
    }
}

#[derive(Debug, Deserialize)]
struct NetworkFile {
    #[serde(default)]
    points: Vec<PointRecord>,
    #[serde(default)]
    unions: Vec<UnionRecord>,
}

#[derive(Debug, Deserialize)]
struct PointRecord {
    id: String,
    x: f64,
    y: f64,
}

#[derive(Debug, Deserialize)]
struct UnionRecord {
    #[serde(default)]
    id: Option<String>,
    point1: String,
    point2: String,
    #[serde(default)]
    distance: Option<f64>,
}

/// Load a network snapshot from a JSON file.
pub fn load_network(path: &Path) -> Result<Network> {
    let contents = fs::read_to_string(path)?;
    let network = Network::from_json_str(&contents)?;
    info!(
        path = %path.display(),
        points = network.points().len(),
        unions = network.unions().len(),
        "loaded network snapshot"
    );
    Ok(network)
}

/// Resolve the default snapshot location using platform-specific project directories.
pub fn default_network_path() -> Result<PathBuf> {
    let dirs = ProjectDirs::from("com", "pointpath", "pointpath")
        .ok_or(Error::ProjectDirsUnavailable)?;
    Ok(dirs.data_dir().join(NETWORK_FILENAME))
}

/// Resolve the snapshot location: explicit override, then the
/// `POINTPATH_NETWORK` environment variable, then the platform default.
pub fn resolve_network_path(override_path: Option<&Path>) -> Result<PathBuf> {
    if let Some(path) = override_path {
        return Ok(path.to_path_buf());
    }
    if let Some(path) = env::var_os(NETWORK_PATH_ENV).filter(|value| !value.is_empty()) {
        debug!(variable = NETWORK_PATH_ENV, "using network path from environment");
        return Ok(PathBuf::from(path));
    }
    default_network_path()
}

/// Unions are indexed by their endpoints in sorted order.
fn pair_key(point1: &str, point2: &str) -> (PointId, PointId) {
    if point1 <= point2 {
        (point1.to_string(), point2.to_string())
    } else {
        (point2.to_string(), point1.to_string())
    }
}

pub(crate) fn fuzzy_matches<'a, I>(candidates: I, query: &str, limit: usize) -> Vec<String>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut scored: Vec<(f64, &str)> = candidates
        .into_iter()
        .map(|candidate| (strsim::jaro_winkler(query, candidate), candidate))
        .filter(|(score, _)| *score >= SUGGESTION_THRESHOLD)
        .collect();
    scored.sort_by(|a, b| b.0.total_cmp(&a.0).then_with(|| a.1.cmp(b.1)));
    scored
        .into_iter()
        .take(limit)
        .map(|(_, candidate)| candidate.to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{
        "points": [
            {"id": "A", "x": 0.0, "y": 0.0},
            {"id": "B", "x": 1.0, "y": 1.0},
            {"id": "C", "x": 2.0, "y": 2.0}
        ],
        "unions": [
            {"point1": "A", "point2": "B", "distance": 1.41},
            {"point1": "B", "point2": "C"}
        ]
    }"#;

    #[test]
    fn parses_points_and_unions() {
        let network = Network::from_json_str(SAMPLE).expect("sample parses");
        assert_eq!(network.points().len(), 3);
        assert_eq!(network.unions().len(), 2);
        assert_eq!(network.point("B").map(Point::x), Some(1.0));
    }

    #[test]
    fn missing_distance_uses_euclidean_helper() {
        let network = Network::from_json_str(SAMPLE).unwrap();
        let union = network
            .unions()
            .iter()
            .find(|union| union.connects("B", "C"))
            .expect("union present");
        assert_eq!(union.distance(), 1.41);
    }

    #[test]
    fn repeated_pair_keeps_last_distance() {
        let json = r#"{
            "points": [{"id": "A", "x": 0, "y": 0}, {"id": "B", "x": 1, "y": 0}],
            "unions": [
                {"point1": "A", "point2": "B", "distance": 9.0},
                {"point1": "B", "point2": "A", "distance": 2.0}
            ]
        }"#;
        let network = Network::from_json_str(json).unwrap();
        assert_eq!(network.unions().len(), 1);
        assert_eq!(network.unions()[0].distance(), 2.0);
    }

    #[test]
    fn union_lookup_ignores_endpoint_order() {
        let network = Network::from_json_str(SAMPLE).unwrap();
        let forward = network.union_between("A", "B").expect("union present");
        let backward = network.union_between("B", "A").expect("union present");
        assert_eq!(forward, backward);
        assert_eq!(forward.distance(), 1.41);
        assert!(network.union_between("A", "C").is_none());
    }

    #[test]
    fn many_upserts_keep_one_union_per_pair() {
        let mut network = Network::new();
        for index in 0..2_000 {
            network
                .insert_point(Point::new(format!("P{index}"), index as f64, 0.0).unwrap())
                .unwrap();
        }
        for index in 1..2_000 {
            let (previous, current) = (format!("P{}", index - 1), format!("P{index}"));
            network
                .upsert_union(&previous, &current, Some(2.0), None)
                .unwrap();
            network
                .upsert_union(&current, &previous, Some(1.0), None)
                .unwrap();
        }
        assert_eq!(network.unions().len(), 1_999);
        assert!(network.unions().iter().all(|union| union.distance() == 1.0));
        assert_eq!(
            network.union_between("P1999", "P1998").map(PointUnion::distance),
            Some(1.0)
        );
    }

    #[test]
    fn rejects_duplicate_points() {
        let json = r#"{"points": [{"id": "A", "x": 0, "y": 0}, {"id": "A", "x": 1, "y": 1}]}"#;
        let err = Network::from_json_str(json).expect_err("duplicate");
        assert!(matches!(err, Error::DuplicatePoint { .. }));
    }

    #[test]
    fn rejects_union_with_unknown_point() {
        let json = r#"{
            "points": [{"id": "A", "x": 0, "y": 0}],
            "unions": [{"point1": "A", "point2": "Z", "distance": 1.0}]
        }"#;
        let err = Network::from_json_str(json).expect_err("unknown endpoint");
        assert!(matches!(err, Error::UnknownUnionEndpoint { ref point, .. } if point == "Z"));
    }

    #[test]
    fn rejects_malformed_json() {
        let err = Network::from_json_str("{not json").expect_err("malformed");
        assert!(matches!(err, Error::Json(_)));
    }

    #[test]
    fn store_traits_expose_snapshot() {
        let network = Network::from_json_str(SAMPLE).unwrap();
        assert_eq!(network.all_points().len(), 3);
        assert!(network.find_point("C").is_some());
        assert!(network.find_point("Z").is_none());

        let union = network.all_unions().remove(0);
        assert_eq!(network.find_union(union.id()), Some(union));
    }

    #[test]
    fn fuzzy_matches_rank_and_limit() {
        let candidates = ["Harbor", "Harbour", "Market", "Station"];
        let matches = fuzzy_matches(candidates, "Harbr", 2);
        assert_eq!(matches.len(), 2);
        assert!(matches.contains(&"Harbor".to_string()));
        assert!(!matches.contains(&"Station".to_string()));
    }

    #[test]
    fn explicit_path_wins() {
        let path = resolve_network_path(Some(Path::new("/tmp/custom.json"))).unwrap();
        assert_eq!(path, PathBuf::from("/tmp/custom.json"));
    }
}
