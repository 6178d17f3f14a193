//! Common test utilities and fixture helpers.

#![allow(dead_code)]

use std::path::PathBuf;

use pointpath_lib::{Network, Point};

/// Path to the fixtures directory shared by the workspace.
pub fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../docs/fixtures")
}

/// Path to the sample network snapshot.
pub fn sample_network_path() -> PathBuf {
    fixtures_dir().join("sample_network.json")
}

/// Build a network from point and union tuples.
///
/// Points are `(id, x, y)`; unions are `(point1, point2, distance)`.
pub fn network(points: &[(&str, f64, f64)], unions: &[(&str, &str, f64)]) -> Network {
    let mut network = Network::new();
    for &(id, x, y) in points {
        network
            .insert_point(Point::new(id, x, y).expect("valid point"))
            .expect("unique point");
    }
    for &(a, b, distance) in unions {
        network
            .upsert_union(a, b, Some(distance), None)
            .expect("valid union");
    }
    network
}

/// Points laid out on a diagonal, enough for most scenarios.
pub fn diagonal(ids: &[&'static str]) -> Vec<(&'static str, f64, f64)> {
    ids.iter()
        .enumerate()
        .map(|(index, id)| (*id, index as f64, index as f64))
        .collect()
}
