//! Pointpath library entry points.
//!
//! This crate models a network of named points joined by weighted, undirected
//! unions, builds adjacency graphs from it and answers single-source,
//! single-target shortest-path queries with Dijkstra's algorithm. Higher-level
//! consumers (the CLI, request handlers) should only depend on the functions
//! exported here instead of reimplementing behavior.
//!

#![deny(warnings)]

pub mod error;
pub mod graph;
pub mod network;
pub mod output;
pub mod path;
pub mod point;
pub mod routing;
pub mod store;
pub mod union;

pub use error::{Error, Result};
pub use graph::{build_graph, build_union_graph, Connection, Graph};
pub use network::{default_network_path, load_network, resolve_network_path, Network};
pub use output::{PathRenderMode, PathStep, PathSummary};
pub use path::{find_path, PathResult};
pub use point::{euclidean_distance, round_distance, Point, PointId};
pub use routing::{plan_path, Dijkstra, PathFinder, PathFindingService, PathRequest};
pub use store::{PointStore, UnionStore};
pub use union::PointUnion;
