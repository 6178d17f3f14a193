// Module exports for CLI subcommands.
//
// Each module handles a specific CLI subcommand. main.rs dispatches to these
// handlers, keeping the entry point focused on parsing and coordination.

pub mod distance;
pub mod points;
pub mod route;

use std::path::Path;

use anyhow::{Context, Result};
use tracing::debug;

use pointpath_lib::{load_network, resolve_network_path, Network};

/// Resolve and load the network snapshot used by every subcommand.
pub fn load_snapshot(override_path: Option<&Path>) -> Result<Network> {
    let path = resolve_network_path(override_path)
        .context("failed to resolve the network snapshot location")?;
    debug!(path = %path.display(), "loading network snapshot");
    load_network(&path)
        .with_context(|| format!("failed to load network snapshot from {}", path.display()))
}
