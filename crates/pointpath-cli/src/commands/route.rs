//! Route command handler for computing shortest paths between points.

use std::io::{self, Write};
use std::path::Path;

use anyhow::{Context, Result};

use pointpath_lib::{Dijkstra, PathFinder, PathFindingService, PathRequest, PathSummary};

use crate::commands::load_snapshot;
use crate::output::OutputFormat;

/// Arguments for the route command.
#[derive(Debug, Clone)]
pub struct RouteCommandArgs {
    /// Starting point identifier.
    pub from: String,
    /// Destination point identifier.
    pub to: String,
}

impl RouteCommandArgs {
    /// Convert CLI args to a library request.
    pub fn to_request(&self) -> PathRequest {
        PathRequest::new(self.from.clone(), self.to.clone())
    }
}

/// Handle the route subcommand.
pub fn handle_route_command(
    network_path: Option<&Path>,
    format: OutputFormat,
    args: &RouteCommandArgs,
) -> Result<()> {
    let network = load_snapshot(network_path)?;
    let finder = Dijkstra;
    let service = PathFindingService::with_finder(&network, &network, finder);

    let result = service
        .shortest_path(&args.to_request())
        .with_context(|| format!("failed to compute a path from {} to {}", args.from, args.to))?;
    let summary = PathSummary::from_result(&network, &result, finder.name());

    let mut stdout = io::stdout().lock();
    format.write_path(&mut stdout, &summary)?;
    stdout.flush()?;
    Ok(())
}
