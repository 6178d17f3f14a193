//! Listing commands for the points and unions of a snapshot.

use std::io::{self, Write};
use std::path::Path;

use anyhow::Result;

use crate::commands::load_snapshot;
use crate::output::OutputFormat;

/// Handle the points subcommand.
pub fn handle_points_command(network_path: Option<&Path>, format: OutputFormat) -> Result<()> {
    let network = load_snapshot(network_path)?;
    let mut stdout = io::stdout().lock();
    format.write_points(&mut stdout, network.points())?;
    stdout.flush()?;
    Ok(())
}

/// Handle the unions subcommand.
pub fn handle_unions_command(network_path: Option<&Path>, format: OutputFormat) -> Result<()> {
    let network = load_snapshot(network_path)?;
    let mut stdout = io::stdout().lock();
    format.write_unions(&mut stdout, network.unions())?;
    stdout.flush()?;
    Ok(())
}
