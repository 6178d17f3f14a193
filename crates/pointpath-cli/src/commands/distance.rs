//! Euclidean distance between two stored points.

use std::io::{self, Write};
use std::path::Path;

use anyhow::Result;

use pointpath_lib::{euclidean_distance, Error as LibError};

use crate::commands::load_snapshot;
use crate::output::OutputFormat;

/// Handle the distance subcommand.
pub fn handle_distance_command(
    network_path: Option<&Path>,
    format: OutputFormat,
    from: &str,
    to: &str,
) -> Result<()> {
    let network = load_snapshot(network_path)?;

    let missing: Vec<String> = [from, to]
        .into_iter()
        .filter(|id| !network.contains_point(id))
        .map(str::to_string)
        .collect();
    let (Some(from_point), Some(to_point)) = (network.point(from), network.point(to)) else {
        let suggestions = missing
            .iter()
            .flat_map(|id| network.fuzzy_point_matches(id, 3))
            .collect();
        return Err(LibError::PointsNotFound {
            missing,
            suggestions,
        }
        .into());
    };

    let distance = euclidean_distance(from_point, to_point);
    let mut stdout = io::stdout().lock();
    format.write_distance(&mut stdout, from_point, to_point, distance)?;
    stdout.flush()?;
    Ok(())
}
