use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use pointpath_cli::commands::distance::handle_distance_command;
use pointpath_cli::commands::points::{handle_points_command, handle_unions_command};
use pointpath_cli::commands::route::{handle_route_command, RouteCommandArgs};
use pointpath_cli::logging::{init_tracing, LogFormat};
use pointpath_cli::output::OutputFormat;

#[derive(Parser, Debug)]
#[command(author, version, about = "Shortest paths over a network of points")]
struct Cli {
    /// Network snapshot file (defaults to $POINTPATH_NETWORK, then the platform data directory).
    #[arg(long, global = true)]
    network: Option<PathBuf>,

    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text, global = true)]
    format: OutputFormat,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Compute the shortest path between two points.
    Route {
        /// Starting point identifier.
        #[arg(long = "from")]
        from: String,
        /// Destination point identifier.
        #[arg(long = "to")]
        to: String,
    },
    /// List the points of the network.
    Points,
    /// List the unions of the network.
    Unions,
    /// Euclidean distance between two points, rounded to two decimals.
    Distance {
        #[arg(long = "from")]
        from: String,
        #[arg(long = "to")]
        to: String,
    },
}

fn main() -> Result<()> {
    init_tracing(LogFormat::from_env());
    let cli = Cli::parse();
    let network = cli.network.as_deref();

    match cli.command {
        Command::Route { from, to } => {
            handle_route_command(network, cli.format, &RouteCommandArgs { from, to })
        }
        Command::Points => handle_points_command(network, cli.format),
        Command::Unions => handle_unions_command(network, cli.format),
        Command::Distance { from, to } => handle_distance_command(network, cli.format, &from, &to),
    }
}
