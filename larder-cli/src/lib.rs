//! Command-line interface for Larder's routing and forecasting engines.
//!
//! Each subcommand reads JSON from disk, runs one engine operation and
//! prints the result as JSON. Arguments are layered through `ortho_config`,
//! so every flag can also come from a configuration file or a
//! `LARDER_CMDS_<COMMAND>_<FIELD>` environment variable.
#![forbid(unsafe_code)]

use clap::{Parser, Subcommand};

mod error;
mod files;
mod forecast;
mod optimise;

pub use error::CliError;

use forecast::{ForecastArgs, TrendsArgs, run_forecast, run_trends};
use optimise::{OptimiseArgs, run_optimise};

const ARG_REQUEST: &str = "request";
const ARG_HISTORY: &str = "history";
const ARG_AVERAGE_SPEED: &str = "average-speed-kmh";
const ARG_WINDOW_DAYS: &str = "window-days";
const ARG_AS_OF: &str = "as-of";
const ARG_SEED: &str = "seed";
const ARG_CENTRES: &str = "centres";
const ARG_OUTPUT: &str = "output";
const ENV_OPTIMISE_REQUEST: &str = "LARDER_CMDS_OPTIMISE_REQUEST_PATH";
const ENV_FORECAST_HISTORY: &str = "LARDER_CMDS_FORECAST_HISTORY_PATH";
const ENV_TRENDS_HISTORY: &str = "LARDER_CMDS_TRENDS_HISTORY_PATH";

/// Run the Larder CLI with the current process arguments and environment.
///
/// # Errors
/// Returns [`CliError`] when arguments are invalid, inputs cannot be read or
/// decoded, or the engine rejects the request.
pub fn run() -> Result<(), CliError> {
    let cli = Cli::try_parse().map_err(CliError::ArgumentParsing)?;
    match cli.command {
        Command::Optimise(args) => run_optimise(args),
        Command::Forecast(args) => run_forecast(args),
        Command::Trends(args) => run_trends(args),
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "larder",
    about = "Delivery routing and demand forecasting for food-bank distribution",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Order a run's target centres into a delivery route.
    Optimise(OptimiseArgs),
    /// Forecast demand from a window of history.
    Forecast(ForecastArgs),
    /// Report daily demand totals over a window.
    Trends(TrendsArgs),
}

#[cfg(test)]
mod tests;
