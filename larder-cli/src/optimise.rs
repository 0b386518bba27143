//! Optimise command implementation for the Larder CLI.

use std::io::Write;

use camino::{Utf8Path, Utf8PathBuf};
use clap::Parser;
use larder_core::{Haversine, RouteOptimiser, RouteRequest, RouteResult};
use larder_route::{NearestNeighbourConfig, NearestNeighbourOptimiser};
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};

use crate::files::{emit_json, load_json, require_existing};
use crate::{ARG_AVERAGE_SPEED, ARG_OUTPUT, ARG_REQUEST, CliError, ENV_OPTIMISE_REQUEST};

/// CLI arguments for the `optimise` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    name = "optimise",
    long_about = "Sequence the target centres of a distribution run with the \
                 nearest-neighbour heuristic. The request is a JSON document \
                 holding the depot origin and the stops to visit; the \
                 ordered route is printed as JSON.",
    about = "Order delivery stops into a route"
)]
#[ortho_config(prefix = "LARDER")]
pub(crate) struct OptimiseArgs {
    /// Path to a JSON file containing a route request.
    #[arg(value_name = "path")]
    #[serde(default)]
    pub(crate) request_path: Option<Utf8PathBuf>,
    /// Average driving speed used for duration estimates.
    #[arg(long = ARG_AVERAGE_SPEED, value_name = "kmh")]
    #[serde(default)]
    pub(crate) average_speed_kmh: Option<f64>,
    /// Write the route to this file instead of standard output.
    #[arg(long = ARG_OUTPUT, value_name = "path")]
    #[serde(default)]
    pub(crate) output: Option<Utf8PathBuf>,
}

impl OptimiseArgs {
    pub(crate) fn into_config(self) -> Result<OptimiseConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        OptimiseConfig::try_from(merged)
    }
}

/// Resolved `optimise` command configuration.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct OptimiseConfig {
    /// Path to the JSON request file.
    pub(crate) request_path: Utf8PathBuf,
    /// Speed used to turn distance into minutes.
    pub(crate) average_speed_kmh: f64,
    /// Optional output file.
    pub(crate) output: Option<Utf8PathBuf>,
}

impl OptimiseConfig {
    pub(crate) fn validate_sources(&self) -> Result<(), CliError> {
        require_existing(&self.request_path, ARG_REQUEST)
    }

    fn optimiser_config(&self) -> NearestNeighbourConfig {
        NearestNeighbourConfig {
            average_speed_kmh: self.average_speed_kmh,
        }
    }
}

impl TryFrom<OptimiseArgs> for OptimiseConfig {
    type Error = CliError;

    fn try_from(args: OptimiseArgs) -> Result<Self, Self::Error> {
        let request_path = args.request_path.ok_or(CliError::MissingArgument {
            field: ARG_REQUEST,
            env: ENV_OPTIMISE_REQUEST,
        })?;
        let average_speed_kmh = args
            .average_speed_kmh
            .unwrap_or_else(|| NearestNeighbourConfig::default().average_speed_kmh);
        let accepted = NearestNeighbourConfig { average_speed_kmh };
        if !accepted.is_valid() {
            return Err(CliError::InvalidAverageSpeed {
                value: average_speed_kmh,
            });
        }
        Ok(Self {
            request_path,
            average_speed_kmh,
            output: args.output,
        })
    }
}

/// Builds an optimiser for the current invocation.
pub(super) trait OptimiserBuilder {
    fn build(&self, config: &OptimiseConfig) -> Box<dyn RouteOptimiser>;
}

pub(super) struct DefaultOptimiserBuilder;

impl OptimiserBuilder for DefaultOptimiserBuilder {
    fn build(&self, config: &OptimiseConfig) -> Box<dyn RouteOptimiser> {
        Box::new(NearestNeighbourOptimiser::with_config(
            Haversine::default(),
            config.optimiser_config(),
        ))
    }
}

pub(super) fn run_optimise(args: OptimiseArgs) -> Result<(), CliError> {
    let mut stdout = std::io::stdout().lock();
    run_optimise_with(args, &DefaultOptimiserBuilder, &mut stdout)
}

pub(super) fn run_optimise_with(
    args: OptimiseArgs,
    builder: &dyn OptimiserBuilder,
    writer: &mut dyn Write,
) -> Result<(), CliError> {
    let config = args.into_config()?;
    config.validate_sources()?;
    let route = execute_optimise(&config, builder)?;
    emit_json(&route, config.output.as_deref(), writer)
}

fn execute_optimise(
    config: &OptimiseConfig,
    builder: &dyn OptimiserBuilder,
) -> Result<RouteResult, CliError> {
    let request = load_route_request(&config.request_path)?;
    request
        .validate()
        .map_err(|source| CliError::InvalidRouteRequest {
            path: config.request_path.clone(),
            source,
        })?;
    log::debug!(
        "optimising {} stops from {}",
        request.stops.len(),
        config.request_path
    );
    builder
        .build(config)
        .optimise_request(&request)
        .map_err(CliError::Optimise)
}

/// Loads a JSON-encoded [`RouteRequest`] from disk.
pub(super) fn load_route_request(path: &Utf8Path) -> Result<RouteRequest, CliError> {
    load_json(path, ARG_REQUEST)
}

#[cfg(test)]
pub(crate) fn config_from_layers_for_test(
    layers: Vec<ortho_config::MergeLayer<'static>>,
) -> Result<OptimiseConfig, CliError> {
    let merged = OptimiseArgs::merge_from_layers(layers).map_err(CliError::from)?;
    OptimiseConfig::try_from(merged)
}
