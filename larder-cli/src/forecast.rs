//! Forecast and trends command implementations for the Larder CLI.

use std::collections::BTreeMap;
use std::io::Write;

use camino::{Utf8Path, Utf8PathBuf};
use chrono::{Local, NaiveDate};
use clap::Parser;
use larder_core::{
    CentreDetails, CentreId, DEFAULT_WINDOW_DAYS, DemandRecord, ForecastRequest, NoDirectory,
};
use larder_forecast::DemandForecaster;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};

use crate::files::{emit_json, load_json, require_existing};
use crate::{
    ARG_AS_OF, ARG_CENTRES, ARG_HISTORY, ARG_OUTPUT, ARG_SEED, ARG_WINDOW_DAYS, CliError,
    ENV_FORECAST_HISTORY, ENV_TRENDS_HISTORY,
};

/// Centre names and cities keyed by identifier, as read from `--centres`.
pub(crate) type CentreFile = BTreeMap<CentreId, CentreDetails>;

/// CLI arguments for the `forecast` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    name = "forecast",
    long_about = "Forecast food demand from a JSON array of daily demand \
                 records. Records dated within the window ending at the \
                 reference date are averaged per centre and perturbed by \
                 bounded jitter; pass a seed for reproducible output.",
    about = "Forecast demand from history"
)]
#[ortho_config(prefix = "LARDER")]
pub(crate) struct ForecastArgs {
    /// Path to a JSON file containing demand history records.
    #[arg(value_name = "path")]
    #[serde(default)]
    pub(crate) history_path: Option<Utf8PathBuf>,
    /// Days of history before the reference date to include.
    #[arg(long = ARG_WINDOW_DAYS, value_name = "days")]
    #[serde(default)]
    pub(crate) window_days: Option<u32>,
    /// Reference date (YYYY-MM-DD); defaults to today.
    #[arg(long = ARG_AS_OF, value_name = "date")]
    #[serde(default)]
    pub(crate) as_of: Option<NaiveDate>,
    /// Seed for reproducible jitter.
    #[arg(long = ARG_SEED, value_name = "n")]
    #[serde(default)]
    pub(crate) seed: Option<u64>,
    /// JSON object mapping centre ids to their name and city.
    #[arg(long = ARG_CENTRES, value_name = "path")]
    #[serde(default)]
    pub(crate) centres: Option<Utf8PathBuf>,
    /// Write the forecast to this file instead of standard output.
    #[arg(long = ARG_OUTPUT, value_name = "path")]
    #[serde(default)]
    pub(crate) output: Option<Utf8PathBuf>,
}

impl ForecastArgs {
    pub(crate) fn into_config(self) -> Result<ForecastConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        ForecastConfig::try_from(merged)
    }
}

/// Resolved `forecast` command configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ForecastConfig {
    /// Path to the history file.
    pub(crate) history_path: Utf8PathBuf,
    /// Window and seed for the forecaster.
    pub(crate) request: ForecastRequest,
    /// Optional centre directory file.
    pub(crate) centres: Option<Utf8PathBuf>,
    /// Optional output file.
    pub(crate) output: Option<Utf8PathBuf>,
}

impl ForecastConfig {
    pub(crate) fn validate_sources(&self) -> Result<(), CliError> {
        require_existing(&self.history_path, ARG_HISTORY)?;
        if let Some(centres) = &self.centres {
            require_existing(centres, ARG_CENTRES)?;
        }
        Ok(())
    }
}

impl TryFrom<ForecastArgs> for ForecastConfig {
    type Error = CliError;

    fn try_from(args: ForecastArgs) -> Result<Self, Self::Error> {
        let history_path = args.history_path.ok_or(CliError::MissingArgument {
            field: ARG_HISTORY,
            env: ENV_FORECAST_HISTORY,
        })?;
        let mut request = window_request(args.as_of, args.window_days);
        if let Some(seed) = args.seed {
            request = request.with_seed(seed);
        }
        Ok(Self {
            history_path,
            request,
            centres: args.centres,
            output: args.output,
        })
    }
}

/// CLI arguments for the `trends` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    name = "trends",
    long_about = "Sum daily demand records per calendar day over the window \
                 ending at the reference date and print the totals in date \
                 order.",
    about = "Report daily demand totals"
)]
#[ortho_config(prefix = "LARDER")]
pub(crate) struct TrendsArgs {
    /// Path to a JSON file containing demand history records.
    #[arg(value_name = "path")]
    #[serde(default)]
    pub(crate) history_path: Option<Utf8PathBuf>,
    /// Days of history before the reference date to include.
    #[arg(long = ARG_WINDOW_DAYS, value_name = "days")]
    #[serde(default)]
    pub(crate) window_days: Option<u32>,
    /// Reference date (YYYY-MM-DD); defaults to today.
    #[arg(long = ARG_AS_OF, value_name = "date")]
    #[serde(default)]
    pub(crate) as_of: Option<NaiveDate>,
    /// Write the totals to this file instead of standard output.
    #[arg(long = ARG_OUTPUT, value_name = "path")]
    #[serde(default)]
    pub(crate) output: Option<Utf8PathBuf>,
}

impl TrendsArgs {
    pub(crate) fn into_config(self) -> Result<TrendsConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        TrendsConfig::try_from(merged)
    }
}

/// Resolved `trends` command configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct TrendsConfig {
    /// Path to the history file.
    pub(crate) history_path: Utf8PathBuf,
    /// Window to aggregate.
    pub(crate) request: ForecastRequest,
    /// Optional output file.
    pub(crate) output: Option<Utf8PathBuf>,
}

impl TryFrom<TrendsArgs> for TrendsConfig {
    type Error = CliError;

    fn try_from(args: TrendsArgs) -> Result<Self, Self::Error> {
        let history_path = args.history_path.ok_or(CliError::MissingArgument {
            field: ARG_HISTORY,
            env: ENV_TRENDS_HISTORY,
        })?;
        Ok(Self {
            history_path,
            request: window_request(args.as_of, args.window_days),
            output: args.output,
        })
    }
}

fn window_request(as_of: Option<NaiveDate>, window_days: Option<u32>) -> ForecastRequest {
    let day = as_of.unwrap_or_else(|| Local::now().date_naive());
    ForecastRequest::new(day).with_window_days(window_days.unwrap_or(DEFAULT_WINDOW_DAYS))
}

pub(super) fn run_forecast(args: ForecastArgs) -> Result<(), CliError> {
    let mut stdout = std::io::stdout().lock();
    run_forecast_with(args, &mut stdout)
}

pub(super) fn run_forecast_with(
    args: ForecastArgs,
    writer: &mut dyn Write,
) -> Result<(), CliError> {
    let config = args.into_config()?;
    config.validate_sources()?;
    let history = load_history(&config.history_path)?;
    let forecaster = DemandForecaster::default();
    let result = match &config.centres {
        Some(path) => {
            let directory = load_centres(path)?;
            forecaster.forecast(&history, &config.request, &directory)?
        }
        None => forecaster.forecast(&history, &config.request, &NoDirectory)?,
    };
    emit_json(&result, config.output.as_deref(), writer)
}

pub(super) fn run_trends(args: TrendsArgs) -> Result<(), CliError> {
    let mut stdout = std::io::stdout().lock();
    run_trends_with(args, &mut stdout)
}

pub(super) fn run_trends_with(args: TrendsArgs, writer: &mut dyn Write) -> Result<(), CliError> {
    let config = args.into_config()?;
    require_existing(&config.history_path, ARG_HISTORY)?;
    let history = load_history(&config.history_path)?;
    let trends = DemandForecaster::default().trends(
        &history,
        config.request.as_of,
        config.request.window_days,
    )?;
    emit_json(&trends, config.output.as_deref(), writer)
}

/// Loads JSON-encoded demand records from disk.
pub(super) fn load_history(path: &Utf8Path) -> Result<Vec<DemandRecord>, CliError> {
    let history: Vec<DemandRecord> = load_json(path, ARG_HISTORY)?;
    log::debug!("loaded {} demand records from {path}", history.len());
    Ok(history)
}

/// Loads the centre directory from disk.
pub(super) fn load_centres(path: &Utf8Path) -> Result<CentreFile, CliError> {
    load_json(path, ARG_CENTRES)
}

#[cfg(test)]
pub(crate) fn forecast_config_from_layers_for_test(
    layers: Vec<ortho_config::MergeLayer<'static>>,
) -> Result<ForecastConfig, CliError> {
    let merged = ForecastArgs::merge_from_layers(layers).map_err(CliError::from)?;
    ForecastConfig::try_from(merged)
}
