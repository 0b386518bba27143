//! Behaviour-driven step definitions for the forecast and trends commands.

use super::helpers::{WEEK_OF_HISTORY, Workspace};
use super::*;
use crate::forecast::{run_forecast_with, run_trends_with};
use camino::Utf8PathBuf;
use larder_core::{DailyDemand, ForecastResult};
use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};
use std::cell::RefCell;

struct ForecastWorld {
    workspace: Workspace,
    history_path: RefCell<Option<Utf8PathBuf>>,
    as_of: RefCell<String>,
    stdout: RefCell<Vec<u8>>,
    result: RefCell<Option<Result<(), CliError>>>,
}

impl ForecastWorld {
    fn new() -> Self {
        Self {
            workspace: Workspace::new(),
            history_path: RefCell::new(None),
            as_of: RefCell::new("2024-03-08".to_owned()),
            stdout: RefCell::new(Vec::new()),
            result: RefCell::new(None),
        }
    }

    fn command_line(&self, command: &str) -> Vec<String> {
        let mut argv = vec!["larder".to_owned(), command.to_owned()];
        if let Some(path) = self.history_path.borrow().as_ref() {
            argv.push(path.as_str().to_owned());
        }
        argv.push(format!("--{ARG_AS_OF}"));
        argv.push(self.as_of.borrow().clone());
        argv
    }

    fn record(&self, outcome: Result<(), CliError>) {
        self.result.replace(Some(outcome));
    }

    fn assert_succeeded(&self) {
        let borrowed = self.result.borrow();
        let result = borrowed.as_ref().expect("result recorded");
        if let Err(err) = result {
            panic!("expected success, found {err}");
        }
    }
}

#[fixture]
fn world() -> ForecastWorld {
    ForecastWorld::new()
}

#[given("a week of demand history exists on disk")]
fn week_of_history_exists(#[from(world)] world: &ForecastWorld) {
    let path = world.workspace.write("history.json", WEEK_OF_HISTORY);
    world.history_path.replace(Some(path));
}

#[given("the reference date is a year later")]
fn reference_date_is_a_year_later(#[from(world)] world: &ForecastWorld) {
    world.as_of.replace("2025-03-08".to_owned());
}

#[when("I run the forecast command with seed {seed}")]
fn run_forecast_command(#[from(world)] world: &ForecastWorld, seed: u64) {
    let mut argv = world.command_line("forecast");
    argv.push(format!("--{ARG_SEED}"));
    argv.push(seed.to_string());
    let outcome = Cli::try_parse_from(argv)
        .map_err(CliError::from)
        .and_then(|cli| match cli.command {
            Command::Forecast(args) => {
                let mut buffer = world.stdout.borrow_mut();
                run_forecast_with(args, &mut *buffer)
            }
            other => panic!("expected forecast command, found {other:?}"),
        });
    world.record(outcome);
}

#[when("I run the trends command")]
fn run_trends_command(#[from(world)] world: &ForecastWorld) {
    let outcome = Cli::try_parse_from(world.command_line("trends"))
        .map_err(CliError::from)
        .and_then(|cli| match cli.command {
            Command::Trends(args) => {
                let mut buffer = world.stdout.borrow_mut();
                run_trends_with(args, &mut *buffer)
            }
            other => panic!("expected trends command, found {other:?}"),
        });
    world.record(outcome);
}

#[then("the command succeeds with a historical average of {kg} kg")]
fn command_reports_average(#[from(world)] world: &ForecastWorld, kg: u64) {
    world.assert_succeeded();
    let forecast: ForecastResult =
        serde_json::from_slice(&world.stdout.borrow()).expect("output should be a forecast");
    assert_eq!(forecast.historical_avg_kg, kg);
    assert!((78..=88).contains(&forecast.confidence));
    assert_eq!(forecast.centres.len(), 1);
}

#[then("the command succeeds with an all-zero forecast")]
fn command_reports_zero_forecast(#[from(world)] world: &ForecastWorld) {
    world.assert_succeeded();
    let forecast: ForecastResult =
        serde_json::from_slice(&world.stdout.borrow()).expect("output should be a forecast");
    assert_eq!(forecast.overall_forecast_kg, 0);
    assert_eq!(forecast.confidence, 0);
    assert!(forecast.centres.is_empty());
}

#[then("the command prints {count} daily totals")]
fn command_prints_daily_totals(#[from(world)] world: &ForecastWorld, count: usize) {
    world.assert_succeeded();
    let trends: Vec<DailyDemand> =
        serde_json::from_slice(&world.stdout.borrow()).expect("output should be daily totals");
    assert_eq!(trends.len(), count);
    assert!(trends.iter().all(|day| day.total_kg == 175.0));
}

macro_rules! register_forecast_scenario {
    ($fn_name:ident, $scenario_title:literal) => {
        #[scenario(path = "tests/features/forecast_command.feature", name = $scenario_title)]
        fn $fn_name(#[from(world)] world: ForecastWorld) {
            let _ = world;
        }
    };
}

register_forecast_scenario!(forecast_steady_week, "forecasting a steady week");
register_forecast_scenario!(
    forecast_empty_window,
    "forecasting with no history in the window"
);
register_forecast_scenario!(trends_daily_totals, "reporting trends");
