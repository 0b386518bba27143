//! Shared test harness modules for the Larder CLI.
#![expect(
    clippy::panic,
    reason = "Tests assert panic branches to surface unexpected CLI outcomes"
)]

use super::*;

mod forecast_steps;
mod helpers;
