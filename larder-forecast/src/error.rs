//! Error types raised while forecasting demand.

use thiserror::Error;

/// Errors raised by [`DemandForecaster`](crate::DemandForecaster).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ForecastError {
    /// The requested window covers no days before the reference date.
    #[error("forecast window must cover at least one day, got {window_days}")]
    InvalidWindow {
        /// Rejected window length.
        window_days: u32,
    },
}
