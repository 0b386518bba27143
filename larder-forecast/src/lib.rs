//! Demand forecasting for Larder food-bank centres.
//!
//! [`DemandForecaster`] turns a window of daily demand records into an
//! advisory [`ForecastResult`]: a per-record historical average, an
//! aggregate forecast and a per-centre breakdown, each perturbed by bounded
//! uniform jitter, plus a confidence score. The jitter is the accepted
//! forecasting policy; no model is fitted.
//!
//! Every call draws from its own `ChaCha8Rng`. Supplying
//! [`ForecastRequest::seed`] makes the output reproducible; otherwise the
//! generator is seeded from OS entropy. Callers needing a different source
//! pass their own generator to [`DemandForecaster::forecast_with_rng`].
//!
//! [`DemandForecaster::trends`] reports the same window as daily totals.
//!
//! # Examples
//!
//! ```
//! use chrono::NaiveDate;
//! use larder_core::{DemandRecord, ForecastRequest, NoDirectory};
//! use larder_forecast::DemandForecaster;
//!
//! let as_of = NaiveDate::from_ymd_opt(2024, 3, 8).expect("valid date");
//! let history = vec![DemandRecord::new("CTR-A", as_of, 175.0)?];
//! let request = ForecastRequest::new(as_of).with_seed(7);
//! let result = DemandForecaster::default().forecast(&history, &request, &NoDirectory)?;
//! assert_eq!(result.historical_avg_kg, 175);
//! assert_eq!(result.centres.len(), 1);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

use chrono::NaiveDate;
use larder_core::{
    CentreDirectory, CentreForecast, DailyDemand, DemandRecord, ForecastRequest, ForecastResult,
};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

mod error;
mod types;
mod window;

pub use error::ForecastError;
pub use types::ForecastConfig;

use window::{WindowSummary, daily_totals};

/// Jittered demand forecaster.
///
/// Draw order is fixed so seeded runs are reproducible: the aggregate
/// jitter first, then one draw per centre in identifier order, then the
/// confidence draw.
#[derive(Debug, Clone, Default)]
pub struct DemandForecaster {
    config: ForecastConfig,
}

impl DemandForecaster {
    /// Construct a forecaster with explicit configuration.
    #[must_use]
    pub const fn with_config(config: ForecastConfig) -> Self {
        Self { config }
    }

    /// The active configuration.
    #[must_use]
    pub const fn config(&self) -> &ForecastConfig {
        &self.config
    }

    /// Forecast demand for `request.as_of` from the records in its window.
    ///
    /// Centre names and cities come from `directory`; unknown centres are
    /// reported as `"Unknown"`. A window holding no records yields an
    /// all-zero result with an empty breakdown.
    ///
    /// # Errors
    /// Returns [`ForecastError::InvalidWindow`] when `request.window_days`
    /// is zero.
    pub fn forecast<C>(
        &self,
        history: &[DemandRecord],
        request: &ForecastRequest,
        directory: &C,
    ) -> Result<ForecastResult, ForecastError>
    where
        C: CentreDirectory + ?Sized,
    {
        let mut rng = request
            .seed
            .map_or_else(ChaCha8Rng::from_entropy, ChaCha8Rng::seed_from_u64);
        self.forecast_with_rng(history, request, directory, &mut rng)
    }

    /// Forecast using a caller-supplied random source.
    ///
    /// `request.seed` is ignored.
    ///
    /// # Errors
    /// Returns [`ForecastError::InvalidWindow`] when `request.window_days`
    /// is zero.
    pub fn forecast_with_rng<C, R>(
        &self,
        history: &[DemandRecord],
        request: &ForecastRequest,
        directory: &C,
        rng: &mut R,
    ) -> Result<ForecastResult, ForecastError>
    where
        C: CentreDirectory + ?Sized,
        R: Rng,
    {
        check_window(request.window_days)?;
        let summary = WindowSummary::collect(history, request);
        log::debug!(
            "forecast window {}..={}: {} records across {} centres",
            request.window_start(),
            request.as_of,
            summary.overall.records,
            summary.centres.len()
        );
        if summary.is_empty() {
            return Ok(ForecastResult::empty(request.as_of));
        }

        let base_avg = summary.overall.mean_kg();
        let overall_forecast_kg = jitter(base_avg, self.config.overall_jitter, rng);
        let centres = summary
            .centres
            .iter()
            .map(|(centre_id, totals)| {
                let details = directory.resolve(centre_id);
                let avg = totals.mean_kg();
                CentreForecast {
                    centre_id: centre_id.clone(),
                    name: details.name,
                    city: details.city,
                    historical_avg_kg: round_kg(avg),
                    forecast_kg: jitter(avg, self.config.centre_jitter, rng),
                }
            })
            .collect();
        let confidence = self.confidence(rng);

        Ok(ForecastResult {
            forecast_date: request.as_of,
            overall_forecast_kg,
            confidence,
            centres,
            historical_avg_kg: round_kg(base_avg),
            total_kg: round_kg(summary.overall.total_kg),
        })
    }

    /// Daily demand totals over the window ending at `as_of`.
    ///
    /// Days without records are omitted; the rest are ascending by date.
    ///
    /// # Errors
    /// Returns [`ForecastError::InvalidWindow`] when `window_days` is zero.
    pub fn trends(
        &self,
        history: &[DemandRecord],
        as_of: NaiveDate,
        window_days: u32,
    ) -> Result<Vec<DailyDemand>, ForecastError> {
        check_window(window_days)?;
        let request = ForecastRequest::new(as_of).with_window_days(window_days);
        Ok(daily_totals(history, &request))
    }

    #[expect(clippy::float_arithmetic, reason = "confidence scales a uniform draw")]
    #[expect(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        reason = "the draw is in 0..=1 so the product fits in u8"
    )]
    fn confidence<R: Rng>(&self, rng: &mut R) -> u8 {
        let draw: f64 = rng.gen_range(0.0..=1.0);
        let spread = (f64::from(self.config.confidence_span) * draw).round() as u8;
        self.config.confidence_base.saturating_add(spread)
    }
}

const fn check_window(window_days: u32) -> Result<(), ForecastError> {
    if window_days == 0 {
        Err(ForecastError::InvalidWindow { window_days })
    } else {
        Ok(())
    }
}

/// Perturb `baseline` by a uniform fraction of `width` and round.
#[expect(clippy::float_arithmetic, reason = "jitter scales the baseline")]
fn jitter<R: Rng>(baseline: f64, width: f64, rng: &mut R) -> u64 {
    let draw: f64 = rng.gen_range(-0.5..=0.5);
    round_kg(baseline * (1.0 + width * draw))
}

#[expect(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    reason = "demand is validated non-negative and finite"
)]
fn round_kg(kg: f64) -> u64 {
    kg.round() as u64
}
