//! Public configuration for demand forecasting.

/// Jitter and confidence parameters for
/// [`DemandForecaster`](crate::DemandForecaster).
///
/// Jitter values are the full width of the perturbation band as a fraction
/// of the baseline: `0.2` moves a forecast anywhere within ±10%.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ForecastConfig {
    /// Band width applied to the aggregate forecast.
    pub overall_jitter: f64,
    /// Band width applied to each centre's forecast.
    pub centre_jitter: f64,
    /// Lowest confidence reported for a non-empty window.
    pub confidence_base: u8,
    /// Spread added on top of `confidence_base`.
    pub confidence_span: u8,
}

impl Default for ForecastConfig {
    fn default() -> Self {
        Self {
            overall_jitter: 0.1,
            centre_jitter: 0.2,
            confidence_base: 78,
            confidence_span: 10,
        }
    }
}
