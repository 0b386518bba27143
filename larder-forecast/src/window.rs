//! Aggregation of history records falling inside a forecast window.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use larder_core::{CentreId, DailyDemand, DemandRecord, ForecastRequest};

/// Running sum and count of demand records.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub(crate) struct Totals {
    pub(crate) total_kg: f64,
    pub(crate) records: usize,
}

impl Totals {
    #[expect(clippy::float_arithmetic, reason = "demand totals accumulate in kg")]
    fn add(&mut self, demand_kg: f64) {
        self.total_kg += demand_kg;
        self.records += 1;
    }

    /// Mean demand per record; zero when nothing was added.
    #[expect(clippy::float_arithmetic, reason = "mean of accumulated demand")]
    #[expect(
        clippy::cast_precision_loss,
        reason = "record counts stay far below 2^52"
    )]
    pub(crate) fn mean_kg(&self) -> f64 {
        if self.records == 0 {
            0.0
        } else {
            self.total_kg / self.records as f64
        }
    }
}

/// Records inside one window, overall and per centre.
#[derive(Debug, Clone, Default)]
pub(crate) struct WindowSummary {
    pub(crate) overall: Totals,
    pub(crate) centres: BTreeMap<CentreId, Totals>,
}

impl WindowSummary {
    pub(crate) fn collect(history: &[DemandRecord], request: &ForecastRequest) -> Self {
        let mut summary = Self::default();
        for record in in_window(history, request) {
            summary.overall.add(record.demand_kg());
            summary
                .centres
                .entry(record.centre_id().clone())
                .or_default()
                .add(record.demand_kg());
        }
        summary
    }

    pub(crate) const fn is_empty(&self) -> bool {
        self.overall.records == 0
    }
}

/// Per-day totals for the window, ascending by date.
#[expect(clippy::float_arithmetic, reason = "daily totals accumulate in kg")]
pub(crate) fn daily_totals(
    history: &[DemandRecord],
    request: &ForecastRequest,
) -> Vec<DailyDemand> {
    let mut days: BTreeMap<NaiveDate, f64> = BTreeMap::new();
    for record in in_window(history, request) {
        *days.entry(record.date()).or_default() += record.demand_kg();
    }
    days.into_iter()
        .map(|(date, total_kg)| DailyDemand { date, total_kg })
        .collect()
}

fn in_window<'a>(
    history: &'a [DemandRecord],
    request: &'a ForecastRequest,
) -> impl Iterator<Item = &'a DemandRecord> {
    history
        .iter()
        .filter(move |record| request.contains(record.date()))
}
