//! Demand history and forecast values.
//!
//! The surrounding application logs how many kilograms each centre needed
//! per day. A forecaster reads a window of those [`DemandRecord`]s and
//! returns an advisory [`ForecastResult`]; results are recomputed on every
//! request and never stored as authoritative state.

use std::collections::{BTreeMap, HashMap};
use std::hash::BuildHasher;

use chrono::{Days, NaiveDate};
use thiserror::Error;

use crate::CentreId;

/// Length of the history window used when a request does not set one.
pub const DEFAULT_WINDOW_DAYS: u32 = 7;

/// Errors returned by [`DemandRecord::new`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DemandRecordError {
    /// Demand was negative or not finite.
    #[error("demand of {demand_kg} kg for centre {centre_id} on {date} is invalid")]
    InvalidDemand {
        /// Centre the record belongs to.
        centre_id: CentreId,
        /// Day of the record.
        date: NaiveDate,
        /// The rejected quantity.
        demand_kg: f64,
    },
}

/// Kilograms of food a centre needed on one day.
///
/// # Examples
/// ```
/// use chrono::NaiveDate;
/// use larder_core::DemandRecord;
///
/// let date = NaiveDate::from_ymd_opt(2024, 3, 1).expect("valid date");
/// let record = DemandRecord::new("CTR-A", date, 175.0)?;
/// assert_eq!(record.demand_kg(), 175.0);
/// assert!(DemandRecord::new("CTR-A", date, -1.0).is_err());
/// # Ok::<(), larder_core::DemandRecordError>(())
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "RawDemandRecord", into = "RawDemandRecord")
)]
pub struct DemandRecord {
    centre_id: CentreId,
    date: NaiveDate,
    demand_kg: f64,
}

impl DemandRecord {
    /// Validate and construct a record.
    ///
    /// # Errors
    /// Returns [`DemandRecordError::InvalidDemand`] for negative or
    /// non-finite quantities.
    pub fn new(
        centre_id: impl Into<CentreId>,
        date: NaiveDate,
        demand_kg: f64,
    ) -> Result<Self, DemandRecordError> {
        let centre_id = centre_id.into();
        if !demand_kg.is_finite() || demand_kg < 0.0 {
            return Err(DemandRecordError::InvalidDemand {
                centre_id,
                date,
                demand_kg,
            });
        }
        Ok(Self {
            centre_id,
            date,
            demand_kg,
        })
    }

    /// Centre that logged the demand.
    #[must_use]
    pub const fn centre_id(&self) -> &CentreId {
        &self.centre_id
    }

    /// Day the demand was logged for.
    #[must_use]
    pub const fn date(&self) -> NaiveDate {
        self.date
    }

    /// Demand in kilograms.
    #[must_use]
    pub const fn demand_kg(&self) -> f64 {
        self.demand_kg
    }
}

#[cfg(feature = "serde")]
#[derive(Clone, serde::Serialize, serde::Deserialize)]
struct RawDemandRecord {
    centre_id: CentreId,
    date: NaiveDate,
    demand_kg: f64,
}

#[cfg(feature = "serde")]
impl TryFrom<RawDemandRecord> for DemandRecord {
    type Error = DemandRecordError;

    fn try_from(raw: RawDemandRecord) -> Result<Self, Self::Error> {
        Self::new(raw.centre_id, raw.date, raw.demand_kg)
    }
}

#[cfg(feature = "serde")]
impl From<DemandRecord> for RawDemandRecord {
    fn from(record: DemandRecord) -> Self {
        Self {
            centre_id: record.centre_id,
            date: record.date,
            demand_kg: record.demand_kg,
        }
    }
}

/// Display details for a centre, resolved by the surrounding application.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CentreDetails {
    /// Human-readable centre name.
    pub name: String,
    /// City the centre is in.
    pub city: String,
}

impl CentreDetails {
    /// Placeholder used when a centre cannot be resolved.
    #[must_use]
    pub fn unknown() -> Self {
        Self {
            name: "Unknown".to_owned(),
            city: "Unknown".to_owned(),
        }
    }
}

/// Look up display details for centres.
///
/// # Examples
/// ```
/// use std::collections::HashMap;
/// use larder_core::{CentreDetails, CentreDirectory, CentreId, NoDirectory};
///
/// let mut centres = HashMap::new();
/// centres.insert(
///     CentreId::from("CTR-A"),
///     CentreDetails { name: "Andheri Pantry".into(), city: "Mumbai".into() },
/// );
/// assert_eq!(centres.resolve(&CentreId::from("CTR-A")).city, "Mumbai");
/// assert_eq!(NoDirectory.resolve(&CentreId::from("CTR-A")), CentreDetails::unknown());
/// ```
pub trait CentreDirectory {
    /// Return details for `id`, if the centre is known.
    fn lookup(&self, id: &CentreId) -> Option<CentreDetails>;

    /// Return details for `id`, falling back to [`CentreDetails::unknown`].
    fn resolve(&self, id: &CentreId) -> CentreDetails {
        self.lookup(id).unwrap_or_else(CentreDetails::unknown)
    }
}

/// Directory that knows no centres.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoDirectory;

impl CentreDirectory for NoDirectory {
    fn lookup(&self, _id: &CentreId) -> Option<CentreDetails> {
        None
    }
}

impl<S: BuildHasher> CentreDirectory for HashMap<CentreId, CentreDetails, S> {
    fn lookup(&self, id: &CentreId) -> Option<CentreDetails> {
        self.get(id).cloned()
    }
}

impl CentreDirectory for BTreeMap<CentreId, CentreDetails> {
    fn lookup(&self, id: &CentreId) -> Option<CentreDetails> {
        self.get(id).cloned()
    }
}

/// Parameters for a forecast or trend query.
///
/// The window covers the `window_days` calendar days ending at `as_of`:
/// dates after `as_of - window_days`, up to and including `as_of`.
/// `seed` pins the jitter draws for reproducible output; when absent the
/// forecaster seeds a fresh generator from OS entropy.
///
/// # Examples
/// ```
/// use chrono::NaiveDate;
/// use larder_core::ForecastRequest;
///
/// let as_of = NaiveDate::from_ymd_opt(2024, 3, 8).expect("valid date");
/// let request = ForecastRequest::new(as_of).with_window_days(7).with_seed(42);
/// assert_eq!(request.window_start(), NaiveDate::from_ymd_opt(2024, 3, 2).expect("valid date"));
/// assert!(request.contains(as_of));
/// assert!(!request.contains(NaiveDate::from_ymd_opt(2024, 3, 1).expect("valid date")));
/// assert!(!request.contains(as_of.succ_opt().expect("valid date")));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ForecastRequest {
    /// Reference day; the forecast is issued for this date.
    pub as_of: NaiveDate,
    /// Number of days of history before `as_of` to include.
    pub window_days: u32,
    /// Optional seed for the jitter generator.
    pub seed: Option<u64>,
}

impl ForecastRequest {
    /// Request a forecast for `as_of` over the default window.
    #[must_use]
    pub const fn new(as_of: NaiveDate) -> Self {
        Self {
            as_of,
            window_days: DEFAULT_WINDOW_DAYS,
            seed: None,
        }
    }

    /// Override the window length.
    #[must_use]
    pub const fn with_window_days(mut self, window_days: u32) -> Self {
        self.window_days = window_days;
        self
    }

    /// Pin the jitter draws to `seed`.
    #[must_use]
    pub const fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// First day included in the window.
    ///
    /// A zero-day window degenerates to `as_of` alone.
    #[must_use]
    pub fn window_start(&self) -> NaiveDate {
        let earlier_days = self.window_days.saturating_sub(1);
        self.as_of
            .checked_sub_days(Days::new(u64::from(earlier_days)))
            .unwrap_or(NaiveDate::MIN)
    }

    /// Whether `date` falls inside the window.
    #[must_use]
    pub fn contains(&self, date: NaiveDate) -> bool {
        (self.window_start()..=self.as_of).contains(&date)
    }
}

/// Forecast line for a single centre.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CentreForecast {
    /// Centre the line refers to.
    pub centre_id: CentreId,
    /// Display name from the [`CentreDirectory`].
    pub name: String,
    /// City from the [`CentreDirectory`].
    pub city: String,
    /// Mean demand per record over the window, rounded to whole kg.
    pub historical_avg_kg: u64,
    /// Jittered forecast, rounded to whole kg.
    pub forecast_kg: u64,
}

/// Advisory demand forecast over a history window.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ForecastResult {
    /// Day the forecast is issued for.
    pub forecast_date: NaiveDate,
    /// Jittered aggregate forecast in kg.
    pub overall_forecast_kg: u64,
    /// Advisory confidence score; zero when the window holds no history.
    pub confidence: u8,
    /// Per-centre breakdown ordered by centre identifier.
    pub centres: Vec<CentreForecast>,
    /// Mean demand per record across the window, rounded to whole kg.
    pub historical_avg_kg: u64,
    /// Total demand across the window, rounded to whole kg.
    pub total_kg: u64,
}

impl ForecastResult {
    /// A forecast for a window with no history.
    ///
    /// # Examples
    /// ```
    /// use chrono::NaiveDate;
    /// use larder_core::ForecastResult;
    ///
    /// let day = NaiveDate::from_ymd_opt(2024, 3, 8).expect("valid date");
    /// let empty = ForecastResult::empty(day);
    /// assert_eq!(empty.overall_forecast_kg, 0);
    /// assert!(empty.centres.is_empty());
    /// ```
    #[must_use]
    pub const fn empty(forecast_date: NaiveDate) -> Self {
        Self {
            forecast_date,
            overall_forecast_kg: 0,
            confidence: 0,
            centres: Vec::new(),
            historical_avg_kg: 0,
            total_kg: 0,
        }
    }
}

/// Total demand logged on one day.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DailyDemand {
    /// Calendar day.
    pub date: NaiveDate,
    /// Sum of all records for the day, in kg.
    pub total_kg: f64,
}
