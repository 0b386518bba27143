//! Test-only builders and deterministic collaborators used by unit,
//! behaviour and property tests across the workspace.

use std::collections::BTreeMap;

use chrono::{Days, NaiveDate};

use crate::{CentreDetails, CentreDirectory, CentreId, DemandRecord, GeoDistance, Point, Stop};

/// Build a [`Point`], panicking on non-finite input.
///
/// # Panics
/// Panics when `lat` or `lon` is not finite.
#[must_use]
pub fn point(lat: f64, lon: f64) -> Point {
    Point::new(lat, lon).unwrap_or_else(|err| panic!("test point must be valid: {err}"))
}

/// Build a [`Stop`], panicking on invalid input.
///
/// # Examples
/// ```rust
/// use larder_core::test_support::stop;
///
/// let a = stop("A", 19.1197, 72.8464, 200.0);
/// assert_eq!(a.id().as_str(), "A");
/// ```
///
/// # Panics
/// Panics when the coordinates or load are invalid.
#[must_use]
pub fn stop(id: &str, lat: f64, lon: f64, allocated_kg: f64) -> Stop {
    Stop::from_coordinates(id, lat, lon, allocated_kg)
        .unwrap_or_else(|err| panic!("test stop must be valid: {err}"))
}

/// Planar metric measuring straight-line distance in degrees.
///
/// Keeps expected values in tests easy to compute by hand.
#[derive(Debug, Default, Clone, Copy)]
pub struct DegreeDistance;

impl GeoDistance for DegreeDistance {
    fn distance_km(&self, a: &Point, b: &Point) -> f64 {
        (a.lat() - b.lat()).hypot(a.lon() - b.lon())
    }
}

/// In-memory [`CentreDirectory`].
#[derive(Debug, Default, Clone)]
pub struct MemoryDirectory {
    centres: BTreeMap<CentreId, CentreDetails>,
}

impl MemoryDirectory {
    /// Register a centre and return the directory for chaining.
    #[must_use]
    pub fn with_centre(mut self, id: &str, name: &str, city: &str) -> Self {
        self.centres.insert(
            CentreId::from(id),
            CentreDetails {
                name: name.to_owned(),
                city: city.to_owned(),
            },
        );
        self
    }
}

impl CentreDirectory for MemoryDirectory {
    fn lookup(&self, id: &CentreId) -> Option<CentreDetails> {
        self.centres.lookup(id)
    }
}

/// One record per day for `days` days ending on `last_day`.
///
/// # Panics
/// Panics when `demand_kg` is invalid or the dates underflow.
#[must_use]
pub fn daily_records(
    centre: &str,
    last_day: NaiveDate,
    days: u64,
    demand_kg: f64,
) -> Vec<DemandRecord> {
    (0..days)
        .map(|offset| {
            let date = last_day
                .checked_sub_days(Days::new(offset))
                .unwrap_or_else(|| panic!("date underflow at offset {offset}"));
            DemandRecord::new(centre, date, demand_kg)
                .unwrap_or_else(|err| panic!("test record must be valid: {err}"))
        })
        .collect()
}

/// Shorthand for a date in the test calendar.
///
/// # Panics
/// Panics for an invalid calendar date.
#[must_use]
pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day)
        .unwrap_or_else(|| panic!("invalid test date {year}-{month}-{day}"))
}
