//! Core domain types for the Larder distribution engine.
//!
//! The crate defines the values exchanged between the logistics application
//! and its computational core: geographic [`Point`]s, delivery [`Stop`]s,
//! computed [`RouteResult`]s and demand history records. It also defines the
//! seams the algorithm crates plug into: [`GeoDistance`] for the distance
//! model, [`RouteOptimiser`] for route sequencing and [`CentreDirectory`] for
//! resolving centre display names.
//!
//! Constructors validate their input and return `Result` so that invalid
//! coordinates or quantities never reach a computation.

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod demand;
pub mod distance;
mod optimiser;
mod point;
mod route;
mod stop;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

pub use demand::{
    CentreDetails, CentreDirectory, CentreForecast, DEFAULT_WINDOW_DAYS, DailyDemand,
    DemandRecord, DemandRecordError, ForecastRequest, ForecastResult, NoDirectory,
};
pub use distance::{EARTH_RADIUS_KM, GeoDistance, Haversine};
pub use optimiser::{OptimiseError, RouteOptimiser, RouteRequest, validate_stops};
pub use point::{Axis, InvalidCoordinate, Point};
pub use route::{RouteLeg, RouteResult, round_to_tenth};
pub use stop::{CentreId, Stop, StopError};
