//! Facade crate for the Larder distribution engine.
//!
//! This crate re-exports the core domain types and exposes the route
//! optimiser and demand forecaster behind feature flags.

#![forbid(unsafe_code)]

pub use larder_core::{
    CentreDetails, CentreDirectory, CentreForecast, CentreId, DailyDemand, DemandRecord,
    ForecastRequest, ForecastResult, GeoDistance, Haversine, NoDirectory, OptimiseError, Point,
    RouteLeg, RouteOptimiser, RouteRequest, RouteResult, Stop,
};

#[cfg(feature = "route")]
pub use larder_route::{NearestNeighbourConfig, NearestNeighbourOptimiser};

#[cfg(feature = "forecast")]
pub use larder_forecast::{DemandForecaster, ForecastConfig, ForecastError};
