//! Test-only utilities for `larder-route`.
//!
//! The helpers in this module are available to unit tests and behavioural
//! tests. They are gated behind the `test-support` feature (and `cfg(test)`).

use std::sync::atomic::{AtomicUsize, Ordering};

use larder_core::test_support::{point, stop};
use larder_core::{GeoDistance, Point, RouteRequest, Stop};

/// Depot at Fort, Mumbai.
#[must_use]
pub fn mumbai_depot() -> Point {
    point(18.9398, 72.8355)
}

/// Two Mumbai centres listed farthest first.
///
/// From [`mumbai_depot`] the nearest-neighbour order is `CTR-A` then
/// `CTR-B`, with legs of 20.0 km and 15.4 km.
#[must_use]
pub fn mumbai_stops() -> Vec<Stop> {
    vec![
        stop("CTR-B", 19.1860, 72.9756, 150.0),
        stop("CTR-A", 19.1197, 72.8464, 200.0),
    ]
}

/// [`mumbai_depot`] and [`mumbai_stops`] bundled as a request.
#[must_use]
pub fn mumbai_request() -> RouteRequest {
    RouteRequest {
        origin: mumbai_depot(),
        stops: mumbai_stops(),
    }
}

/// A [`GeoDistance`] wrapper that counts how often it is asked.
///
/// # Examples
/// ```rust
/// use larder_core::test_support::{DegreeDistance, point};
/// use larder_core::GeoDistance;
/// use larder_route::test_support::CountingDistance;
///
/// let metric = CountingDistance::new(DegreeDistance);
/// let _ = metric.distance_km(&point(0.0, 0.0), &point(1.0, 0.0));
/// assert_eq!(metric.calls(), 1);
/// ```
#[derive(Debug, Default)]
pub struct CountingDistance<D> {
    inner: D,
    calls: AtomicUsize,
}

impl<D> CountingDistance<D> {
    /// Wrap `inner`.
    pub const fn new(inner: D) -> Self {
        Self {
            inner,
            calls: AtomicUsize::new(0),
        }
    }

    /// Number of distance evaluations so far.
    #[must_use]
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::Relaxed)
    }
}

impl<D: GeoDistance> GeoDistance for CountingDistance<D> {
    fn distance_km(&self, a: &Point, b: &Point) -> f64 {
        self.calls.fetch_add(1, Ordering::Relaxed);
        self.inner.distance_km(a, b)
    }
}
