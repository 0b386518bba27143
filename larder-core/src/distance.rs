//! Great-circle distance between geographic points.
//!
//! The [`GeoDistance`] trait abstracts the distance model so route
//! optimisers can be exercised with simpler metrics in tests. [`Haversine`]
//! is the production implementation and treats the Earth as a sphere.

use crate::Point;

/// Mean Earth radius used by [`Haversine::default`], in kilometres.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Distance between two points in kilometres.
///
/// Implementations must be symmetric, return `0.0` for identical points and
/// never return a negative or non-finite value for valid [`Point`]s.
///
/// # Examples
///
/// ```rust
/// use larder_core::{GeoDistance, Point};
///
/// struct Flat;
///
/// impl GeoDistance for Flat {
///     fn distance_km(&self, a: &Point, b: &Point) -> f64 {
///         (a.lat() - b.lat()).hypot(a.lon() - b.lon())
///     }
/// }
///
/// let a = Point::new(0.0, 0.0)?;
/// let b = Point::new(3.0, 4.0)?;
/// assert_eq!(Flat.distance_km(&a, &b), 5.0);
/// # Ok::<(), larder_core::InvalidCoordinate>(())
/// ```
pub trait GeoDistance {
    /// Return the distance from `a` to `b` in kilometres.
    fn distance_km(&self, a: &Point, b: &Point) -> f64;
}

impl<T: GeoDistance + ?Sized> GeoDistance for &T {
    fn distance_km(&self, a: &Point, b: &Point) -> f64 {
        (**self).distance_km(a, b)
    }
}

/// Haversine great-circle distance on a sphere.
///
/// # Examples
/// ```
/// use larder_core::{GeoDistance, Haversine, Point};
///
/// let origin = Point::new(12.9352, 77.6245)?;
/// let stop = Point::new(12.9698, 77.7500)?;
/// let km = Haversine::default().distance_km(&origin, &stop);
/// assert!((km - 14.13).abs() < 0.05);
/// # Ok::<(), larder_core::InvalidCoordinate>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Haversine {
    radius_km: f64,
}

impl Default for Haversine {
    fn default() -> Self {
        Self::with_radius_km(EARTH_RADIUS_KM)
    }
}

impl Haversine {
    /// Construct a metric over a sphere of the given radius.
    #[must_use]
    pub const fn with_radius_km(radius_km: f64) -> Self {
        Self { radius_km }
    }

    /// Sphere radius in kilometres.
    #[must_use]
    pub const fn radius_km(&self) -> f64 {
        self.radius_km
    }
}

impl GeoDistance for Haversine {
    fn distance_km(&self, a: &Point, b: &Point) -> f64 {
        let lat1 = a.lat().to_radians();
        let lat2 = b.lat().to_radians();
        let d_lat = (b.lat() - a.lat()).to_radians();
        let d_lon = (b.lon() - a.lon()).to_radians();

        let half_chord = (d_lat / 2.0).sin().powi(2)
            + lat1.cos() * lat2.cos() * (d_lon / 2.0).sin().powi(2);
        // Rounding can push near-antipodal pairs fractionally past 1.
        let h = half_chord.clamp(0.0, 1.0);
        let angle = 2.0 * h.sqrt().atan2((1.0 - h).sqrt());
        self.radius_km * angle
    }
}
