//! Geographic points in decimal degrees.

use std::fmt;

use geo::Coord;
use thiserror::Error;

/// Which half of a coordinate pair failed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    /// North/south component.
    Latitude,
    /// East/west component.
    Longitude,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Latitude => f.write_str("latitude"),
            Self::Longitude => f.write_str("longitude"),
        }
    }
}

/// Error returned when a coordinate is NaN or infinite.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
#[error("{axis} {value} is not a finite number")]
pub struct InvalidCoordinate {
    /// The offending axis.
    pub axis: Axis,
    /// The rejected value.
    pub value: f64,
}

/// An immutable latitude/longitude pair.
///
/// Coordinates are plain WGS84-like degrees with no datum correction. The
/// value is stored as a [`Coord`] with `x = longitude` and `y = latitude`.
///
/// # Examples
/// ```
/// use larder_core::Point;
///
/// let fort = Point::new(18.9398, 72.8355)?;
/// assert_eq!(fort.lat(), 18.9398);
/// assert_eq!(fort.lon(), 72.8355);
/// assert!(Point::new(f64::NAN, 0.0).is_err());
/// # Ok::<(), larder_core::InvalidCoordinate>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "RawPoint", into = "RawPoint")
)]
pub struct Point {
    coord: Coord<f64>,
}

impl Point {
    /// Validate and construct a point from latitude and longitude.
    ///
    /// # Errors
    /// Returns [`InvalidCoordinate`] when either value is NaN or infinite.
    pub fn new(lat: f64, lon: f64) -> Result<Self, InvalidCoordinate> {
        if !lat.is_finite() {
            return Err(InvalidCoordinate {
                axis: Axis::Latitude,
                value: lat,
            });
        }
        if !lon.is_finite() {
            return Err(InvalidCoordinate {
                axis: Axis::Longitude,
                value: lon,
            });
        }
        Ok(Self {
            coord: Coord { x: lon, y: lat },
        })
    }

    /// Latitude in decimal degrees.
    #[must_use]
    pub const fn lat(&self) -> f64 {
        self.coord.y
    }

    /// Longitude in decimal degrees.
    #[must_use]
    pub const fn lon(&self) -> f64 {
        self.coord.x
    }

    /// The underlying `geo` coordinate (`x = lon`, `y = lat`).
    #[must_use]
    pub const fn coord(&self) -> Coord<f64> {
        self.coord
    }
}

impl TryFrom<Coord<f64>> for Point {
    type Error = InvalidCoordinate;

    fn try_from(coord: Coord<f64>) -> Result<Self, Self::Error> {
        Self::new(coord.y, coord.x)
    }
}

impl From<Point> for Coord<f64> {
    fn from(point: Point) -> Self {
        point.coord
    }
}

impl From<Point> for geo::Point<f64> {
    fn from(point: Point) -> Self {
        Self::from(point.coord)
    }
}

/// Wire form of [`Point`].
#[cfg(feature = "serde")]
#[derive(Clone, Copy, serde::Serialize, serde::Deserialize)]
struct RawPoint {
    lat: f64,
    lon: f64,
}

#[cfg(feature = "serde")]
impl TryFrom<RawPoint> for Point {
    type Error = InvalidCoordinate;

    fn try_from(raw: RawPoint) -> Result<Self, Self::Error> {
        Self::new(raw.lat, raw.lon)
    }
}

#[cfg(feature = "serde")]
impl From<Point> for RawPoint {
    fn from(point: Point) -> Self {
        Self {
            lat: point.lat(),
            lon: point.lon(),
        }
    }
}
