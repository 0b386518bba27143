//! Delivery stops and the centre identifiers they refer to.

use std::fmt;
use std::hash::{Hash, Hasher};

use thiserror::Error;

use crate::{InvalidCoordinate, Point};

/// Opaque handle to a centre record owned by the surrounding application.
///
/// # Examples
/// ```
/// use larder_core::CentreId;
///
/// let id = CentreId::from("CTR-1A2B3C4D");
/// assert_eq!(id.as_str(), "CTR-1A2B3C4D");
/// assert_eq!(id.to_string(), "CTR-1A2B3C4D");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct CentreId(String);

impl CentreId {
    /// Wrap an identifier.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Borrow the identifier text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CentreId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for CentreId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for CentreId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// Errors returned by [`Stop::new`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum StopError {
    /// The stop's coordinates were not finite.
    #[error("stop {id} has an invalid position: {source}")]
    InvalidPosition {
        /// Identifier of the rejected stop.
        id: CentreId,
        /// Underlying coordinate error.
        #[source]
        source: InvalidCoordinate,
    },
    /// The allocated load was negative or not finite.
    #[error("stop {id} has invalid allocation {allocated_kg} kg")]
    InvalidAllocation {
        /// Identifier of the rejected stop.
        id: CentreId,
        /// The rejected quantity.
        allocated_kg: f64,
    },
}

/// A delivery destination with an allocated load for one run.
///
/// Two stops are equal when their identifiers match, whatever their
/// position or load.
///
/// # Examples
/// ```
/// use larder_core::{Point, Stop};
///
/// let stop = Stop::new("CTR-A", Point::new(19.1197, 72.8464)?, 200.0)?;
/// assert_eq!(stop.id().as_str(), "CTR-A");
/// assert_eq!(stop.allocated_kg(), 200.0);
///
/// let moved = Stop::new("CTR-A", Point::new(0.0, 0.0)?, 5.0)?;
/// assert_eq!(stop, moved);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "RawStop", into = "RawStop")
)]
pub struct Stop {
    id: CentreId,
    location: Point,
    allocated_kg: f64,
}

impl Stop {
    /// Validate and construct a stop.
    ///
    /// # Errors
    /// Returns [`StopError::InvalidAllocation`] when `allocated_kg` is
    /// negative, NaN or infinite.
    pub fn new(
        id: impl Into<CentreId>,
        location: Point,
        allocated_kg: f64,
    ) -> Result<Self, StopError> {
        let id = id.into();
        if !allocated_kg.is_finite() || allocated_kg < 0.0 {
            return Err(StopError::InvalidAllocation { id, allocated_kg });
        }
        Ok(Self {
            id,
            location,
            allocated_kg,
        })
    }

    /// Validate raw coordinates and construct a stop.
    ///
    /// # Errors
    /// Returns [`StopError::InvalidPosition`] for non-finite coordinates and
    /// [`StopError::InvalidAllocation`] for an invalid load.
    pub fn from_coordinates(
        id: impl Into<CentreId>,
        lat: f64,
        lon: f64,
        allocated_kg: f64,
    ) -> Result<Self, StopError> {
        let id = id.into();
        match Point::new(lat, lon) {
            Ok(location) => Self::new(id, location, allocated_kg),
            Err(source) => Err(StopError::InvalidPosition { id, source }),
        }
    }

    /// Identifier of the centre this stop delivers to.
    #[must_use]
    pub const fn id(&self) -> &CentreId {
        &self.id
    }

    /// Geographic position of the centre.
    #[must_use]
    pub const fn location(&self) -> &Point {
        &self.location
    }

    /// Load allocated to this stop, in kilograms.
    #[must_use]
    pub const fn allocated_kg(&self) -> f64 {
        self.allocated_kg
    }
}

impl PartialEq for Stop {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Stop {}

impl Hash for Stop {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

/// Wire form of [`Stop`].
#[cfg(feature = "serde")]
#[derive(Clone, serde::Serialize, serde::Deserialize)]
struct RawStop {
    id: CentreId,
    lat: f64,
    lon: f64,
    #[serde(default)]
    allocated_kg: f64,
}

#[cfg(feature = "serde")]
impl TryFrom<RawStop> for Stop {
    type Error = StopError;

    fn try_from(raw: RawStop) -> Result<Self, Self::Error> {
        Self::from_coordinates(raw.id, raw.lat, raw.lon, raw.allocated_kg)
    }
}

#[cfg(feature = "serde")]
impl From<Stop> for RawStop {
    fn from(stop: Stop) -> Self {
        Self {
            lat: stop.location.lat(),
            lon: stop.location.lon(),
            allocated_kg: stop.allocated_kg,
            id: stop.id,
        }
    }
}
