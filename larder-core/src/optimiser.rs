//! The route optimisation seam.

use std::collections::HashSet;

use thiserror::Error;

use crate::{CentreId, Point, RouteResult, Stop};

/// Errors returned by [`RouteOptimiser::optimise`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OptimiseError {
    /// No stops were supplied.
    ///
    /// An empty route is meaningless for a planned delivery run, so callers
    /// should surface this as a correctable request error.
    #[error("no target centres to optimise")]
    EmptyInput,
    /// Two stops share an identifier.
    #[error("centre {id} appears more than once in the stop list")]
    DuplicateStop {
        /// The repeated identifier.
        id: CentreId,
    },
}

/// Check that `stops` is a non-empty set of distinct centres.
///
/// # Errors
/// Returns [`OptimiseError::EmptyInput`] for an empty slice and
/// [`OptimiseError::DuplicateStop`] naming the first repeated identifier.
///
/// # Examples
/// ```
/// use larder_core::{OptimiseError, Stop, validate_stops};
///
/// let a = Stop::from_coordinates("A", 0.0, 0.0, 1.0)?;
/// assert_eq!(validate_stops(&[]), Err(OptimiseError::EmptyInput));
/// assert!(validate_stops(&[a.clone()]).is_ok());
/// assert!(matches!(
///     validate_stops(&[a.clone(), a]),
///     Err(OptimiseError::DuplicateStop { .. })
/// ));
/// # Ok::<(), larder_core::StopError>(())
/// ```
pub fn validate_stops(stops: &[Stop]) -> Result<(), OptimiseError> {
    if stops.is_empty() {
        return Err(OptimiseError::EmptyInput);
    }
    let mut seen = HashSet::with_capacity(stops.len());
    for stop in stops {
        if !seen.insert(stop.id()) {
            return Err(OptimiseError::DuplicateStop {
                id: stop.id().clone(),
            });
        }
    }
    Ok(())
}

/// Origin and stops for one distribution run.
///
/// # Examples
/// ```rust
/// use larder_core::{Point, RouteRequest, Stop};
///
/// let request = RouteRequest {
///     origin: Point::new(12.9352, 77.6245)?,
///     stops: vec![Stop::from_coordinates("CTR-C", 12.9698, 77.75, 300.0)?],
/// };
/// assert!(request.validate().is_ok());
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RouteRequest {
    /// Depot the vehicle departs from.
    pub origin: Point,
    /// Centres to deliver to; input order only breaks distance ties.
    pub stops: Vec<Stop>,
}

impl RouteRequest {
    /// Validate the stop set.
    ///
    /// # Errors
    /// See [`validate_stops`].
    pub fn validate(&self) -> Result<(), OptimiseError> {
        validate_stops(&self.stops)
    }
}

/// Sequence delivery stops into a route.
///
/// Implementations must be pure: the same origin and stops always produce
/// the same route, and nothing is persisted. They must return
/// [`OptimiseError::EmptyInput`] rather than an empty route when `stops` is
/// empty. Optimisers must be `Send + Sync` so a service can share one
/// instance across request handlers.
pub trait RouteOptimiser: Send + Sync {
    /// Order `stops` into a route departing from `origin`.
    ///
    /// # Errors
    /// Returns [`OptimiseError`] when the stop set is empty or contains
    /// duplicate identifiers.
    fn optimise(&self, origin: &Point, stops: &[Stop]) -> Result<RouteResult, OptimiseError>;

    /// Optimise a bundled [`RouteRequest`].
    ///
    /// # Errors
    /// As for [`RouteOptimiser::optimise`].
    fn optimise_request(&self, request: &RouteRequest) -> Result<RouteResult, OptimiseError> {
        self.optimise(&request.origin, &request.stops)
    }
}
