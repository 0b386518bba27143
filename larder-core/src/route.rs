//! Ordered delivery routes produced by a [`RouteOptimiser`](crate::RouteOptimiser).
//!
//! A [`RouteResult`] is output only: the optimiser builds it once and the
//! caller persists its order, distance and duration into the run record.

use crate::CentreId;

/// Round a distance to one decimal place, half away from zero.
///
/// # Examples
/// ```
/// use larder_core::round_to_tenth;
///
/// assert_eq!(round_to_tenth(20.036), 20.0);
/// assert_eq!(round_to_tenth(15.45), 15.5);
/// assert_eq!(round_to_tenth(-0.25), -0.3);
/// ```
#[must_use]
pub fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// One visited stop and the leg that reaches it.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RouteLeg {
    /// Centre reached by this leg.
    pub stop_id: CentreId,
    /// 1-based position in the delivery order.
    pub position: usize,
    /// Load dropped at this stop, in kilograms.
    pub allocated_kg: f64,
    /// Distance from the previous point (or the origin), in kilometres.
    pub distance_from_previous_km: f64,
    /// Minutes after departure at which the stop is reached.
    pub arrival_offset_minutes: u64,
}

/// A delivery order with its distance and duration totals.
///
/// # Examples
/// ```
/// use larder_core::{CentreId, RouteLeg, RouteResult};
///
/// let leg = RouteLeg {
///     stop_id: CentreId::from("CTR-C"),
///     position: 1,
///     allocated_kg: 300.0,
///     distance_from_previous_km: 14.1,
///     arrival_offset_minutes: 28,
/// };
/// let route = RouteResult::new(vec![leg], 14.1, 28);
/// assert_eq!(route.len(), 1);
/// assert_eq!(route.total_distance_km(), 14.1);
/// assert_eq!(route.stop_ids().collect::<Vec<_>>(), [&CentreId::from("CTR-C")]);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RouteResult {
    legs: Vec<RouteLeg>,
    total_distance_km: f64,
    estimated_duration_minutes: u64,
}

impl RouteResult {
    /// Assemble a route from its legs and totals.
    #[must_use]
    pub const fn new(
        legs: Vec<RouteLeg>,
        total_distance_km: f64,
        estimated_duration_minutes: u64,
    ) -> Self {
        Self {
            legs,
            total_distance_km,
            estimated_duration_minutes,
        }
    }

    /// Legs in delivery order.
    #[must_use]
    pub fn legs(&self) -> &[RouteLeg] {
        &self.legs
    }

    /// Total travelled distance in kilometres, rounded to one decimal.
    #[must_use]
    pub const fn total_distance_km(&self) -> f64 {
        self.total_distance_km
    }

    /// Estimated driving time in whole minutes.
    #[must_use]
    pub const fn estimated_duration_minutes(&self) -> u64 {
        self.estimated_duration_minutes
    }

    /// Stop identifiers in delivery order.
    pub fn stop_ids(&self) -> impl Iterator<Item = &CentreId> {
        self.legs.iter().map(|leg| &leg.stop_id)
    }

    /// Total load delivered across all legs, in kilograms.
    #[must_use]
    pub fn total_allocated_kg(&self) -> f64 {
        self.legs.iter().map(|leg| leg.allocated_kg).sum()
    }

    /// Number of stops on the route.
    #[must_use]
    pub fn len(&self) -> usize {
        self.legs.len()
    }

    /// Whether the route visits no stops.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.legs.is_empty()
    }

    /// Consume the route and return its legs.
    #[must_use]
    pub fn into_legs(self) -> Vec<RouteLeg> {
        self.legs
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn leg(id: &str, position: usize, kg: f64, km: f64) -> RouteLeg {
        RouteLeg {
            stop_id: CentreId::from(id),
            position,
            allocated_kg: kg,
            distance_from_previous_km: km,
            arrival_offset_minutes: 0,
        }
    }

    #[rstest]
    #[case(0.04, 0.0)]
    #[case(0.05, 0.1)]
    #[case(31.0846, 31.1)]
    #[case(-0.05, -0.1)]
    fn rounds_half_away_from_zero(#[case] input: f64, #[case] expected: f64) {
        assert_eq!(round_to_tenth(input), expected);
    }

    #[rstest]
    fn route_preserves_leg_order() {
        let route = RouteResult::new(
            vec![leg("A", 1, 200.0, 20.0), leg("B", 2, 150.0, 15.4)],
            35.5,
            71,
        );
        let ids: Vec<&str> = route.stop_ids().map(CentreId::as_str).collect();
        assert_eq!(ids, ["A", "B"]);
        assert_eq!(route.total_allocated_kg(), 350.0);
        assert_eq!(route.estimated_duration_minutes(), 71);
    }

    #[rstest]
    fn empty_route_reports_empty() {
        let route = RouteResult::new(Vec::new(), 0.0, 0);
        assert!(route.is_empty());
        assert_eq!(route.len(), 0);
    }
}
