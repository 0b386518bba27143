//! `NearestNeighbourOptimiser`: greedy closest-next sequencing.

use larder_core::{
    GeoDistance, Haversine, OptimiseError, Point, RouteLeg, RouteOptimiser, RouteResult, Stop,
    round_to_tenth, validate_stops,
};

const MINUTES_PER_HOUR: f64 = 60.0;

/// Configuration for [`NearestNeighbourOptimiser`].
#[derive(Debug, Clone, PartialEq)]
pub struct NearestNeighbourConfig {
    /// Average driving speed used to turn distance into minutes.
    pub average_speed_kmh: f64,
}

impl Default for NearestNeighbourConfig {
    fn default() -> Self {
        Self {
            average_speed_kmh: 30.0,
        }
    }
}

impl NearestNeighbourConfig {
    /// Whether the speed can be used to derive durations.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.average_speed_kmh.is_finite() && self.average_speed_kmh > 0.0
    }
}

/// Route optimiser that always drives to the closest unvisited centre.
///
/// Starting at the depot, each step measures the distance from the current
/// position to every remaining stop and visits the nearest. A stop that is
/// exactly as close as an earlier-listed stop never displaces it, so the
/// output depends only on the inputs.
///
/// Leg distances and the route total are each rounded to one decimal only
/// when reported. The total and all durations come from the unrounded
/// distances, so the reported legs may differ from the total by up to
/// 0.05 km per leg.
///
/// # Examples
/// ```
/// use larder_core::{Point, RouteOptimiser, Stop};
/// use larder_route::NearestNeighbourOptimiser;
///
/// let origin = Point::new(12.9352, 77.6245)?;
/// let stops = [Stop::from_coordinates("CTR-C", 12.9698, 77.75, 300.0)?];
/// let route = NearestNeighbourOptimiser::default().optimise(&origin, &stops)?;
/// assert_eq!(route.total_distance_km(), 14.1);
/// assert_eq!(route.estimated_duration_minutes(), 28);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone)]
pub struct NearestNeighbourOptimiser<D = Haversine> {
    distance: D,
    config: NearestNeighbourConfig,
}

impl Default for NearestNeighbourOptimiser<Haversine> {
    fn default() -> Self {
        Self::new(Haversine::default())
    }
}

impl<D: GeoDistance> NearestNeighbourOptimiser<D> {
    /// Construct an optimiser using default configuration.
    pub fn new(distance: D) -> Self {
        Self::with_config(distance, NearestNeighbourConfig::default())
    }

    /// Construct an optimiser with explicit configuration.
    ///
    /// A speed that is not a positive finite number is replaced by the
    /// default so durations stay finite.
    pub fn with_config(distance: D, config: NearestNeighbourConfig) -> Self {
        let accepted = if config.is_valid() {
            config
        } else {
            log::warn!(
                "ignoring invalid average speed {} km/h; using the default",
                config.average_speed_kmh
            );
            NearestNeighbourConfig::default()
        };
        Self {
            distance,
            config: accepted,
        }
    }

    /// The active configuration.
    #[must_use]
    pub const fn config(&self) -> &NearestNeighbourConfig {
        &self.config
    }

    /// Visit order as `(stop index, unrounded leg km)` pairs.
    fn sequence(&self, origin: &Point, stops: &[Stop]) -> Vec<(usize, f64)> {
        let mut remaining: Vec<usize> = (0..stops.len()).collect();
        let mut current = *origin;
        let mut order = Vec::with_capacity(stops.len());
        while let Some((slot, km)) = self.closest(&current, stops, &remaining) {
            let idx = remaining.remove(slot);
            if let Some(stop) = stops.get(idx) {
                current = *stop.location();
            }
            order.push((idx, km));
        }
        order
    }

    /// Slot in `remaining` of the stop nearest to `from`.
    ///
    /// The comparison is strict so the earliest slot wins a tie.
    fn closest(&self, from: &Point, stops: &[Stop], remaining: &[usize]) -> Option<(usize, f64)> {
        let mut best: Option<(usize, f64)> = None;
        for (slot, stop) in remaining
            .iter()
            .enumerate()
            .filter_map(|(slot, &idx)| stops.get(idx).map(|stop| (slot, stop)))
        {
            let km = self.distance.distance_km(from, stop.location());
            if best.is_none_or(|(_, best_km)| km < best_km) {
                best = Some((slot, km));
            }
        }
        best
    }

    #[expect(
        clippy::float_arithmetic,
        reason = "durations scale distance by the configured speed"
    )]
    #[expect(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        reason = "rounded minutes for non-negative road distances fit in u64"
    )]
    fn minutes_for(&self, km: f64) -> u64 {
        (km * MINUTES_PER_HOUR / self.config.average_speed_kmh).round() as u64
    }

    #[expect(
        clippy::float_arithmetic,
        reason = "unrounded leg distances accumulate into the route total"
    )]
    fn build_route(&self, stops: &[Stop], order: Vec<(usize, f64)>) -> RouteResult {
        let mut cumulative_km = 0.0;
        let legs: Vec<RouteLeg> = order
            .into_iter()
            .enumerate()
            .filter_map(|(position, (idx, km))| {
                let stop = stops.get(idx)?;
                cumulative_km += km;
                Some(RouteLeg {
                    stop_id: stop.id().clone(),
                    position: position + 1,
                    allocated_kg: stop.allocated_kg(),
                    distance_from_previous_km: round_to_tenth(km),
                    arrival_offset_minutes: self.minutes_for(cumulative_km),
                })
            })
            .collect();
        RouteResult::new(
            legs,
            round_to_tenth(cumulative_km),
            self.minutes_for(cumulative_km),
        )
    }
}

impl<D> RouteOptimiser for NearestNeighbourOptimiser<D>
where
    D: GeoDistance + Send + Sync,
{
    fn optimise(&self, origin: &Point, stops: &[Stop]) -> Result<RouteResult, OptimiseError> {
        validate_stops(stops)?;
        let order = self.sequence(origin, stops);
        let route = self.build_route(stops, order);
        log::debug!(
            "sequenced {} stops: {:.1} km, {} min at {} km/h",
            route.len(),
            route.total_distance_km(),
            route.estimated_duration_minutes(),
            self.config.average_speed_kmh
        );
        Ok(route)
    }
}

#[cfg(test)]
mod tests;
