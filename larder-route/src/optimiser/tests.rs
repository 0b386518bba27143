//! Tests for the `NearestNeighbourOptimiser`.

use super::*;
use larder_core::CentreId;
use larder_core::test_support::{DegreeDistance, point, stop};
use rstest::{fixture, rstest};

use crate::test_support::CountingDistance;

#[fixture]
fn mumbai_depot() -> Point {
    crate::test_support::mumbai_depot()
}

#[fixture]
fn mumbai_stops() -> Vec<Stop> {
    crate::test_support::mumbai_stops()
}

fn ids(route: &RouteResult) -> Vec<&str> {
    route.stop_ids().map(CentreId::as_str).collect()
}

#[rstest]
fn visits_closest_centre_first(mumbai_depot: Point, mumbai_stops: Vec<Stop>) {
    let route = NearestNeighbourOptimiser::default()
        .optimise(&mumbai_depot, &mumbai_stops)
        .expect("route");
    assert_eq!(ids(&route), ["CTR-A", "CTR-B"]);
    let legs: Vec<f64> = route
        .legs()
        .iter()
        .map(|leg| leg.distance_from_previous_km)
        .collect();
    assert_eq!(legs, [20.0, 15.4]);
    assert_eq!(route.total_distance_km(), 35.5);
    assert_eq!(route.estimated_duration_minutes(), 71);
}

#[rstest]
fn arrival_offsets_accumulate(mumbai_depot: Point, mumbai_stops: Vec<Stop>) {
    let route = NearestNeighbourOptimiser::default()
        .optimise(&mumbai_depot, &mumbai_stops)
        .expect("route");
    let offsets: Vec<u64> = route
        .legs()
        .iter()
        .map(|leg| leg.arrival_offset_minutes)
        .collect();
    assert_eq!(offsets, [40, 71]);
}

#[rstest]
fn positions_are_one_based(mumbai_depot: Point, mumbai_stops: Vec<Stop>) {
    let route = NearestNeighbourOptimiser::default()
        .optimise(&mumbai_depot, &mumbai_stops)
        .expect("route");
    let positions: Vec<usize> = route.legs().iter().map(|leg| leg.position).collect();
    assert_eq!(positions, [1, 2]);
    assert_eq!(route.total_allocated_kg(), 350.0);
}

#[rstest]
fn single_stop_route() {
    let route = NearestNeighbourOptimiser::default()
        .optimise(
            &point(12.9352, 77.6245),
            &[stop("CTR-C", 12.9698, 77.75, 300.0)],
        )
        .expect("route");
    assert_eq!(route.len(), 1);
    assert_eq!(route.total_distance_km(), 14.1);
    assert_eq!(route.estimated_duration_minutes(), 28);
}

#[rstest]
#[case(&["X", "Y"], "X")]
#[case(&["Y", "X"], "Y")]
fn ties_go_to_the_earlier_stop(#[case] order: &[&str], #[case] first: &str) {
    let stops: Vec<Stop> = order
        .iter()
        .map(|id| match *id {
            "X" => stop("X", 1.0, 0.0, 1.0),
            _ => stop("Y", 0.0, 1.0, 1.0),
        })
        .collect();
    let route = NearestNeighbourOptimiser::new(DegreeDistance)
        .optimise(&point(0.0, 0.0), &stops)
        .expect("route");
    assert_eq!(ids(&route).first().copied(), Some(first));
}

#[rstest]
fn walks_a_line_in_order() {
    let stops = [
        stop("far", 3.0, 0.0, 1.0),
        stop("near", 1.0, 0.0, 1.0),
        stop("mid", 2.0, 0.0, 1.0),
    ];
    let route = NearestNeighbourOptimiser::new(DegreeDistance)
        .optimise(&point(0.0, 0.0), &stops)
        .expect("route");
    assert_eq!(ids(&route), ["near", "mid", "far"]);
    assert_eq!(route.total_distance_km(), 3.0);
    assert_eq!(route.estimated_duration_minutes(), 6);
}

#[rstest]
fn total_rounds_the_unrounded_distance_once() {
    let stops = [
        stop("A", 1.04, 0.0, 1.0),
        stop("B", 2.08, 0.0, 1.0),
        stop("C", 3.12, 0.0, 1.0),
    ];
    let route = NearestNeighbourOptimiser::new(DegreeDistance)
        .optimise(&point(0.0, 0.0), &stops)
        .expect("route");
    let legs: Vec<f64> = route
        .legs()
        .iter()
        .map(|leg| leg.distance_from_previous_km)
        .collect();
    assert_eq!(legs, [1.0, 1.0, 1.0]);
    assert_eq!(route.total_distance_km(), 3.1);
    let offsets: Vec<u64> = route
        .legs()
        .iter()
        .map(|leg| leg.arrival_offset_minutes)
        .collect();
    assert_eq!(offsets, [2, 4, 6]);
    assert_eq!(route.estimated_duration_minutes(), 6);
}

#[rstest]
fn co_located_stops_have_zero_legs() {
    let stops = [stop("A", 5.0, 5.0, 1.0), stop("B", 5.0, 5.0, 1.0)];
    let route = NearestNeighbourOptimiser::new(DegreeDistance)
        .optimise(&point(5.0, 5.0), &stops)
        .expect("route");
    assert_eq!(ids(&route), ["A", "B"]);
    assert_eq!(route.total_distance_km(), 0.0);
    assert_eq!(route.estimated_duration_minutes(), 0);
}

#[rstest]
fn empty_input_is_rejected() {
    let err = NearestNeighbourOptimiser::default()
        .optimise(&point(0.0, 0.0), &[])
        .expect_err("empty stops");
    assert_eq!(err, OptimiseError::EmptyInput);
}

#[rstest]
fn duplicate_stops_are_rejected() {
    let stops = [stop("A", 1.0, 0.0, 1.0), stop("A", 2.0, 0.0, 1.0)];
    let err = NearestNeighbourOptimiser::new(DegreeDistance)
        .optimise(&point(0.0, 0.0), &stops)
        .expect_err("duplicate");
    assert!(matches!(err, OptimiseError::DuplicateStop { .. }));
}

#[rstest]
#[case(60.0, 3)]
#[case(15.0, 12)]
fn duration_follows_configured_speed(#[case] speed: f64, #[case] minutes: u64) {
    let optimiser = NearestNeighbourOptimiser::with_config(
        DegreeDistance,
        NearestNeighbourConfig {
            average_speed_kmh: speed,
        },
    );
    let route = optimiser
        .optimise(&point(0.0, 0.0), &[stop("A", 3.0, 0.0, 1.0)])
        .expect("route");
    assert_eq!(route.estimated_duration_minutes(), minutes);
}

#[rstest]
#[case(0.0)]
#[case(-10.0)]
#[case(f64::NAN)]
fn invalid_speed_falls_back_to_default(#[case] speed: f64) {
    let optimiser = NearestNeighbourOptimiser::with_config(
        DegreeDistance,
        NearestNeighbourConfig {
            average_speed_kmh: speed,
        },
    );
    assert_eq!(optimiser.config(), &NearestNeighbourConfig::default());
}

#[rstest]
#[case(1, 1)]
#[case(4, 10)]
#[case(10, 55)]
fn measures_each_remaining_stop_once_per_step(#[case] count: u32, #[case] expected: usize) {
    let stops: Vec<Stop> = (1..=count)
        .map(|n| stop(&format!("S{n}"), f64::from(n), 0.0, 1.0))
        .collect();
    let optimiser = NearestNeighbourOptimiser::new(CountingDistance::new(DegreeDistance));
    optimiser
        .optimise(&point(0.0, 0.0), &stops)
        .expect("route");
    assert_eq!(optimiser.distance.calls(), expected);
}
