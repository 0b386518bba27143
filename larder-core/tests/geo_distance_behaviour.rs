//! Behavioural tests for the haversine distance model.

use std::cell::RefCell;

use larder_core::{Axis, GeoDistance, Haversine, InvalidCoordinate, Point};
use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};

#[derive(Debug, Default)]
struct DistanceWorld {
    depot: RefCell<Option<Point>>,
    centre: RefCell<Option<Point>>,
    distances: RefCell<Vec<f64>>,
    point_result: RefCell<Option<Result<Point, InvalidCoordinate>>>,
}

impl DistanceWorld {
    fn depot(&self) -> Point {
        self.depot
            .borrow()
            .unwrap_or_else(|| panic!("depot should be set before measuring"))
    }

    fn centre(&self) -> Point {
        self.centre
            .borrow()
            .unwrap_or_else(|| panic!("centre should be set before measuring"))
    }
}

#[fixture]
fn world() -> DistanceWorld {
    DistanceWorld::default()
}

fn mumbai(lat: f64, lon: f64) -> Point {
    Point::new(lat, lon).unwrap_or_else(|err| panic!("fixture point must be valid: {err}"))
}

#[given("the depot at Fort, Mumbai")]
fn given_depot(world: &DistanceWorld) {
    world.depot.replace(Some(mumbai(18.9398, 72.8355)));
}

#[given("the centre at Andheri, Mumbai")]
fn given_centre(world: &DistanceWorld) {
    world.centre.replace(Some(mumbai(19.1197, 72.8464)));
}

#[when("I measure the haversine distance both ways")]
fn when_measure_both_ways(world: &DistanceWorld) {
    let metric = Haversine::default();
    let (depot, centre) = (world.depot(), world.centre());
    world.distances.replace(vec![
        metric.distance_km(&depot, &centre),
        metric.distance_km(&centre, &depot),
    ]);
}

#[when("I measure the haversine distance from the depot to itself")]
fn when_measure_to_self(world: &DistanceWorld) {
    let depot = world.depot();
    world
        .distances
        .replace(vec![Haversine::default().distance_km(&depot, &depot)]);
}

#[when("I create a point with a NaN latitude")]
fn when_create_nan_point(world: &DistanceWorld) {
    world.point_result.replace(Some(Point::new(f64::NAN, 72.8)));
}

#[then("both distances are equal")]
fn then_equal(world: &DistanceWorld) {
    let distances = world.distances.borrow();
    assert_eq!(distances.first(), distances.get(1));
}

#[then("the distance is about 20.0 km")]
fn then_about_twenty(world: &DistanceWorld) {
    let distances = world.distances.borrow();
    let km = distances.first().copied().unwrap_or(f64::NAN);
    assert!((km - 20.0).abs() < 0.1, "expected about 20 km, got {km}");
}

#[then("the distance is exactly zero")]
fn then_zero(world: &DistanceWorld) {
    assert_eq!(world.distances.borrow().first().copied(), Some(0.0));
}

#[then("an invalid coordinate error names the latitude")]
fn then_latitude_error(world: &DistanceWorld) {
    match world.point_result.borrow().as_ref() {
        Some(Err(err)) => assert_eq!(err.axis, Axis::Latitude),
        other => panic!("expected an invalid coordinate error, found {other:?}"),
    }
}

#[scenario(path = "tests/features/geo_distance.feature", index = 0)]
fn symmetric_distance(world: DistanceWorld) {
    let _ = world;
}

#[scenario(path = "tests/features/geo_distance.feature", index = 1)]
fn zero_self_distance(world: DistanceWorld) {
    let _ = world;
}

#[scenario(path = "tests/features/geo_distance.feature", index = 2)]
fn rejects_nan(world: DistanceWorld) {
    let _ = world;
}
