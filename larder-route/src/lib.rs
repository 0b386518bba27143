//! Delivery-route sequencing for Larder distribution runs.
//!
//! This crate provides [`NearestNeighbourOptimiser`], the default
//! implementation of the [`RouteOptimiser`](larder_core::RouteOptimiser)
//! trait. From the depot it repeatedly drives to the closest unvisited
//! centre, measuring legs with any [`GeoDistance`](larder_core::GeoDistance)
//! model (great-circle [`Haversine`](larder_core::Haversine) by default).
//!
//! The heuristic is deterministic: the same origin and stops always yield
//! the same order, with distance ties going to the stop listed first.

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod optimiser;

pub use optimiser::{NearestNeighbourConfig, NearestNeighbourOptimiser};

#[cfg(any(test, feature = "test-support"))]
pub mod test_support;
