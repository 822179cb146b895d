//! Synthetic road network used by the quickstart.
//!
//! A small street grid in downtown Mobile, Alabama: four east–west streets
//! and four north–south avenues with one one-way avenue.  Intersections are
//! joined by coordinate, so every crossing point is a joint.

use anyhow::Result;

use sr_core::{GeoPoint, RoutingConfig};
use sr_graph::{CarEstimator, IndexGraph, IndexGraphBuilder};

const ORIGIN_LAT: f64 = 30.690;
const ORIGIN_LON: f64 = -88.050;
/// Grid spacing in degrees (≈ 330 m north–south).
const STEP: f64 = 0.003;
const SIZE: usize = 4;

fn grid_point(row: usize, col: usize) -> GeoPoint {
    GeoPoint::new(ORIGIN_LAT + STEP * row as f64, ORIGIN_LON + STEP * col as f64)
}

/// Build the grid network with a car estimator capped at
/// `config.max_speed_kmph`.
pub fn build_network(config: &RoutingConfig) -> Result<IndexGraph> {
    let mut b = IndexGraphBuilder::with_capacity(2 * SIZE, SIZE * SIZE);

    // Streets, two-way; the southernmost is an arterial.
    for row in 0..SIZE {
        let points = (0..SIZE).map(|col| grid_point(row, col)).collect();
        let speed = if row == 0 { 60.0 } else { 40.0 };
        b.add_road(points, false, speed)?;
    }

    // Avenues; column 2 runs one-way northbound.
    for col in 0..SIZE {
        let points = (0..SIZE).map(|row| grid_point(row, col)).collect();
        b.add_road(points, col == 2, 40.0)?;
    }

    b.join_coincident_points();
    let graph = b.build(CarEstimator::from_config(config))?;
    Ok(graph)
}

/// Sample origin/destination pairs, slightly off the streets so that both
/// ends have to be snapped.
pub fn sample_queries() -> Vec<(GeoPoint, GeoPoint)> {
    let offset = |p: GeoPoint, dlat: f64, dlon: f64| GeoPoint::new(p.lat + dlat, p.lon + dlon);
    vec![
        (offset(grid_point(0, 0), 0.0002, 0.0011), offset(grid_point(3, 3), -0.0009, 0.0001)),
        (offset(grid_point(3, 2), 0.0001, -0.0012), offset(grid_point(0, 2), 0.0013, 0.0001)),
        (offset(grid_point(1, 1), 0.0015, 0.0001), offset(grid_point(1, 1), 0.0001, 0.0016)),
    ]
}
