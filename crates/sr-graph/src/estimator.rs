//! Travel-cost estimation.
//!
//! # Cost units
//!
//! All weights and heuristics are travel times in **seconds** (`f64`).

use sr_core::{GeoPoint, RoutingConfig, Segment};

use crate::geometry::Road;

/// Pluggable cost model for a road network.
///
/// # Thread safety
///
/// Implementations must be `Send + Sync`: one graph (and its estimator) is
/// shared by every concurrent route query.
pub trait EdgeEstimator: Send + Sync {
    /// Lower bound on the travel time between two coordinates.
    ///
    /// Must be non-negative and symmetric.  Used as the A* potential and to
    /// weight the short connectors between a snapped query point and the
    /// ends of the segment it lies on.
    fn heuristic(&self, from: GeoPoint, to: GeoPoint) -> f64;

    /// Time to traverse `segment` on `road`.
    fn segment_weight(&self, segment: Segment, road: &Road) -> f64;
}

/// Car cost model: great-circle length over road speed.
///
/// Road speeds above `max_speed_kmph` are clamped so the heuristic, which
/// divides by the maximum speed, never overestimates.
#[derive(Clone, Debug)]
pub struct CarEstimator {
    max_speed_mps: f64,
}

impl CarEstimator {
    pub fn new(max_speed_kmph: f64) -> Self {
        Self { max_speed_mps: max_speed_kmph / 3.6 }
    }

    pub fn from_config(config: &RoutingConfig) -> Self {
        Self::new(config.max_speed_kmph)
    }

    #[inline]
    pub fn max_speed_mps(&self) -> f64 {
        self.max_speed_mps
    }
}

impl Default for CarEstimator {
    fn default() -> Self {
        Self::from_config(&RoutingConfig::default())
    }
}

impl EdgeEstimator for CarEstimator {
    #[inline]
    fn heuristic(&self, from: GeoPoint, to: GeoPoint) -> f64 {
        from.distance_m(to) / self.max_speed_mps
    }

    fn segment_weight(&self, segment: Segment, road: &Road) -> f64 {
        let a = road.point(segment.segment_idx);
        let b = road.point(segment.segment_idx + 1);
        let speed_mps = (road.speed_kmph() as f64 / 3.6).min(self.max_speed_mps);
        a.distance_m(b) / speed_mps
    }
}
