//! Routing configuration.

use crate::{CoreError, CoreResult};

/// Top-level routing configuration.
///
/// Typically loaded from a JSON file by the application crate and passed to
/// the router.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct RoutingConfig {
    /// Upper bound on any road speed in the graph.  The estimator's heuristic
    /// divides straight-line distance by this, so it must not be lower than
    /// the fastest road or A* loses optimality.  Default: 130 km/h.
    pub max_speed_kmph: f64,

    /// Query points farther than this from every segment are rejected.
    /// `None` always snaps to the nearest segment.  Default: 1 km.
    pub max_snap_distance_m: Option<f64>,

    /// Worker thread count for batch routing.  `None` uses Rayon's global
    /// pool.  Ignored without the `parallel` feature.
    pub num_threads: Option<usize>,
}

impl RoutingConfig {
    /// Reject values that would make the heuristic or snapping meaningless.
    pub fn validate(&self) -> CoreResult<()> {
        if !(self.max_speed_kmph > 0.0 && self.max_speed_kmph.is_finite()) {
            return Err(CoreError::Config(format!(
                "max_speed_kmph must be positive, got {}",
                self.max_speed_kmph
            )));
        }
        if let Some(d) = self.max_snap_distance_m {
            if d.is_nan() || d < 0.0 {
                return Err(CoreError::Config(format!(
                    "max_snap_distance_m must be non-negative, got {d}"
                )));
            }
        }
        if self.num_threads == Some(0) {
            return Err(CoreError::Config("num_threads must be at least 1".into()));
        }
        Ok(())
    }
}

impl Default for RoutingConfig {
    fn default() -> Self {
        Self {
            max_speed_kmph:      130.0,
            max_snap_distance_m: Some(1_000.0),
            num_threads:         None,
        }
    }
}
