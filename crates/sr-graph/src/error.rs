//! Graph-construction error type.

use thiserror::Error;

use sr_core::{FeatureId, RoadPoint};

/// Errors produced while building an [`IndexGraph`](crate::IndexGraph).
///
/// Lookups on a built graph never fail recoverably: an invalid segment or
/// point handed to a built graph is a caller bug and panics.
#[derive(Debug, Error)]
pub enum GraphError {
    #[error("road {0} has fewer than two points")]
    DegenerateRoad(FeatureId),

    #[error("road {feature} has invalid speed {speed_kmph} km/h")]
    InvalidSpeed { feature: FeatureId, speed_kmph: f32 },

    #[error("feature {0} not found in geometry")]
    FeatureNotFound(FeatureId),

    #[error("point {point} out of range: road has {len} points")]
    PointOutOfRange { point: RoadPoint, len: usize },

    #[error("road point {0} belongs to more than one joint")]
    DuplicateJointPoint(RoadPoint),
}

pub type GraphResult<T> = Result<T, GraphError>;
