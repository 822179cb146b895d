//! Query points snapped onto the road network.

use sr_core::{FeatureId, GeoPoint, Segment};
use sr_graph::Projection;

/// A query endpoint lying on segment `segment_idx` of `feature` at `point`.
///
/// Built once per query and never modified.  It is not a vertex of the road
/// network; [`GraphStarter`](crate::GraphStarter) wires it in.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FakeVertex {
    feature:     FeatureId,
    segment_idx: u32,
    point:       GeoPoint,
}

impl FakeVertex {
    pub fn new(feature: FeatureId, segment_idx: u32, point: GeoPoint) -> Self {
        Self { feature, segment_idx, point }
    }

    /// `true` if `segment` is the span this vertex was snapped onto, in
    /// either orientation.
    #[inline]
    pub fn fits(&self, segment: Segment) -> bool {
        segment.feature == self.feature && segment.segment_idx == self.segment_idx
    }

    #[inline]
    pub fn feature(&self) -> FeatureId {
        self.feature
    }

    #[inline]
    pub fn segment_idx(&self) -> u32 {
        self.segment_idx
    }

    #[inline]
    pub fn point(&self) -> GeoPoint {
        self.point
    }
}

impl From<Projection> for FakeVertex {
    fn from(p: Projection) -> Self {
        Self::new(p.feature, p.segment_idx, p.point)
    }
}
