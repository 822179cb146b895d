//! Road polylines and per-road metadata.

use sr_core::{FeatureId, GeoPoint, RoadPoint};

// ── Road ──────────────────────────────────────────────────────────────────────

/// One road feature: an ordered polyline plus its traversal attributes.
///
/// Always has at least two points; [`IndexGraphBuilder`](crate::IndexGraphBuilder)
/// rejects anything shorter.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Road {
    points:     Vec<GeoPoint>,
    one_way:    bool,
    speed_kmph: f32,
}

impl Road {
    pub(crate) fn new(points: Vec<GeoPoint>, one_way: bool, speed_kmph: f32) -> Self {
        Self { points, one_way, speed_kmph }
    }

    #[inline]
    pub fn points(&self) -> &[GeoPoint] {
        &self.points
    }

    /// # Panics
    /// Panics if `idx >= point_count()`.
    #[inline]
    pub fn point(&self, idx: u32) -> GeoPoint {
        self.points[idx as usize]
    }

    #[inline]
    pub fn point_count(&self) -> usize {
        self.points.len()
    }

    #[inline]
    pub fn segment_count(&self) -> usize {
        self.points.len() - 1
    }

    /// `true` if the road may only be traversed in the forward orientation.
    #[inline]
    pub fn is_one_way(&self) -> bool {
        self.one_way
    }

    #[inline]
    pub fn speed_kmph(&self) -> f32 {
        self.speed_kmph
    }
}

// ── Geometry ──────────────────────────────────────────────────────────────────

/// All roads of the network, indexed densely by `FeatureId`.
#[derive(Clone, Debug, Default)]
pub struct Geometry {
    roads: Vec<Road>,
}

impl Geometry {
    pub(crate) fn new(roads: Vec<Road>) -> Self {
        Self { roads }
    }

    /// # Panics
    /// Panics if `feature` is not part of this geometry.
    #[inline]
    pub fn road(&self, feature: FeatureId) -> &Road {
        &self.roads[feature.index()]
    }

    #[inline]
    pub fn try_road(&self, feature: FeatureId) -> Option<&Road> {
        self.roads.get(feature.index())
    }

    /// Coordinate of a polyline vertex.
    ///
    /// # Panics
    /// Panics if the feature or point index is out of range.
    #[inline]
    pub fn point(&self, rp: RoadPoint) -> GeoPoint {
        self.road(rp.feature).point(rp.point_idx)
    }

    #[inline]
    pub fn is_one_way(&self, feature: FeatureId) -> bool {
        self.road(feature).is_one_way()
    }

    pub fn road_count(&self) -> usize {
        self.roads.len()
    }

    /// Total number of undirected segments (each is two search vertices on
    /// two-way roads).
    pub fn segment_count(&self) -> usize {
        self.roads.iter().map(Road::segment_count).sum()
    }

    /// Iterator over `(FeatureId, &Road)` in id order.
    pub fn roads(&self) -> impl Iterator<Item = (FeatureId, &Road)> + '_ {
        self.roads
            .iter()
            .enumerate()
            .map(|(i, r)| (FeatureId(i as u32), r))
    }
}
