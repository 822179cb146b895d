//! Spatial index over road segments for snapping query points.
//!
//! An R-tree (via `rstar`) stores every segment as a line in planar
//! `[lon, lat]` space.  Nearest-segment search in that space is sufficient
//! within a city; the reported distance is the true great-circle distance to
//! the projected point.

use rstar::primitives::{GeomWithData, Line};
use rstar::RTree;

use sr_core::{FeatureId, GeoPoint};

use crate::geometry::Geometry;

/// R-tree entry: one undirected segment tagged with `(feature, segment_idx)`.
pub(crate) type SegmentEntry = GeomWithData<Line<[f64; 2]>, (FeatureId, u32)>;

/// A query point projected onto the nearest road segment.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Projection {
    pub feature: FeatureId,
    pub segment_idx: u32,
    /// The closest point on the segment to the query.
    pub point: GeoPoint,
    /// Great-circle distance from the query to `point`, in metres.
    pub distance_m: f64,
}

/// Bulk-load the segment index for `geometry` (O(N log N)).
pub(crate) fn build_index(geometry: &Geometry) -> RTree<SegmentEntry> {
    let entries: Vec<SegmentEntry> = geometry
        .roads()
        .flat_map(|(feature, road)| {
            road.points().windows(2).enumerate().map(move |(i, w)| {
                GeomWithData::new(Line::new(w[0].to_xy(), w[1].to_xy()), (feature, i as u32))
            })
        })
        .collect();
    RTree::bulk_load(entries)
}

/// Project `pos` onto the nearest segment in `index`.
pub(crate) fn nearest(
    index: &RTree<SegmentEntry>,
    pos: GeoPoint,
    max_distance_m: Option<f64>,
) -> Option<Projection> {
    let query = pos.to_xy();
    let entry = index.nearest_neighbor(&query)?;
    let point = GeoPoint::from_xy(entry.geom().nearest_point(&query));
    let distance_m = pos.distance_m(point);

    if max_distance_m.is_some_and(|max| distance_m > max) {
        return None;
    }

    let (feature, segment_idx) = entry.data;
    Some(Projection { feature, segment_idx, point, distance_m })
}
