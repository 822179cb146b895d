//! Segment-indexed road graph and builder.
//!
//! # Data layout
//!
//! Roads are stored as polylines in [`Geometry`].  Connectivity between roads
//! lives in **joints**: a joint is a set of road points (on different roads)
//! that are the same physical intersection.  Joint membership is stored in
//! CSR form:
//!
//! ```text
//! joint_points[ joint_start[j] .. joint_start[j+1] ]
//! ```
//!
//! plus a `RoadPoint → joint` map.  Road points not in any joint connect
//! only to their neighbours on the same road.
//!
//! # Adjacency
//!
//! Outgoing edges of segment `s` attach at its front point, ingoing edges at
//! its back point.  At that point (or at every point of its joint) the
//! neighbouring segments of each road are emitted, respecting one-way roads.
//! No adjacency is materialized; every [`IndexGraph::edge_list`] call walks
//! the joint and appends into a caller-owned buffer.

use std::collections::HashMap;

use log::debug;
use rstar::RTree;

use sr_core::{Direction, Edge, FeatureId, GeoPoint, RoadPoint, Segment};

use crate::estimator::EdgeEstimator;
use crate::geometry::{Geometry, Road};
use crate::snap::{self, Projection, SegmentEntry};
use crate::{GraphError, GraphResult};

// ── IndexGraph ────────────────────────────────────────────────────────────────

/// Immutable road network: geometry, joints, cost model, and segment index.
///
/// `IndexGraph` is `Send + Sync` and is meant to be built once and borrowed
/// by any number of concurrent queries.  Do not construct directly; use
/// [`IndexGraphBuilder`].
pub struct IndexGraph {
    geometry: Geometry,
    estimator: Box<dyn EdgeEstimator>,

    // ── Joints (CSR) ──────────────────────────────────────────────────────
    point_joint:  HashMap<RoadPoint, u32>,
    joint_start:  Vec<u32>,
    joint_points: Vec<RoadPoint>,

    // ── Spatial index ─────────────────────────────────────────────────────
    spatial_idx: RTree<SegmentEntry>,
}

impl IndexGraph {
    #[inline]
    pub fn geometry(&self) -> &Geometry {
        &self.geometry
    }

    #[inline]
    pub fn estimator(&self) -> &dyn EdgeEstimator {
        self.estimator.as_ref()
    }

    pub fn road_count(&self) -> usize {
        self.geometry.road_count()
    }

    pub fn joint_count(&self) -> usize {
        self.joint_start.len() - 1
    }

    pub fn is_empty(&self) -> bool {
        self.geometry.road_count() == 0
    }

    /// All road points that share a joint with `rp`, including `rp` itself.
    /// `None` if `rp` is not part of any joint.
    pub fn joint_members(&self, rp: RoadPoint) -> Option<&[RoadPoint]> {
        let j = *self.point_joint.get(&rp)? as usize;
        let start = self.joint_start[j] as usize;
        let end = self.joint_start[j + 1] as usize;
        Some(&self.joint_points[start..end])
    }

    // ── Graph traversal ───────────────────────────────────────────────────

    /// Append the real adjacency of `segment` in `direction` to `out`.
    ///
    /// `out` is **not** cleared, so callers can compose several sources into
    /// one buffer.  Generic over the buffer's vertex type so wrappers with a
    /// richer vertex space need no intermediate copy.
    ///
    /// Outgoing weights are the cost of the neighbouring segment; ingoing
    /// weights are the cost of `segment` itself, so the same physical move
    /// costs the same in both directions.
    ///
    /// # Panics
    /// Panics if `segment` does not exist in this graph.
    pub fn edge_list<V: From<Segment>>(
        &self,
        segment: Segment,
        direction: Direction,
        out: &mut Vec<Edge<V>>,
    ) {
        assert!(
            (segment.segment_idx as usize) < self.geometry.road(segment.feature).segment_count(),
            "segment {segment} out of range"
        );
        let attach = segment.road_point(direction.attach_front());
        match self.joint_members(attach) {
            Some(members) => {
                for &rp in members {
                    self.neighboring_edges(segment, rp, direction, out);
                }
            }
            None => self.neighboring_edges(segment, attach, direction, out),
        }
    }

    fn neighboring_edges<V: From<Segment>>(
        &self,
        from: Segment,
        rp: RoadPoint,
        direction: Direction,
        out: &mut Vec<Edge<V>>,
    ) {
        let road = self.geometry.road(rp.feature);
        let two_way = !road.is_one_way();
        let outgoing = direction.is_outgoing();

        // Segment leaving `rp` towards the road's end (outgoing) or arriving
        // at `rp` from the road's end (ingoing).
        if (outgoing || two_way) && (rp.point_idx as usize) + 1 < road.point_count() {
            let neighbor = Segment::new(rp.feature, rp.point_idx, outgoing);
            self.neighboring_edge(from, neighbor, road, direction, out);
        }
        // Same, towards / from the road's start.
        if (!outgoing || two_way) && rp.point_idx > 0 {
            let neighbor = Segment::new(rp.feature, rp.point_idx - 1, !outgoing);
            self.neighboring_edge(from, neighbor, road, direction, out);
        }
    }

    #[inline]
    fn neighboring_edge<V: From<Segment>>(
        &self,
        from: Segment,
        neighbor: Segment,
        neighbor_road: &Road,
        direction: Direction,
        out: &mut Vec<Edge<V>>,
    ) {
        let weight = match direction {
            Direction::Outgoing => self.estimator.segment_weight(neighbor, neighbor_road),
            Direction::Ingoing => {
                self.estimator.segment_weight(from, self.geometry.road(from.feature))
            }
        };
        out.push(Edge::new(V::from(neighbor), weight));
    }

    // ── Spatial queries ───────────────────────────────────────────────────

    /// Project `pos` onto the nearest road segment.
    ///
    /// Returns `None` if the graph has no roads or the projection is farther
    /// than `max_distance_m`.
    pub fn snap(&self, pos: GeoPoint, max_distance_m: Option<f64>) -> Option<Projection> {
        snap::nearest(&self.spatial_idx, pos, max_distance_m)
    }
}

// ── IndexGraphBuilder ─────────────────────────────────────────────────────────

/// Construct an [`IndexGraph`] incrementally, then call [`build`](Self::build).
///
/// Roads and joints may be added in any order; joints are validated against
/// the final set of roads in `build()`.
///
/// # Example
///
/// ```
/// use sr_core::{GeoPoint, RoadPoint};
/// use sr_graph::{CarEstimator, IndexGraphBuilder};
///
/// let mut b = IndexGraphBuilder::new();
/// let main = b.add_road(
///     vec![GeoPoint::new(0.0, 0.0), GeoPoint::new(0.0, 0.01)], false, 50.0,
/// ).unwrap();
/// let side = b.add_road(
///     vec![GeoPoint::new(0.0, 0.01), GeoPoint::new(0.01, 0.01)], true, 30.0,
/// ).unwrap();
/// b.add_joint(&[RoadPoint::new(main, 1), RoadPoint::new(side, 0)]);
/// let graph = b.build(CarEstimator::default()).unwrap();
/// assert_eq!(graph.road_count(), 2);
/// assert_eq!(graph.joint_count(), 1);
/// ```
pub struct IndexGraphBuilder {
    roads:  Vec<Road>,
    joints: Vec<Vec<RoadPoint>>,
}

impl IndexGraphBuilder {
    pub fn new() -> Self {
        Self { roads: Vec::new(), joints: Vec::new() }
    }

    /// Pre-allocate for the expected number of roads and joints.
    pub fn with_capacity(roads: usize, joints: usize) -> Self {
        Self {
            roads:  Vec::with_capacity(roads),
            joints: Vec::with_capacity(joints),
        }
    }

    /// Add a road polyline and return its `FeatureId` (sequential from 0).
    ///
    /// - `one_way`: traversal allowed only from the first point to the last.
    /// - `speed_kmph`: free-flow speed, must be positive.
    pub fn add_road(
        &mut self,
        points: Vec<GeoPoint>,
        one_way: bool,
        speed_kmph: f32,
    ) -> GraphResult<FeatureId> {
        let id = FeatureId(self.roads.len() as u32);
        if points.len() < 2 {
            return Err(GraphError::DegenerateRoad(id));
        }
        if !(speed_kmph > 0.0 && speed_kmph.is_finite()) {
            return Err(GraphError::InvalidSpeed { feature: id, speed_kmph });
        }
        self.roads.push(Road::new(points, one_way, speed_kmph));
        Ok(id)
    }

    /// Declare that `points` are the same physical intersection.
    pub fn add_joint(&mut self, points: &[RoadPoint]) {
        self.joints.push(points.to_vec());
    }

    /// Add a joint for every group of road points with bit-identical
    /// coordinates that span at least two points.
    ///
    /// Convenient for synthetic networks whose roads share exact vertices.
    /// Must not be mixed with [`add_joint`](Self::add_joint) on the same
    /// points.
    pub fn join_coincident_points(&mut self) {
        let mut groups: HashMap<(u64, u64), Vec<RoadPoint>> = HashMap::new();
        for (i, road) in self.roads.iter().enumerate() {
            for (p, pos) in road.points().iter().enumerate() {
                groups
                    .entry((pos.lat.to_bits(), pos.lon.to_bits()))
                    .or_default()
                    .push(RoadPoint::new(FeatureId(i as u32), p as u32));
            }
        }
        let mut joints: Vec<Vec<RoadPoint>> =
            groups.into_values().filter(|g| g.len() > 1).collect();
        // HashMap order is random; keep joint ids reproducible.
        joints.sort_unstable();
        self.joints.extend(joints);
    }

    /// Look up the position of a point added earlier.
    pub fn point_pos(&self, rp: RoadPoint) -> Option<GeoPoint> {
        self.roads
            .get(rp.feature.index())
            .and_then(|r| r.points().get(rp.point_idx as usize))
            .copied()
    }

    pub fn road_count(&self) -> usize { self.roads.len() }
    pub fn joint_count(&self) -> usize { self.joints.len() }

    /// Consume the builder and produce an [`IndexGraph`] that costs edges
    /// with `estimator`.
    ///
    /// Time complexity: O(J) for joints + O(S log S) for the R-tree bulk
    /// load, where J = joint members, S = segments.
    ///
    /// # Errors
    ///
    /// [`GraphError::FeatureNotFound`] / [`GraphError::PointOutOfRange`] for
    /// joints referencing missing points, [`GraphError::DuplicateJointPoint`]
    /// if a point is listed in two joints.
    pub fn build(self, estimator: impl EdgeEstimator + 'static) -> GraphResult<IndexGraph> {
        let mut point_joint: HashMap<RoadPoint, u32> = HashMap::new();
        let mut joint_start: Vec<u32> = Vec::with_capacity(self.joints.len() + 1);
        let mut joint_points: Vec<RoadPoint> = Vec::new();
        joint_start.push(0);

        for (j, members) in self.joints.iter().enumerate() {
            for &rp in members {
                let road = self
                    .roads
                    .get(rp.feature.index())
                    .ok_or(GraphError::FeatureNotFound(rp.feature))?;
                if rp.point_idx as usize >= road.point_count() {
                    return Err(GraphError::PointOutOfRange { point: rp, len: road.point_count() });
                }
                if point_joint.insert(rp, j as u32).is_some() {
                    return Err(GraphError::DuplicateJointPoint(rp));
                }
                joint_points.push(rp);
            }
            joint_start.push(joint_points.len() as u32);
        }

        let geometry = Geometry::new(self.roads);
        let spatial_idx = snap::build_index(&geometry);

        debug!(
            "built index graph: {} roads, {} segments, {} joints",
            geometry.road_count(),
            geometry.segment_count(),
            joint_start.len() - 1,
        );

        Ok(IndexGraph {
            geometry,
            estimator: Box::new(estimator),
            point_joint,
            joint_start,
            joint_points,
            spatial_idx,
        })
    }
}

impl Default for IndexGraphBuilder {
    fn default() -> Self {
        Self::new()
    }
}
