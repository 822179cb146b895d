//! Directed road segments and polyline points.
//!
//! A road feature is a polyline `p0, p1, …, pn`.  Segment `i` joins `p_i` and
//! `p_{i+1}`; its `forward` flag says which way it is traversed:
//!
//! ```text
//!  forward:  p_i ──▶ p_{i+1}     back = p_i,     front = p_{i+1}
//!  reverse:  p_i ◀── p_{i+1}     back = p_{i+1}, front = p_i
//! ```

use std::fmt;

use crate::FeatureId;

// ── RoadPoint ─────────────────────────────────────────────────────────────────

/// One vertex of a road's polyline geometry.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RoadPoint {
    pub feature: FeatureId,
    pub point_idx: u32,
}

impl RoadPoint {
    #[inline]
    pub fn new(feature: FeatureId, point_idx: u32) -> Self {
        Self { feature, point_idx }
    }
}

impl fmt::Display for RoadPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.feature, self.point_idx)
    }
}

// ── Segment ───────────────────────────────────────────────────────────────────

/// A directed, oriented piece of a road: the `segment_idx`-th span of
/// `feature`, traversed forward or in reverse.
///
/// Equality is structural, so `(f, i, true)` and `(f, i, false)` are distinct
/// search vertices.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Segment {
    pub feature: FeatureId,
    pub segment_idx: u32,
    pub forward: bool,
}

impl Segment {
    #[inline]
    pub fn new(feature: FeatureId, segment_idx: u32, forward: bool) -> Self {
        Self { feature, segment_idx, forward }
    }

    /// Index of the polyline point at the front (`front == true`) or back
    /// endpoint of this segment.
    #[inline]
    pub fn point_idx(self, front: bool) -> u32 {
        if self.forward == front { self.segment_idx + 1 } else { self.segment_idx }
    }

    #[inline]
    pub fn road_point(self, front: bool) -> RoadPoint {
        RoadPoint::new(self.feature, self.point_idx(front))
    }

    /// The same span traversed the other way.
    #[inline]
    pub fn reversed(self) -> Segment {
        Segment { forward: !self.forward, ..self }
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let arrow = if self.forward { "+" } else { "-" };
        write!(f, "{}:{}{}", self.feature, self.segment_idx, arrow)
    }
}

// ── Direction ─────────────────────────────────────────────────────────────────

/// Traversal direction of an adjacency query.
///
/// `Outgoing` asks "where can I go after `s`", `Ingoing` asks "where could I
/// have come from before `s`" (used by backward searches).
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    Outgoing,
    Ingoing,
}

impl Direction {
    #[inline]
    pub fn is_outgoing(self) -> bool {
        matches!(self, Direction::Outgoing)
    }

    /// Endpoint of a segment at which adjacency in this direction attaches:
    /// the front for outgoing traversal, the back for ingoing.
    #[inline]
    pub fn attach_front(self) -> bool {
        self.is_outgoing()
    }
}
