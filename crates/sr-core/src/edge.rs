//! Weighted adjacency records.

/// A directed, weighted edge to `target`.
///
/// Generic over the vertex type so the real network (`Edge<Segment>`) and a
/// per-query graph that adds synthetic vertices can share one record layout.
/// Weights are travel costs in seconds and are never negative.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Edge<V> {
    pub target: V,
    pub weight: f64,
}

impl<V> Edge<V> {
    #[inline]
    pub fn new(target: V, weight: f64) -> Self {
        debug_assert!(weight >= 0.0, "negative edge weight {weight}");
        Self { target, weight }
    }
}

/// Adjacency record of the real road network.
pub type SegmentEdge = Edge<crate::Segment>;
