//! Per-query view of the index graph with fake start and finish vertices.
//!
//! # Wiring
//!
//! ```text
//!            fake→normal                       normal→fake
//!   start ──────────────▶ (f,i,+) / (f,i,-)   (g,j,±) ──────────────▶ finish
//! ```
//!
//! - `StartFake` / `FinishFake` lead onto the segment they were snapped to:
//!   the forward orientation always, the reverse one too unless the road is
//!   one-way.
//! - A real segment that a fake vertex was snapped onto gains one extra edge
//!   back to that fake vertex, attached at the endpoint the adjacency query
//!   uses (front for outgoing, back for ingoing).
//!
//! # Connector weights
//!
//! Connectors are weighted with the estimator's heuristic between their two
//! coordinates, not with the exact cost of the partial segment.  This is an
//! approximation; changing it would change route costs and possibly the
//! chosen path.

use sr_core::{Direction, Edge, GeoPoint, Segment};
use sr_graph::IndexGraph;

use crate::astar::SearchGraph;
use crate::{FakeVertex, Vertex, VertexEdge};

/// Adjacency and coordinate lookup for one route query.
///
/// Borrows the shared graph read-only for the lifetime of the query and owns
/// nothing mutable, so `&GraphStarter` may be used from several threads.
pub struct GraphStarter<'a> {
    graph:  &'a IndexGraph,
    start:  FakeVertex,
    finish: FakeVertex,
}

impl<'a> GraphStarter<'a> {
    pub fn new(graph: &'a IndexGraph, start: FakeVertex, finish: FakeVertex) -> Self {
        Self { graph, start, finish }
    }

    #[inline]
    pub fn graph(&self) -> &'a IndexGraph {
        self.graph
    }

    #[inline]
    pub fn start(&self) -> &FakeVertex {
        &self.start
    }

    #[inline]
    pub fn finish(&self) -> &FakeVertex {
        &self.finish
    }

    // ── Coordinates ───────────────────────────────────────────────────────

    /// Coordinate of `vertex` at its front (`front == true`) or back end.
    ///
    /// Fake vertices report their own point regardless of `front`.  The real
    /// segment under the start reports the start point as its back end, and
    /// the one under the finish reports the finish point as its front end;
    /// every other endpoint comes from the road geometry.
    pub fn point(&self, vertex: Vertex, front: bool) -> GeoPoint {
        match vertex {
            Vertex::StartFake  => self.start.point(),
            Vertex::FinishFake => self.finish.point(),
            Vertex::Real(s) if !front && self.start.fits(s) => self.start.point(),
            Vertex::Real(s) if front && self.finish.fits(s) => self.finish.point(),
            Vertex::Real(s) => self.graph.geometry().point(s.road_point(front)),
        }
    }

    // ── Route materialization ─────────────────────────────────────────────

    /// Number of route points for a search result `path`.
    ///
    /// One point per vertex after the first: the start and the first real
    /// segment's back end collapse into the start point.
    ///
    /// # Panics
    /// Panics if `path` has fewer than 3 vertices.  A valid path is
    /// `StartFake`, at least one real segment, `FinishFake`.
    pub fn route_len(path: &[Vertex]) -> usize {
        assert!(path.len() >= 3, "route has {} vertices, need at least 3", path.len());
        path.len() - 1
    }

    /// The `index`-th route point of `path`: the start point for 0, the
    /// front of `path[index]` otherwise.
    ///
    /// # Panics
    /// Panics if `index >= path.len()`.
    pub fn route_point(&self, path: &[Vertex], index: usize) -> GeoPoint {
        if index == 0 {
            return self.start.point();
        }
        assert!(index < path.len(), "route point {index} out of range for {} vertices", path.len());
        self.point(path[index], true)
    }

    // ── Adjacency ─────────────────────────────────────────────────────────

    #[inline]
    pub fn outgoing_edges(&self, vertex: Vertex, out: &mut Vec<VertexEdge>) {
        self.edges(vertex, Direction::Outgoing, out);
    }

    #[inline]
    pub fn ingoing_edges(&self, vertex: Vertex, out: &mut Vec<VertexEdge>) {
        self.edges(vertex, Direction::Ingoing, out);
    }

    /// Replace the contents of `out` with the edges of `vertex` in
    /// `direction`.
    ///
    /// Fake vertices yield the same connectors in both directions.
    pub fn edges(&self, vertex: Vertex, direction: Direction, out: &mut Vec<VertexEdge>) {
        out.clear();

        match vertex {
            Vertex::StartFake  => self.fake_to_normal_edges(&self.start, out),
            Vertex::FinishFake => self.fake_to_normal_edges(&self.finish, out),
            Vertex::Real(segment) => {
                self.graph.edge_list(segment, direction, out);
                let attach_front = direction.attach_front();
                self.normal_to_fake_edge(segment, &self.start, Vertex::StartFake, attach_front, out);
                self.normal_to_fake_edge(segment, &self.finish, Vertex::FinishFake, attach_front, out);
            }
        }
    }

    fn fake_to_normal_edges(&self, fake: &FakeVertex, out: &mut Vec<VertexEdge>) {
        self.fake_to_normal_edge(fake, true, out);

        if !self.graph.geometry().is_one_way(fake.feature()) {
            self.fake_to_normal_edge(fake, false, out);
        }
    }

    fn fake_to_normal_edge(&self, fake: &FakeVertex, forward: bool, out: &mut Vec<VertexEdge>) {
        let segment = Segment::new(fake.feature(), fake.segment_idx(), forward);
        let to = self.graph.geometry().point(segment.road_point(true));
        let weight = self.graph.estimator().heuristic(fake.point(), to);
        out.push(Edge::new(Vertex::Real(segment), weight));
    }

    /// Append an edge from `segment` to `fake_id` if `fake` lies on it.
    ///
    /// `attach_front` picks the endpoint of `segment` the connector starts
    /// from.
    fn normal_to_fake_edge(
        &self,
        segment: Segment,
        fake: &FakeVertex,
        fake_id: Vertex,
        attach_front: bool,
        out: &mut Vec<VertexEdge>,
    ) {
        if !fake.fits(segment) {
            return;
        }

        let from = self.graph.geometry().point(segment.road_point(attach_front));
        let weight = self.graph.estimator().heuristic(from, fake.point());
        out.push(Edge::new(fake_id, weight));
    }

    /// Estimator heuristic between the front points of two vertices.
    pub fn heuristic_cost(&self, from: Vertex, to: Vertex) -> f64 {
        self.graph
            .estimator()
            .heuristic(self.point(from, true), self.point(to, true))
    }
}

impl SearchGraph for GraphStarter<'_> {
    type Vertex = Vertex;

    fn outgoing_edges(&self, vertex: Vertex, out: &mut Vec<VertexEdge>) {
        GraphStarter::outgoing_edges(self, vertex, out);
    }

    fn ingoing_edges(&self, vertex: Vertex, out: &mut Vec<VertexEdge>) {
        GraphStarter::ingoing_edges(self, vertex, out);
    }

    fn heuristic_cost(&self, from: Vertex, to: Vertex) -> f64 {
        GraphStarter::heuristic_cost(self, from, to)
    }
}
