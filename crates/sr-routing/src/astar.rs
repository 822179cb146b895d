//! Generic A* search over any adjacency-list graph.
//!
//! The search only sees the [`SearchGraph`] trait, so it runs unchanged on
//! the bare [`IndexGraph`] (vertices are segments) and on a
//! [`GraphStarter`](crate::GraphStarter) (vertices include the fake
//! endpoints).

use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;
use std::fmt::Debug;
use std::hash::Hash;

use log::{debug, trace};

use sr_core::{Direction, Edge, Segment};
use sr_graph::IndexGraph;

#[cfg(not(feature = "fx-hash"))]
type Map<K, V> = std::collections::HashMap<K, V>;
#[cfg(feature = "fx-hash")]
type Map<K, V> = rustc_hash::FxHashMap<K, V>;

// ── SearchGraph ───────────────────────────────────────────────────────────────

/// Adjacency interface consumed by [`AStar`].
///
/// Edge methods **replace** the contents of `out`; the caller keeps one
/// buffer per search and reuses it for every expansion.
pub trait SearchGraph {
    type Vertex: Copy + Eq + Hash + Ord + Debug;

    fn outgoing_edges(&self, vertex: Self::Vertex, out: &mut Vec<Edge<Self::Vertex>>);

    fn ingoing_edges(&self, vertex: Self::Vertex, out: &mut Vec<Edge<Self::Vertex>>);

    /// Lower bound on the cost from `from` to `to`.
    fn heuristic_cost(&self, from: Self::Vertex, to: Self::Vertex) -> f64;
}

impl SearchGraph for IndexGraph {
    type Vertex = Segment;

    fn outgoing_edges(&self, vertex: Segment, out: &mut Vec<Edge<Segment>>) {
        out.clear();
        self.edge_list(vertex, Direction::Outgoing, out);
    }

    fn ingoing_edges(&self, vertex: Segment, out: &mut Vec<Edge<Segment>>) {
        out.clear();
        self.edge_list(vertex, Direction::Ingoing, out);
    }

    fn heuristic_cost(&self, from: Segment, to: Segment) -> f64 {
        let geometry = self.geometry();
        self.estimator().heuristic(
            geometry.point(from.road_point(true)),
            geometry.point(to.road_point(true)),
        )
    }
}

// ── SearchPath ────────────────────────────────────────────────────────────────

/// A shortest path: vertices from source to target inclusive, and its cost.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchPath<V> {
    pub vertices: Vec<V>,
    pub weight: f64,
}

// ── AStar ─────────────────────────────────────────────────────────────────────

/// A* over a [`SearchGraph`].
///
/// Optimal as long as `heuristic_cost` is consistent, which holds for the
/// estimator-based heuristics in this workspace.  [`AStar::dijkstra`] runs
/// the same loop with a zero potential.
pub struct AStar;

impl AStar {
    /// Shortest path from `from` to `to`, or `None` if `to` is unreachable.
    pub fn find_path<G: SearchGraph>(
        graph: &G,
        from: G::Vertex,
        to: G::Vertex,
    ) -> Option<SearchPath<G::Vertex>> {
        search(graph, from, to, |v| graph.heuristic_cost(v, to))
    }

    /// Plain Dijkstra: [`find_path`](Self::find_path) without a heuristic.
    pub fn dijkstra<G: SearchGraph>(
        graph: &G,
        from: G::Vertex,
        to: G::Vertex,
    ) -> Option<SearchPath<G::Vertex>> {
        search(graph, from, to, |_| 0.0)
    }
}

/// Heap entry ordered by `key` (cost + potential), then by vertex so ties
/// pop in a deterministic order.
#[derive(Copy, Clone, Debug)]
struct Queued<V> {
    key: f64,
    cost: f64,
    vertex: V,
}

impl<V: Ord> PartialEq for Queued<V> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<V: Ord> Eq for Queued<V> {}

impl<V: Ord> PartialOrd for Queued<V> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<V: Ord> Ord for Queued<V> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.key
            .total_cmp(&other.key)
            .then_with(|| self.vertex.cmp(&other.vertex))
    }
}

fn search<G, P>(graph: &G, from: G::Vertex, to: G::Vertex, potential: P) -> Option<SearchPath<G::Vertex>>
where
    G: SearchGraph,
    P: Fn(G::Vertex) -> f64,
{
    // dist[v] = best known cost to reach v; parent[v] = predecessor on that path.
    let mut dist: Map<G::Vertex, f64> = Map::default();
    let mut parent: Map<G::Vertex, G::Vertex> = Map::default();
    let mut edges: Vec<Edge<G::Vertex>> = Vec::new();
    let mut settled = 0usize;

    // Min-heap via Reverse (BinaryHeap is a max-heap).
    let mut heap: BinaryHeap<Reverse<Queued<G::Vertex>>> = BinaryHeap::new();
    dist.insert(from, 0.0);
    heap.push(Reverse(Queued { key: potential(from), cost: 0.0, vertex: from }));

    while let Some(Reverse(Queued { cost, vertex, .. })) = heap.pop() {
        // Skip stale heap entries.
        if dist.get(&vertex).is_some_and(|&best| cost > best) {
            continue;
        }
        settled += 1;
        trace!("settle {vertex:?} at {cost:.3}");

        if vertex == to {
            debug!("search settled {settled} vertices, cost {cost:.3}");
            return Some(SearchPath { vertices: reconstruct(&parent, from, to), weight: cost });
        }

        graph.outgoing_edges(vertex, &mut edges);
        for edge in &edges {
            let new_cost = cost + edge.weight;
            if dist.get(&edge.target).is_none_or(|&best| new_cost < best) {
                dist.insert(edge.target, new_cost);
                parent.insert(edge.target, vertex);
                heap.push(Reverse(Queued {
                    key: new_cost + potential(edge.target),
                    cost: new_cost,
                    vertex: edge.target,
                }));
            }
        }
    }

    debug!("search exhausted after {settled} vertices, target unreachable");
    None
}

fn reconstruct<V: Copy + Eq + Hash>(parent: &Map<V, V>, from: V, to: V) -> Vec<V> {
    let mut path = vec![to];
    let mut cur = to;
    while cur != from {
        cur = parent[&cur];
        path.push(cur);
    }
    path.reverse();
    path
}
