//! Routing trait and the default point-to-point router.
//!
//! # Pluggability
//!
//! Applications call routing through the [`Router`] trait, so a different
//! search (bidirectional, contraction hierarchies) can be swapped in without
//! touching callers.  The default [`IndexRouter`] snaps both endpoints, wires
//! them in with a [`GraphStarter`] and runs [`AStar`].
//!
//! # Cost units
//!
//! All costs are travel times in **seconds** (`f64`).

use log::{debug, warn};

use sr_core::{GeoPoint, RoutingConfig, Segment};
use sr_graph::IndexGraph;

use crate::{AStar, FakeVertex, GraphStarter, RoutingError, RoutingResult, Vertex};

// ── Route ─────────────────────────────────────────────────────────────────────

/// The result of a routing query.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Route {
    /// Real segments to traverse in order.  The first contains the start, the
    /// last contains the finish.
    pub segments: Vec<Segment>,
    /// Polyline from the exact start point to the exact finish point.
    pub points: Vec<GeoPoint>,
    /// Estimated travel time in seconds.
    pub total_time_secs: f64,
}

impl Route {
    /// Length of `points` as a polyline, in metres.
    pub fn length_m(&self) -> f64 {
        self.points
            .windows(2)
            .map(|w| w[0].distance_m(w[1]))
            .sum()
    }

    /// `true` if the route has no real segment (never produced by
    /// [`IndexRouter`]; useful for placeholder routes).
    pub fn is_trivial(&self) -> bool {
        self.segments.is_empty()
    }
}

// ── Router trait ──────────────────────────────────────────────────────────────

/// Pluggable point-to-point routing engine.
///
/// # Thread safety
///
/// Implementations must be `Send + Sync` so one router can serve many
/// concurrent queries against one shared graph.
pub trait Router: Send + Sync {
    /// Compute a route from `start` to `finish`.
    fn route(&self, graph: &IndexGraph, start: GeoPoint, finish: GeoPoint) -> RoutingResult<Route>;
}

// ── IndexRouter ───────────────────────────────────────────────────────────────

/// A* over an [`IndexGraph`] with fake start and finish vertices.
#[derive(Clone, Debug)]
pub struct IndexRouter {
    config: RoutingConfig,
}

impl IndexRouter {
    /// Create a router after validating `config`.
    pub fn new(config: RoutingConfig) -> RoutingResult<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    #[inline]
    pub fn config(&self) -> &RoutingConfig {
        &self.config
    }

    fn snap(&self, graph: &IndexGraph, pos: GeoPoint) -> Option<FakeVertex> {
        graph
            .snap(pos, self.config.max_snap_distance_m)
            .map(|p| {
                debug!(
                    "snapped {pos} to {}:{} at {} ({:.1} m)",
                    p.feature, p.segment_idx, p.point, p.distance_m
                );
                FakeVertex::from(p)
            })
    }

    /// Route every `(start, finish)` pair independently against `graph`.
    ///
    /// Results are in input order.  With the `parallel` feature the queries
    /// run on Rayon, each with its own [`GraphStarter`] over the shared graph.
    pub fn route_many(
        &self,
        graph: &IndexGraph,
        queries: &[(GeoPoint, GeoPoint)],
    ) -> RoutingResult<Vec<RoutingResult<Route>>> {
        #[cfg(not(feature = "parallel"))]
        {
            Ok(queries
                .iter()
                .map(|&(start, finish)| self.route(graph, start, finish))
                .collect())
        }

        #[cfg(feature = "parallel")]
        {
            use rayon::prelude::*;

            let run = || {
                queries
                    .par_iter()
                    .map(|&(start, finish)| self.route(graph, start, finish))
                    .collect()
            };
            match self.config.num_threads {
                Some(n) => {
                    let pool = rayon::ThreadPoolBuilder::new().num_threads(n).build()?;
                    Ok(pool.install(run))
                }
                None => Ok(run()),
            }
        }
    }
}

impl Default for IndexRouter {
    fn default() -> Self {
        Self { config: RoutingConfig::default() }
    }
}

impl Router for IndexRouter {
    fn route(&self, graph: &IndexGraph, start: GeoPoint, finish: GeoPoint) -> RoutingResult<Route> {
        let Some(start_vertex) = self.snap(graph, start) else {
            warn!("start {start} is not near any road");
            return Err(RoutingError::StartNotSnapped(start));
        };
        let Some(finish_vertex) = self.snap(graph, finish) else {
            warn!("finish {finish} is not near any road");
            return Err(RoutingError::FinishNotSnapped(finish));
        };

        let starter = GraphStarter::new(graph, start_vertex, finish_vertex);
        let path = AStar::find_path(&starter, Vertex::StartFake, Vertex::FinishFake)
            .ok_or(RoutingError::NoRoute { start, finish })?;

        let vertices = &path.vertices;
        let points = (0..GraphStarter::route_len(vertices))
            .map(|i| starter.route_point(vertices, i))
            .collect();
        let segments = vertices.iter().filter_map(|v| v.as_real()).collect();

        Ok(Route { segments, points, total_time_secs: path.weight })
    }
}
