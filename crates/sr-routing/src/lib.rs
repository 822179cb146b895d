//! `sr-routing` — route queries between arbitrary points.
//!
//! Query points rarely coincide with a network vertex.  Each endpoint is
//! snapped onto the nearest segment and becomes a [`FakeVertex`]; a
//! per-query [`GraphStarter`] then presents the shared, immutable
//! [`IndexGraph`](sr_graph::IndexGraph) plus those two synthetic vertices as
//! one homogeneous [`Vertex`] space that [`AStar`] searches without knowing
//! which vertices are real.
//!
//! # Crate layout
//!
//! | Module          | Contents                                                   |
//! |-----------------|------------------------------------------------------------|
//! | [`fake_vertex`] | `FakeVertex` — a query point snapped onto a segment        |
//! | [`vertex`]      | `Vertex` — `Real(Segment)` / `StartFake` / `FinishFake`    |
//! | [`starter`]     | `GraphStarter` — fake-aware adjacency and point lookup     |
//! | [`astar`]       | `SearchGraph` trait, `AStar`, `SearchPath`                 |
//! | [`router`]      | `Router` trait, `Route`, `IndexRouter`                     |
//! | [`error`]       | `RoutingError`, `RoutingResult<T>`                         |
//!
//! # Feature flags
//!
//! | Flag       | Effect                                                    |
//! |------------|-----------------------------------------------------------|
//! | `parallel` | `IndexRouter::route_many` runs queries on Rayon.          |
//! | `fx-hash`  | A* bookkeeping uses `FxHashMap`.                          |
//! | `serde`    | Derives `Serialize`/`Deserialize` on public value types.  |

pub mod astar;
pub mod error;
pub mod fake_vertex;
pub mod router;
pub mod starter;
pub mod vertex;


pub use astar::{AStar, SearchGraph, SearchPath};
pub use error::{RoutingError, RoutingResult};
pub use fake_vertex::FakeVertex;
pub use router::{IndexRouter, Route, Router};
pub use starter::GraphStarter;
pub use vertex::{Vertex, VertexEdge};
