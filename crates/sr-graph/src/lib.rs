//! `sr-graph` — the immutable road network a route query runs against.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                  |
//! |---------------|-----------------------------------------------------------|
//! | [`geometry`]  | `Road`, `Geometry` — polylines and one-way flags          |
//! | [`estimator`] | `EdgeEstimator` trait, `CarEstimator`                     |
//! | [`graph`]     | `IndexGraph` (joint-based adjacency), `IndexGraphBuilder` |
//! | [`snap`]      | `Projection`, segment R-tree                              |
//! | [`error`]     | `GraphError`, `GraphResult<T>`                            |
//!
//! # Vertex model
//!
//! Search vertices are directed [`Segment`](sr_core::Segment)s, not polyline
//! points.  Two segments are adjacent when the front of one is the back of the
//! other, either on the same road or across a joint shared by several roads.
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                       |
//! |---------|--------------------------------------------------------------|
//! | `serde` | Derives `Serialize`/`Deserialize` on public value types.     |

pub mod error;
pub mod estimator;
pub mod geometry;
pub mod graph;
pub mod snap;

#[cfg(test)]
mod tests;

pub use error::{GraphError, GraphResult};
pub use estimator::{CarEstimator, EdgeEstimator};
pub use geometry::{Geometry, Road};
pub use graph::{IndexGraph, IndexGraphBuilder};
pub use snap::Projection;
