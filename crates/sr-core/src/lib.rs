//! `sr-core` — foundational types for the `segroute` routing engine.
//!
//! This crate is a dependency of every other `sr-*` crate.  It has no `sr-*`
//! dependencies and minimal external ones (only `thiserror`, plus optional
//! `serde`).
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`ids`]         | `FeatureId`                                           |
//! | [`geo`]         | `GeoPoint`, haversine distance                        |
//! | [`segment`]     | `Segment`, `RoadPoint`, `Direction`                   |
//! | [`edge`]        | `Edge<V>`                                             |
//! | [`config`]      | `RoutingConfig`                                       |
//! | [`error`]       | `CoreError`, `CoreResult`                             |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public value types.  |

pub mod config;
pub mod edge;
pub mod error;
pub mod geo;
pub mod ids;
pub mod segment;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::RoutingConfig;
pub use edge::{Edge, SegmentEdge};
pub use error::{CoreError, CoreResult};
pub use geo::GeoPoint;
pub use ids::FeatureId;
pub use segment::{Direction, RoadPoint, Segment};
