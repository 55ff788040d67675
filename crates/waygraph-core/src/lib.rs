//! `waygraph-core` — foundational types for the waygraph pipeline.
//!
//! This crate is a dependency of every other `waygraph-*` crate.  It
//! intentionally has no `waygraph-*` dependencies and only one external one
//! (`serde`).
//!
//! # What lives here
//!
//! | Module     | Contents                                      |
//! |------------|-----------------------------------------------|
//! | [`geo`]    | `GeoPoint`, haversine distance, `round_cm`    |
//! | [`ids`]    | `NodeId`                                      |
//! | [`model`]  | `Node`, `NodeKind`, `Edge`                    |

pub mod geo;
pub mod ids;
pub mod model;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use geo::{GeoPoint, round_cm};
pub use ids::NodeId;
pub use model::{Edge, Node, NodeKind};
