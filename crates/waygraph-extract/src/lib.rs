//! `waygraph-extract` — feature normalization for the waygraph pipeline.
//!
//! Turns a GeoJSON-style feature collection into a flat list of [`Node`]s
//! with sequential ids, dropping (and counting) features that cannot be
//! resolved.
//!
//! # Crate layout
//!
//! | Module        | Contents                                            |
//! |---------------|-----------------------------------------------------|
//! | [`feature`]   | Lenient raw wire types (`FeatureCollection`, …)     |
//! | [`normalize`] | `extract_from_path`, `Extraction`, `SkipReason`     |
//! | [`error`]     | `ExtractError`, `ExtractResult<T>`                  |
//!
//! [`Node`]: waygraph_core::Node

pub mod error;
pub mod feature;
pub mod normalize;


pub use error::{ExtractError, ExtractResult};
pub use feature::{Feature, FeatureCollection, RawGeometry};
pub use normalize::{Extraction, SkipReason, extract_collection, extract_from_path, extract_from_str};
