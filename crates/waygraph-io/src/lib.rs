//! `waygraph-io` — flat-file persistence for waygraph graphs.
//!
//! # Crate layout
//!
//! | Module    | Contents                                              |
//! |-----------|-------------------------------------------------------|
//! | [`file`]  | `GraphFile`, `EdgeList`, structural validation        |
//! | [`json`]  | `read_graph`, `write_graph`, `write_edges` (atomic)   |
//! | [`error`] | `GraphIoError`, `GraphIoResult<T>`                    |

pub mod error;
pub mod file;
pub mod json;


pub use error::{GraphIoError, GraphIoResult};
pub use file::{EdgeList, GraphFile};
pub use json::{read_graph, write_edges, write_graph};
