//! `waygraph-connect` — edge construction for the waygraph pipeline.
//!
//! Given a finalized node list, decides which pairs are connected and at
//! what weight, under one of two interchangeable strategies:
//!
//! | Strategy                     | Graph shape                     | Default |
//! |------------------------------|---------------------------------|---------|
//! | [`EdgeStrategy::KNearest`]   | directed, possibly asymmetric   | k = 3   |
//! | [`EdgeStrategy::Threshold`]  | undirected, each pair once      | 150 m   |

pub mod builder;
pub mod error;
pub mod strategy;


pub use builder::build_edges;
pub use error::{ConnectError, ConnectResult};
pub use strategy::EdgeStrategy;
