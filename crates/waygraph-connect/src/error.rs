//! Edge-construction error type.

use thiserror::Error;

/// Errors produced by `waygraph-connect`.  All are configuration errors,
/// raised before any pairwise distance is evaluated.
#[derive(Debug, Error)]
pub enum ConnectError {
    #[error("neighbor count k must be at least 1 (got {0})")]
    InvalidK(usize),

    #[error("distance threshold must be a positive, finite number of metres (got {0})")]
    InvalidThreshold(f64),
}

pub type ConnectResult<T> = Result<T, ConnectError>;
