//! I/O-subsystem error type.

use thiserror::Error;

/// Errors produced by `waygraph-io`.  All are fatal: a failed write leaves
/// no partial output at the destination path.
#[derive(Debug, Error)]
pub enum GraphIoError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid graph file: {0}")]
    Invalid(String),
}

pub type GraphIoResult<T> = Result<T, GraphIoError>;
