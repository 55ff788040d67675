//! Extraction-subsystem error type.

use thiserror::Error;

/// Fatal errors produced by `waygraph-extract`.
///
/// Per-feature problems are not errors — they become
/// [`SkipReason`](crate::SkipReason) diagnostics and the run continues.
#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("feature collection is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

pub type ExtractResult<T> = Result<T, ExtractError>;
