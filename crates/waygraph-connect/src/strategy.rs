//! Edge-construction strategy selection.

use crate::error::{ConnectError, ConnectResult};

/// How node pairs are chosen for connection.
///
/// The two variants reflect two real usage modes: a dense local graph where
/// every node reaches its nearest few neighbors, and a proximity graph where
/// only genuinely close pairs connect.  A run picks exactly one; the edge
/// sets are not meant to be merged.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum EdgeStrategy {
    /// Connect each node to its `k` nearest neighbors (directed: A→B may
    /// exist without B→A).
    KNearest { k: usize },
    /// Connect every unordered pair at most `max_m` metres apart, once
    /// (undirected: no symmetric duplicate is emitted).
    Threshold { max_m: f64 },
}

impl EdgeStrategy {
    pub const DEFAULT_K: usize = 3;
    pub const DEFAULT_THRESHOLD_M: f64 = 150.0;

    /// k-nearest-neighbors with the default k = 3.
    pub fn k_nearest_default() -> Self {
        EdgeStrategy::KNearest { k: Self::DEFAULT_K }
    }

    /// Fixed threshold with the default 150 m.
    pub fn threshold_default() -> Self {
        EdgeStrategy::Threshold { max_m: Self::DEFAULT_THRESHOLD_M }
    }

    /// Reject unusable parameters before any computation starts.
    ///
    /// # Errors
    ///
    /// [`ConnectError::InvalidK`] for `k == 0`,
    /// [`ConnectError::InvalidThreshold`] for a threshold that is not a
    /// positive finite number.
    pub fn validate(self) -> ConnectResult<()> {
        match self {
            EdgeStrategy::KNearest { k } if k < 1 => Err(ConnectError::InvalidK(k)),
            EdgeStrategy::Threshold { max_m } if !(max_m.is_finite() && max_m > 0.0) => {
                Err(ConnectError::InvalidThreshold(max_m))
            }
            _ => Ok(()),
        }
    }
}

impl std::fmt::Display for EdgeStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EdgeStrategy::KNearest { k } => write!(f, "k-nearest (k={k})"),
            EdgeStrategy::Threshold { max_m } => write!(f, "threshold ({max_m} m)"),
        }
    }
}
