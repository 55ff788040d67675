//! Node and edge records — the persisted data model of the graph.
//!
//! Field order matters: serde serializes struct fields in declaration order,
//! and output files must be byte-identical across reruns on unchanged input.

use serde::{Deserialize, Serialize};

use crate::geo::GeoPoint;
use crate::ids::NodeId;

// ── NodeKind ──────────────────────────────────────────────────────────────────

/// The category a source feature normalized into.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeKind {
    /// Polygon features (footprints); positioned at the outer-ring centroid.
    Building,
    /// LineString features (walkways); positioned at the vertex mean.
    Path,
    /// Point features; positioned at their own coordinate.
    Landmark,
}

impl NodeKind {
    /// Lowercase label, as serialized in graph files.
    pub fn as_str(self) -> &'static str {
        match self {
            NodeKind::Building => "building",
            NodeKind::Path     => "path",
            NodeKind::Landmark => "landmark",
        }
    }

    /// Capitalized label, used when synthesizing names for unnamed features
    /// (`"Building_7"`, `"Landmark_5"`, …).
    pub fn label(self) -> &'static str {
        match self {
            NodeKind::Building => "Building",
            NodeKind::Path     => "Path",
            NodeKind::Landmark => "Landmark",
        }
    }
}

impl std::fmt::Display for NodeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── Node ──────────────────────────────────────────────────────────────────────

/// One normalized map feature.  Immutable once created; never deleted during
/// edge construction.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Node {
    pub id: NodeId,
    pub name: String,
    pub lat: f64,
    pub lng: f64,
    #[serde(rename = "type")]
    pub kind: NodeKind,
    /// Placeholder for future accessibility tagging — no source signal maps
    /// to this yet, so it is always `true`.
    pub accessible: bool,
}

impl Node {
    /// The node's position as a [`GeoPoint`].
    #[inline]
    pub fn point(&self) -> GeoPoint {
        GeoPoint::new(self.lat, self.lng)
    }
}

// ── Edge ──────────────────────────────────────────────────────────────────────

/// A weighted connection between two nodes.
///
/// `distance_m` is the haversine distance between the endpoints, rounded to
/// two decimals.  Whether the pair also appears reversed depends on the edge
/// strategy that produced it (k-NN emits directed pairs, threshold emits each
/// unordered pair once).
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Edge {
    pub from: NodeId,
    pub to: NodeId,
    pub distance_m: f64,
}
