//! Feature normalization: raw features → canonical [`Node`] records.
//!
//! # Positioning rules
//!
//! | Geometry     | Position                                   | Kind       |
//! |--------------|--------------------------------------------|------------|
//! | `Polygon`    | vertex mean of the outer ring (first ring) | `building` |
//! | `LineString` | vertex mean of all vertices                | `path`     |
//! | `Point`      | its own coordinate                         | `landmark` |
//!
//! The vertex mean is a plain arithmetic mean of latitudes and of
//! longitudes — not an area or length-weighted centroid.  Downstream
//! consumers depend on these exact values, so this approximation is part of
//! the contract and must not be "fixed".  For polygons that includes the
//! GeoJSON closing vertex (first == last) when the ring carries one.
//!
//! # Skip policy
//!
//! A feature that cannot be resolved is dropped with a [`SkipReason`];
//! the run continues.  Skipped features consume no id, so ids stay gapless.

use std::fmt;
use std::fs;
use std::path::Path;

use log::{debug, info};
use serde_json::Value;

use waygraph_core::{GeoPoint, Node, NodeId, NodeKind};

use crate::error::ExtractResult;
use crate::feature::{Feature, FeatureCollection, RawGeometry};

// ── SkipReason ────────────────────────────────────────────────────────────────

/// Why a feature produced no node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    /// The feature element was not a decodable feature object.
    Malformed,
    /// No `geometry` member.
    MissingGeometry,
    /// A geometry type other than `Point`, `LineString`, or `Polygon`.
    UnsupportedGeometry(String),
    /// `coordinates` missing, null, or an empty list.
    EmptyCoordinates,
    /// `coordinates` present but not the expected nesting for the type.
    MalformedCoordinates,
    /// Resolved position falls outside WGS-84 bounds (or is non-finite).
    OutOfBounds,
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::Malformed => write!(f, "malformed feature"),
            SkipReason::MissingGeometry => write!(f, "missing geometry"),
            SkipReason::UnsupportedGeometry(t) => write!(f, "unsupported geometry type `{t}`"),
            SkipReason::EmptyCoordinates => write!(f, "missing or empty coordinates"),
            SkipReason::MalformedCoordinates => write!(f, "malformed coordinates"),
            SkipReason::OutOfBounds => write!(f, "coordinates out of WGS-84 bounds"),
        }
    }
}

// ── Extraction ────────────────────────────────────────────────────────────────

/// The result of normalizing a feature collection: the node list plus one
/// diagnostic per dropped feature.
#[derive(Debug, Default)]
pub struct Extraction {
    /// Nodes in input order, ids 1..=len with no gaps.
    pub nodes: Vec<Node>,
    /// One entry per skipped feature, in input order.
    pub skipped: Vec<SkipReason>,
}

impl Extraction {
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn skip_count(&self) -> usize {
        self.skipped.len()
    }
}

// ── Entry points ──────────────────────────────────────────────────────────────

/// Read and normalize a feature collection file.
///
/// # Errors
///
/// [`ExtractError::Io`](crate::ExtractError::Io) if the file cannot be read,
/// [`ExtractError::Json`](crate::ExtractError::Json) if the document itself
/// is not valid JSON.  Individual bad features never fail the run.
pub fn extract_from_path(path: &Path) -> ExtractResult<Extraction> {
    let text = fs::read_to_string(path)?;
    extract_from_str(&text)
}

/// Normalize a feature collection held in memory.
pub fn extract_from_str(text: &str) -> ExtractResult<Extraction> {
    let collection: FeatureCollection = serde_json::from_str(text)?;
    Ok(extract_collection(&collection))
}

/// Normalize an already-decoded collection.  Infallible: every per-feature
/// problem becomes a [`SkipReason`].
pub fn extract_collection(collection: &FeatureCollection) -> Extraction {
    let mut out = Extraction::default();
    let mut next_id = NodeId::FIRST;

    for (index, raw) in collection.features.iter().enumerate() {
        match resolve_feature(raw, next_id) {
            Ok(node) => {
                next_id = next_id.next();
                out.nodes.push(node);
            }
            Err(reason) => {
                debug!("skipping feature {index}: {reason}");
                out.skipped.push(reason);
            }
        }
    }

    info!(
        "normalized {} nodes from {} features ({} skipped)",
        out.node_count(),
        collection.features.len(),
        out.skip_count()
    );
    out
}

// ── Per-feature resolution ────────────────────────────────────────────────────

/// Resolve one raw feature into a node, or a reason it was dropped.
///
/// `id` is the id the node will receive *if* resolution succeeds; it is also
/// used when synthesizing a name for unnamed features.
fn resolve_feature(raw: &Value, id: NodeId) -> Result<Node, SkipReason> {
    let feature: Feature =
        serde_json::from_value(raw.clone()).map_err(|_| SkipReason::Malformed)?;

    let geometry = feature.geometry.as_ref().ok_or(SkipReason::MissingGeometry)?;
    let (point, kind) = resolve_geometry(geometry)?;

    if !point.in_bounds() {
        return Err(SkipReason::OutOfBounds);
    }

    let name = match feature.name() {
        Some(n) => n.to_string(),
        None => format!("{}_{}", kind.label(), id),
    };

    Ok(Node {
        id,
        name,
        lat: point.lat,
        lng: point.lng,
        kind,
        accessible: true, // placeholder until a source signal exists
    })
}

/// Dispatch on the geometry type and reduce the coordinates to one position.
fn resolve_geometry(geometry: &RawGeometry) -> Result<(GeoPoint, NodeKind), SkipReason> {
    if geometry.coordinates.is_null() {
        return Err(SkipReason::EmptyCoordinates);
    }

    match geometry.kind.as_str() {
        "Polygon" => {
            let rings: Vec<Vec<Vec<f64>>> = decode(&geometry.coordinates)?;
            // Outer ring only — inner rings (holes) are ignored.
            let outer = rings.first().ok_or(SkipReason::EmptyCoordinates)?;
            Ok((vertex_mean(outer)?, NodeKind::Building))
        }
        "LineString" => {
            let vertices: Vec<Vec<f64>> = decode(&geometry.coordinates)?;
            Ok((vertex_mean(&vertices)?, NodeKind::Path))
        }
        "Point" => {
            let position: Vec<f64> = decode(&geometry.coordinates)?;
            Ok((lng_lat(&position)?, NodeKind::Landmark))
        }
        other => Err(SkipReason::UnsupportedGeometry(other.to_string())),
    }
}

fn decode<T: serde::de::DeserializeOwned>(value: &Value) -> Result<T, SkipReason> {
    serde_json::from_value(value.clone()).map_err(|_| SkipReason::MalformedCoordinates)
}

/// A GeoJSON position is `[lng, lat, ...]`; extra members (elevation) are
/// tolerated and ignored.
fn lng_lat(position: &[f64]) -> Result<GeoPoint, SkipReason> {
    match position {
        [lng, lat, ..] => Ok(GeoPoint::new(*lat, *lng)),
        _ => Err(SkipReason::MalformedCoordinates),
    }
}

/// Arithmetic mean of the vertex latitudes and longitudes.
fn vertex_mean(vertices: &[Vec<f64>]) -> Result<GeoPoint, SkipReason> {
    if vertices.is_empty() {
        return Err(SkipReason::EmptyCoordinates);
    }

    let mut lat_sum = 0.0;
    let mut lng_sum = 0.0;
    for vertex in vertices {
        let p = lng_lat(vertex)?;
        lat_sum += p.lat;
        lng_sum += p.lng;
    }

    let n = vertices.len() as f64;
    Ok(GeoPoint::new(lat_sum / n, lng_sum / n))
}
