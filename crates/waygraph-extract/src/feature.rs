//! Raw wire types for the input feature collection.
//!
//! Deliberately lenient: the collection decodes to a list of opaque
//! `serde_json::Value`s, and each feature is decoded *individually* by the
//! normalizer.  One malformed feature then skips on its own instead of
//! failing the whole document.

use std::collections::HashMap;

use serde::Deserialize;
use serde_json::Value;

/// Top level of a feature collection file: `{ "features": [...] }`.
///
/// Only the `features` array is read; `type`, `crs`, and any other sibling
/// keys are ignored.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct FeatureCollection {
    pub features: Vec<Value>,
}

/// One feature, decoded leniently from its raw `Value`.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Feature {
    pub geometry: Option<RawGeometry>,
    /// Tag mapping.  Values are kept as raw JSON so a stray non-string tag
    /// does not sink the feature; name lookup only accepts string values.
    pub properties: HashMap<String, Value>,
}

/// Geometry with the type tag separated from the per-type coordinate
/// nesting, which is decoded later once the type is known.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct RawGeometry {
    #[serde(rename = "type")]
    pub kind: String,
    pub coordinates: Value,
}

impl Feature {
    /// The `name` property, if present, a string, and non-empty after
    /// trimming whitespace.
    pub fn name(&self) -> Option<&str> {
        self.properties
            .get("name")
            .and_then(Value::as_str)
            .map(str::trim)
            .filter(|s| !s.is_empty())
    }
}
