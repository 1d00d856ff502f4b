// crates/riskglobe-core/src/model/raw.rs

// ---------------------------------------------------------------------------
// FILE GUARD: This entire file is skipped if 'json' feature is missing.
// ---------------------------------------------------------------------------
#![cfg(feature = "json")]

use serde::Deserialize;
use serde_json::Value;

/// Raw GeoJSON FeatureCollection as served by the boundary endpoint.
/// Only the members the globe reads are modelled; everything else is ignored.
#[derive(Debug, Deserialize)]
pub struct FeatureCollectionRaw {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub features: Vec<FeatureRaw>,
}

#[derive(Debug, Deserialize)]
pub struct FeatureRaw {
    /// GeoJSON allows `"properties": null`.
    #[serde(default)]
    pub properties: Option<PropertiesRaw>,
    #[serde(default)]
    pub geometry: Option<GeometryRaw>,
}

/// Natural Earth admin-0 properties.
#[derive(Debug, Default, Deserialize)]
pub struct PropertiesRaw {
    #[serde(rename = "ISO_A2", default)]
    pub iso_a2: Option<String>,
    #[serde(rename = "NAME", default)]
    pub name: Option<String>,
}

/// Geometry with untyped coordinates: nesting depth depends on `type`, and
/// positions may carry a third (altitude) value.
#[derive(Debug, Deserialize)]
pub struct GeometryRaw {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub coordinates: Value,
}
