// crates/riskglobe-core/src/model/convert.rs
#![cfg(feature = "json")]

use super::boundary::{Boundaries, BoundaryFeature, GeoPoint, Geometry, Ring};
use super::raw::{FeatureCollectionRaw, FeatureRaw, GeometryRaw};
use super::score::{ScoreRecord, ScoreTable};
use crate::error::{GlobeError, Result};
use crate::normalize::UNASSIGNED_CODE;
use serde_json::Value;
use std::collections::HashMap;
use std::io::Read;

impl ScoreTable {
    /// Parses the score document: `{ "<code>": { "score": n, "entitled": b }, ... }`.
    pub fn from_json_str(payload: &str) -> Result<Self> {
        let map: HashMap<String, ScoreRecord> = serde_json::from_str(payload)?;
        Ok(Self::from_map(map))
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let map: HashMap<String, ScoreRecord> = serde_json::from_reader(reader)?;
        Ok(Self::from_map(map))
    }
}

impl Boundaries {
    /// Parses a GeoJSON FeatureCollection of country outlines.
    pub fn from_json_str(payload: &str) -> Result<Self> {
        let raw: FeatureCollectionRaw = serde_json::from_str(payload)?;
        from_raw(raw)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let raw: FeatureCollectionRaw = serde_json::from_reader(reader)?;
        from_raw(raw)
    }
}

/// Converts the wire format into the domain model.
///
/// Features with unsupported or malformed geometry are kept (they still take
/// part in lookups) but carry no outline.
pub fn from_raw(raw: FeatureCollectionRaw) -> Result<Boundaries> {
    if raw.kind != "FeatureCollection" {
        return Err(GlobeError::InvalidData(format!(
            "expected GeoJSON FeatureCollection, got {}",
            raw.kind
        )));
    }

    let features = raw
        .features
        .into_iter()
        .map(feature_from_raw)
        .collect();

    Ok(Boundaries::new(features))
}

fn feature_from_raw(raw: FeatureRaw) -> BoundaryFeature {
    let properties = raw.properties.unwrap_or_default();
    let iso_a2 = properties
        .iso_a2
        .unwrap_or_else(|| UNASSIGNED_CODE.to_string());
    let name = properties.name.unwrap_or_default();

    let geometry = raw.geometry.as_ref().and_then(geometry_from_raw);
    if geometry.is_none() {
        tracing::warn!(code = %iso_a2, name = %name, "feature without usable geometry");
    }

    BoundaryFeature {
        iso_a2,
        name,
        geometry,
    }
}

fn geometry_from_raw(raw: &GeometryRaw) -> Option<Geometry> {
    match raw.kind.as_str() {
        "Polygon" => parse_polygon(&raw.coordinates).map(Geometry::Polygon),
        "MultiPolygon" => raw
            .coordinates
            .as_array()?
            .iter()
            .map(parse_polygon)
            .collect::<Option<Vec<_>>>()
            .map(Geometry::MultiPolygon),
        _ => None,
    }
}

fn parse_polygon(value: &Value) -> Option<Vec<Ring>> {
    value.as_array()?.iter().map(parse_ring).collect()
}

fn parse_ring(value: &Value) -> Option<Ring> {
    value.as_array()?.iter().map(parse_position).collect()
}

fn parse_position(value: &Value) -> Option<GeoPoint> {
    let pos = value.as_array()?;
    let lon = pos.first()?.as_f64()?;
    let lat = pos.get(1)?.as_f64()?;
    Some(GeoPoint::new(lon, lat))
}

#[cfg(test)]
mod tests {
    use super::*;

    const TWO_COUNTRIES: &str = r#"{
        "type": "FeatureCollection",
        "features": [
            {
                "type": "Feature",
                "properties": {"ISO_A2": "-99", "NAME": "France", "POP_EST": 67059887},
                "geometry": {"type": "MultiPolygon", "coordinates": [
                    [[[2.0, 46.0], [3.0, 46.0], [3.0, 47.0, 12.5], [2.0, 46.0]]],
                    [[[9.0, 42.0], [9.5, 42.0], [9.5, 43.0], [9.0, 42.0]]]
                ]}
            },
            {
                "type": "Feature",
                "properties": {"NAME": "Nowhere"},
                "geometry": {"type": "Point", "coordinates": [0.0, 0.0]}
            }
        ]
    }"#;

    #[test]
    fn parses_feature_collection() {
        let b = Boundaries::from_json_str(TWO_COUNTRIES).unwrap();
        assert_eq!(b.len(), 2);

        let france = &b.features[0];
        assert_eq!(france.code(), "FR");
        match france.geometry.as_ref().unwrap() {
            Geometry::MultiPolygon(polys) => {
                assert_eq!(polys.len(), 2);
                assert_eq!(polys[0][0][2], GeoPoint::new(3.0, 47.0));
            }
            other => panic!("unexpected geometry {other:?}"),
        }

        let nowhere = &b.features[1];
        assert_eq!(nowhere.iso_a2, UNASSIGNED_CODE);
        assert!(nowhere.geometry.is_none());
    }

    #[test]
    fn rejects_non_collections() {
        let err = Boundaries::from_json_str(r#"{"type": "Feature", "features": []}"#).unwrap_err();
        assert!(matches!(err, GlobeError::InvalidData(_)));
    }

    #[test]
    fn malformed_json_is_an_error() {
        assert!(matches!(
            ScoreTable::from_json_str("{not json"),
            Err(GlobeError::Json(_))
        ));
    }
}
