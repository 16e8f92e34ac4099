//! Boundary dataset parsing.
//!
//! Walks a GeoJSON `FeatureCollection` and keeps the polygonal features.
//! Feature ids may be strings or numbers; numbers are stringified so they
//! can be matched against catalog ids.

use serde_json::Value;

use crate::core::error::GeoJsonError;
use crate::models::{Feature, FeatureCollection, Geometry, Position, Ring};

pub fn feature_collection_from_value(value: &Value) -> Result<FeatureCollection, GeoJsonError> {
    let obj = value.as_object().ok_or(GeoJsonError::NotAFeatureCollection)?;
    if obj.get("type").and_then(Value::as_str) != Some("FeatureCollection") {
        return Err(GeoJsonError::NotAFeatureCollection);
    }
    let features_val = obj
        .get("features")
        .and_then(Value::as_array)
        .ok_or(GeoJsonError::NotAFeatureCollection)?;

    let mut features = Vec::with_capacity(features_val.len());
    for (index, feat_val) in features_val.iter().enumerate() {
        let invalid = |reason: String| GeoJsonError::InvalidFeature { index, reason };

        let feat_obj = feat_val
            .as_object()
            .ok_or_else(|| invalid("feature must be an object".to_string()))?;
        if feat_obj.get("type").and_then(Value::as_str) != Some("Feature") {
            return Err(invalid("expected type 'Feature'".to_string()));
        }

        let id = match feat_obj.get("id") {
            Some(Value::String(s)) => s.clone(),
            Some(Value::Number(n)) => n.to_string(),
            _ => return Err(invalid("feature missing id".to_string())),
        };

        let name = feat_obj
            .get("properties")
            .and_then(|p| p.get("name"))
            .and_then(Value::as_str)
            .map(String::from);

        let geometry_val = feat_obj
            .get("geometry")
            .ok_or_else(|| invalid("feature missing geometry".to_string()))?;
        match parse_geometry(geometry_val).map_err(invalid)? {
            Some(geometry) => features.push(Feature { id, name, geometry }),
            None => log::warn!("skipping feature '{id}': geometry is not polygonal"),
        }
    }

    Ok(FeatureCollection { features })
}

/// Parse a polygonal geometry; `Ok(None)` for other geometry types.
fn parse_geometry(value: &Value) -> Result<Option<Geometry>, String> {
    let ty = value
        .get("type")
        .and_then(Value::as_str)
        .ok_or("geometry missing type")?;
    let coords = value.get("coordinates");

    match ty {
        "Polygon" => {
            let coords = coords.ok_or("polygon missing coordinates")?;
            Ok(Some(Geometry::Polygon(parse_polygon(coords)?)))
        }
        "MultiPolygon" => {
            let polygons = coords
                .and_then(Value::as_array)
                .ok_or("multipolygon coordinates must be an array")?
                .iter()
                .map(parse_polygon)
                .collect::<Result<Vec<_>, _>>()?;
            Ok(Some(Geometry::MultiPolygon(polygons)))
        }
        _ => Ok(None),
    }
}

fn parse_polygon(value: &Value) -> Result<Vec<Ring>, String> {
    value
        .as_array()
        .ok_or("polygon must be an array of rings")?
        .iter()
        .map(parse_ring)
        .collect()
}

fn parse_ring(value: &Value) -> Result<Ring, String> {
    value
        .as_array()
        .ok_or("ring must be an array of positions")?
        .iter()
        .map(parse_position)
        .collect()
}

/// Positions may carry a third (altitude) component, which is dropped.
fn parse_position(value: &Value) -> Result<Position, String> {
    let arr = value.as_array().ok_or("position must be an array")?;
    match (
        arr.first().and_then(Value::as_f64),
        arr.get(1).and_then(Value::as_f64),
    ) {
        (Some(lon), Some(lat)) => Ok([lon, lat]),
        _ => Err("position needs two numeric components".to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(payload: &str) -> Result<FeatureCollection, GeoJsonError> {
        feature_collection_from_value(&serde_json::from_str(payload).unwrap())
    }

    const SAMPLE: &str = r#"{
        "type": "FeatureCollection",
        "features": [
            {
                "type": "Feature",
                "id": "FRA",
                "properties": {"name": "France"},
                "geometry": {
                    "type": "Polygon",
                    "coordinates": [[[2.0, 48.0], [3.0, 48.0], [3.0, 49.0, 120.0], [2.0, 48.0]]]
                }
            },
            {
                "type": "Feature",
                "id": 840,
                "properties": {},
                "geometry": {
                    "type": "MultiPolygon",
                    "coordinates": [
                        [[[-100.0, 40.0], [-90.0, 40.0], [-90.0, 45.0], [-100.0, 40.0]]],
                        [[[-150.0, 60.0], [-140.0, 60.0], [-140.0, 65.0], [-150.0, 60.0]]]
                    ]
                }
            },
            {
                "type": "Feature",
                "id": "PT",
                "properties": {"name": "Marker"},
                "geometry": {"type": "Point", "coordinates": [0.0, 0.0]}
            }
        ]
    }"#;

    #[test]
    fn test_parse_sample_collection() {
        let collection = parse(SAMPLE).unwrap();
        assert_eq!(collection.len(), 2);

        let france = &collection.features[0];
        assert_eq!(france.id, "FRA");
        assert_eq!(france.name.as_deref(), Some("France"));
        match &france.geometry {
            Geometry::Polygon(rings) => assert_eq!(rings[0][2], [3.0, 49.0]),
            other => panic!("unexpected geometry {other:?}"),
        }

        let usa = &collection.features[1];
        assert_eq!(usa.id, "840");
        assert_eq!(usa.name, None);
        assert!(matches!(&usa.geometry, Geometry::MultiPolygon(p) if p.len() == 2));
    }

    #[test]
    fn test_rejects_non_collection_root() {
        assert_eq!(
            parse(r#"{"type": "Feature"}"#),
            Err(GeoJsonError::NotAFeatureCollection)
        );
        assert_eq!(parse("[]"), Err(GeoJsonError::NotAFeatureCollection));
        assert_eq!(
            parse(r#"{"type": "FeatureCollection"}"#),
            Err(GeoJsonError::NotAFeatureCollection)
        );
    }

    #[test]
    fn test_reports_feature_index() {
        let payload = r#"{"type": "FeatureCollection", "features": [
            {"type": "Feature", "id": "A", "geometry": {"type": "Polygon", "coordinates": [[[0, 0], [1]]]}}
        ]}"#;
        match parse(payload) {
            Err(GeoJsonError::InvalidFeature { index, .. }) => assert_eq!(index, 0),
            other => panic!("unexpected result {other:?}"),
        }
    }
}
