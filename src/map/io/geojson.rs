use std::path::Path;

use anyhow::{Context, Result, anyhow, bail};
use geo::{Coord, LineString, MultiPolygon, Polygon};
use serde_json::Value;
use tracing::{info, warn};

use crate::{common, map::{County, CountyLayer}};

impl CountyLayer {
    /// Read a county FeatureCollection (GeoJSON) from disk.
    pub fn read(path: &Path) -> Result<Self> {
        let bytes = common::read_file(path)?;
        Self::from_geojson_bytes(&bytes)
            .with_context(|| format!("[read_counties] Failed to load {}", path.display()))
    }

    /// Parse a county FeatureCollection from GeoJSON bytes.
    /// Each feature contributes its `GEO_ID` and `NAME` properties and its (multi)polygon.
    pub fn from_geojson_bytes(bytes: &[u8]) -> Result<Self> {
        let value: Value = serde_json::from_slice(bytes)
            .context("[read_counties] Failed to parse GeoJSON bytes")?;

        let features = value["features"].as_array()
            .ok_or_else(|| anyhow!("[read_counties] Expected a FeatureCollection with a \"features\" array"))?;

        let mut counties = Vec::with_capacity(features.len());
        for (idx, feature) in features.iter().enumerate() {
            let properties = &feature["properties"];
            let geometry = parse_geometry(&feature["geometry"])
                .with_context(|| format!("[read_counties] Invalid geometry for feature {idx}"))?;

            counties.push(County::new(
                properties["GEO_ID"].as_str(),
                properties["NAME"].as_str(),
                geometry,
            ));
        }

        let layer = CountyLayer::new(counties);
        let unkeyed = layer.iter().filter(|county| county.fips().is_none()).count();
        if unkeyed > 0 {
            warn!(unkeyed, "counties without a GEO_ID will render as no data");
        }
        info!(counties = layer.len(), "loaded county boundaries");

        Ok(layer)
    }
}

/// Convert a GeoJSON geometry object into a MultiPolygon.
/// Polygons are promoted; absent or non-areal geometries become empty.
fn parse_geometry(geometry: &Value) -> Result<MultiPolygon<f64>> {
    let Some(coords) = geometry["coordinates"].as_array() else {
        return Ok(MultiPolygon(vec![]));
    };

    match geometry["type"].as_str() {
        Some("Polygon") => Ok(MultiPolygon(vec![parse_polygon_coords(coords)?])),
        Some("MultiPolygon") => {
            let polygons = coords.iter()
                .map(|polygon| {
                    let rings = polygon.as_array()
                        .ok_or_else(|| anyhow!("Invalid MultiPolygon: polygon must be an array of rings"))?;
                    parse_polygon_coords(rings)
                })
                .collect::<Result<Vec<_>>>()?;
            Ok(MultiPolygon(polygons))
        }
        _ => Ok(MultiPolygon(vec![])),
    }
}

/// Parse `[exterior, hole, hole, ...]` ring arrays into a Polygon.
fn parse_polygon_coords(rings: &[Value]) -> Result<Polygon<f64>> {
    let mut rings = rings.iter().map(|ring| {
        let ring = ring.as_array()
            .ok_or_else(|| anyhow!("Invalid Polygon: ring must be an array of positions"))?;
        parse_ring_coords(ring)
    });

    let exterior = rings.next()
        .ok_or_else(|| anyhow!("Invalid Polygon: missing exterior ring"))??;
    let interiors = rings.collect::<Result<Vec<_>>>()?;

    Ok(Polygon::new(exterior, interiors))
}

/// Parse a ring of `[x, y]` positions. Extra ordinates (altitude) are ignored.
fn parse_ring_coords(coords: &[Value]) -> Result<LineString<f64>> {
    let mut points = Vec::with_capacity(coords.len());

    for position in coords {
        let position = position.as_array()
            .ok_or_else(|| anyhow!("Invalid coordinate: position must be an array"))?;
        if position.len() < 2 {
            bail!("Invalid coordinate: position needs at least two numbers");
        }
        let x = position[0].as_f64()
            .ok_or_else(|| anyhow!("Invalid coordinate: x must be a number"))?;
        let y = position[1].as_f64()
            .ok_or_else(|| anyhow!("Invalid coordinate: y must be a number"))?;
        points.push(Coord { x, y });
    }

    Ok(LineString(points))
}

#[cfg(test)]
mod tests {
    use super::*;

    const COLLECTION: &[u8] = br#"{
        "type": "FeatureCollection",
        "features": [
            {
                "type": "Feature",
                "properties": {"GEO_ID": "0500000US01001", "NAME": "Autauga"},
                "geometry": {"type": "Polygon", "coordinates": [[[0,0],[1,0],[1,1],[0,1],[0,0]]]}
            },
            {
                "type": "Feature",
                "properties": {"GEO_ID": "0500000US02013", "NAME": "Aleutians East"},
                "geometry": {"type": "MultiPolygon", "coordinates": [
                    [[[2,2],[3,2],[3,3],[2,2]]],
                    [[[4,4],[6,4],[6,6],[4,6],[4,4]], [[5,5],[5.5,5],[5.5,5.5],[5,5]]]
                ]}
            },
            {
                "type": "Feature",
                "properties": {"NAME": "Unkeyed"},
                "geometry": null
            }
        ]
    }"#;

    #[test]
    fn reads_features_in_order() {
        let layer = CountyLayer::from_geojson_bytes(COLLECTION).unwrap();
        assert_eq!(layer.len(), 3);

        let first = layer.get(0).unwrap();
        assert_eq!(first.fips(), Some("01001"));
        assert_eq!(first.name(), Some("Autauga"));
        assert_eq!(first.geometry.0.len(), 1);

        let second = layer.get(1).unwrap();
        assert_eq!(second.fips(), Some("02013"));
        assert_eq!(second.geometry.0.len(), 2);
        assert_eq!(second.geometry.0[1].interiors().len(), 1);
    }

    #[test]
    fn missing_geo_id_and_geometry_are_tolerated() {
        let layer = CountyLayer::from_geojson_bytes(COLLECTION).unwrap();
        let third = layer.get(2).unwrap();
        assert_eq!(third.fips(), None);
        assert!(third.geometry.0.is_empty());
    }

    #[test]
    fn non_string_geo_id_is_absent() {
        let layer = CountyLayer::from_geojson_bytes(
            br#"{"features": [{"properties": {"GEO_ID": 6037}, "geometry": null}]}"#,
        ).unwrap();
        assert_eq!(layer.get(0).unwrap().geo_id, None);
    }

    #[test]
    fn not_a_feature_collection() {
        assert!(CountyLayer::from_geojson_bytes(br#"{"type": "Feature"}"#).is_err());
    }

    #[test]
    fn bad_coordinate_is_an_error() {
        let err = CountyLayer::from_geojson_bytes(
            br#"{"features": [{"properties": {}, "geometry": {"type": "Polygon", "coordinates": [[["a", 0]]]}}]}"#,
        ).unwrap_err();
        assert!(format!("{err:#}").contains("x must be a number"));
    }
}
