#![allow(dead_code)]

use std::{fs, path::PathBuf};

use tempfile::TempDir;

pub const METRICS: &str = r#"{
    "01001": {"Commute_Time": 25, "Transit_Time": 62, "Driving_Time": 24, "ratio": 2.58},
    "01003": {"Commute_Time": 10, "Transit_Time": "n/a", "Driving_Time": 27, "ratio": 1.4},
    "01005": {"Commute_Time": -1, "Transit_Time": 30, "Driving_Time": 30, "ratio": 1.0},
    "01007": {"Commute_Time": 55.5}
}"#;

pub const COUNTIES: &str = r#"{
    "type": "FeatureCollection",
    "features": [
        {"type": "Feature", "properties": {"GEO_ID": "0500000US01001", "NAME": "Autauga"},
         "geometry": {"type": "Polygon", "coordinates": [[[-86.9,32.3],[-86.4,32.3],[-86.4,32.7],[-86.9,32.7],[-86.9,32.3]]]}},
        {"type": "Feature", "properties": {"GEO_ID": "0500000US01003", "NAME": "Baldwin"},
         "geometry": {"type": "Polygon", "coordinates": [[[-88.0,30.2],[-87.4,30.2],[-87.4,31.3],[-88.0,31.3],[-88.0,30.2]]]}},
        {"type": "Feature", "properties": {"GEO_ID": "0500000US01005", "NAME": "Barbour"},
         "geometry": {"type": "MultiPolygon", "coordinates": [[[[-85.7,31.6],[-85.0,31.6],[-85.0,32.1],[-85.7,32.1],[-85.7,31.6]]]]}},
        {"type": "Feature", "properties": {"GEO_ID": "0500000US01007", "NAME": "Bibb"},
         "geometry": {"type": "Polygon", "coordinates": [[[-87.4,32.8],[-86.9,32.8],[-86.9,33.2],[-87.4,33.2],[-87.4,32.8]]]}},
        {"type": "Feature", "properties": {"GEO_ID": "0500000US01009", "NAME": "Blount"},
         "geometry": {"type": "Polygon", "coordinates": [[[-86.9,33.8],[-86.3,33.8],[-86.3,34.2],[-86.9,34.2],[-86.9,33.8]]]}},
        {"type": "Feature", "properties": {"NAME": "Unkeyed"},
         "geometry": null}
    ]
}"#;

/// Write both fixture datasets into a fresh temp dir.
pub fn fixture_dir() -> (TempDir, PathBuf, PathBuf) {
    let dir = tempfile::tempdir().unwrap();
    let metrics = dir.path().join("metrics.json");
    let counties = dir.path().join("geojson-counties-fips.json");
    fs::write(&metrics, METRICS).unwrap();
    fs::write(&counties, COUNTIES).unwrap();
    (dir, metrics, counties)
}
