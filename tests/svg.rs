// Static SVG export of the current choropleth.

mod common;

use std::fs;

use travelmap::{Choropleth, CountyLayer, Metric, MetricStore};

fn load() -> Choropleth {
    let store = MetricStore::from_json_bytes(common::METRICS.as_bytes()).unwrap();
    let layer = CountyLayer::from_geojson_bytes(common::COUNTIES.as_bytes()).unwrap();
    Choropleth::new(store, layer)
}

#[test]
fn one_path_per_drawable_county() {
    let svg = load().to_svg_string(800, 10).unwrap();
    assert!(svg.starts_with("<?xml"));
    assert!(svg.trim_end().ends_with("</svg>"));
    // Five counties have geometry; the unkeyed one does not.
    assert_eq!(svg.matches(r#"<path class="cty""#).count(), 5);
    assert!(svg.contains(r#"data-fips="01001""#));
}

#[test]
fn paths_carry_computed_styles() {
    let mut map = load();
    let svg = map.to_svg_string(800, 10).unwrap();
    assert!(svg.contains("fill:#7fbc41;stroke:#fff;stroke-width:0.1;fill-opacity:0.5"));

    map.on_metric_changed(Metric::Ratio);
    let svg = map.to_svg_string(800, 10).unwrap();
    assert!(svg.contains("fill:#800026;"));
    assert!(svg.contains("Legend (ratio):"));
}

#[test]
fn legend_is_drawn() {
    let svg = load().to_svg_string(800, 10).unwrap();
    assert!(svg.contains("Legend (Commute Time):"));
    assert!(svg.contains(">10–20</text>"));
    assert!(svg.contains(">50+</text>"));
    assert!(svg.contains(">No data</text>"));
    assert_eq!(svg.matches("<rect x=\"0\"").count(), 6);
}

#[test]
fn writes_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("map.svg");
    load().to_svg(&path).unwrap();

    let svg = fs::read_to_string(&path).unwrap();
    assert!(svg.contains(r#"width="1200""#));
}

#[test]
fn no_geometry_is_an_error() {
    let store = MetricStore::default();
    let layer = CountyLayer::from_geojson_bytes(br#"{"features": []}"#).unwrap();
    assert!(Choropleth::new(store, layer).to_svg_string(800, 10).is_err());
}
