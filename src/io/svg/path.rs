//! Geometry to SVG path data.

use geo::{Coord, CoordsIter, LineString, MultiPolygon};

/// Projection function: lon/lat -> SVG coords (x,y)
pub(crate) type Projection = dyn Fn(&Coord<f64>) -> (f64, f64);

/// Build a compact SVG path string for a MultiPolygon (exteriors + holes).
/// Use with `fill-rule="evenodd"` so holes render as holes.
pub(crate) fn multipolygon_to_path(shape: &MultiPolygon<f64>, project: &Projection) -> String {
    let mut out = String::new();

    for polygon in &shape.0 {
        out.push_str(&ring_to_path(polygon.exterior(), project));
        for interior in polygon.interiors() {
            out.push_str(&ring_to_path(interior, project));
        }
    }

    out
}

/// Build a compact SVG path string for a LineString (ring).
fn ring_to_path(ring: &LineString<f64>, project: &Projection) -> String {
    let mut out = String::new();

    let mut coords = ring.coords_iter()
        .map(|coord| project(&coord));
    if let Some((x, y)) = coords.next() {
        out.push_str(&format!(" M{x:.3},{y:.3}"));
        for (x, y) in coords {
            out.push_str(&format!(" L{x:.3},{y:.3}"));
        }
        out.push('Z');
    }

    out
}
