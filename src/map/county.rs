use std::sync::Arc;

use geo::MultiPolygon;

use super::geo_id::fips_key;

/// One county boundary from the geometry collection.
#[derive(Debug, Clone)]
pub struct County {
    pub geo_id: Option<Arc<str>>, // Raw Census id, e.g. "0500000US06037"
    pub name: Option<Arc<str>>,
    pub geometry: MultiPolygon<f64>,
}

impl County {
    pub fn new(geo_id: Option<&str>, name: Option<&str>, geometry: MultiPolygon<f64>) -> Self {
        Self {
            geo_id: geo_id.map(Arc::from),
            name: name.map(Arc::from),
            geometry,
        }
    }

    /// Join key into the metrics dataset, if this county has a usable `GEO_ID`.
    pub fn fips(&self) -> Option<&str> {
        fips_key(self.geo_id.as_deref())
    }

    pub fn name(&self) -> Option<&str> { self.name.as_deref() }
}
