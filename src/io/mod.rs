//! Format-specific output. GeoJSON and metrics input live next to the types they
//! build (`map/io`, `data/io`).

pub(crate) mod svg;
