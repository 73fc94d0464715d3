//! SVG writing for static choropleth export.

mod path;
mod writer;

pub(crate) use path::*;
pub(crate) use writer::*;
