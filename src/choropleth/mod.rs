mod choropleth;
mod svg;

pub use choropleth::Choropleth;
