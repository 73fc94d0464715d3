#![doc = "travelmap: county travel-time choropleth core"]
mod choropleth;
mod common;
mod data;
mod io;
mod map;
mod metric;
mod popup;
mod style;

#[doc(inline)]
pub use choropleth::Choropleth;

#[doc(inline)]
pub use data::{MetricRecord, MetricStore};

#[doc(inline)]
pub use map::{County, CountyLayer, FIPS_LEN, fips_key};

#[doc(inline)]
pub use metric::{Metric, NO_DATA_COLOR, PALETTE, Scale};

#[doc(inline)]
pub use popup::{Popup, popup};

#[doc(inline)]
pub use style::{Legend, LegendEntry, Style, StyleOptions, StyleProvider, build_legend, classify, is_valid, is_valid_for};
