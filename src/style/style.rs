use serde::{Deserialize, Serialize};

use crate::{data::MetricStore, map::County, metric::{Metric, NO_DATA_COLOR}};

use super::{classify::classify, validate::is_valid_for};

/// Visual style for one county polygon.
/// Serializes with the path-option names web map libraries expect
/// (`fillColor`, `color`, `weight`, `fillOpacity`).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Style {
    #[serde(rename = "fillColor")]
    pub fill_color: String,
    #[serde(rename = "color")]
    pub stroke_color: String,
    #[serde(rename = "weight")]
    pub stroke_weight: f64,
    #[serde(rename = "fillOpacity")]
    pub fill_opacity: f64,
}

/// The parts of a style that do not depend on data.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct StyleOptions {
    pub stroke_color: String,
    pub stroke_weight: f64,
    pub fill_opacity: f64,
    pub no_data_color: String,
}

impl Default for StyleOptions {
    fn default() -> Self {
        Self {
            stroke_color: "#fff".to_string(),
            stroke_weight: 0.1,
            fill_opacity: 0.5,
            no_data_color: NO_DATA_COLOR.to_string(),
        }
    }
}

/// Joins counties to their metric records and turns them into styles.
///
/// Only reads from the store, so styles are a pure function of
/// (county, metric, store, options).
#[derive(Debug, Clone, Copy)]
pub struct StyleProvider<'a> {
    store: &'a MetricStore,
    options: &'a StyleOptions,
}

impl<'a> StyleProvider<'a> {
    pub fn new(store: &'a MetricStore, options: &'a StyleOptions) -> Self {
        Self { store, options }
    }

    /// Classified color for `county` under `metric`, or `None` when there is no
    /// usable value (no key, no record, missing or invalid field).
    pub fn data_color(&self, county: &County, metric: Metric) -> Option<&'static str> {
        let record = county.fips().and_then(|fips| self.store.get(fips));
        let value = record.and_then(|r| r.get(metric));

        if !is_valid_for(value, Some(metric), record) { return None }
        value.map(|v| classify(v, metric))
    }

    pub fn fill_color(&self, county: &County, metric: Metric) -> &'a str {
        let no_data: &'a str = &self.options.no_data_color;
        self.data_color(county, metric).unwrap_or(no_data)
    }

    pub fn style(&self, county: &County, metric: Metric) -> Style {
        Style {
            fill_color: self.fill_color(county, metric).to_string(),
            stroke_color: self.options.stroke_color.clone(),
            stroke_weight: self.options.stroke_weight,
            fill_opacity: self.options.fill_opacity,
        }
    }
}
