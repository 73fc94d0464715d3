//! Per-county summary shown when a county is clicked.

use serde::Serialize;

use crate::{common, data::MetricStore, map::County, metric::Metric, style::{is_valid, is_valid_for}};

const NO_DATA: &str = "No data";

/// Display strings for one county's record.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Popup {
    pub name: Option<String>,
    pub commute: String,
    pub transit: String,
    pub driving: String,
    pub ratio: String,
}

/// Summary for `county`, or `None` if it has no key or no record in `store`.
pub fn popup(county: &County, store: &MetricStore) -> Option<Popup> {
    let record = store.get(county.fips()?)?;

    let minutes = |value: Option<f64>| match value {
        Some(v) if is_valid(value) => format!("{} mins", common::js_number(v)),
        _ => NO_DATA.to_string(),
    };

    let ratio = match record.ratio {
        Some(r) if is_valid_for(record.ratio, Some(Metric::Ratio), Some(record)) => {
            common::js_to_fixed(r, 2)
        }
        _ => NO_DATA.to_string(),
    };

    Some(Popup {
        name: county.name().map(str::to_string),
        commute: minutes(record.commute_time),
        transit: minutes(record.transit_time),
        driving: minutes(record.driving_time),
        ratio,
    })
}

impl Popup {
    pub fn to_html(&self) -> String {
        format!(
            "<strong>{} County</strong><br/>Commute: {}<br/>Transit: {}<br/>Driving: {}<br/>Ratio: {}",
            common::escape_html(self.name.as_deref().unwrap_or("Unknown")),
            self.commute,
            self.transit,
            self.driving,
            self.ratio,
        )
    }
}
