use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::metric::Metric;

/// Travel-time figures for a single county.
///
/// Fields that are absent from the dataset, or that hold something other than a
/// JSON number (a string, `null`, a boolean), are kept as `None`. Numbers are kept
/// as-is, negative ones included; deciding what is displayable is left to
/// [`crate::is_valid_for`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Deserialize)]
pub struct MetricRecord {
    #[serde(rename = "Commute_Time", default, deserialize_with = "lenient_number")]
    pub commute_time: Option<f64>,
    #[serde(rename = "Transit_Time", default, deserialize_with = "lenient_number")]
    pub transit_time: Option<f64>,
    #[serde(rename = "Driving_Time", default, deserialize_with = "lenient_number")]
    pub driving_time: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub ratio: Option<f64>,
}

impl MetricRecord {
    /// Raw value stored under `metric`, without any validity check.
    pub fn get(&self, metric: Metric) -> Option<f64> {
        match metric {
            Metric::CommuteTime => self.commute_time,
            Metric::TransitTime => self.transit_time,
            Metric::DrivingTime => self.driving_time,
            Metric::Ratio => self.ratio,
        }
    }
}

fn lenient_number<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<f64>, D::Error> {
    Ok(Value::deserialize(deserializer)?.as_f64())
}
