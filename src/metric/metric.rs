use std::fmt;

use serde::{Deserialize, Serialize};

use super::scale::{RATIO_SCALE, Scale, TRAVEL_TIME_SCALE};

/// A selectable field of a county's travel-time record.
/// Serialized under the same names the metrics dataset uses for its keys.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Metric {
    #[default]
    #[serde(rename = "Commute_Time")]
    CommuteTime,
    #[serde(rename = "Transit_Time")]
    TransitTime,
    #[serde(rename = "Driving_Time")]
    DrivingTime,
    /// Transit time over driving time. Only meaningful when both inputs are usable.
    #[serde(rename = "ratio")]
    Ratio,
}

impl Metric {
    pub const ALL: [Metric; 4] = [
        Metric::CommuteTime,
        Metric::TransitTime,
        Metric::DrivingTime,
        Metric::Ratio,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Metric::CommuteTime => "Commute_Time",
            Metric::TransitTime => "Transit_Time",
            Metric::DrivingTime => "Driving_Time",
            Metric::Ratio => "ratio",
        }
    }

    /// Parse a metric from its dataset field name.
    pub fn from_str(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|metric| metric.as_str() == name)
    }

    /// Human-readable label, e.g. "Commute Time".
    pub fn label(&self) -> String {
        self.as_str().replacen('_', " ", 1)
    }

    /// Bucket boundaries for this metric.
    /// Every consumer (classification and legend) reads thresholds from here.
    pub fn scale(&self) -> &'static Scale {
        match self {
            Metric::CommuteTime | Metric::TransitTime | Metric::DrivingTime => &TRAVEL_TIME_SCALE,
            Metric::Ratio => &RATIO_SCALE,
        }
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_round_trip() {
        for metric in Metric::ALL {
            assert_eq!(Metric::from_str(metric.as_str()), Some(metric));
        }
    }

    #[test]
    fn unknown_name_is_rejected() {
        assert_eq!(Metric::from_str("commute_time"), None);
        assert_eq!(Metric::from_str("Ratio"), None);
        assert_eq!(Metric::from_str(""), None);
    }

    #[test]
    fn labels_replace_first_underscore() {
        assert_eq!(Metric::CommuteTime.label(), "Commute Time");
        assert_eq!(Metric::DrivingTime.label(), "Driving Time");
        assert_eq!(Metric::Ratio.label(), "ratio");
    }

    #[test]
    fn default_is_commute_time() {
        assert_eq!(Metric::default(), Metric::CommuteTime);
    }

    #[test]
    fn serde_uses_dataset_names() {
        let json = serde_json::to_string(&Metric::TransitTime).unwrap();
        assert_eq!(json, r#""Transit_Time""#);
        let metric: Metric = serde_json::from_str(r#""ratio""#).unwrap();
        assert_eq!(metric, Metric::Ratio);
    }

    #[test]
    fn travel_times_share_a_scale() {
        assert_eq!(Metric::CommuteTime.scale().thresholds(), &[10.0, 20.0, 30.0, 40.0, 50.0]);
        assert!(std::ptr::eq(Metric::CommuteTime.scale(), Metric::TransitTime.scale()));
        assert!(std::ptr::eq(Metric::CommuteTime.scale(), Metric::DrivingTime.scale()));
        assert_eq!(Metric::Ratio.scale().thresholds().len(), 8);
    }
}
