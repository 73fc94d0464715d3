use crate::{data::MetricRecord, metric::Metric};

/// A value is displayable when it is a finite, non-negative number.
pub fn is_valid(value: Option<f64>) -> bool {
    value.is_some_and(|v| v.is_finite() && v >= 0.0)
}

/// Metric-aware validity check.
///
/// For every metric except [`Metric::Ratio`] this is [`is_valid`] on `value`. A ratio is
/// derived from transit and driving times, so it is displayable only when `record` is
/// present, both of those inputs pass [`is_valid`], and the stored ratio is itself a
/// finite non-negative number. `value` is not consulted for ratios. Commute time plays
/// no part in ratio validity.
pub fn is_valid_for(value: Option<f64>, metric: Option<Metric>, record: Option<&MetricRecord>) -> bool {
    match metric {
        Some(Metric::Ratio) => record.is_some_and(|r| {
            is_valid(r.transit_time) && is_valid(r.driving_time) && is_valid(r.ratio)
        }),
        _ => is_valid(value),
    }
}
