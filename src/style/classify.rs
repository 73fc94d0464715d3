use crate::metric::Metric;

/// Color token for an already-validated value under `metric`'s threshold table.
///
/// Picks the bucket of the first threshold strictly above `value`, so a value sitting
/// exactly on a boundary takes the higher bucket. Values at or past the last threshold
/// take the darkest color. Negative or non-finite values are not expected here; filter
/// them with [`crate::is_valid_for`] first.
pub fn classify(value: f64, metric: Metric) -> &'static str {
    metric.scale().color(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metric::PALETTE;

    #[test]
    fn travel_time_buckets() {
        assert_eq!(classify(5.0, Metric::CommuteTime), PALETTE[0]);
        assert_eq!(classify(15.0, Metric::CommuteTime), PALETTE[1]);
        assert_eq!(classify(25.0, Metric::CommuteTime), PALETTE[2]);
        assert_eq!(classify(45.0, Metric::DrivingTime), PALETTE[4]);
    }

    #[test]
    fn boundary_value_joins_upper_bucket() {
        assert_eq!(classify(10.0, Metric::CommuteTime), classify(15.0, Metric::CommuteTime));
        assert_ne!(classify(5.0, Metric::CommuteTime), classify(15.0, Metric::CommuteTime));
    }

    #[test]
    fn ratio_extremes() {
        assert_eq!(classify(0.4, Metric::Ratio), PALETTE[0]);
        assert_eq!(classify(3.0, Metric::Ratio), PALETTE[8]);
        assert_eq!(classify(2.0, Metric::Ratio), PALETTE[7]);
    }

    #[test]
    fn travel_time_overflow_is_darkest() {
        assert_eq!(classify(50.0, Metric::TransitTime), "#800026");
        assert_eq!(classify(120.0, Metric::TransitTime), "#800026");
    }

    #[test]
    fn deterministic() {
        for metric in Metric::ALL {
            assert_eq!(classify(1.3, metric), classify(1.3, metric));
        }
    }
}
