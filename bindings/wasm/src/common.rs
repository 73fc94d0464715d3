use anyhow::{Result, anyhow};
use wasm_bindgen::JsValue;

use travelmap::{Metric, StyleOptions};

pub(crate) fn js_err(e: impl ToString) -> JsValue {
    JsValue::from_str(&e.to_string())
}

pub(crate) fn parse_metric(name: &str) -> Result<Metric> {
    Metric::from_str(name).ok_or_else(|| {
        anyhow!(
            "Unknown metric {:?}. Expected one of: Commute_Time, Transit_Time, Driving_Time, ratio",
            name
        )
    })
}

/// `undefined`/`null` mean defaults; otherwise a partial `{strokeColor, strokeWeight, fillOpacity, noDataColor}` object.
pub(crate) fn parse_options(options: JsValue) -> Result<StyleOptions> {
    if options.is_undefined() || options.is_null() {
        return Ok(StyleOptions::default());
    }
    serde_wasm_bindgen::from_value(options)
        .map_err(|e| anyhow!("Invalid style options: {}", e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_metrics() {
        assert_eq!(parse_metric("ratio").unwrap(), Metric::Ratio);
        assert_eq!(parse_metric("Driving_Time").unwrap(), Metric::DrivingTime);
    }

    #[test]
    fn unknown_metric_lists_choices() {
        let err = parse_metric("Walking_Time").unwrap_err().to_string();
        assert!(err.contains("Walking_Time"));
        assert!(err.contains("Commute_Time, Transit_Time, Driving_Time, ratio"));
    }
}
