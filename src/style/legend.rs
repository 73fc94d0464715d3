use serde::Serialize;

use crate::{common, metric::{Metric, NO_DATA_COLOR}};

use super::classify::classify;

/// One swatch of the legend.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LegendEntry {
    pub color: String,
    pub label: String,
}

impl LegendEntry {
    fn new(color: &str, label: String) -> Self {
        Self { color: color.to_string(), label }
    }
}

/// Legend entries for `metric`: one per threshold, then a trailing "No data" entry.
///
/// Entry `i` is labelled `"{T[i]}–{T[i+1]}"` (the last one `"{T[last]}+"`) and colored
/// with `classify(T[i])`. Because a boundary value belongs to the bucket above it,
/// each swatch shows the color of the bucket that starts *after* its lower bound.
pub fn build_legend(metric: Metric) -> Vec<LegendEntry> {
    build_entries(metric, NO_DATA_COLOR)
}

fn build_entries(metric: Metric, no_data_color: &str) -> Vec<LegendEntry> {
    let thresholds = metric.scale().thresholds();

    let mut entries = Vec::with_capacity(thresholds.len() + 1);
    for (i, &from) in thresholds.iter().enumerate() {
        let label = match thresholds.get(i + 1) {
            Some(to) => format!("{from}–{to}"),
            None => format!("{from}+"),
        };
        entries.push(LegendEntry::new(classify(from, metric), label));
    }
    entries.push(LegendEntry::new(no_data_color, "No data".to_string()));

    entries
}

/// Legend for the currently selected metric. Rebuilt on demand, never cached.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Legend {
    pub metric: Metric,
    pub entries: Vec<LegendEntry>,
}

impl Legend {
    pub fn new(metric: Metric) -> Self {
        Self::with_no_data_color(metric, NO_DATA_COLOR)
    }

    pub fn with_no_data_color(metric: Metric, no_data_color: &str) -> Self {
        Self { metric, entries: build_entries(metric, no_data_color) }
    }

    pub fn title(&self) -> String {
        format!("Legend ({}):", self.metric.label())
    }

    /// HTML body for a map legend control: a title line and one swatch per entry.
    pub fn to_html(&self) -> String {
        let rows = self.entries.iter()
            .map(|entry| format!(
                r#"<i style="background:{}; width: 18px; height: 18px; display: inline-block; margin-right: 6px;"></i>{}"#,
                common::escape_html(&entry.color),
                common::escape_html(&entry.label),
            ))
            .collect::<Vec<_>>();

        format!(
            r#"<div class="mb-1 font-medium text-gray-700">{}</div>{}"#,
            common::escape_html(&self.title()),
            rows.join("<br>"),
        )
    }
}
