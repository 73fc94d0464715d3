use std::path::Path;

use anyhow::{Context, Result, anyhow};
use serde_json::Value;
use tracing::{info, warn};

use crate::common;

use super::{record::MetricRecord, store::MetricStore};

impl MetricStore {
    /// Read the metrics dataset (`{"06037": {"Commute_Time": ..., ...}, ...}`) from disk.
    pub fn read(path: &Path) -> Result<Self> {
        let bytes = common::read_file(path)?;
        Self::from_json_bytes(&bytes)
            .with_context(|| format!("[read_metrics] Failed to load {}", path.display()))
    }

    /// Parse the metrics dataset from JSON bytes.
    ///
    /// Falsy entries (`null`, `false`, `0`, `""`) are dropped, as if the county had no
    /// record. Any other non-object entry is kept as an empty record, so the county
    /// still gets a popup that reads "No data" throughout.
    pub fn from_json_bytes(bytes: &[u8]) -> Result<Self> {
        let value: Value = serde_json::from_slice(bytes)
            .context("[read_metrics] Failed to parse metrics JSON")?;

        let Value::Object(entries) = value else {
            return Err(anyhow!("[read_metrics] Expected a JSON object keyed by FIPS code"));
        };

        let mut skipped = 0usize;
        let mut records = Vec::with_capacity(entries.len());
        for (fips, entry) in entries {
            let record: MetricRecord = match entry {
                Value::Object(_) => serde_json::from_value(entry)
                    .with_context(|| format!("[read_metrics] Invalid record for {fips:?}"))?,
                _ if is_falsy(&entry) => {
                    skipped += 1;
                    continue;
                }
                _ => MetricRecord::default(),
            };
            records.push((fips, record));
        }

        if skipped > 0 {
            warn!(skipped, "empty metrics entries were ignored");
        }

        let store: MetricStore = records.into_iter().collect();
        info!(records = store.len(), "loaded county metrics");
        Ok(store)
    }
}

fn is_falsy(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(_) | Value::Object(_) => false,
    }
}
