use std::collections::HashMap;

use super::record::MetricRecord;

/// Read-only lookup from county FIPS code to its travel-time record.
///
/// Populated once, before any styling happens; there is no way to mutate it
/// afterwards.
#[derive(Debug, Default)]
pub struct MetricStore {
    records: HashMap<String, MetricRecord>,
}

impl MetricStore {
    pub fn new(records: HashMap<String, MetricRecord>) -> Self {
        Self { records }
    }

    pub fn get(&self, fips: &str) -> Option<&MetricRecord> {
        self.records.get(fips)
    }

    pub fn contains(&self, fips: &str) -> bool {
        self.records.contains_key(fips)
    }

    pub fn len(&self) -> usize { self.records.len() }

    pub fn is_empty(&self) -> bool { self.records.is_empty() }
}

impl<K: Into<String>> FromIterator<(K, MetricRecord)> for MetricStore {
    fn from_iter<I: IntoIterator<Item = (K, MetricRecord)>>(iter: I) -> Self {
        Self::new(iter.into_iter().map(|(k, r)| (k.into(), r)).collect())
    }
}
