use std::path::Path;

use anyhow::Result;
use tracing::{debug, info, trace};

use crate::{
    data::MetricStore,
    map::CountyLayer,
    metric::Metric,
    popup::{Popup, popup},
    style::{Legend, Style, StyleOptions, StyleProvider},
};

/// A loaded county choropleth and the currently selected metric.
///
/// Owns the metric store and county layer, both write-once. The selected metric is the
/// only mutable state: construction is the `load` event (selects the default metric)
/// and [`Choropleth::on_metric_changed`] is the only transition. Styles and the legend
/// are recomputed on every request.
#[derive(Debug)]
pub struct Choropleth {
    store: MetricStore,
    layer: CountyLayer,
    options: StyleOptions,
    metric: Metric,
}

impl Choropleth {
    pub fn new(store: MetricStore, layer: CountyLayer) -> Self {
        Self::with_options(store, layer, StyleOptions::default())
    }

    pub fn with_options(store: MetricStore, layer: CountyLayer, options: StyleOptions) -> Self {
        let matched = layer.iter()
            .filter(|county| county.fips().is_some_and(|fips| store.contains(fips)))
            .count();
        info!(
            records = store.len(),
            counties = layer.len(),
            matched,
            metric = %Metric::default(),
            "choropleth loaded"
        );

        Self { store, layer, options, metric: Metric::default() }
    }

    /// Load the metrics dataset, then the county boundaries.
    pub fn read(metrics_path: &Path, counties_path: &Path) -> Result<Self> {
        let store = MetricStore::read(metrics_path)?;
        let layer = CountyLayer::read(counties_path)?;
        Ok(Self::new(store, layer))
    }

    pub fn metric(&self) -> Metric { self.metric }

    pub fn store(&self) -> &MetricStore { &self.store }

    pub fn layer(&self) -> &CountyLayer { &self.layer }

    pub fn options(&self) -> &StyleOptions { &self.options }

    pub fn provider(&self) -> StyleProvider<'_> {
        StyleProvider::new(&self.store, &self.options)
    }

    /// Style of the county at `index` under the current metric.
    pub fn style(&self, index: usize) -> Option<Style> {
        let county = self.layer.get(index)?;
        Some(self.provider().style(county, self.metric))
    }

    /// Styles of every county, in layer order, under the current metric.
    pub fn styles(&self) -> Vec<Style> {
        let provider = self.provider();
        self.layer.iter()
            .map(|county| provider.style(county, self.metric))
            .collect()
    }

    pub fn legend(&self) -> Legend {
        Legend::with_no_data_color(self.metric, &self.options.no_data_color)
    }

    pub fn popup(&self, index: usize) -> Option<Popup> {
        popup(self.layer.get(index)?, &self.store)
    }

    /// Select `metric` and restyle every county.
    pub fn on_metric_changed(&mut self, metric: Metric) -> Vec<Style> {
        self.metric = metric;

        let provider = self.provider();
        let mut no_data = 0usize;
        let styles = self.layer.iter()
            .map(|county| {
                if provider.data_color(county, metric).is_none() {
                    no_data += 1;
                    trace!(geo_id = ?county.geo_id, %metric, "no data");
                }
                provider.style(county, metric)
            })
            .collect::<Vec<_>>();

        debug!(%metric, restyled = styles.len(), no_data, "metric changed");
        styles
    }
}
