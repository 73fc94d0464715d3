use anyhow::Result;
use wasm_bindgen::{JsValue, prelude::wasm_bindgen};

use crate::common::*;

/// Browser-facing handle: the map library asks for styles, the legend and popups,
/// and reports metric changes from its selector.
#[wasm_bindgen]
pub struct WasmChoropleth {
    inner: travelmap::Choropleth,
}

#[wasm_bindgen]
impl WasmChoropleth {
    /// Build from the two datasets as JSON text: the metrics object first, then the
    /// county FeatureCollection. `options` may be omitted.
    #[wasm_bindgen(constructor)]
    pub fn new(metrics_json: &str, counties_geojson: &str, options: JsValue) -> Result<WasmChoropleth, JsValue> {
        let store = travelmap::MetricStore::from_json_bytes(metrics_json.as_bytes()).map_err(js_err)?;
        let layer = travelmap::CountyLayer::from_geojson_bytes(counties_geojson.as_bytes()).map_err(js_err)?;
        let options = parse_options(options).map_err(js_err)?;
        Ok(WasmChoropleth { inner: travelmap::Choropleth::with_options(store, layer, options) })
    }

    pub fn len(&self) -> usize { self.inner.layer().len() }

    pub fn is_empty(&self) -> bool { self.inner.layer().is_empty() }

    /// Currently selected metric name.
    pub fn metric(&self) -> String {
        self.inner.metric().as_str().to_string()
    }

    /// Select a metric by name and return the new styles for every county.
    pub fn set_metric(&mut self, name: &str) -> Result<JsValue, JsValue> {
        let metric = parse_metric(name).map_err(js_err)?;
        let styles = self.inner.on_metric_changed(metric);
        serde_wasm_bindgen::to_value(&styles).map_err(|e| e.into())
    }

    /// Styles for every county, in feature order: `[{fillColor, color, weight, fillOpacity}, ...]`.
    pub fn styles(&self) -> Result<JsValue, JsValue> {
        serde_wasm_bindgen::to_value(&self.inner.styles()).map_err(|e| e.into())
    }

    /// Style for the county at `index`, or `undefined` if out of range.
    pub fn style(&self, index: usize) -> Result<JsValue, JsValue> {
        match self.inner.style(index) {
            Some(style) => serde_wasm_bindgen::to_value(&style).map_err(|e| e.into()),
            None => Ok(JsValue::UNDEFINED),
        }
    }

    /// Legend entries for the current metric: `[{color, label}, ...]`.
    pub fn legend(&self) -> Result<JsValue, JsValue> {
        serde_wasm_bindgen::to_value(&self.inner.legend().entries).map_err(|e| e.into())
    }

    pub fn legend_html(&self) -> String {
        self.inner.legend().to_html()
    }

    /// Popup markup for the county at `index`; `undefined` when it has no record.
    pub fn popup_html(&self, index: usize) -> Option<String> {
        self.inner.popup(index).map(|popup| popup.to_html())
    }

    /// Static SVG rendering of the current map.
    #[wasm_bindgen(js_name = "to_svg")]
    pub fn to_svg(&self, width: Option<i32>) -> Result<String, JsValue> {
        self.inner.to_svg_string(width.unwrap_or(1200), 10).map_err(js_err)
    }
}
