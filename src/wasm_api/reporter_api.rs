use serde::{Deserialize, Serialize};
use wasm_bindgen::prelude::*;

use crate::evaluation::{ModelEvaluator, WeightKind};
use crate::plotting::plot_feature_weights;

#[derive(Serialize, Deserialize)]
pub struct MetricsResult {
    pub model_name: String,
    pub metrics: Vec<(String, f64)>,
}

#[derive(Serialize, Deserialize)]
pub struct WeightsResult {
    pub model_name: String,
    pub label: String,
    pub ranked: Vec<(String, f64)>,
}

fn to_js<T: Serialize>(value: &T) -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(value).map_err(|e| JsValue::from_str(&format!("Serialization error: {}", e)))
}

fn err_to_js(err: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&err.to_string())
}

#[wasm_bindgen]
pub struct WasmReporter;

#[wasm_bindgen]
impl WasmReporter {
    #[wasm_bindgen(constructor)]
    pub fn new() -> WasmReporter {
        console_error_panic_hook::set_once();
        WasmReporter
    }

    /// Regresné metriky ako zoznam (názov metriky, hodnota)
    #[wasm_bindgen(js_name = computeRegressionMetrics)]
    pub fn compute_regression_metrics(
        &self,
        model_name: &str,
        actual: Vec<f64>,
        predicted: Vec<f64>,
    ) -> Result<JsValue, JsValue> {
        let report = ModelEvaluator::compute_regression_metrics(model_name, &actual, &predicted).map_err(err_to_js)?;

        to_js(&MetricsResult {
            model_name: report.model_name().to_string(),
            metrics: report
                .iter()
                .map(|(m, v)| (m.display_name().to_string(), v))
                .collect(),
        })
    }

    /// Zoradené váhy; `feature_names` je pole stringov, `weight_kind` "c" alebo "importance"
    #[wasm_bindgen(js_name = rankFeatureWeights)]
    pub fn rank_feature_weights(
        &self,
        model_name: &str,
        weights: Vec<f64>,
        feature_names: JsValue,
        weight_kind: &str,
    ) -> Result<JsValue, JsValue> {
        let names: Vec<String> = serde_wasm_bindgen::from_value(feature_names)
            .map_err(|e| JsValue::from_str(&format!("Feature names parse error: {:?}", e)))?;
        let kind: WeightKind = weight_kind.parse().map_err(err_to_js)?;

        let report = ModelEvaluator::rank_feature_weights(model_name, &weights, &names, kind).map_err(err_to_js)?;

        to_js(&WeightsResult {
            model_name: report.model_name().to_string(),
            label: report.label().to_string(),
            ranked: report.ranked().to_vec(),
        })
    }

    /// Body grafu rezíduí [[predikcia, rezíduum], ...]
    #[wasm_bindgen(js_name = computeResiduals)]
    pub fn compute_residuals(&self, actual: Vec<f64>, predicted: Vec<f64>) -> Result<JsValue, JsValue> {
        let points = ModelEvaluator::compute_residuals(&actual, &predicted).map_err(err_to_js)?;
        let tuples: Vec<(f64, f64)> = points.iter().map(|p| p.as_tuple()).collect();
        to_js(&tuples)
    }

    /// Popis grafu váh pripravený pre renderer
    #[wasm_bindgen(js_name = plotFeatureWeights)]
    pub fn plot_feature_weights(
        &self,
        model_name: &str,
        weights: Vec<f64>,
        feature_names: JsValue,
        weight_kind: &str,
    ) -> Result<JsValue, JsValue> {
        let names: Vec<String> = serde_wasm_bindgen::from_value(feature_names)
            .map_err(|e| JsValue::from_str(&format!("Feature names parse error: {:?}", e)))?;
        let kind: WeightKind = weight_kind.parse().map_err(err_to_js)?;

        let report = ModelEvaluator::rank_feature_weights(model_name, &weights, &names, kind).map_err(err_to_js)?;
        to_js(&plot_feature_weights(&report))
    }
}

impl Default for WasmReporter {
    fn default() -> Self {
        Self::new()
    }
}
