use smartcore::metrics::{mean_absolute_error, mean_squared_error, r2};
use statrs::statistics::Statistics;

use super::metrics::MetricsReport;
use super::residuals::ResidualPoint;
use super::weights::{WeightKind, WeightsReport};
use crate::error::ReportError;

pub struct ModelEvaluator;

impl ModelEvaluator {
    /// Vypočíta regresné metriky (RMSE, MAE, R^2, Explained Variance).
    /// Sumy sa akumulujú zľava doprava kvôli reprodukovateľnosti.
    pub fn compute_regression_metrics(
        model_name: &str,
        actual: &[f64],
        predicted: &[f64],
    ) -> Result<MetricsReport, ReportError> {
        if model_name.trim().is_empty() {
            return Err(ReportError::MissingModelName);
        }
        Self::check_pair(actual, predicted)?;

        let y_true_vec: Vec<f64> = actual.to_vec();
        let y_pred_vec: Vec<f64> = predicted.to_vec();

        let r2_val = Self::calculate_r2(&y_true_vec, &y_pred_vec)?;
        let explained_var = Self::calculate_explained_variance(&y_true_vec, &y_pred_vec)?;
        let rmse = mean_squared_error(&y_true_vec, &y_pred_vec).sqrt();
        let mae = mean_absolute_error(&y_true_vec, &y_pred_vec);

        tracing::debug!(
            model = model_name,
            samples = actual.len(),
            rmse,
            mae,
            r2 = r2_val,
            "regresné metriky vypočítané"
        );

        Ok(MetricsReport::new(model_name.to_string(), rmse, mae, r2_val, explained_var))
    }

    /// Zoradí váhy modelu vzostupne a priradí im názvy features
    pub fn rank_feature_weights(
        model_name: &str,
        weights: &[f64],
        feature_names: &[String],
        weight_kind: WeightKind,
    ) -> Result<WeightsReport, ReportError> {
        WeightsReport::rank(model_name, weights, feature_names, weight_kind)
    }

    /// Rezíduá v pôvodnom poradí: (predikcia, predikcia - skutočnosť)
    pub fn compute_residuals(actual: &[f64], predicted: &[f64]) -> Result<Vec<ResidualPoint>, ReportError> {
        Self::check_pair(actual, predicted)?;

        Ok(actual
            .iter()
            .zip(predicted.iter())
            .map(|(&a, &p)| ResidualPoint {
                predicted: p,
                residual: p - a,
            })
            .collect())
    }

    /// Koeficient determinácie - jediný kanonický výpočet R^2 v celom crate
    pub fn r2_score(actual: &[f64], predicted: &[f64]) -> Result<f64, ReportError> {
        Self::check_pair(actual, predicted)?;
        Self::calculate_r2(&actual.to_vec(), &predicted.to_vec())
    }

    // ============= Pomocné funkcie =============

    fn check_pair(actual: &[f64], predicted: &[f64]) -> Result<(), ReportError> {
        if actual.len() != predicted.len() {
            return Err(ReportError::DimensionMismatch {
                expected: actual.len(),
                found: predicted.len(),
            });
        }
        if actual.is_empty() {
            return Err(ReportError::EmptyInput);
        }
        Ok(())
    }

    fn is_constant(values: &[f64]) -> bool {
        values.iter().all(|v| *v == values[0])
    }

    fn calculate_r2(y_true: &Vec<f64>, y_pred: &Vec<f64>) -> Result<f64, ReportError> {
        if Self::is_constant(y_true) || y_true.iter().population_variance() == 0.0 {
            return Err(ReportError::UndefinedMetric { metric: "R^2" });
        }
        Ok(r2(y_true, y_pred))
    }

    /// 1 - Var(chyby) / Var(skutočnosť), populačný rozptyl
    fn calculate_explained_variance(y_true: &[f64], y_pred: &[f64]) -> Result<f64, ReportError> {
        let var_actual = y_true.iter().population_variance();
        if Self::is_constant(y_true) || var_actual == 0.0 {
            return Err(ReportError::UndefinedMetric {
                metric: "Explained Variance",
            });
        }

        let errors: Vec<f64> = y_true
            .iter()
            .zip(y_pred.iter())
            .map(|(t, p)| t - p)
            .collect();
        Ok(1.0 - errors.iter().population_variance() / var_actual)
    }
}
