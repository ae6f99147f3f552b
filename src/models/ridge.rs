use smartcore::linalg::basic::matrix::DenseMatrix;
use smartcore::linear::ridge_regression::{RidgeRegression, RidgeRegressionParameters, RidgeRegressionSolverName};

use super::{coefficient_vector, IModel};
use crate::error::ModelError;
use crate::evaluation::WeightKind;

/// Ridge Regression (L2 regularizácia)
pub struct RidgeWrapper
{
    model: Option<RidgeRegression<f64, f64, DenseMatrix<f64>, Vec<f64>>>,
    alpha: f64, // L2 regularization parameter
    normalize: bool,
}

impl RidgeWrapper
{
    pub fn new() -> Self
    {
        Self {
            model: None,
            alpha: 1.0,
            normalize: true,
        }
    }

    pub fn with_alpha(alpha: f64) -> Self
    {
        Self { alpha, ..Self::new() }
    }

    pub fn alpha(&self) -> f64
    {
        self.alpha
    }
}

impl Default for RidgeWrapper
{
    fn default() -> Self
    {
        Self::new()
    }
}

impl IModel for RidgeWrapper
{
    fn get_name(&self) -> &str { "Ridge Regression" }

    fn get_supported_params(&self) -> Vec<&str>
    {
        vec!["alpha", "normalize"]
    }

    fn set_param(&mut self, key: &str, value: &str) -> Result<(), ModelError>
    {
        let invalid = |reason: &str| ModelError::InvalidParam {
            key: key.to_string(),
            reason: reason.to_string(),
        };

        match key
        {
            "alpha" => {
                let alpha: f64 = value.parse().map_err(|_| invalid("alpha musí byť číslo"))?;
                if !alpha.is_finite() || alpha < 0.0 {
                    return Err(invalid("alpha musí byť nezáporné číslo"));
                }
                self.alpha = alpha;
                Ok(())
            }
            "normalize" => {
                self.normalize = value.parse().map_err(|_| invalid("normalize je true alebo false"))?;
                Ok(())
            }
            _ => Err(invalid("parameter neexistuje")),
        }
    }

    fn train(&mut self, x: &DenseMatrix<f64>, y: &[f64]) -> Result<(), ModelError>
    {
        let params = RidgeRegressionParameters {
            alpha: self.alpha,
            normalize: self.normalize,
            solver: RidgeRegressionSolverName::Cholesky,
        };

        let y_vec = y.to_vec(); // RidgeRegression potrebuje Vec, nie slice
        let model = RidgeRegression::fit(x, &y_vec, params)
            .map_err(|e| ModelError::Fit(e.to_string()))?;
        self.model = Some(model);

        tracing::debug!(alpha = self.alpha, samples = y.len(), "ridge regresia natrénovaná");
        Ok(())
    }

    fn predict(&self, x: &DenseMatrix<f64>) -> Result<Vec<f64>, ModelError>
    {
        let model = self.model.as_ref().ok_or(ModelError::NotFitted)?;
        model.predict(x).map_err(|e| ModelError::Fit(e.to_string()))
    }

    fn weights(&self) -> Option<Vec<f64>>
    {
        self.model.as_ref().map(|m| coefficient_vector(m.coefficients()))
    }

    fn weight_kind(&self) -> WeightKind
    {
        WeightKind::Coefficient
    }
}
