use smartcore::linalg::basic::matrix::DenseMatrix;
use smartcore::linear::linear_regression::{LinearRegression, LinearRegressionParameters, LinearRegressionSolverName};

use super::{coefficient_vector, IModel};
use crate::error::ModelError;
use crate::evaluation::WeightKind;

pub struct LinRegWrapper
{
    pub(crate) model: Option<LinearRegression<f64, f64, DenseMatrix<f64>, Vec<f64>>>,
    solver: String,
}

impl LinRegWrapper
{
    pub fn new() -> Self
    {
        Self { model: None, solver: "qr".to_string() }
    }

    pub fn solver(&self) -> &str
    {
        &self.solver
    }
}

impl Default for LinRegWrapper
{
    fn default() -> Self
    {
        Self::new()
    }
}

impl IModel for LinRegWrapper
{
    fn get_name(&self) -> &str { "Linear Regression" }

    fn get_supported_params(&self) -> Vec<&str>
    {
        vec!["solver"]
    }

    fn set_param(&mut self, key: &str, value: &str) -> Result<(), ModelError>
    {
        match key {
            "solver" => {
                if value == "qr" || value == "svd"
                {
                    self.solver = value.to_string();
                    Ok(())
                } else {
                    Err(ModelError::InvalidParam {
                        key: key.to_string(),
                        reason: "podporované solver-y sú: qr, svd".to_string(),
                    })
                }
            }
            _ => Err(ModelError::InvalidParam {
                key: key.to_string(),
                reason: "parameter neexistuje".to_string(),
            }),
        }
    }

    fn train(&mut self, x: &DenseMatrix<f64>, y: &[f64]) -> Result<(), ModelError>
    {
        let mut params = LinearRegressionParameters::default();
        params.solver = match self.solver.as_str()
        {
            "svd" => LinearRegressionSolverName::SVD,
            _ => LinearRegressionSolverName::QR,
        };

        let y_vec = y.to_vec();
        let model = LinearRegression::fit(x, &y_vec, params)
            .map_err(|e| ModelError::Fit(e.to_string()))?;
        self.model = Some(model);

        tracing::debug!(solver = %self.solver, samples = y.len(), "lineárna regresia natrénovaná");
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
