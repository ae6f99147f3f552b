use smartcore::linalg::basic::arrays::Array;
use smartcore::linalg::basic::matrix::DenseMatrix;

use crate::error::ModelError;
use crate::evaluation::WeightKind;

pub trait IModel
{
    fn get_name(&self) -> &str;

    fn get_supported_params(&self) -> Vec<&str>;

    fn set_param(&mut self, key: &str, value: &str) -> Result<(), ModelError>;

    fn train(&mut self, x: &DenseMatrix<f64>, y: &[f64]) -> Result<(), ModelError>;

    fn predict(&self, x: &DenseMatrix<f64>) -> Result<Vec<f64>, ModelError>;

    /// Naučené váhy v poradí stĺpcov trénovacej matice (None pred tréningom)
    fn weights(&self) -> Option<Vec<f64>>;

    fn weight_kind(&self) -> WeightKind;
}

/// Koeficienty zo smartcore ako plochý vektor (stĺpcový aj riadkový tvar)
pub(crate) fn coefficient_vector(coefficients: &DenseMatrix<f64>) -> Vec<f64>
{
    let (rows, cols) = coefficients.shape();
    if cols == 1 {
        (0..rows).map(|i| *coefficients.get((i, 0))).collect()
    } else {
        (0..cols).map(|j| *coefficients.get((0, j))).collect()
    }
}

pub mod factory;
pub mod linreg;
pub mod ridge;

pub use factory::ModelFactory;
pub use linreg::LinRegWrapper;
pub use ridge::RidgeWrapper;
