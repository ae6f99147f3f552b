use super::{IModel, LinRegWrapper, RidgeWrapper};
use crate::error::ModelError;

/// Factory pre vytváranie modelov podľa názvu
pub struct ModelFactory;

impl ModelFactory {
    /// Vytvorí model na základe názvu
    pub fn create(model_type: &str) -> Result<Box<dyn IModel>, ModelError> {
        match model_type {
            "linreg" | "linear_regression" => Ok(Box::new(LinRegWrapper::new())),
            "ridge" | "ridge_regression" => Ok(Box::new(RidgeWrapper::new())),
            _ => Err(ModelError::UnknownModel(model_type.to_string())),
        }
    }

    /// Vytvorí model a nastaví mu parametre
    pub fn create_with_params(
        model_type: &str,
        params: &[(String, String)],
    ) -> Result<Box<dyn IModel>, ModelError> {
        let mut model = Self::create(model_type)?;
        for (key, value) in params {
            model.set_param(key, value)?;
        }
        Ok(model)
    }

    /// Vráti zoznam všetkých dostupných modelov
    pub fn available_models() -> Vec<&'static str> {
        vec!["linreg", "ridge"]
    }

    /// Vráti popis modelu
    pub fn get_model_description(model_type: &str) -> Option<&'static str> {
        match model_type {
            "linreg" | "linear_regression" => Some("Lineárna Regresia (OLS) - predikcia time-to-failure"),
            "ridge" | "ridge_regression" => Some("Ridge Regresia - lineárny model s L2 regularizáciou"),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn creates_known_models() {
        for name in ModelFactory::available_models() {
            let model = ModelFactory::create(name).unwrap();
            assert!(!model.get_name().is_empty());
            assert!(ModelFactory::get_model_description(name).is_some());
        }
        assert_eq!(ModelFactory::create("linear_regression").unwrap().get_name(), "Linear Regression");
    }

    #[test]
    fn unknown_model() {
        assert!(matches!(ModelFactory::create("knn"), Err(ModelError::UnknownModel(_))));
    }

    #[test]
    fn params_are_applied() {
        let params = vec![("solver".to_string(), "svd".to_string())];
        assert!(ModelFactory::create_with_params("linreg", &params).is_ok());
        assert!(ModelFactory::create_with_params("ridge", &params).is_err());
    }
}
