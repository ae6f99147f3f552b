use super::config::{ExperimentConfig, FeatureSelection};
use super::experiment::Experiment;
use crate::data_loading::{FeatureSet, TARGET_COLUMN};
use crate::error::{AnalysisError, ModelError};
use crate::models::ModelFactory;

/// Builder pre konfiguráciu experimentu
pub struct ExperimentBuilder {
    model_type: Option<String>,
    model_params: Vec<(String, String)>,
    features: FeatureSelection,
    label: String,
    display_name: Option<String>,
}

impl ExperimentBuilder {
    pub fn new() -> Self {
        Self {
            model_type: None,
            model_params: Vec::new(),
            features: FeatureSelection::default(),
            label: TARGET_COLUMN.to_string(),
            display_name: None,
        }
    }

    /// Builder predvyplnený z JSON konfigurácie
    pub fn from_config(config: &ExperimentConfig) -> Self {
        Self {
            model_type: Some(config.model.clone()),
            model_params: config.model_params.clone(),
            features: config.features.clone(),
            label: config.label.clone(),
            display_name: config.display_name.clone(),
        }
    }

    /// Nastaví model
    pub fn model(mut self, model_type: &str) -> Self {
        self.model_type = Some(model_type.to_string());
        self
    }

    /// Nastaví parameter modelu
    pub fn model_param(mut self, key: &str, value: &str) -> Self {
        self.model_params.push((key.to_string(), value.to_string()));
        self
    }

    /// Použije preddefinovanú sadu features
    pub fn feature_set(mut self, set: FeatureSet) -> Self {
        self.features = FeatureSelection::Preset(set);
        self
    }

    /// Použije vlastný zoznam features (v danom poradí)
    pub fn features(mut self, names: Vec<String>) -> Self {
        self.features = FeatureSelection::Custom(names);
        self
    }

    /// Názov cieľového stĺpca
    pub fn label(mut self, label: &str) -> Self {
        self.label = label.to_string();
        self
    }

    /// Názov modelu v reportoch (inak názov modelu z factory)
    pub fn display_name(mut self, name: &str) -> Self {
        self.display_name = Some(name.to_string());
        self
    }

    /// Vytvorí Experiment s validáciou modelu, parametrov aj schémy
    pub fn build(self) -> Result<Experiment, AnalysisError> {
        let model_type = self
            .model_type
            .ok_or_else(|| AnalysisError::Config("Model musí byť nastavený".to_string()))?;

        let model = ModelFactory::create_with_params(&model_type, &self.model_params)?;

        let config = ExperimentConfig {
            model: model_type.clone(),
            display_name: self.display_name.clone(),
            features: self.features,
            label: self.label,
            model_params: self.model_params,
        };
        let schema = config.schema()?;

        if self.display_name.as_deref().is_some_and(|name| name.trim().is_empty()) {
            return Err(ModelError::InvalidParam {
                key: "display_name".to_string(),
                reason: "názov modelu nesmie byť prázdny".to_string(),
            }
            .into());
        }
        let display_name = self
            .display_name
            .unwrap_or_else(|| model.get_name().to_string());

        Ok(Experiment {
            model,
            model_type,
            display_name,
            schema,
        })
    }
}

impl Default for ExperimentBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DataError;

    #[test]
    fn model_is_required() {
        assert!(matches!(ExperimentBuilder::new().build(), Err(AnalysisError::Config(_))));
    }

    #[test]
    fn defaults_to_original_features_and_model_name() {
        let experiment = ExperimentBuilder::new().model("linreg").build().unwrap();
        assert_eq!(experiment.display_name(), "Linear Regression");
        assert_eq!(experiment.schema().len(), 24);
        assert_eq!(experiment.schema().label(), "ttf");
    }

    #[test]
    fn invalid_model_param_fails_early() {
        let result = ExperimentBuilder::new().model("linreg").model_param("solver", "lu").build();
        assert!(matches!(result, Err(AnalysisError::Model(ModelError::InvalidParam { .. }))));
    }

    #[test]
    fn duplicate_custom_features_fail() {
        let result = ExperimentBuilder::new()
            .model("linreg")
            .features(vec!["s2".into(), "s2".into()])
            .build();
        assert!(matches!(result, Err(AnalysisError::Data(DataError::InvalidSchema(_)))));
    }

    #[test]
    fn blank_display_name_is_rejected() {
        let result = ExperimentBuilder::new().model("linreg").display_name("  ").build();
        assert!(matches!(
            result,
            Err(AnalysisError::Model(ModelError::InvalidParam { ref key, .. })) if key == "display_name"
        ));
    }

    #[test]
    fn from_config_uses_display_name() {
        let config = ExperimentConfig {
            model: "ridge".to_string(),
            display_name: Some("Ridge (α=0.5)".to_string()),
            model_params: vec![("alpha".to_string(), "0.5".to_string())],
            ..ExperimentConfig::default()
        };
        let experiment = ExperimentBuilder::from_config(&config).build().unwrap();
        assert_eq!(experiment.display_name(), "Ridge (α=0.5)");
        assert_eq!(experiment.info().model_type, "ridge");
    }
}
