use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::data_loading::{FeatureSchema, FeatureSet, TARGET_COLUMN};
use crate::error::{AnalysisError, DataError};

/// Výber features - preddefinovaná sada alebo vlastný zoznam
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FeatureSelection {
    Preset(FeatureSet),
    Custom(Vec<String>),
}

impl Default for FeatureSelection {
    fn default() -> Self {
        FeatureSelection::Preset(FeatureSet::Original)
    }
}

/// JSON konfigurácia experimentu
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExperimentConfig {
    pub model: String,
    pub display_name: Option<String>,
    pub features: FeatureSelection,
    pub label: String,
    pub model_params: Vec<(String, String)>,
}

impl Default for ExperimentConfig {
    fn default() -> Self {
        Self {
            model: "linreg".to_string(),
            display_name: None,
            features: FeatureSelection::default(),
            label: TARGET_COLUMN.to_string(),
            model_params: Vec::new(),
        }
    }
}

impl ExperimentConfig {
    pub fn from_json(text: &str) -> Result<Self, AnalysisError> {
        Ok(serde_json::from_str(text)?)
    }

    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, AnalysisError> {
        let text = fs::read_to_string(path).map_err(DataError::from)?;
        Self::from_json(&text)
    }

    pub fn to_json(&self) -> Result<String, AnalysisError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Schéma features podľa konfigurácie
    pub fn schema(&self) -> Result<FeatureSchema, DataError> {
        let names = match &self.features {
            FeatureSelection::Preset(set) => set.names().iter().map(|s| s.to_string()).collect(),
            FeatureSelection::Custom(names) => names.clone(),
        };
        FeatureSchema::new(names, &self.label)
    }
}
