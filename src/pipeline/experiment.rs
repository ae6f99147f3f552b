use std::path::Path;

use super::builder::ExperimentBuilder;
use crate::data_loading::{CsvDataLoader, FeatureSchema, SampleSet};
use crate::error::AnalysisError;
use crate::evaluation::{MetricsReport, ModelEvaluator, ResidualPoint, WeightsReport};
use crate::models::IModel;
use crate::plotting::{plot_feature_weights, plot_residuals, Figure};

/// Facade pre celý experiment: výber features, tréning, predikcia a vyhodnotenie
pub struct Experiment {
    pub(crate) model: Box<dyn IModel>,
    pub(crate) model_type: String,
    pub(crate) display_name: String,
    pub(crate) schema: FeatureSchema,
}

/// Výsledok jedného behu experimentu
#[derive(Debug, Clone)]
pub struct ExperimentOutcome {
    pub model_name: String,
    pub feature_names: Vec<String>,
    pub train_r2: f64,
    pub test_r2: f64,
    /// Metriky na testovacích dátach
    pub metrics: MetricsReport,
    pub weights: Option<WeightsReport>,
    pub train_residuals: Vec<ResidualPoint>,
    pub test_residuals: Vec<ResidualPoint>,
    pub test_predictions: Vec<f64>,
}

impl ExperimentOutcome {
    pub fn summary(&self) -> String {
        format!("R^2 training: {:.3}, R^2 test: {:.3}", self.train_r2, self.test_r2)
    }

    pub fn weights_figure(&self) -> Option<Figure> {
        self.weights.as_ref().map(plot_feature_weights)
    }

    pub fn residuals_figure(&self) -> Figure {
        plot_residuals(&self.model_name, &self.train_residuals, &self.test_residuals)
    }
}

impl Experiment {
    /// Vytvorí builder pre konfiguráciu experimentu
    pub fn builder() -> ExperimentBuilder {
        ExperimentBuilder::new()
    }

    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    pub fn schema(&self) -> &FeatureSchema {
        &self.schema
    }

    pub fn model(&self) -> &dyn IModel {
        self.model.as_ref()
    }

    /// Natrénuje model na trénovacích dátach a vyhodnotí ho na testovacích
    pub fn run(&mut self, train: &SampleSet, test: &SampleSet) -> Result<ExperimentOutcome, AnalysisError> {
        let train = train.select(&self.schema)?;
        let test = test.select(&self.schema)?;

        let x_train = train.to_matrix()?;
        let x_test = test.to_matrix()?;

        self.model.train(&x_train, train.labels())?;

        let y_train_pred = self.model.predict(&x_train)?;
        let y_test_pred = self.model.predict(&x_test)?;

        let train_r2 = ModelEvaluator::r2_score(train.labels(), &y_train_pred)?;
        let test_r2 = ModelEvaluator::r2_score(test.labels(), &y_test_pred)?;

        tracing::info!(
            model = %self.display_name,
            features = self.schema.len(),
            train_samples = train.num_samples(),
            test_samples = test.num_samples(),
            train_r2,
            test_r2,
            "experiment dokončený"
        );

        let metrics = ModelEvaluator::compute_regression_metrics(&self.display_name, test.labels(), &y_test_pred)?;

        let weights = self
            .model
            .weights()
            .map(|w| {
                ModelEvaluator::rank_feature_weights(
                    &self.display_name,
                    &w,
                    train.feature_names(),
                    self.model.weight_kind(),
                )
            })
            .transpose()?;

        let train_residuals = ModelEvaluator::compute_residuals(train.labels(), &y_train_pred)?;
        let test_residuals = ModelEvaluator::compute_residuals(test.labels(), &y_test_pred)?;

        Ok(ExperimentOutcome {
            model_name: self.display_name.clone(),
            feature_names: train.feature_names().to_vec(),
            train_r2,
            test_r2,
            metrics,
            weights,
            train_residuals,
            test_residuals,
            test_predictions: y_test_pred,
        })
    }

    /// Načíta trénovací a testovací CSV súbor podľa schémy a spustí experiment
    pub fn run_csv<P: AsRef<Path>, Q: AsRef<Path>>(
        &mut self,
        train_path: P,
        test_path: Q,
    ) -> Result<ExperimentOutcome, AnalysisError> {
        let loader = CsvDataLoader::new();
        let train = loader.load_samples_from_path(train_path, &self.schema)?;
        let test = loader.load_samples_from_path(test_path, &self.schema)?;
        self.run(&train, &test)
    }

    /// Získa informácie o experimente
    pub fn info(&self) -> ExperimentInfo {
        ExperimentInfo {
            model_name: self.model.get_name().to_string(),
            model_type: self.model_type.clone(),
            display_name: self.display_name.clone(),
            features: self.schema.features().to_vec(),
            label: self.schema.label().to_string(),
        }
    }
}

/// Informácie o nakonfigurovanom experimente
#[derive(Debug, Clone, PartialEq)]
pub struct ExperimentInfo {
    pub model_name: String,
    pub model_type: String,
    pub display_name: String,
    pub features: Vec<String>,
    pub label: String,
}
