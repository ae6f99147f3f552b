//! Analýza telemetrie leteckých motorov a odhad time-to-failure (ttf).
//!
//! Načítanie trénovacích/testovacích CSV dát s explicitnou schémou,
//! prieskumné štatistiky, lineárna regresia (smartcore) a vyhodnotenie
//! modelu: RMSE, MAE, R^2, Explained Variance, zoradené váhy features
//! a rezíduá pre grafy.

pub mod data_loading;
pub mod error;
pub mod evaluation;
pub mod exploration;
pub mod models;
pub mod pipeline;
pub mod plotting;
pub mod wasm_api;

pub use data_loading::{CsvDataLoader, DataLoader, FeatureSchema, FeatureSet, RawTable, SampleSet};
pub use error::{AnalysisError, DataError, ModelError, ReportError};
pub use evaluation::{MetricsReport, MetricsTable, ModelEvaluator, RegressionMetric, ResidualPoint, WeightKind, WeightsReport};
pub use models::{IModel, LinRegWrapper, ModelFactory, RidgeWrapper};
pub use pipeline::{Experiment, ExperimentBuilder, ExperimentConfig, ExperimentDirector, ExperimentOutcome};
pub use wasm_api::WasmReporter;
