pub mod builder;
pub mod config;
pub mod director;
pub mod experiment;

pub use builder::ExperimentBuilder;
pub use config::{ExperimentConfig, FeatureSelection};
pub use director::ExperimentDirector;
pub use experiment::{Experiment, ExperimentInfo, ExperimentOutcome};
