pub mod evaluator;
pub mod metrics;
pub mod residuals;
pub mod weights;

pub use evaluator::ModelEvaluator;
pub use metrics::{MetricsReport, MetricsTable, RegressionMetric};
pub use residuals::ResidualPoint;
pub use weights::{WeightKind, WeightsReport};
