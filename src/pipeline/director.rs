use super::builder::ExperimentBuilder;
use super::experiment::{Experiment, ExperimentOutcome};
use crate::data_loading::{FeatureSet, SampleSet};
use crate::error::AnalysisError;
use crate::evaluation::MetricsTable;

/// Director pre Builder pattern - hotové "recepty" na experimenty
pub struct ExperimentDirector;

impl ExperimentDirector {
    /// Lineárna regresia nad zvolenou sadou features
    pub fn linear_regression(feature_set: FeatureSet) -> Result<Experiment, AnalysisError> {
        ExperimentBuilder::new()
            .model("linreg")
            .feature_set(feature_set)
            .build()
    }

    /// Ridge regresia s daným alpha
    pub fn ridge_regression(alpha: f64, feature_set: FeatureSet) -> Result<Experiment, AnalysisError> {
        ExperimentBuilder::new()
            .model("ridge")
            .model_param("alpha", &alpha.to_string())
            .display_name(&format!("Ridge Regression (alpha={})", alpha))
            .feature_set(feature_set)
            .build()
    }

    /// Porovná lineárnu regresiu nad všetkými preddefinovanými sadami features.
    /// Stĺpce tabuľky sú pomenované podľa sady features.
    pub fn compare_feature_sets(
        train: &SampleSet,
        test: &SampleSet,
    ) -> Result<(Vec<ExperimentOutcome>, MetricsTable), AnalysisError> {
        let mut outcomes = Vec::new();

        for set in FeatureSet::ALL {
            let mut experiment = ExperimentBuilder::new()
                .model("linreg")
                .feature_set(set)
                .display_name(&format!("Linear Regression ({})", set.get_name()))
                .build()?;
            let outcome = experiment.run(train, test)?;
            tracing::info!(feature_set = set.get_name(), "{}", outcome.summary());
            outcomes.push(outcome);
        }

        let table = MetricsTable::from_reports(outcomes.iter().map(|o| o.metrics.clone()).collect())?;
        Ok((outcomes, table))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data_loading::TARGET_COLUMN;
    use crate::evaluation::RegressionMetric;

    /// Syntetické dáta so všetkými 24 stĺpcami pôvodnej sady
    fn telemetry(offset: usize, n: usize) -> SampleSet {
        let names: Vec<String> = FeatureSet::Original.names().iter().map(|s| s.to_string()).collect();
        let rows: Vec<Vec<f64>> = (offset..offset + n)
            .map(|i| {
                (0..names.len())
                    .map(|j| ((i * (j + 3)) as f64 * 0.13).sin() * (j + 1) as f64 + i as f64 * 0.01 * j as f64)
                    .collect()
            })
            .collect();
        // ttf závisí od s2 a s11
        let s2 = names.iter().position(|n| n == "s2").unwrap();
        let s11 = names.iter().position(|n| n == "s11").unwrap();
        let labels = rows.iter().map(|r| 150.0 + 3.0 * r[s2] - 2.0 * r[s11]).collect();
        SampleSet::new(names, TARGET_COLUMN, rows, labels).unwrap()
    }

    #[test]
    fn recipes_build() {
        assert_eq!(
            ExperimentDirector::linear_regression(FeatureSet::Correlated).unwrap().schema().len(),
            15
        );
        let ridge = ExperimentDirector::ridge_regression(0.5, FeatureSet::LowCorrelation).unwrap();
        assert_eq!(ridge.display_name(), "Ridge Regression (alpha=0.5)");
        assert!(ExperimentDirector::ridge_regression(-1.0, FeatureSet::Original).is_err());
    }

    #[test]
    fn compares_all_feature_sets() {
        let (outcomes, table) = ExperimentDirector::compare_feature_sets(&telemetry(0, 120), &telemetry(120, 40)).unwrap();
        assert_eq!(outcomes.len(), 3);
        assert_eq!(table.model_names().len(), 3);

        // s2 aj s11 sú v korelovanej aj pôvodnej sade, nie v slabo korelovanej
        let r2 = table.row(RegressionMetric::R2);
        assert!(r2[0] > 0.999);
        assert!(r2[2] > 0.999);
        assert!(r2[1] < r2[2]);
    }
}
