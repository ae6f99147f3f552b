use std::fmt;

use serde::Serialize;

use crate::error::ReportError;

/// Regresné metriky v kanonickom poradí reportu
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum RegressionMetric {
    RootMeanSquaredError,
    MeanAbsoluteError,
    R2,
    ExplainedVariance,
}

impl RegressionMetric {
    pub const ALL: [RegressionMetric; 4] = [
        RegressionMetric::RootMeanSquaredError,
        RegressionMetric::MeanAbsoluteError,
        RegressionMetric::R2,
        RegressionMetric::ExplainedVariance,
    ];

    pub fn display_name(&self) -> &'static str {
        match self {
            RegressionMetric::RootMeanSquaredError => "Root Mean Squared Error",
            RegressionMetric::MeanAbsoluteError => "Mean Absolute Error",
            RegressionMetric::R2 => "R^2",
            RegressionMetric::ExplainedVariance => "Explained Variance",
        }
    }
}

impl fmt::Display for RegressionMetric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Report regresných metrík jedného modelu.
/// Po vytvorení sa nedá meniť - hodnoty sú dostupné len cez gettery.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MetricsReport {
    model_name: String,
    metrics: Vec<(RegressionMetric, f64)>,
}

impl MetricsReport {
    pub(crate) fn new(model_name: String, rmse: f64, mae: f64, r2: f64, explained_variance: f64) -> Self {
        Self {
            model_name,
            metrics: vec![
                (RegressionMetric::RootMeanSquaredError, rmse),
                (RegressionMetric::MeanAbsoluteError, mae),
                (RegressionMetric::R2, r2),
                (RegressionMetric::ExplainedVariance, explained_variance),
            ],
        }
    }

    pub fn model_name(&self) -> &str {
        &self.model_name
    }

    pub fn get(&self, metric: RegressionMetric) -> f64 {
        self.metrics
            .iter()
            .find(|(m, _)| *m == metric)
            .map(|(_, v)| *v)
            .unwrap_or(f64::NAN)
    }

    pub fn rmse(&self) -> f64 {
        self.get(RegressionMetric::RootMeanSquaredError)
    }

    pub fn mae(&self) -> f64 {
        self.get(RegressionMetric::MeanAbsoluteError)
    }

    pub fn r2(&self) -> f64 {
        self.get(RegressionMetric::R2)
    }

    pub fn explained_variance(&self) -> f64 {
        self.get(RegressionMetric::ExplainedVariance)
    }

    /// Metriky v kanonickom poradí (RMSE, MAE, R^2, Explained Variance)
    pub fn iter(&self) -> impl Iterator<Item = (RegressionMetric, f64)> + '_ {
        self.metrics.iter().copied()
    }
}

impl fmt::Display for MetricsReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        MetricsTable {
            reports: vec![self.clone()],
        }
        .fmt(f)
    }
}

/// Porovnávacia tabuľka: riadky sú metriky, stĺpce sú modely
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MetricsTable {
    reports: Vec<MetricsReport>,
}

impl MetricsTable {
    pub fn from_reports(reports: Vec<MetricsReport>) -> Result<Self, ReportError> {
        if reports.is_empty() {
            return Err(ReportError::EmptyInput);
        }
        Ok(Self { reports })
    }

    pub fn model_names(&self) -> Vec<&str> {
        self.reports.iter().map(|r| r.model_name()).collect()
    }

    pub fn reports(&self) -> &[MetricsReport] {
        &self.reports
    }

    /// Hodnota metriky pre daný model (None ak model v tabuľke nie je)
    pub fn value(&self, metric: RegressionMetric, model_name: &str) -> Option<f64> {
        self.reports
            .iter()
            .find(|r| r.model_name() == model_name)
            .map(|r| r.get(metric))
    }

    /// Riadok tabuľky - hodnoty jednej metriky pre všetky modely
    pub fn row(&self, metric: RegressionMetric) -> Vec<f64> {
        self.reports.iter().map(|r| r.get(metric)).collect()
    }
}

impl fmt::Display for MetricsTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label_width = RegressionMetric::ALL
            .iter()
            .map(|m| m.display_name().len())
            .max()
            .unwrap_or(0);

        write!(f, "{:label_width$}", "")?;
        for report in &self.reports {
            write!(f, "  {:>20}", report.model_name())?;
        }
        writeln!(f)?;

        for metric in RegressionMetric::ALL {
            write!(f, "{:label_width$}", metric.display_name())?;
            for value in self.row(metric) {
                write!(f, "  {:>20.6}", value)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
