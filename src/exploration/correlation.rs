use ndarray::Array2;
use serde::Serialize;

use crate::data_loading::SampleSet;
use crate::error::ReportError;

/// Pearsonova korelačná matica pomenovaných stĺpcov
#[derive(Debug, Clone, PartialEq)]
pub struct CorrelationMatrix {
    names: Vec<String>,
    values: Array2<f64>,
}

/// Korelácia jednej feature s cieľovou premennou
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LabelCorrelation {
    pub feature: String,
    pub r: f64,
}

impl CorrelationMatrix {
    /// `columns[i]` sú hodnoty stĺpca `names[i]`; všetky stĺpce rovnako dlhé
    pub fn compute(names: Vec<String>, columns: &[Vec<f64>]) -> Result<Self, ReportError> {
        if names.len() != columns.len() {
            return Err(ReportError::DimensionMismatch {
                expected: names.len(),
                found: columns.len(),
            });
        }
        if columns.is_empty() {
            return Err(ReportError::EmptyInput);
        }
        let n = columns[0].len();
        if let Some(bad) = columns.iter().find(|c| c.len() != n) {
            return Err(ReportError::DimensionMismatch {
                expected: n,
                found: bad.len(),
            });
        }

        let k = columns.len();
        let mut values = Array2::<f64>::zeros((k, k));
        for i in 0..k {
            values[[i, i]] = 1.0;
            for j in (i + 1)..k {
                let c = pearson_corr(&columns[i], &columns[j]);
                values[[i, j]] = c;
                values[[j, i]] = c;
            }
        }

        Ok(Self { names, values })
    }

    /// Korelácie features množiny vzoriek, voliteľne aj s cieľovým stĺpcom
    pub fn for_samples(samples: &SampleSet, include_label: bool) -> Result<Self, ReportError> {
        let mut names = samples.feature_names().to_vec();
        let mut columns = samples.columns();
        if include_label {
            names.push(samples.label_name().to_string());
            columns.push(samples.labels().to_vec());
        }
        Self::compute(names, &columns)
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn values(&self) -> &Array2<f64> {
        &self.values
    }

    pub fn get(&self, a: &str, b: &str) -> Option<f64> {
        let i = self.names.iter().position(|n| n == a)?;
        let j = self.names.iter().position(|n| n == b)?;
        Some(self.values[[i, j]])
    }

    /// Riadky matice ako vnorené vektory (pre heatmapu)
    pub fn to_rows(&self) -> Vec<Vec<f64>> {
        self.values.outer_iter().map(|row| row.to_vec()).collect()
    }
}

/// Pearsonov korelačný koeficient; pri nulovom rozptyle vracia 0
pub fn pearson_corr(x: &[f64], y: &[f64]) -> f64 {
    let n = x.len() as f64;
    if n == 0.0 || x.len() != y.len() {
        return 0.0;
    }
    let mean_x = x.iter().sum::<f64>() / n;
    let mean_y = y.iter().sum::<f64>() / n;
    let mut num = 0.0;
    let mut den_x = 0.0;
    let mut den_y = 0.0;
    for (xi, yi) in x.iter().zip(y.iter()) {
        let dx = xi - mean_x;
        let dy = yi - mean_y;
        num += dx * dy;
        den_x += dx * dx;
        den_y += dy * dy;
    }
    let den = (den_x * den_y).sqrt();
    if den == 0.0 {
        0.0
    } else {
        num / den
    }
}

/// Korelácia každej feature s labelom, zoradené podľa |r| zostupne
pub fn label_correlations(samples: &SampleSet) -> Vec<LabelCorrelation> {
    let labels = samples.labels();
    let mut out: Vec<LabelCorrelation> = samples
        .feature_names()
        .iter()
        .zip(samples.columns())
        .map(|(name, column)| LabelCorrelation {
            feature: name.clone(),
            r: pearson_corr(&column, labels),
        })
        .collect();
    out.sort_by(|a, b| b.r.abs().total_cmp(&a.r.abs()));
    out
}

/// Rozdelí features na (korelované, slabo korelované) podľa prahu |r|
pub fn split_by_correlation(samples: &SampleSet, threshold: f64) -> (Vec<String>, Vec<String>) {
    let mut correlated = Vec::new();
    let mut low = Vec::new();
    for c in label_correlations(samples) {
        if c.r.abs() >= threshold {
            correlated.push(c.feature);
        } else {
            low.push(c.feature);
        }
    }
    (correlated, low)
}
