use smartcore::linalg::basic::matrix::DenseMatrix;

use super::schema::FeatureSchema;
use crate::error::{DataError, ModelError};

/// Validovaná množina vzoriek: každý riadok má rovnakú schému features,
/// všetky hodnoty aj label sú konečné čísla.
#[derive(Debug, Clone, PartialEq)]
pub struct SampleSet {
    feature_names: Vec<String>,
    label_name: String,
    rows: Vec<Vec<f64>>,
    labels: Vec<f64>,
}

impl SampleSet {
    pub fn new(
        feature_names: Vec<String>,
        label_name: &str,
        rows: Vec<Vec<f64>>,
        labels: Vec<f64>,
    ) -> Result<Self, DataError> {
        if rows.len() != labels.len() {
            return Err(DataError::EmptyData(format!(
                "počet riadkov ({}) nesúhlasí s počtom labelov ({})",
                rows.len(),
                labels.len()
            )));
        }

        for (row_idx, row) in rows.iter().enumerate() {
            if row.len() != feature_names.len() {
                return Err(DataError::RaggedRow {
                    row: row_idx + 1,
                    expected: feature_names.len(),
                    found: row.len(),
                });
            }
            if let Some(col) = row.iter().position(|v| !v.is_finite()) {
                return Err(DataError::NonFinite {
                    column: feature_names[col].clone(),
                    row: row_idx + 1,
                });
            }
        }
        if let Some(row_idx) = labels.iter().position(|v| !v.is_finite()) {
            return Err(DataError::NonFinite {
                column: label_name.to_string(),
                row: row_idx + 1,
            });
        }

        Ok(Self {
            feature_names,
            label_name: label_name.to_string(),
            rows,
            labels,
        })
    }

    pub fn feature_names(&self) -> &[String] {
        &self.feature_names
    }

    pub fn label_name(&self) -> &str {
        &self.label_name
    }

    pub fn rows(&self) -> &[Vec<f64>] {
        &self.rows
    }

    pub fn labels(&self) -> &[f64] {
        &self.labels
    }

    pub fn num_samples(&self) -> usize {
        self.rows.len()
    }

    pub fn num_features(&self) -> usize {
        self.feature_names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Hodnoty jedného stĺpca podľa názvu (aj cieľového)
    pub fn column(&self, name: &str) -> Option<Vec<f64>> {
        if name == self.label_name {
            return Some(self.labels.clone());
        }
        let idx = self.feature_names.iter().position(|f| f == name)?;
        Some(self.rows.iter().map(|row| row[idx]).collect())
    }

    /// Všetky stĺpce features (columns[i] = hodnoty i-tej feature)
    pub fn columns(&self) -> Vec<Vec<f64>> {
        (0..self.num_features())
            .map(|j| self.rows.iter().map(|row| row[j]).collect())
            .collect()
    }

    /// Vyberie podmnožinu features v poradí schémy.
    /// Chýbajúce features alebo iný label znamenajú chybu.
    pub fn select(&self, schema: &FeatureSchema) -> Result<SampleSet, DataError> {
        let mut headers = self.feature_names.clone();
        headers.push(self.label_name.clone());
        let (indices, _) = schema.resolve(&headers)?;

        let rows = self
            .rows
            .iter()
            .map(|row| indices.iter().map(|&i| row[i]).collect())
            .collect();

        Ok(SampleSet {
            feature_names: schema.features().to_vec(),
            label_name: self.label_name.clone(),
            rows,
            labels: self.labels.clone(),
        })
    }

    /// Konverzia features na smartcore maticu
    pub fn to_matrix(&self) -> Result<DenseMatrix<f64>, ModelError> {
        if self.rows.is_empty() {
            return Err(ModelError::Matrix("množina vzoriek je prázdna".to_string()));
        }
        DenseMatrix::from_2d_vec(&self.rows).map_err(|e| ModelError::Matrix(e.to_string()))
    }
}
