use std::str::FromStr;

use serde::Serialize;

use crate::error::ReportError;

/// Typ váh modelu - koeficienty lineárneho modelu alebo dôležitosť features
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum WeightKind {
    Coefficient,
    Importance,
}

impl WeightKind {
    pub fn label(&self) -> &'static str {
        match self {
            WeightKind::Coefficient => "Coefficients",
            WeightKind::Importance => "Feature Importance",
        }
    }
}

impl FromStr for WeightKind {
    type Err = ReportError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "c" | "coefficient" | "coefficients" => Ok(WeightKind::Coefficient),
            "i" | "importance" | "feature_importance" => Ok(WeightKind::Importance),
            _ => Err(ReportError::UnknownWeightKind(s.to_string())),
        }
    }
}

/// Zoradené váhy features jedného modelu (vzostupne podľa hodnoty)
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeightsReport {
    model_name: String,
    kind: WeightKind,
    ranked: Vec<(String, f64)>,
}

impl WeightsReport {
    /// Spáruje váhy s názvami features a stabilne ich zoradí vzostupne.
    /// Rovnaké hodnoty ostávajú v pôvodnom poradí.
    pub fn rank(
        model_name: &str,
        weights: &[f64],
        feature_names: &[String],
        kind: WeightKind,
    ) -> Result<Self, ReportError> {
        if model_name.trim().is_empty() {
            return Err(ReportError::MissingModelName);
        }
        if weights.len() != feature_names.len() {
            return Err(ReportError::DimensionMismatch {
                expected: feature_names.len(),
                found: weights.len(),
            });
        }

        let mut ranked: Vec<(String, f64)> = feature_names
            .iter()
            .cloned()
            .zip(weights.iter().copied())
            .collect();
        // -0.0 a 0.0 sú rovnaké váhy, total_cmp len pre NaN
        ranked.sort_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or_else(|| a.1.total_cmp(&b.1)));

        Ok(Self {
            model_name: model_name.to_string(),
            kind,
            ranked,
        })
    }

    pub fn model_name(&self) -> &str {
        &self.model_name
    }

    pub fn kind(&self) -> WeightKind {
        self.kind
    }

    /// "Coefficients" alebo "Feature Importance"
    pub fn label(&self) -> &'static str {
        self.kind.label()
    }

    /// Popis osi grafu, napr. "Linear Regression Coefficients"
    pub fn axis_label(&self) -> String {
        format!("{} {}", self.model_name, self.kind.label())
    }

    pub fn ranked(&self) -> &[(String, f64)] {
        &self.ranked
    }

    pub fn len(&self) -> usize {
        self.ranked.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ranked.is_empty()
    }

    /// Zostupné poradie (najväčšia váha prvá)
    pub fn descending(&self) -> Vec<(String, f64)> {
        self.ranked.iter().rev().cloned().collect()
    }

    /// Features zoradené podľa absolútnej hodnoty váhy (najvplyvnejšie prvé)
    pub fn by_magnitude(&self) -> Vec<(String, f64)> {
        let mut out = self.ranked.clone();
        out.sort_by(|a, b| b.1.abs().total_cmp(&a.1.abs()));
        out
    }
}
