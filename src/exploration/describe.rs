use serde::Serialize;
use statrs::statistics::Statistics;

use crate::data_loading::RawTable;

/// Popisná štatistika jedného stĺpca (ako `describe()` v dátovom rámci)
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ColumnSummary {
    pub name: String,
    /// Počet nechýbajúcich hodnôt
    pub count: usize,
    pub mean: f64,
    /// Výberová smerodajná odchýlka (n - 1)
    pub std: f64,
    pub min: f64,
    pub q25: f64,
    pub median: f64,
    pub q75: f64,
    pub max: f64,
}

impl ColumnSummary {
    /// Štatistiky z hodnôt stĺpca; chýbajúce hodnoty sa ignorujú.
    /// Prázdny stĺpec má všetky štatistiky NaN.
    pub fn from_values(name: &str, values: &[Option<f64>]) -> Self {
        let mut present: Vec<f64> = values.iter().flatten().copied().collect();
        let count = present.len();

        if count == 0 {
            return Self {
                name: name.to_string(),
                count,
                mean: f64::NAN,
                std: f64::NAN,
                min: f64::NAN,
                q25: f64::NAN,
                median: f64::NAN,
                q75: f64::NAN,
                max: f64::NAN,
            };
        }

        let mean = present.iter().mean();
        let std = present.iter().std_dev();
        let min = Statistics::min(present.iter());
        let max = Statistics::max(present.iter());

        present.sort_by(|a, b| a.total_cmp(b));

        Self {
            name: name.to_string(),
            count,
            mean,
            std,
            min,
            q25: quantile(&present, 0.25),
            median: quantile(&present, 0.5),
            q75: quantile(&present, 0.75),
            max,
        }
    }
}

/// Kvantil s lineárnou interpoláciou; `sorted` musí byť zoradené a neprázdne
fn quantile(sorted: &[f64], q: f64) -> f64 {
    let pos = q * (sorted.len() - 1) as f64;
    let lo = pos.floor() as usize;
    let hi = pos.ceil() as usize;
    sorted[lo] + (sorted[hi] - sorted[lo]) * (pos - lo as f64)
}

/// Popisné štatistiky všetkých stĺpcov tabuľky
pub fn describe(table: &RawTable) -> Vec<ColumnSummary> {
    table
        .headers()
        .iter()
        .enumerate()
        .map(|(j, name)| {
            let values: Vec<Option<f64>> = table.rows().iter().map(|row| row[j]).collect();
            ColumnSummary::from_values(name, &values)
        })
        .collect()
}

/// Počty chýbajúcich hodnôt v stĺpcoch
pub fn missing_values(table: &RawTable) -> Vec<(String, usize)> {
    table.missing_counts()
}

/// Smerodajné odchýlky stĺpcov - podklad pre stĺpcový graf rozptylu features
pub fn standard_deviations(summaries: &[ColumnSummary]) -> Vec<(String, f64)> {
    summaries.iter().map(|s| (s.name.clone(), s.std)).collect()
}
