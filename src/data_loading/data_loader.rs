use super::sample_set::SampleSet;
use super::schema::FeatureSchema;
use crate::error::DataError;

/// Načítaná tabuľka pred validáciou - prázdne bunky sú `None`.
/// Každý riadok má práve toľko buniek, koľko je stĺpcov v hlavičke.
#[derive(Debug, Clone, PartialEq)]
pub struct RawTable {
    headers: Vec<String>,
    rows: Vec<Vec<Option<f64>>>,
}

impl RawTable {
    pub fn new(headers: Vec<String>, rows: Vec<Vec<Option<f64>>>) -> Result<Self, DataError> {
        if let Some((row_idx, row)) = rows.iter().enumerate().find(|(_, row)| row.len() != headers.len()) {
            return Err(DataError::RaggedRow {
                row: row_idx + 1,
                expected: headers.len(),
                found: row.len(),
            });
        }
        Ok(Self { headers, rows })
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn rows(&self) -> &[Vec<Option<f64>>] {
        &self.rows
    }

    pub fn num_rows(&self) -> usize {
        self.rows.len()
    }

    pub fn num_columns(&self) -> usize {
        self.headers.len()
    }

    /// Hodnoty stĺpca vrátane chýbajúcich
    pub fn column(&self, name: &str) -> Option<Vec<Option<f64>>> {
        let idx = self.headers.iter().position(|h| h == name)?;
        Some(self.rows.iter().map(|row| row[idx]).collect())
    }

    /// Počet chýbajúcich hodnôt v každom stĺpci (poradie podľa hlavičky)
    pub fn missing_counts(&self) -> Vec<(String, usize)> {
        self.headers
            .iter()
            .enumerate()
            .map(|(j, h)| {
                let missing = self.rows.iter().filter(|row| row[j].is_none()).count();
                (h.clone(), missing)
            })
            .collect()
    }

    /// Validuje tabuľku voči schéme a vytvorí množinu vzoriek
    pub fn into_samples(self, schema: &FeatureSchema) -> Result<SampleSet, DataError> {
        let (indices, label_idx) = schema.resolve(&self.headers)?;

        let mut x_rows = Vec::with_capacity(self.rows.len());
        let mut y_data = Vec::with_capacity(self.rows.len());

        for (row_idx, row) in self.rows.iter().enumerate() {
            let cell = |col: usize| {
                row[col].ok_or_else(|| DataError::MissingValue {
                    column: self.headers[col].clone(),
                    row: row_idx + 1,
                })
            };

            let features = indices
                .iter()
                .map(|&col| cell(col))
                .collect::<Result<Vec<f64>, DataError>>()?;
            x_rows.push(features);
            y_data.push(cell(label_idx)?);
        }

        SampleSet::new(schema.features().to_vec(), schema.label(), x_rows, y_data)
    }
}

/// Strategy pattern pre načítanie dát z rôznych zdrojov
pub trait DataLoader {
    /// Názov loadera
    fn get_name(&self) -> &str;

    /// Validuje formát dát pred načítaním
    fn validate_format(&self, data: &str) -> Result<(), DataError>;

    /// Získa dostupné stĺpce (headers) z dát
    fn get_available_columns(&self, data: &str) -> Result<Vec<String>, DataError>;

    /// Načíta celú tabuľku bez výberu stĺpcov
    fn load_table(&self, data: &str) -> Result<RawTable, DataError>;

    /// Načíta dáta a hneď ich skontroluje voči schéme
    fn load_samples(&self, data: &str, schema: &FeatureSchema) -> Result<SampleSet, DataError> {
        self.load_table(data)?.into_samples(schema)
    }
}
