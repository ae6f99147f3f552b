use std::fs;
use std::path::Path;

use csv::ReaderBuilder;

use super::data_loader::{DataLoader, RawTable};
use super::sample_set::SampleSet;
use super::schema::FeatureSchema;
use crate::error::DataError;

/// CSV Data Loader - implementácia Strategy pattern pre CSV súbory
pub struct CsvDataLoader {
    delimiter: u8,
}

impl CsvDataLoader {
    pub fn new() -> Self {
        Self { delimiter: b',' }
    }

    pub fn with_delimiter(delimiter: u8) -> Self {
        Self { delimiter }
    }

    /// Načíta tabuľku zo súboru
    pub fn load_table_from_path<P: AsRef<Path>>(&self, path: P) -> Result<RawTable, DataError> {
        let path = path.as_ref();
        tracing::debug!(path = %path.display(), "načítavam CSV súbor");
        let text = fs::read_to_string(path)?;
        self.load_table(&text)
    }

    /// Načíta súbor a skontroluje ho voči schéme
    pub fn load_samples_from_path<P: AsRef<Path>>(
        &self,
        path: P,
        schema: &FeatureSchema,
    ) -> Result<SampleSet, DataError> {
        self.load_table_from_path(path)?.into_samples(schema)
    }

    /// Helper pre parsovanie CSV
    fn parse_csv(&self, csv_text: &str) -> Result<(Vec<String>, Vec<csv::StringRecord>), DataError> {
        let mut rdr = ReaderBuilder::new()
            .has_headers(true)
            .flexible(false)
            .delimiter(self.delimiter)
            .trim(csv::Trim::All)
            .from_reader(csv_text.as_bytes());

        let headers: Vec<String> = rdr
            .headers()?
            .iter()
            .map(|s| s.trim().to_string())
            .collect();

        if headers.is_empty() || headers.iter().all(|h| h.is_empty()) {
            return Err(DataError::EmptyData("CSV nemá žiadne stĺpce".to_string()));
        }

        let records = rdr.records().collect::<Result<Vec<_>, csv::Error>>()?;

        if records.is_empty() {
            return Err(DataError::EmptyData("CSV neobsahuje žiadne dáta".to_string()));
        }

        Ok((headers, records))
    }

    /// Prázdna bunka je chýbajúca hodnota, inak musí ísť o číslo
    fn parse_numeric_value(&self, val: &str, column: &str, row: usize) -> Result<Option<f64>, DataError> {
        let trimmed = val.trim();
        if trimmed.is_empty() || trimmed.eq_ignore_ascii_case("nan") || trimmed.eq_ignore_ascii_case("na") {
            return Ok(None);
        }
        trimmed
            .parse::<f64>()
            .map(Some)
            .map_err(|_| DataError::NonNumeric {
                column: column.to_string(),
                row: row + 1,
                value: val.to_string(),
            })
    }
}

impl DataLoader for CsvDataLoader {
    fn get_name(&self) -> &str {
        "CSV Data Loader"
    }

    fn validate_format(&self, data: &str) -> Result<(), DataError> {
        if data.trim().is_empty() {
            return Err(DataError::EmptyData("CSV dáta sú prázdne".to_string()));
        }

        let lines = data.lines().filter(|l| !l.trim().is_empty()).count();
        if lines < 2 {
            return Err(DataError::EmptyData(
                "CSV musí obsahovať aspoň header a jeden riadok dát".to_string(),
            ));
        }

        Ok(())
    }

    fn get_available_columns(&self, data: &str) -> Result<Vec<String>, DataError> {
        let (headers, _) = self.parse_csv(data)?;
        Ok(headers)
    }

    fn load_table(&self, data: &str) -> Result<RawTable, DataError> {
        self.validate_format(data)?;
        let (headers, records) = self.parse_csv(data)?;

        let rows = records
            .iter()
            .enumerate()
            .map(|(row_idx, record)| {
                record
                    .iter()
                    .zip(headers.iter())
                    .map(|(val, header)| self.parse_numeric_value(val, header, row_idx))
                    .collect::<Result<Vec<_>, DataError>>()
            })
            .collect::<Result<Vec<_>, DataError>>()?;

        tracing::debug!(
            rows = rows.len(),
            columns = headers.len(),
            "CSV tabuľka načítaná"
        );

        RawTable::new(headers, rows)
    }
}

impl Default for CsvDataLoader {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DATA: &str = "id,s1,s2,ttf\n1, 518.67 ,641.82,191\n2,518.67,,190\n";

    #[test]
    fn reads_headers_and_missing_cells() {
        let loader = CsvDataLoader::new();
        assert_eq!(loader.get_available_columns(DATA).unwrap(), vec!["id", "s1", "s2", "ttf"]);

        let table = loader.load_table(DATA).unwrap();
        assert_eq!(table.num_rows(), 2);
        assert_eq!(table.rows()[0], vec![Some(1.0), Some(518.67), Some(641.82), Some(191.0)]);
        assert_eq!(table.rows()[1][2], None);
    }

    #[test]
    fn non_numeric_cell_is_reported() {
        let loader = CsvDataLoader::new();
        match loader.load_table("s1,ttf\nabc,1\n") {
            Err(DataError::NonNumeric { column, row, value }) => {
                assert_eq!(column, "s1");
                assert_eq!(row, 1);
                assert_eq!(value, "abc");
            }
            other => panic!("unexpected: {:?}", other),
        }
    }

    #[test]
    fn header_only_is_rejected() {
        let loader = CsvDataLoader::new();
        assert!(matches!(loader.load_table("s1,ttf\n"), Err(DataError::EmptyData(_))));
        assert!(matches!(loader.validate_format("  "), Err(DataError::EmptyData(_))));
    }

    #[test]
    fn ragged_rows_are_csv_errors() {
        let loader = CsvDataLoader::new();
        assert!(matches!(loader.load_table("s1,ttf\n1,2,3\n"), Err(DataError::Csv(_))));
    }

    #[test]
    fn loads_samples_through_schema() {
        let loader = CsvDataLoader::new();
        let schema = FeatureSchema::new(vec!["s1".into()], "ttf").unwrap();
        let samples = loader.load_samples(DATA, &schema).unwrap();
        assert_eq!(samples.num_samples(), 2);
        assert_eq!(samples.column("s1"), Some(vec![518.67, 518.67]));
    }

    #[test]
    fn semicolon_delimiter() {
        let loader = CsvDataLoader::with_delimiter(b';');
        let table = loader.load_table("s1;ttf\n1.5;10\n").unwrap();
        assert_eq!(table.rows(), &[vec![Some(1.5), Some(10.0)]]);
    }
}
