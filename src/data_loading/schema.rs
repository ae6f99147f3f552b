use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::error::DataError;

/// Názov cieľového stĺpca (time-to-failure)
pub const TARGET_COLUMN: &str = "ttf";

const ORIGINAL: [&str; 24] = [
    "setting1", "setting2", "setting3", "s1", "s2", "s3", "s4", "s5", "s6", "s7", "s8", "s9",
    "s10", "s11", "s12", "s13", "s14", "s15", "s16", "s17", "s18", "s19", "s20", "s21",
];

// Features so slabou alebo žiadnou koreláciou s ttf
const LOW_CORRELATION: [&str; 9] = [
    "setting3", "s1", "s10", "s18", "s19", "s16", "s5", "setting1", "setting2",
];

// Features korelované s ttf
const CORRELATED: [&str; 15] = [
    "s2", "s3", "s4", "s6", "s7", "s8", "s9", "s11", "s12", "s13", "s14", "s15", "s17", "s20",
    "s21",
];

/// Preddefinované sady features pre experimenty
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FeatureSet {
    Original,
    LowCorrelation,
    Correlated,
}

impl FeatureSet {
    pub const ALL: [FeatureSet; 3] = [
        FeatureSet::Original,
        FeatureSet::LowCorrelation,
        FeatureSet::Correlated,
    ];

    pub fn names(&self) -> &'static [&'static str] {
        match self {
            FeatureSet::Original => &ORIGINAL,
            FeatureSet::LowCorrelation => &LOW_CORRELATION,
            FeatureSet::Correlated => &CORRELATED,
        }
    }

    pub fn get_name(&self) -> &'static str {
        match self {
            FeatureSet::Original => "original",
            FeatureSet::LowCorrelation => "low_correlation",
            FeatureSet::Correlated => "correlated",
        }
    }
}

/// Explicitná schéma: pevné poradie očakávaných features + cieľový stĺpec.
/// Kontroluje sa pri načítaní tabuľky, nesúlad končí chybou hneď.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "SchemaFields")]
pub struct FeatureSchema {
    features: Vec<String>,
    label: String,
}

// Deserializácia ide cez FeatureSchema::new
#[derive(Deserialize)]
struct SchemaFields {
    features: Vec<String>,
    label: String,
}

impl TryFrom<SchemaFields> for FeatureSchema {
    type Error = DataError;

    fn try_from(fields: SchemaFields) -> Result<Self, Self::Error> {
        FeatureSchema::new(fields.features, &fields.label)
    }
}

impl FeatureSchema {
    pub fn new(features: Vec<String>, label: &str) -> Result<Self, DataError> {
        if features.is_empty() {
            return Err(DataError::InvalidSchema("schéma nemá žiadne features".to_string()));
        }
        if label.trim().is_empty() {
            return Err(DataError::InvalidSchema("cieľový stĺpec nemá názov".to_string()));
        }

        let mut seen = HashSet::new();
        for name in &features {
            if !seen.insert(name.as_str()) {
                return Err(DataError::InvalidSchema(format!("duplicitná feature '{}'", name)));
            }
            if name == label {
                return Err(DataError::InvalidSchema(format!(
                    "cieľový stĺpec '{}' nemôže byť zároveň feature",
                    label
                )));
            }
        }

        Ok(Self {
            features,
            label: label.to_string(),
        })
    }

    pub fn from_set(set: FeatureSet) -> Self {
        Self {
            features: set.names().iter().map(|s| s.to_string()).collect(),
            label: TARGET_COLUMN.to_string(),
        }
    }

    pub fn features(&self) -> &[String] {
        &self.features
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn len(&self) -> usize {
        self.features.len()
    }

    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }

    /// Nájde indexy stĺpcov features v poradí schémy a index cieľového stĺpca.
    /// Vráti všetky chýbajúce stĺpce naraz.
    pub fn resolve(&self, headers: &[String]) -> Result<(Vec<usize>, usize), DataError> {
        let position = |name: &str| headers.iter().position(|h| h == name);

        let mut missing = Vec::new();
        let mut indices = Vec::with_capacity(self.features.len());
        for name in &self.features {
            match position(name) {
                Some(idx) => indices.push(idx),
                None => missing.push(name.clone()),
            }
        }
        let label_idx = position(&self.label);
        if label_idx.is_none() {
            missing.push(self.label.clone());
        }

        match label_idx {
            Some(label_idx) if missing.is_empty() => Ok((indices, label_idx)),
            _ => {
                tracing::warn!(?missing, "dáta nezodpovedajú schéme");
                Err(DataError::SchemaMismatch { missing })
            }
        }
    }
}

impl From<FeatureSet> for FeatureSchema {
    fn from(set: FeatureSet) -> Self {
        FeatureSchema::from_set(set)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn headers(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn presets_have_expected_sizes() {
        assert_eq!(FeatureSet::Original.names().len(), 24);
        assert_eq!(FeatureSet::LowCorrelation.names().len(), 9);
        assert_eq!(FeatureSet::Correlated.names().len(), 15);
    }

    #[test]
    fn low_and_correlated_partition_original() {
        let mut union: Vec<&str> = FeatureSet::LowCorrelation
            .names()
            .iter()
            .chain(FeatureSet::Correlated.names())
            .copied()
            .collect();
        union.sort();
        let mut original = FeatureSet::Original.names().to_vec();
        original.sort();
        assert_eq!(union, original);
    }

    #[test]
    fn deserialization_is_validated() {
        let schema: FeatureSchema = serde_json::from_str(r#"{"features": ["s2", "s3"], "label": "ttf"}"#).unwrap();
        assert_eq!(schema.features(), &headers(&["s2", "s3"]));

        for json in [
            r#"{"features": [], "label": "ttf"}"#,
            r#"{"features": ["s2", "s2"], "label": "ttf"}"#,
            r#"{"features": ["s2", "ttf"], "label": "ttf"}"#,
            r#"{"features": ["s2"], "label": " "}"#,
        ] {
            assert!(serde_json::from_str::<FeatureSchema>(json).is_err(), "{}", json);
        }
    }

    #[test]
    fn resolve_reorders_to_schema() {
        let schema = FeatureSchema::new(headers(&["s2", "s1"]), "ttf").unwrap();
        let (idx, label) = schema.resolve(&headers(&["s1", "ttf", "s2"])).unwrap();
        assert_eq!(idx, vec![2, 0]);
        assert_eq!(label, 1);
    }

    #[test]
    fn resolve_lists_all_missing_columns() {
        let schema = FeatureSchema::new(headers(&["s1", "s7", "s9"]), "ttf").unwrap();
        match schema.resolve(&headers(&["s1", "s2"])) {
            Err(DataError::SchemaMismatch { missing }) => {
                assert_eq!(missing, headers(&["s7", "s9", "ttf"]));
            }
            other => panic!("unexpected: {:?}", other),
        }
    }

    #[test]
    fn rejects_duplicates_and_label_overlap() {
        assert!(matches!(
            FeatureSchema::new(headers(&["s1", "s1"]), "ttf"),
            Err(DataError::InvalidSchema(_))
        ));
        assert!(matches!(
            FeatureSchema::new(headers(&["s1", "ttf"]), "ttf"),
            Err(DataError::InvalidSchema(_))
        ));
        assert!(matches!(
            FeatureSchema::new(vec![], "ttf"),
            Err(DataError::InvalidSchema(_))
        ));
    }
}
