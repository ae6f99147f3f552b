use thiserror::Error;

/// Chyby výpočtu metrík a reportov
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReportError {
    #[error("Nesúlad dĺžok vstupov: očakávaných {expected}, nájdených {found}")]
    DimensionMismatch { expected: usize, found: usize },

    #[error("Vstupná sekvencia je prázdna")]
    EmptyInput,

    /// Nulový rozptyl skutočných hodnôt - metrika nie je definovaná
    #[error("Metrika '{metric}' nie je definovaná (nulový rozptyl skutočných hodnôt)")]
    UndefinedMetric { metric: &'static str },

    #[error("Názov modelu nesmie byť prázdny")]
    MissingModelName,

    #[error("Neznámy typ váh: {0}")]
    UnknownWeightKind(String),
}

/// Chyby pri načítaní a validácii dát
#[derive(Debug, Error)]
pub enum DataError {
    #[error("Chyba pri čítaní súboru: {0}")]
    Io(#[from] std::io::Error),

    #[error("Chyba pri čítaní CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("Dáta sú prázdne: {0}")]
    EmptyData(String),

    #[error("Chýbajúce stĺpce v dátach: {missing:?}")]
    SchemaMismatch { missing: Vec<String> },

    #[error("Neplatná schéma: {0}")]
    InvalidSchema(String),

    #[error("Chýbajúca hodnota v stĺpci '{column}' (riadok {row})")]
    MissingValue { column: String, row: usize },

    #[error("Hodnota '{value}' v stĺpci '{column}' (riadok {row}) nie je číslo")]
    NonNumeric { column: String, row: usize, value: String },

    #[error("Hodnota v stĺpci '{column}' (riadok {row}) nie je konečné číslo")]
    NonFinite { column: String, row: usize },

    #[error("Riadok {row} má {found} hodnôt, očakávaných {expected}")]
    RaggedRow { row: usize, expected: usize, found: usize },
}

/// Chyby modelov
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ModelError {
    #[error("Neznámy model: {0}")]
    UnknownModel(String),

    #[error("Neplatný parameter '{key}': {reason}")]
    InvalidParam { key: String, reason: String },

    #[error("Model ešte nebol natrénovaný")]
    NotFitted,

    #[error("Chyba pri trénovaní modelu: {0}")]
    Fit(String),

    #[error("Chyba pri tvorbe matice: {0}")]
    Matrix(String),
}

/// Súhrnná chyba celej analýzy
#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error(transparent)]
    Report(#[from] ReportError),

    #[error(transparent)]
    Data(#[from] DataError),

    #[error(transparent)]
    Model(#[from] ModelError),

    #[error("Chyba konfigurácie: {0}")]
    Config(String),
}

impl From<serde_json::Error> for AnalysisError {
    fn from(err: serde_json::Error) -> Self {
        AnalysisError::Config(err.to_string())
    }
}

pub type Result<T, E = AnalysisError> = std::result::Result<T, E>;
