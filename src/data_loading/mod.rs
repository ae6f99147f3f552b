pub mod csv_data_loader; // CSV implementation of strategy
pub mod data_loader; // Strategy trait + RawTable
pub mod sample_set;
pub mod schema; // Explicitná schéma features

pub use csv_data_loader::CsvDataLoader;
pub use data_loader::{DataLoader, RawTable};
pub use sample_set::SampleSet;
pub use schema::{FeatureSchema, FeatureSet, TARGET_COLUMN};
