//! Prieskumná analýza dát: popisné štatistiky, chýbajúce hodnoty, korelácie.
//! Všetko pracuje nad surovou tabuľkou alebo validovanou množinou vzoriek.

pub mod correlation;
pub mod describe;

pub use correlation::{label_correlations, pearson_corr, split_by_correlation, CorrelationMatrix, LabelCorrelation};
pub use describe::{describe, missing_values, standard_deviations, ColumnSummary};
