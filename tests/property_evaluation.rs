//! Property testy pre vyhodnotenie regresných modelov
//!
//! - RMSE a MAE sú nezáporné
//! - dokonalá predikcia dáva RMSE = MAE = 0 a R^2 = EV = 1
//! - zoradenie váh zachováva páry (názov, váha)
//! - rezíduá zachovávajú poradie vstupu

use approx::assert_abs_diff_eq;
use proptest::collection::vec;
use proptest::prelude::*;
use ttf_analysis::{ModelEvaluator, ReportError, WeightKind};

/// Dvojica rovnako dlhých sekvencií s nekonštantnými skutočnými hodnotami
fn actual_predicted(len: std::ops::Range<usize>) -> impl Strategy<Value = (Vec<f64>, Vec<f64>)> {
    len.prop_flat_map(|l| (vec(-500.0f64..500.0, l), vec(-500.0f64..500.0, l)))
        .prop_filter("actual must vary", |(a, _)| a.iter().any(|v| *v != a[0]))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    #[test]
    fn prop_errors_non_negative((actual, predicted) in actual_predicted(2..60)) {
        let report = ModelEvaluator::compute_regression_metrics("m", &actual, &predicted).unwrap();
        prop_assert!(report.rmse() >= 0.0);
        prop_assert!(report.mae() >= 0.0);
        prop_assert!(report.rmse() + 1e-9 >= report.mae(), "RMSE {} < MAE {}", report.rmse(), report.mae());
        prop_assert!(report.r2() <= 1.0);
        prop_assert!(report.explained_variance() <= 1.0 + 1e-12);
    }

    #[test]
    fn prop_perfect_predictions((actual, _) in actual_predicted(2..60)) {
        let report = ModelEvaluator::compute_regression_metrics("m", &actual, &actual).unwrap();
        prop_assert_eq!(report.rmse(), 0.0);
        prop_assert_eq!(report.mae(), 0.0);
        prop_assert_eq!(report.r2(), 1.0);
        prop_assert_eq!(report.explained_variance(), 1.0);
    }

    #[test]
    fn prop_length_mismatch(a in vec(-10.0f64..10.0, 1..30), b in vec(-10.0f64..10.0, 1..30)) {
        prop_assume!(a.len() != b.len());
        let err = ModelEvaluator::compute_regression_metrics("m", &a, &b).unwrap_err();
        prop_assert_eq!(err, ReportError::DimensionMismatch { expected: a.len(), found: b.len() });
    }

    #[test]
    fn prop_constant_actual_is_undefined(value in -100.0f64..100.0, predicted in vec(-10.0f64..10.0, 1..20)) {
        let actual = vec![value; predicted.len()];
        let err = ModelEvaluator::compute_regression_metrics("m", &actual, &predicted).unwrap_err();
        prop_assert!(matches!(err, ReportError::UndefinedMetric { .. }), "unexpected {:?}", err);
    }

    #[test]
    fn prop_ranking_is_sorted_and_reversible(weights in vec(-5.0f64..5.0, 0..40)) {
        let names: Vec<String> = (0..weights.len()).map(|i| format!("s{}", i)).collect();
        let report = ModelEvaluator::rank_feature_weights("m", &weights, &names, WeightKind::Coefficient).unwrap();

        prop_assert!(report.ranked().windows(2).all(|w| w[0].1 <= w[1].1));

        let mut original: Vec<(String, f64)> = names.into_iter().zip(weights).collect();
        let mut restored = report.descending();
        original.sort_by(|a, b| a.0.cmp(&b.0));
        restored.sort_by(|a, b| a.0.cmp(&b.0));
        prop_assert_eq!(original, restored);
    }

    #[test]
    fn prop_residuals_follow_input((actual, predicted) in actual_predicted(1..40)) {
        let points = ModelEvaluator::compute_residuals(&actual, &predicted).unwrap();
        prop_assert_eq!(points.len(), actual.len());
        for (i, p) in points.iter().enumerate() {
            prop_assert_eq!(p.predicted, predicted[i]);
            prop_assert_eq!(p.residual, predicted[i] - actual[i]);
        }
    }
}

#[test]
fn reference_examples() {
    let names: Vec<String> = ["A", "B", "C"].iter().map(|s| s.to_string()).collect();
    let report = ModelEvaluator::rank_feature_weights("m", &[0.5, -1.2, 0.1], &names, WeightKind::Coefficient).unwrap();
    let order: Vec<(&str, f64)> = report.ranked().iter().map(|(n, w)| (n.as_str(), *w)).collect();
    assert_eq!(order, vec![("B", -1.2), ("C", 0.1), ("A", 0.5)]);

    let residuals: Vec<(f64, f64)> = ModelEvaluator::compute_residuals(&[1.0, 2.0, 3.0], &[1.0, 3.0, 2.0])
        .unwrap()
        .into_iter()
        .map(Into::into)
        .collect();
    assert_eq!(residuals, vec![(1.0, 0.0), (3.0, 1.0), (2.0, -1.0)]);

    let err = ModelEvaluator::compute_regression_metrics("m", &[3.0, 3.0, 3.0], &[3.0, 3.0, 3.0]).unwrap_err();
    assert_eq!(err, ReportError::UndefinedMetric { metric: "R^2" });
}

#[test]
fn single_sample_with_variance_is_impossible() {
    // jedna vzorka má vždy nulový rozptyl
    let err = ModelEvaluator::compute_regression_metrics("m", &[4.0], &[5.0]).unwrap_err();
    assert_eq!(err, ReportError::UndefinedMetric { metric: "R^2" });
    let residuals = ModelEvaluator::compute_residuals(&[4.0], &[5.0]).unwrap();
    assert_abs_diff_eq!(residuals[0].residual, 1.0);
}
