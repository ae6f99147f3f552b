use super::figure::{Figure, FigureSize, Layer, LegendPosition, Marker, Orientation};
use crate::evaluation::{ResidualPoint, WeightsReport};
use crate::exploration::{ColumnSummary, CorrelationMatrix};

/// Nad touto hranicou počtu váh sa graf predĺži
const TALL_WEIGHTS_THRESHOLD: usize = 30;

// Vodorovná nulová čiara v grafe rezíduí
const RESIDUAL_LINE_X_MIN: f64 = -50.0;
const RESIDUAL_LINE_X_MAX: f64 = 400.0;

/// Horizontálny stĺpcový graf váh modelu (vzostupne, bez legendy)
pub fn plot_feature_weights(report: &WeightsReport) -> Figure {
    let size = if report.len() > TALL_WEIGHTS_THRESHOLD {
        FigureSize::new(8.0, 10.0)
    } else {
        FigureSize::new(8.0, 5.0)
    };

    let (labels, values): (Vec<String>, Vec<f64>) = report.ranked().iter().cloned().unzip();

    Figure::new(size).x_label(report.axis_label()).layer(Layer::Bars {
        labels,
        values,
        orientation: Orientation::Horizontal,
        color: "red".to_string(),
    })
}

/// Graf rezíduí pre trénovacie a testovacie dáta
pub fn plot_residuals(model_name: &str, train: &[ResidualPoint], test: &[ResidualPoint]) -> Figure {
    let scatter = |label: &str, points: &[ResidualPoint], color: &str, marker: Marker| Layer::Scatter {
        label: label.to_string(),
        x: points.iter().map(|p| p.predicted).collect(),
        y: points.iter().map(|p| p.residual).collect(),
        color: color.to_string(),
        marker,
    };

    Figure::new(FigureSize::default())
        .title(format!("{} Residuals", model_name))
        .x_label("Predicted Values")
        .y_label("Residuals")
        .legend(LegendPosition::UpperLeft)
        .layer(scatter("Training data", train, "blue", Marker::Circle))
        .layer(scatter("Test data", test, "lightgreen", Marker::Square))
        .layer(Layer::HLine {
            y: 0.0,
            x_min: RESIDUAL_LINE_X_MIN,
            x_max: RESIDUAL_LINE_X_MAX,
            color: "red".to_string(),
            line_width: 2.0,
        })
}

/// Stĺpcový graf smerodajných odchýlok features
pub fn plot_standard_deviations(summaries: &[ColumnSummary]) -> Figure {
    Figure::new(FigureSize::new(10.0, 6.0))
        .title("Features Standard Deviation")
        .layer(Layer::Bars {
            labels: summaries.iter().map(|s| s.name.clone()).collect(),
            values: summaries.iter().map(|s| s.std).collect(),
            orientation: Orientation::Vertical,
            color: "red".to_string(),
        })
}

/// Anotovaná heatmapa korelačnej matice
pub fn plot_correlation_heatmap(matrix: &CorrelationMatrix) -> Figure {
    Figure::new(FigureSize::new(10.0, 8.0))
        .title("Features Correlation Heatmap")
        .layer(Layer::Heatmap {
            labels: matrix.names().to_vec(),
            values: matrix.to_rows(),
            annotate: true,
            value_format: ".2f".to_string(),
            color_bar: true,
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::evaluation::{ModelEvaluator, WeightKind};

    fn weights(n: usize) -> WeightsReport {
        let names: Vec<String> = (0..n).map(|i| format!("s{}", i)).collect();
        let values: Vec<f64> = (0..n).map(|i| (i as f64 - 3.0) * 0.1).collect();
        ModelEvaluator::rank_feature_weights("Linear Regression", &values, &names, WeightKind::Coefficient).unwrap()
    }

    #[test]
    fn weight_figure_grows_past_thirty_features() {
        assert_eq!(plot_feature_weights(&weights(30)).size, FigureSize::new(8.0, 5.0));
        assert_eq!(plot_feature_weights(&weights(31)).size, FigureSize::new(8.0, 10.0));
    }

    #[test]
    fn weight_figure_keeps_ranked_order() {
        let fig = plot_feature_weights(&weights(4));
        assert_eq!(fig.x_label.as_deref(), Some("Linear Regression Coefficients"));
        assert!(fig.legend.is_none());
        match &fig.layers[0] {
            Layer::Bars { labels, values, orientation, .. } => {
                assert_eq!(labels, &vec!["s0", "s1", "s2", "s3"]);
                assert!(values.windows(2).all(|w| w[0] <= w[1]));
                assert_eq!(*orientation, Orientation::Horizontal);
            }
            other => panic!("unexpected layer {:?}", other),
        }
    }

    #[test]
    fn residual_figure_has_two_series_and_zero_line() {
        let train = ModelEvaluator::compute_residuals(&[1.0, 2.0], &[1.5, 2.0]).unwrap();
        let test = ModelEvaluator::compute_residuals(&[3.0], &[2.0]).unwrap();
        let fig = plot_residuals("Linear Regression", &train, &test);

        assert_eq!(fig.title.as_deref(), Some("Linear Regression Residuals"));
        assert_eq!(fig.layers.len(), 3);
        match &fig.layers[1] {
            Layer::Scatter { label, x, y, marker, .. } => {
                assert_eq!(label, "Test data");
                assert_eq!(x, &vec![2.0]);
                assert_eq!(y, &vec![-1.0]);
                assert_eq!(*marker, Marker::Square);
            }
            other => panic!("unexpected layer {:?}", other),
        }
        assert!(matches!(fig.layers[2], Layer::HLine { y, .. } if y == 0.0));
    }

    #[test]
    fn figures_serialize_to_json() {
        let json = plot_feature_weights(&weights(3)).to_json().unwrap();
        assert!(json.contains("\"type\": \"bars\""));
        assert!(json.contains("Linear Regression Coefficients"));
    }
}
