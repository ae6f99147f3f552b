//! Dáta pre grafy. Vykresľovanie robí externý renderer, tu sa len
//! pripravujú zoradené a popísané hodnoty vo forme `Figure`.

pub mod charts;
pub mod figure;

pub use charts::{plot_correlation_heatmap, plot_feature_weights, plot_residuals, plot_standard_deviations};
pub use figure::{Figure, FigureSize, Layer, LegendPosition, Marker, Orientation};
