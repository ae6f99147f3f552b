use serde::Serialize;

/// Veľkosť obrázka v palcoch (šírka, výška)
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FigureSize {
    pub width: f64,
    pub height: f64,
}

impl FigureSize {
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

impl Default for FigureSize {
    fn default() -> Self {
        Self::new(8.0, 5.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Marker {
    Circle,
    Square,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Orientation {
    Vertical,
    Horizontal,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LegendPosition {
    UpperLeft,
    UpperRight,
}

/// Jedna vrstva grafu - dáta pripravené pre externý renderer
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Layer {
    Bars {
        labels: Vec<String>,
        values: Vec<f64>,
        orientation: Orientation,
        color: String,
    },
    Scatter {
        label: String,
        x: Vec<f64>,
        y: Vec<f64>,
        color: String,
        marker: Marker,
    },
    HLine {
        y: f64,
        x_min: f64,
        x_max: f64,
        color: String,
        line_width: f64,
    },
    Heatmap {
        labels: Vec<String>,
        values: Vec<Vec<f64>>,
        annotate: bool,
        value_format: String,
        color_bar: bool,
    },
}

/// Explicitný handle obrázka. Každé volanie plot_* vytvorí vlastný,
/// žiadny globálny "aktuálny" obrázok neexistuje.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Figure {
    pub size: FigureSize,
    pub title: Option<String>,
    pub x_label: Option<String>,
    pub y_label: Option<String>,
    pub legend: Option<LegendPosition>,
    pub layers: Vec<Layer>,
}

impl Figure {
    pub fn new(size: FigureSize) -> Self {
        Self {
            size,
            title: None,
            x_label: None,
            y_label: None,
            legend: None,
            layers: Vec::new(),
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn x_label(mut self, label: impl Into<String>) -> Self {
        self.x_label = Some(label.into());
        self
    }

    pub fn y_label(mut self, label: impl Into<String>) -> Self {
        self.y_label = Some(label.into());
        self
    }

    pub fn legend(mut self, position: LegendPosition) -> Self {
        self.legend = Some(position);
        self
    }

    pub fn layer(mut self, layer: Layer) -> Self {
        self.layers.push(layer);
        self
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}
