use serde::Serialize;

/// Bod grafu rezíduí: (predikcia, predikcia - skutočnosť)
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ResidualPoint {
    pub predicted: f64,
    pub residual: f64,
}

impl ResidualPoint {
    pub fn as_tuple(&self) -> (f64, f64) {
        (self.predicted, self.residual)
    }
}

impl From<ResidualPoint> for (f64, f64) {
    fn from(p: ResidualPoint) -> Self {
        p.as_tuple()
    }
}
