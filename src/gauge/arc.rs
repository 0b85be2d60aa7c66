use std::f64::consts::PI;

/// Circular progress arc drawn with a dash pattern of one circumference.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GaugeArc {
    /// Arc radius in pixels.
    pub radius: f64,
}

impl Default for GaugeArc {
    fn default() -> Self {
        Self { radius: 40.0 }
    }
}

impl GaugeArc {
    /// Highest score on the scale.
    pub const MAX_SCORE: f64 = 10.0;

    /// `2πr`.
    pub fn circumference(self) -> f64 {
        2.0 * PI * self.radius
    }

    /// Dash offset showing `score`: `C - (score / 10) * C`.
    ///
    /// Not clamped. Scores above 10 give negative offsets, scores below 0 give offsets above
    /// `C`; neither is visually meaningful.
    pub fn dash_offset(self, score: f64) -> f64 {
        let c = self.circumference();
        c - (score / Self::MAX_SCORE) * c
    }

    /// Fraction of the circle swept by `score` (same unclamped mapping).
    pub fn swept_fraction(self, score: f64) -> f64 {
        1.0 - self.dash_offset(score) / self.circumference()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/gauge/arc.rs"]
mod tests;
