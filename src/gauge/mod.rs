//! Score gauges: tier lookup, progress-arc geometry and the timed reveal.

/// Progress-arc geometry.
pub mod arc;
/// Timed entrance of the progress ring.
pub mod reveal;
/// SVG output and rasterization.
pub mod svg;
/// Score tiers.
pub mod tier;

use std::time::Duration;

use crate::{
    gauge::{arc::GaugeArc, reveal::GaugeReveal, tier::ScoreTier},
    model::analysis::AnalysisResult,
    report::humanize_key,
};

/// Options shared by every gauge of a result.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GaugeOpts {
    /// Arc geometry.
    pub arc: GaugeArc,
    /// Ring stroke width in pixels.
    pub stroke_width: f64,
    /// Side of the square gauge canvas in pixels.
    pub size_px: u32,
    /// Entrance animation.
    pub reveal: GaugeReveal,
}

impl Default for GaugeOpts {
    fn default() -> Self {
        Self {
            arc: GaugeArc::default(),
            stroke_width: 8.0,
            size_px: 96,
            reveal: GaugeReveal::default(),
        }
    }
}

/// Display state of one score.
#[derive(Clone, Debug, PartialEq)]
pub struct ScoreGauge {
    /// Metric key as emitted by the analysis service.
    pub metric: String,
    /// Humanized metric name.
    pub label: String,
    /// Raw score, nominally `0..=10`.
    pub score: f64,
    /// Tier derived from `score`.
    pub tier: ScoreTier,
    /// Arc geometry.
    pub arc: GaugeArc,
    /// Ring stroke width in pixels.
    pub stroke_width: f64,
    /// Side of the square gauge canvas in pixels.
    pub size_px: u32,
    /// Entrance animation.
    pub reveal: GaugeReveal,
}

impl ScoreGauge {
    /// Build the gauge for `metric` showing `score`.
    pub fn new(metric: impl Into<String>, score: f64, opts: &GaugeOpts) -> Self {
        let metric = metric.into();
        Self {
            label: humanize_key(&metric),
            metric,
            score,
            tier: ScoreTier::of(score),
            arc: opts.arc,
            stroke_width: opts.stroke_width,
            size_px: opts.size_px,
            reveal: opts.reveal,
        }
    }

    /// Dash offset once the reveal has settled.
    pub fn target_offset(&self) -> f64 {
        self.arc.dash_offset(self.score)
    }

    /// Dash offset `elapsed` after the gauge was mounted.
    pub fn offset_at(&self, elapsed: Duration) -> f64 {
        self.reveal.offset_at(self.arc, self.score, elapsed)
    }

    /// Whether the progress ring has started its sweep.
    pub fn is_visible_at(&self, elapsed: Duration) -> bool {
        self.reveal.visible_at(elapsed)
    }
}

/// One gauge per score of `result`, in emission order.
pub fn gauges_for(result: &AnalysisResult, opts: &GaugeOpts) -> Vec<ScoreGauge> {
    result
        .scores
        .iter()
        .map(|(metric, &score)| ScoreGauge::new(metric.as_str(), score, opts))
        .collect()
}

#[cfg(test)]
#[path = "../../tests/unit/gauge/mod.rs"]
mod tests;
