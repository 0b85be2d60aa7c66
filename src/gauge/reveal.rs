use std::time::Duration;

use crate::{animation::ease::Ease, gauge::arc::GaugeArc};

/// Entrance animation of a gauge: hidden (empty arc) for `delay`, then sweeping to the score
/// over `duration`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GaugeReveal {
    /// Time after mount before the sweep becomes visible.
    pub delay: Duration,
    /// Length of the sweep.
    pub duration: Duration,
    /// Easing of the sweep.
    pub ease: Ease,
}

impl Default for GaugeReveal {
    fn default() -> Self {
        Self {
            delay: Duration::from_millis(100),
            duration: Duration::from_millis(1000),
            ease: Ease::CSS_EASE_OUT,
        }
    }
}

impl GaugeReveal {
    /// Whether the sweep has become visible `elapsed` after mount.
    pub fn visible_at(&self, elapsed: Duration) -> bool {
        elapsed >= self.delay
    }

    /// Eased sweep progress in `[0, 1]` at `elapsed`.
    pub fn progress_at(&self, elapsed: Duration) -> f64 {
        if !self.visible_at(elapsed) {
            return 0.0;
        }
        let running = elapsed - self.delay;
        if self.duration.is_zero() {
            return 1.0;
        }
        self.ease
            .apply(running.as_secs_f64() / self.duration.as_secs_f64())
    }

    /// Dash offset at `elapsed`: the empty arc (`C`) before the delay, easing to
    /// `arc.dash_offset(score)` by the end of the sweep.
    pub fn offset_at(&self, arc: GaugeArc, score: f64, elapsed: Duration) -> f64 {
        let empty = arc.circumference();
        let target = arc.dash_offset(score);
        empty + (target - empty) * self.progress_at(elapsed)
    }

    /// Time after mount at which the sweep completes.
    pub fn settles_after(&self) -> Duration {
        self.delay + self.duration
    }
}

#[cfg(test)]
#[path = "../../tests/unit/gauge/reveal.rs"]
mod tests;
