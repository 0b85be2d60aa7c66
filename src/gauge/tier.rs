use crate::foundation::core::Rgba8;

/// Discrete rating bucket derived from a score.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ScoreTier {
    /// `score < 3` (and NaN).
    Poor,
    /// `3 <= score < 5`.
    NeedsImprovement,
    /// `5 <= score < 7`.
    Good,
    /// `7 <= score < 9`.
    VeryGood,
    /// `score >= 9`.
    Excellent,
}

impl ScoreTier {
    /// Tier of `score`. Thresholds are closed below and open above, checked from the top.
    pub fn of(score: f64) -> Self {
        if score >= 9.0 {
            Self::Excellent
        } else if score >= 7.0 {
            Self::VeryGood
        } else if score >= 5.0 {
            Self::Good
        } else if score >= 3.0 {
            Self::NeedsImprovement
        } else {
            Self::Poor
        }
    }

    /// Display label.
    pub fn label(self) -> &'static str {
        match self {
            Self::Excellent => "Excellent",
            Self::VeryGood => "Very Good",
            Self::Good => "Good",
            Self::NeedsImprovement => "Needs Improvement",
            Self::Poor => "Poor",
        }
    }

    /// Fixed tier color.
    pub fn color(self) -> Rgba8 {
        match self {
            Self::Excellent => Rgba8::rgb(0x22, 0xc5, 0x5e),
            Self::VeryGood => Rgba8::rgb(0x3b, 0x82, 0xf6),
            Self::Good => Rgba8::rgb(0xea, 0xb3, 0x08),
            Self::NeedsImprovement => Rgba8::rgb(0xf9, 0x73, 0x16),
            Self::Poor => Rgba8::rgb(0xef, 0x44, 0x44),
        }
    }

    /// Utility class name used by web front ends for the tier color.
    pub fn color_class(self) -> &'static str {
        match self {
            Self::Excellent => "bg-green-500",
            Self::VeryGood => "bg-blue-500",
            Self::Good => "bg-yellow-500",
            Self::NeedsImprovement => "bg-orange-500",
            Self::Poor => "bg-red-500",
        }
    }
}

impl std::fmt::Display for ScoreTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/gauge/tier.rs"]
mod tests;
