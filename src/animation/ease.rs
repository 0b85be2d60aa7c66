/// Easing functions used to map normalized animation progress.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub enum Ease {
    /// Linear interpolation.
    Linear,
    /// CSS timing function `cubic-bezier(x1, y1, x2, y2)`.
    CubicBezier {
        /// First control point x, in `[0, 1]`.
        x1: f64,
        /// First control point y.
        y1: f64,
        /// Second control point x, in `[0, 1]`.
        x2: f64,
        /// Second control point y.
        y2: f64,
    },
}

impl Ease {
    /// CSS `ease-out`, i.e. `cubic-bezier(0, 0, 0.58, 1)`.
    pub const CSS_EASE_OUT: Self = Self::CubicBezier {
        x1: 0.0,
        y1: 0.0,
        x2: 0.58,
        y2: 1.0,
    };

    /// Apply this easing function to normalized progress `t` in `[0, 1]`.
    pub fn apply(self, t: f64) -> f64 {
        let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
        match self {
            Self::Linear => t,
            Self::CubicBezier { x1, y1, x2, y2 } => {
                let x1 = x1.clamp(0.0, 1.0);
                let x2 = x2.clamp(0.0, 1.0);
                let s = solve_bezier_param(t, x1, x2);
                bezier_coord(s, y1, y2)
            }
        }
    }
}

// One axis of a cubic Bezier with endpoints fixed at 0 and 1.
fn bezier_coord(s: f64, p1: f64, p2: f64) -> f64 {
    let inv = 1.0 - s;
    3.0 * inv * inv * s * p1 + 3.0 * inv * s * s * p2 + s * s * s
}

fn bezier_slope(s: f64, p1: f64, p2: f64) -> f64 {
    let inv = 1.0 - s;
    3.0 * inv * inv * p1 + 6.0 * inv * s * (p2 - p1) + 3.0 * s * s * (1.0 - p2)
}

// Find `s` with `x(s) == x`. Newton first, bisection when the slope is too flat.
fn solve_bezier_param(x: f64, x1: f64, x2: f64) -> f64 {
    const EPS: f64 = 1e-7;

    let mut s = x;
    for _ in 0..8 {
        let err = bezier_coord(s, x1, x2) - x;
        if err.abs() < EPS {
            return s;
        }
        let d = bezier_slope(s, x1, x2);
        if d.abs() < 1e-6 {
            break;
        }
        s = (s - err / d).clamp(0.0, 1.0);
    }

    let (mut lo, mut hi) = (0.0, 1.0);
    s = x;
    for _ in 0..64 {
        let v = bezier_coord(s, x1, x2);
        if (v - x).abs() < EPS {
            break;
        }
        if v < x {
            lo = s;
        } else {
            hi = s;
        }
        s = 0.5 * (lo + hi);
    }
    s
}

#[cfg(test)]
#[path = "../../tests/unit/animation/ease.rs"]
mod tests;
