use kurbo::Shape as _;

use crate::{
    foundation::{
        core::{PixelSize, Point, Rect},
        math::percent_to_px,
    },
    model::analysis::ShapeCoords,
};

// Flattening tolerance in pixels when turning circles into paths.
const PATH_TOLERANCE: f64 = 0.1;

/// A shape in surface pixel space.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PixelShape {
    /// Circle with center and radius in pixels.
    Circle {
        /// Center point.
        center: Point,
        /// Radius in pixels.
        radius: f64,
    },
    /// Axis-aligned rectangle in pixels.
    Rectangle(Rect),
}

impl PixelShape {
    /// Convert a percentage-space shape for an image of `size`.
    ///
    /// `x`-class values (including the radius) scale with the width, `y`-class values with the
    /// height. Negative or non-finite extents resolve to `None`.
    pub fn resolve(coords: ShapeCoords, size: PixelSize) -> Option<Self> {
        let px = |v: f64| percent_to_px(v, size.width);
        let py = |v: f64| percent_to_px(v, size.height);

        let shape = match coords {
            ShapeCoords::Circle(c) => {
                let radius = px(c.radius);
                if radius < 0.0 {
                    return None;
                }
                Self::Circle {
                    center: Point::new(px(c.cx), py(c.cy)),
                    radius,
                }
            }
            ShapeCoords::Rectangle(r) => {
                let (x, y, w, h) = (px(r.x), py(r.y), px(r.width), py(r.height));
                if w < 0.0 || h < 0.0 {
                    return None;
                }
                Self::Rectangle(Rect::new(x, y, x + w, y + h))
            }
        };
        Some(shape)
    }

    /// Axis-aligned bounding box.
    pub fn bounds(&self) -> Rect {
        match *self {
            Self::Circle { center, radius } => Rect::new(
                center.x - radius,
                center.y - radius,
                center.x + radius,
                center.y + radius,
            ),
            Self::Rectangle(r) => r,
        }
    }

    pub(crate) fn to_path(self) -> kurbo::BezPath {
        match self {
            Self::Circle { center, radius } => {
                kurbo::Circle::new(center, radius).to_path(PATH_TOLERANCE)
            }
            Self::Rectangle(r) => r.to_path(PATH_TOLERANCE),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/compositor/geometry.rs"]
mod tests;
