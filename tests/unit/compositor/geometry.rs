use super::*;
use crate::model::analysis::{CircleCoords, RectangleCoords};

fn size(w: u32, h: u32) -> PixelSize {
    PixelSize::new(w, h).unwrap()
}

#[test]
fn full_rectangle_covers_surface_exactly() {
    let coords = ShapeCoords::Rectangle(RectangleCoords {
        x: 0.0,
        y: 0.0,
        width: 100.0,
        height: 100.0,
    });
    for (w, h) in [(1, 1), (640, 480), (333, 1000)] {
        let shape = PixelShape::resolve(coords, size(w, h)).unwrap();
        assert_eq!(shape.bounds(), size(w, h).bounds());
    }
}

#[test]
fn rectangle_axes_follow_width_and_height() {
    let coords = ShapeCoords::Rectangle(RectangleCoords {
        x: 10.0,
        y: 20.0,
        width: 50.0,
        height: 25.0,
    });
    let shape = PixelShape::resolve(coords, size(200, 400)).unwrap();
    assert_eq!(shape, PixelShape::Rectangle(Rect::new(20.0, 80.0, 120.0, 180.0)));
}

#[test]
fn circle_radius_is_width_relative() {
    let coords = ShapeCoords::Circle(CircleCoords {
        cx: 50.0,
        cy: 50.0,
        radius: 10.0,
    });
    let shape = PixelShape::resolve(coords, size(400, 100)).unwrap();
    assert_eq!(
        shape,
        PixelShape::Circle {
            center: Point::new(200.0, 50.0),
            radius: 40.0,
        }
    );
    assert_eq!(shape.bounds(), Rect::new(160.0, 10.0, 240.0, 90.0));
}

#[test]
fn negative_extents_resolve_to_nothing() {
    let rect = ShapeCoords::Rectangle(RectangleCoords {
        x: 10.0,
        y: 10.0,
        width: -5.0,
        height: 5.0,
    });
    assert_eq!(PixelShape::resolve(rect, size(100, 100)), None);

    let circle = ShapeCoords::Circle(CircleCoords {
        cx: 10.0,
        cy: 10.0,
        radius: -1.0,
    });
    assert_eq!(PixelShape::resolve(circle, size(100, 100)), None);
}

#[test]
fn paths_are_closed_and_non_empty() {
    let shape = PixelShape::Circle {
        center: Point::new(5.0, 5.0),
        radius: 3.0,
    };
    let path = shape.to_path();
    assert!(!path.elements().is_empty());
    assert!(matches!(path.elements().last(), Some(kurbo::PathEl::ClosePath)));
}
