use super::*;

const ALL: [Ease; 2] = [Ease::Linear, Ease::CSS_EASE_OUT];

#[test]
fn endpoints_are_fixed() {
    for e in ALL {
        assert!(e.apply(0.0).abs() < 1e-6, "{e:?}");
        assert!((e.apply(1.0) - 1.0).abs() < 1e-6, "{e:?}");
    }
}

#[test]
fn input_is_clamped() {
    for e in ALL {
        assert!(e.apply(-3.0).abs() < 1e-6);
        assert!((e.apply(7.0) - 1.0).abs() < 1e-6);
        assert!(e.apply(f64::NAN).abs() < 1e-6);
    }
}

#[test]
fn curves_are_monotonic_and_ease_out_is_front_loaded() {
    for e in ALL {
        let mut prev = e.apply(0.0);
        for i in 1..=100 {
            let v = e.apply(f64::from(i) / 100.0);
            assert!(v + 1e-9 >= prev, "{e:?} not monotonic at {i}");
            prev = v;
        }
    }
    assert!(Ease::CSS_EASE_OUT.apply(0.5) > 0.5);
}

#[test]
fn linear_bezier_is_identity() {
    let e = Ease::CubicBezier {
        x1: 0.25,
        y1: 0.25,
        x2: 0.75,
        y2: 0.75,
    };
    for t in [0.1, 0.3, 0.5, 0.9] {
        assert!((e.apply(t) - t).abs() < 1e-5);
    }
}

#[test]
fn css_ease_out_matches_reference_midpoint() {
    // Browsers evaluate cubic-bezier(0, 0, 0.58, 1) at t = 0.5 to roughly 0.6847.
    assert!((Ease::CSS_EASE_OUT.apply(0.5) - 0.6847).abs() < 1e-3);
}
