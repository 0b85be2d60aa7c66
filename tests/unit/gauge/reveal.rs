use super::*;

fn ms(v: u64) -> Duration {
    Duration::from_millis(v)
}

#[test]
fn hidden_until_delay_elapses() {
    let r = GaugeReveal::default();
    let arc = GaugeArc::default();
    assert!(!r.visible_at(ms(0)));
    assert!(!r.visible_at(ms(99)));
    assert!(r.visible_at(ms(100)));
    assert_eq!(r.offset_at(arc, 8.0, ms(50)), arc.circumference());
    assert_eq!(r.offset_at(arc, 8.0, ms(100)), arc.circumference());
}

#[test]
fn settles_on_target_offset() {
    let r = GaugeReveal::default();
    let arc = GaugeArc::default();
    assert_eq!(r.settles_after(), ms(1100));
    for score in [0.0, 2.5, 7.0, 10.0] {
        let settled = r.offset_at(arc, score, ms(1100));
        assert!((settled - arc.dash_offset(score)).abs() < 1e-6);
        let later = r.offset_at(arc, score, ms(60_000));
        assert!((later - arc.dash_offset(score)).abs() < 1e-6);
    }
}

#[test]
fn sweep_moves_monotonically_toward_target() {
    let r = GaugeReveal::default();
    let arc = GaugeArc::default();
    let mut prev = r.offset_at(arc, 9.0, ms(0));
    for t in (0..=1200).step_by(20) {
        let o = r.offset_at(arc, 9.0, ms(t));
        assert!(o <= prev + 1e-9);
        prev = o;
    }
}

#[test]
fn zero_duration_jumps_after_delay() {
    let r = GaugeReveal {
        delay: ms(10),
        duration: Duration::ZERO,
        ease: Ease::Linear,
    };
    let arc = GaugeArc::default();
    assert_eq!(r.progress_at(ms(9)), 0.0);
    assert_eq!(r.progress_at(ms(10)), 1.0);
    assert!(r.offset_at(arc, 10.0, ms(10)).abs() < 1e-12);
}

#[test]
fn linear_midpoint() {
    let r = GaugeReveal {
        delay: ms(0),
        duration: ms(1000),
        ease: Ease::Linear,
    };
    let arc = GaugeArc::default();
    let c = arc.circumference();
    let mid = r.offset_at(arc, 10.0, ms(500));
    assert!((mid - c / 2.0).abs() < 1e-9);
}
