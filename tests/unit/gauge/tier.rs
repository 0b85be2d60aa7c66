use super::*;

#[test]
fn boundaries_are_closed_below_open_above() {
    assert_eq!(ScoreTier::of(9.0).label(), "Excellent");
    assert_eq!(ScoreTier::of(8.999).label(), "Very Good");
    assert_eq!(ScoreTier::of(7.0).label(), "Very Good");
    assert_eq!(ScoreTier::of(6.999).label(), "Good");
    assert_eq!(ScoreTier::of(5.0).label(), "Good");
    assert_eq!(ScoreTier::of(4.999).label(), "Needs Improvement");
    assert_eq!(ScoreTier::of(3.0).label(), "Needs Improvement");
    assert_eq!(ScoreTier::of(2.999).label(), "Poor");
}

#[test]
fn out_of_range_scores_still_map() {
    assert_eq!(ScoreTier::of(12.0), ScoreTier::Excellent);
    assert_eq!(ScoreTier::of(-1.0), ScoreTier::Poor);
    assert_eq!(ScoreTier::of(f64::NAN), ScoreTier::Poor);
}

#[test]
fn tiers_are_monotonic_in_score() {
    let mut prev = ScoreTier::of(-5.0);
    for i in -50..=150 {
        let t = ScoreTier::of(f64::from(i) / 10.0);
        assert!(t >= prev);
        prev = t;
    }
}

#[test]
fn every_tier_has_distinct_color_and_class() {
    let tiers = [
        ScoreTier::Excellent,
        ScoreTier::VeryGood,
        ScoreTier::Good,
        ScoreTier::NeedsImprovement,
        ScoreTier::Poor,
    ];
    for (i, a) in tiers.iter().enumerate() {
        for b in &tiers[i + 1..] {
            assert_ne!(a.color(), b.color());
            assert_ne!(a.color_class(), b.color_class());
        }
    }
    assert_eq!(ScoreTier::Poor.to_string(), "Poor");
}
