use super::*;

#[test]
fn gauge_bundles_label_tier_and_offset() {
    let g = ScoreGauge::new("color_balance", 7.5, &GaugeOpts::default());
    assert_eq!(g.metric, "color_balance");
    assert_eq!(g.label, "Color Balance");
    assert_eq!(g.tier, ScoreTier::VeryGood);
    let c = g.arc.circumference();
    assert!((g.target_offset() - 0.25 * c).abs() < 1e-9);
    assert_eq!(g.size_px, 96);
    assert_eq!(g.stroke_width, 8.0);
}

#[test]
fn gauge_reveal_is_deferred() {
    let g = ScoreGauge::new("sharpness", 10.0, &GaugeOpts::default());
    assert!(!g.is_visible_at(Duration::from_millis(0)));
    assert_eq!(g.offset_at(Duration::from_millis(0)), g.arc.circumference());
    assert!(g.is_visible_at(Duration::from_millis(100)));
    assert!(g.offset_at(Duration::from_secs(2)).abs() < 1e-9);
}

#[test]
fn gauges_follow_score_order() {
    let result: AnalysisResult =
        serde_json::from_str(r#"{ "scores": { "lighting": 9.1, "composition": 2.0, "focus": 5.0 } }"#)
            .unwrap();
    let gauges = gauges_for(&result, &GaugeOpts::default());
    let metrics: Vec<_> = gauges.iter().map(|g| g.metric.as_str()).collect();
    assert_eq!(metrics, ["lighting", "composition", "focus"]);
    let tiers: Vec<_> = gauges.iter().map(|g| g.tier).collect();
    assert_eq!(
        tiers,
        [ScoreTier::Excellent, ScoreTier::Poor, ScoreTier::Good]
    );
}

#[test]
fn empty_scores_yield_no_gauges() {
    let result = AnalysisResult::default();
    assert!(gauges_for(&result, &GaugeOpts::default()).is_empty());
}
