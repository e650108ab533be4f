use super::*;

fn criterion(score: f64, max_score: f64) -> RubricCriterion {
    RubricCriterion {
        id: "1".to_string(),
        name: "Code Quality".to_string(),
        short_label: "COD".to_string(),
        description: String::new(),
        score,
        max_score,
        justification: String::new(),
    }
}

#[test]
fn test_band_cutoffs() {
    assert_eq!(ScoreBand::for_score(10.0), ScoreBand::Excellent);
    assert_eq!(ScoreBand::for_score(9.0), ScoreBand::Excellent);
    assert_eq!(ScoreBand::for_score(8.9), ScoreBand::Good);
    assert_eq!(ScoreBand::for_score(7.0), ScoreBand::Good);
    assert_eq!(ScoreBand::for_score(6.9), ScoreBand::Fair);
    assert_eq!(ScoreBand::for_score(5.0), ScoreBand::Fair);
    assert_eq!(ScoreBand::for_score(4.9), ScoreBand::Poor);
    assert_eq!(ScoreBand::for_score(3.0), ScoreBand::Poor);
    assert_eq!(ScoreBand::for_score(2.9), ScoreBand::VeryPoor);
    assert_eq!(ScoreBand::for_score(0.0), ScoreBand::VeryPoor);
}

#[test]
fn test_band_names() {
    assert_eq!(ScoreBand::Excellent.name(), "Excellent");
    assert_eq!(ScoreBand::VeryPoor.name(), "VeryPoor");
}

#[test]
fn test_percent_and_scaled_score() {
    let c = criterion(15.0, 20.0);
    assert!((c.percent() - 75.0).abs() < 1e-12);
    assert!((c.scaled_score() - 7.5).abs() < 1e-12);
}

#[test]
fn test_degenerate_max_score_yields_zero() {
    let c = criterion(5.0, 0.0);
    assert_eq!(c.percent(), 0.0);
    assert_eq!(c.scaled_score(), 0.0);
}

#[test]
fn test_axis_carries_short_label() {
    let c = criterion(9.0, 10.0);
    let axis = c.axis();
    assert_eq!(axis.label, "COD");
    assert_eq!(axis.score, 9.0);
    assert_eq!(axis.max_score, 10.0);
}
