use super::*;

use crate::chart::{ChartParams, compute_radar_geometry};
use crate::input::EvaluationBundle;
use crate::model::criteria::RubricCriterion;
use crate::model::geometry::Point;
use crate::rubric::validate_criteria;

fn criterion(id: &str, name: &str, label: &str, score: f64, justification: &str) -> RubricCriterion {
    RubricCriterion {
        id: id.to_string(),
        name: name.to_string(),
        short_label: label.to_string(),
        description: String::new(),
        score,
        max_score: 10.0,
        justification: justification.to_string(),
    }
}

fn sample_bundle() -> EvaluationBundle {
    EvaluationBundle {
        project: "Inventory System".to_string(),
        student: "Juan Perez".to_string(),
        evaluator: Some("Dr. Garcia".to_string()),
        evaluated_at: Some("2026-02-09T23:30:00Z".to_string()),
        criteria: vec![
            criterion("1", "Code", "COD", 9.0, "clean layering"),
            criterion("2", "Functionality", "FUN", 8.0, ""),
            criterion("3", "UX/UI", "UX", 7.0, ""),
            criterion("4", "Documentation", "DOC", 9.0, "thorough manual"),
            criterion("5", "Innovation", "INN", 8.5, ""),
        ],
    }
}

fn sample_summary() -> SummaryData {
    let bundle = sample_bundle();
    let validation = validate_criteria(&bundle.criteria);
    build_summary(&bundle, &validation, "codejury-profileqc", "0.1.0")
}

#[test]
fn test_mean() {
    assert_eq!(mean(&[]), 0.0);
    assert_eq!(mean(&[2.0, 4.0]), 3.0);
}

#[test]
fn test_build_summary_final_score() {
    let summary = sample_summary();
    assert_eq!(summary.n_criteria, 5);
    assert!((summary.final_score - 8.3).abs() < 1e-12);
    assert_eq!(summary.final_band, ScoreBand::Good);
    assert!(summary.finalizable);
}

#[test]
fn test_build_summary_flags_extremes() {
    let summary = sample_summary();
    let cod = &summary.criteria[0];
    assert!(cod.extreme);
    assert!(cod.justified);
    assert_eq!(cod.band, ScoreBand::Excellent);
    let fun = &summary.criteria[1];
    assert!(!fun.extreme);
    assert!(!fun.justified);
    assert!((fun.percent - 80.0).abs() < 1e-12);
}

#[test]
fn test_build_summary_blocks_finalization_on_violation() {
    let mut bundle = sample_bundle();
    bundle.criteria[0].justification.clear();
    let validation = validate_criteria(&bundle.criteria);
    let summary = build_summary(&bundle, &validation, "codejury-profileqc", "0.1.0");
    assert!(!summary.finalizable);
    assert_eq!(summary.validation.violating_ids(), vec!["1"]);
}

#[test]
fn test_criteria_tsv_shape() {
    let summary = sample_summary();
    let tsv = render_criteria_tsv(&summary);
    let lines: Vec<&str> = tsv.lines().collect();
    assert_eq!(lines.len(), 6);
    assert!(lines[0].starts_with("id\tname\tlabel"));
    assert!(lines[1].starts_with("1\tCode\tCOD\t9.000000"));
    assert!(lines[1].ends_with("Excellent\ttrue\ttrue"));
}

#[test]
fn test_profile_json_full_and_summary_modes() {
    let summary = sample_summary();
    let axes = sample_bundle()
        .criteria
        .iter()
        .map(RubricCriterion::axis)
        .collect::<Vec<_>>();
    let params = ChartParams::new(Point::new(100.0, 100.0), 80.0);
    let geometry = compute_radar_geometry(&axes, &params).unwrap();

    let full = json::render_profile_json(&summary, Some(&geometry)).unwrap();
    assert!(full.contains("\"final_score\""));
    assert!(full.contains("\"chart\""));
    assert!(full.contains("\"ring_polygons\""));

    let brief = json::render_profile_json(&summary, None).unwrap();
    assert!(brief.contains("\"finalizable\": true"));
    assert!(!brief.contains("\"chart\""));
}

#[test]
fn test_text_report_sections() {
    let summary = sample_summary();
    let text = text::render_report_text(&summary);
    assert!(text.contains("CodeJury Evaluation Profile"));
    assert!(text.contains("Final score: 8.300000 / 10 (Good)"));
    assert!(text.contains("COD"));
    assert!(text.contains("All extreme scores are justified"));
}

#[test]
fn test_text_report_lists_violations() {
    let mut bundle = sample_bundle();
    bundle.criteria[0].justification.clear();
    let validation = validate_criteria(&bundle.criteria);
    let summary = build_summary(&bundle, &validation, "codejury-profileqc", "0.1.0");
    let text = text::render_report_text(&summary);
    assert!(text.contains("1 extreme score(s) missing a justification"));
    assert!(text.contains("[1] Code (score 9.000000)"));
    assert!(text.contains("cannot be finalized"));
}

#[test]
fn test_write_reports_creates_artifacts() {
    let summary = sample_summary();
    let axes = sample_bundle()
        .criteria
        .iter()
        .map(RubricCriterion::axis)
        .collect::<Vec<_>>();
    let params = ChartParams::new(Point::new(100.0, 100.0), 80.0);
    let geometry = compute_radar_geometry(&axes, &params).unwrap();

    let out_dir = std::env::temp_dir().join(format!(
        "codejury-profileqc-test-{}-{:?}",
        std::process::id(),
        std::thread::current().id()
    ));
    write_reports(&summary, &geometry, &out_dir, ReportMode::Full).unwrap();

    assert!(out_dir.join("profile.json").exists());
    assert!(out_dir.join("criteria.tsv").exists());
    assert!(out_dir.join("report.txt").exists());

    let json = std::fs::read_to_string(out_dir.join("profile.json")).unwrap();
    assert!(json.contains("\"data_polygon\""));

    std::fs::remove_dir_all(&out_dir).ok();
}
