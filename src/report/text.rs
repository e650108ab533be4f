use crate::report::{SummaryData, format_f64_6};

pub fn render_report_text(summary: &SummaryData) -> String {
    let mut out = String::new();

    out.push_str("CodeJury Evaluation Profile\n");
    out.push_str("===========================\n\n");

    out.push_str("1. Overall result\n");
    out.push_str(&format!("Project: {}\n", summary.project));
    out.push_str(&format!("Student: {}\n", summary.student));
    if let Some(evaluator) = &summary.evaluator {
        out.push_str(&format!("Evaluator: {}\n", evaluator));
    }
    if let Some(at) = &summary.evaluated_at {
        out.push_str(&format!("Evaluated at: {}\n", at));
    }
    out.push_str(&format!(
        "Final score: {} / 10 ({})\n\n",
        format_f64_6(summary.final_score),
        summary.final_band.name()
    ));

    out.push_str("2. Criterion breakdown\n");
    let label_width = summary
        .criteria
        .iter()
        .map(|c| c.short_label.chars().count())
        .max()
        .unwrap_or(0);
    for c in &summary.criteria {
        out.push_str(&format!(
            "{:<width$}  {}  {}/{} [{}] {}\n",
            c.short_label,
            c.name,
            format_f64_6(c.score),
            format_f64_6(c.max_score),
            score_bar(c.percent),
            c.band.name(),
            width = label_width
        ));
    }
    out.push('\n');

    out.push_str("3. Rubric validation\n");
    if summary.validation.is_clean() {
        out.push_str("All extreme scores are justified; the evaluation can be finalized.\n");
    } else {
        out.push_str(&format!(
            "{} extreme score(s) missing a justification:\n",
            summary.validation.violations.len()
        ));
        for v in &summary.validation.violations {
            out.push_str(&format!(
                " - [{}] {} (score {})\n",
                v.id,
                v.name,
                format_f64_6(v.score)
            ));
        }
        out.push_str(
            "The evaluation cannot be finalized until every extreme score is justified.\n",
        );
    }

    out
}

/// Ten-slot text bar, one slot per 10% of the criterion maximum.
fn score_bar(percent: f64) -> String {
    let filled = ((percent / 10.0).round() as isize).clamp(0, 10) as usize;
    let mut bar = String::with_capacity(10);
    for _ in 0..filled {
        bar.push('#');
    }
    for _ in filled..10 {
        bar.push('-');
    }
    bar
}
