use serde::Serialize;

use crate::model::criteria::ScoreBand;
use crate::model::geometry::ChartGeometry;
use crate::report::{CriterionStat, SummaryData};
use crate::rubric::Violation;

#[derive(Debug, Serialize)]
struct ProfileDocument<'a> {
    tool: ToolMeta<'a>,
    evaluation: EvaluationMeta<'a>,
    summary: SummarySection<'a>,
    criteria: Vec<CriterionRow<'a>>,
    validation: ValidationSection<'a>,
    #[serde(skip_serializing_if = "Option::is_none")]
    chart: Option<&'a ChartGeometry>,
}

#[derive(Debug, Serialize)]
struct ToolMeta<'a> {
    name: &'a str,
    version: &'a str,
}

#[derive(Debug, Serialize)]
struct EvaluationMeta<'a> {
    project: &'a str,
    student: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    evaluator: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    evaluated_at: Option<&'a str>,
}

#[derive(Debug, Serialize)]
struct SummarySection<'a> {
    n_criteria: usize,
    final_score: f64,
    final_band: &'a str,
}

#[derive(Debug, Serialize)]
struct CriterionRow<'a> {
    id: &'a str,
    name: &'a str,
    label: &'a str,
    score: f64,
    max_score: f64,
    percent: f64,
    band: ScoreBand,
    extreme: bool,
    justified: bool,
}

#[derive(Debug, Serialize)]
struct ValidationSection<'a> {
    finalizable: bool,
    violations: &'a [Violation],
}

pub fn render_profile_json(
    summary: &SummaryData,
    chart: Option<&ChartGeometry>,
) -> serde_json::Result<String> {
    let doc = ProfileDocument {
        tool: ToolMeta {
            name: &summary.tool_name,
            version: &summary.tool_version,
        },
        evaluation: EvaluationMeta {
            project: &summary.project,
            student: &summary.student,
            evaluator: summary.evaluator.as_deref(),
            evaluated_at: summary.evaluated_at.as_deref(),
        },
        summary: SummarySection {
            n_criteria: summary.n_criteria,
            final_score: summary.final_score,
            final_band: summary.final_band.name(),
        },
        criteria: summary.criteria.iter().map(criterion_row).collect(),
        validation: ValidationSection {
            finalizable: summary.finalizable,
            violations: &summary.validation.violations,
        },
        chart,
    };
    serde_json::to_string_pretty(&doc)
}

fn criterion_row(stat: &CriterionStat) -> CriterionRow<'_> {
    CriterionRow {
        id: &stat.id,
        name: &stat.name,
        label: &stat.short_label,
        score: stat.score,
        max_score: stat.max_score,
        percent: stat.percent,
        band: stat.band,
        extreme: stat.extreme,
        justified: stat.justified,
    }
}
