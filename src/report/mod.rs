use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use thiserror::Error;

pub mod json;
pub mod text;

use crate::input::EvaluationBundle;
use crate::model::criteria::ScoreBand;
use crate::model::geometry::ChartGeometry;
use crate::rubric::{ValidationResult, is_extreme};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportMode {
    /// profile.json without the chart geometry block.
    Summary,
    /// profile.json including the full chart geometry.
    Full,
}

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Clone)]
pub struct CriterionStat {
    pub id: String,
    pub name: String,
    pub short_label: String,
    pub score: f64,
    pub max_score: f64,
    pub percent: f64,
    pub band: ScoreBand,
    pub extreme: bool,
    pub justified: bool,
}

#[derive(Debug, Clone)]
pub struct SummaryData {
    pub tool_name: String,
    pub tool_version: String,

    pub project: String,
    pub student: String,
    pub evaluator: Option<String>,
    pub evaluated_at: Option<String>,

    pub n_criteria: usize,
    pub final_score: f64,
    pub final_band: ScoreBand,
    pub criteria: Vec<CriterionStat>,

    pub validation: ValidationResult,
    pub finalizable: bool,
}

pub fn build_summary(
    bundle: &EvaluationBundle,
    validation: &ValidationResult,
    tool_name: &str,
    tool_version: &str,
) -> SummaryData {
    let mut criteria = Vec::with_capacity(bundle.criteria.len());
    let mut scaled = Vec::with_capacity(bundle.criteria.len());
    for criterion in &bundle.criteria {
        scaled.push(criterion.scaled_score());
        criteria.push(CriterionStat {
            id: criterion.id.clone(),
            name: criterion.name.clone(),
            short_label: criterion.short_label.clone(),
            score: criterion.score,
            max_score: criterion.max_score,
            percent: criterion.percent(),
            band: ScoreBand::for_score(criterion.scaled_score()),
            extreme: is_extreme(criterion.score),
            justified: !criterion.justification.trim().is_empty(),
        });
    }

    let final_score = mean(&scaled);

    SummaryData {
        tool_name: tool_name.to_string(),
        tool_version: tool_version.to_string(),
        project: bundle.project.clone(),
        student: bundle.student.clone(),
        evaluator: bundle.evaluator.clone(),
        evaluated_at: bundle.evaluated_at.clone(),
        n_criteria: bundle.criteria.len(),
        final_score,
        final_band: ScoreBand::for_score(final_score),
        criteria,
        validation: validation.clone(),
        finalizable: validation.is_clean(),
    }
}

pub fn write_reports(
    summary: &SummaryData,
    geometry: &ChartGeometry,
    out_dir: &Path,
    mode: ReportMode,
) -> Result<(), ReportError> {
    fs::create_dir_all(out_dir)?;

    let profile_path = out_dir.join("profile.json");
    let chart = match mode {
        ReportMode::Full => Some(geometry),
        ReportMode::Summary => None,
    };
    write_text(&profile_path, &json::render_profile_json(summary, chart)?)?;

    let criteria_path = out_dir.join("criteria.tsv");
    write_text(&criteria_path, &render_criteria_tsv(summary))?;

    let report_path = out_dir.join("report.txt");
    write_text(&report_path, &text::render_report_text(summary))?;

    tracing::info!(out = %out_dir.display(), "wrote profile.json, criteria.tsv, report.txt");
    Ok(())
}

pub fn render_criteria_tsv(summary: &SummaryData) -> String {
    let mut out = String::new();
    out.push_str("id\tname\tlabel\tscore\tmax_score\tpercent\tband\textreme\tjustified\n");
    for c in &summary.criteria {
        out.push_str(
            &[
                c.id.clone(),
                c.name.clone(),
                c.short_label.clone(),
                format_f64_6(c.score),
                format_f64_6(c.max_score),
                format_f64_6(c.percent),
                c.band.name().to_string(),
                c.extreme.to_string(),
                c.justified.to_string(),
            ]
            .join("\t"),
        );
        out.push('\n');
    }
    out
}

pub fn format_f64_6(v: f64) -> String {
    format!("{:.6}", v)
}

pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

fn write_text(path: &Path, contents: &str) -> std::io::Result<()> {
    let mut w = BufWriter::new(File::create(path)?);
    w.write_all(contents.as_bytes())?;
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/src_inline/report/mod.rs"]
mod tests;
