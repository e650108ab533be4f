use std::collections::BTreeSet;
use std::path::Path;

use thiserror::Error;

pub mod evaluation;

use evaluation::{CriterionEntry, EvaluationFile, derive_short_label};

use crate::model::criteria::RubricCriterion;

#[derive(Debug, Error)]
pub enum InputError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("parse error: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

/// An evaluation export after structural validation, with every criterion
/// carrying a usable short label.
#[derive(Debug, Clone)]
pub struct EvaluationBundle {
    pub project: String,
    pub student: String,
    pub evaluator: Option<String>,
    pub evaluated_at: Option<String>,
    pub criteria: Vec<RubricCriterion>,
}

pub fn load_evaluation(path: &Path) -> Result<EvaluationBundle, InputError> {
    let raw = std::fs::read_to_string(path)?;
    let bundle = parse_evaluation(&raw)?;
    tracing::info!(
        path = %path.display(),
        criteria = bundle.criteria.len(),
        "loaded evaluation export"
    );
    Ok(bundle)
}

/// Structural checks only: the criteria list must be non-empty and every id
/// non-blank and unique. Score ranges are checked by the geometry engine,
/// the one place correctness can still be caught before anything is drawn.
pub fn parse_evaluation(raw: &str) -> Result<EvaluationBundle, InputError> {
    let file: EvaluationFile = serde_json::from_str(raw)?;

    if file.criteria.is_empty() {
        return Err(InputError::InvalidInput(
            "evaluation export has no criteria".to_string(),
        ));
    }

    let mut seen: BTreeSet<&str> = BTreeSet::new();
    for entry in &file.criteria {
        if entry.id.trim().is_empty() {
            return Err(InputError::InvalidInput(format!(
                "criterion \"{}\" has a blank id",
                entry.name
            )));
        }
        if !seen.insert(entry.id.as_str()) {
            return Err(InputError::InvalidInput(format!(
                "duplicate criterion id: {}",
                entry.id
            )));
        }
    }

    Ok(EvaluationBundle {
        project: file.project,
        student: file.student,
        evaluator: file.evaluator,
        evaluated_at: file.evaluated_at,
        criteria: file.criteria.into_iter().map(build_criterion).collect(),
    })
}

fn build_criterion(entry: CriterionEntry) -> RubricCriterion {
    let short_label = match entry.short_name {
        Some(ref s) if !s.trim().is_empty() => s.trim().to_string(),
        _ => derive_short_label(&entry.name),
    };
    RubricCriterion {
        id: entry.id,
        name: entry.name,
        short_label,
        description: entry.description,
        score: entry.score,
        max_score: entry.max_score,
        justification: entry.justification,
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/input/tests.rs"]
mod tests;
