use serde::Serialize;

use crate::model::criteria::RubricCriterion;

/// Fixed thresholds on the 0..10 grading scale. A score at or below the low
/// bound, or at or above the high bound, requires a written justification
/// before the evaluation may be finalized.
pub const EXTREME_LOW: f64 = 2.0;
pub const EXTREME_HIGH: f64 = 9.0;

pub fn is_extreme(score: f64) -> bool {
    score <= EXTREME_LOW || score >= EXTREME_HIGH
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Violation {
    pub id: String,
    pub name: String,
    pub score: f64,
}

/// Outcome of a rubric check. Violations are data, not errors; the caller
/// decides how to surface them (blocked submit, warning banner, report note).
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ValidationResult {
    pub violations: Vec<Violation>,
}

impl ValidationResult {
    pub fn is_clean(&self) -> bool {
        self.violations.is_empty()
    }

    pub fn violating_ids(&self) -> Vec<&str> {
        self.violations.iter().map(|v| v.id.as_str()).collect()
    }
}

/// Returns the criteria that carry an extreme score with an empty or
/// whitespace-only justification, in input order.
pub fn validate_criteria(criteria: &[RubricCriterion]) -> ValidationResult {
    let mut violations = Vec::new();
    for criterion in criteria {
        if is_extreme(criterion.score) && criterion.justification.trim().is_empty() {
            violations.push(Violation {
                id: criterion.id.clone(),
                name: criterion.name.clone(),
                score: criterion.score,
            });
        }
    }
    ValidationResult { violations }
}

#[cfg(test)]
#[path = "../../tests/src_inline/rubric/tests.rs"]
mod tests;
