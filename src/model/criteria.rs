use serde::Serialize;

/// One axis of the radar chart: a short caption plus the scored value.
#[derive(Debug, Clone, PartialEq)]
pub struct CriterionScore {
    pub label: String,
    pub score: f64,
    pub max_score: f64,
}

/// A scored rubric dimension as it appears in an evaluation export.
#[derive(Debug, Clone, PartialEq)]
pub struct RubricCriterion {
    pub id: String,
    pub name: String,
    pub short_label: String,
    pub description: String,
    pub score: f64,
    pub max_score: f64,
    pub justification: String,
}

impl RubricCriterion {
    pub fn axis(&self) -> CriterionScore {
        CriterionScore {
            label: self.short_label.clone(),
            score: self.score,
            max_score: self.max_score,
        }
    }

    /// Score as a percentage of the criterion maximum.
    pub fn percent(&self) -> f64 {
        if self.max_score > 0.0 {
            100.0 * self.score / self.max_score
        } else {
            0.0
        }
    }

    /// Score projected onto the common 0..10 grading scale.
    pub fn scaled_score(&self) -> f64 {
        if self.max_score > 0.0 {
            10.0 * self.score / self.max_score
        } else {
            0.0
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ScoreBand {
    Excellent,
    Good,
    Fair,
    Poor,
    VeryPoor,
}

impl ScoreBand {
    /// Band cutoffs on the 0..10 scale: 9/7/5/3.
    pub fn for_score(score: f64) -> ScoreBand {
        if score >= 9.0 {
            ScoreBand::Excellent
        } else if score >= 7.0 {
            ScoreBand::Good
        } else if score >= 5.0 {
            ScoreBand::Fair
        } else if score >= 3.0 {
            ScoreBand::Poor
        } else {
            ScoreBand::VeryPoor
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            ScoreBand::Excellent => "Excellent",
            ScoreBand::Good => "Good",
            ScoreBand::Fair => "Fair",
            ScoreBand::Poor => "Poor",
            ScoreBand::VeryPoor => "VeryPoor",
        }
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/model/criteria.rs"]
mod tests;
