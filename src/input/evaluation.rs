use serde::Deserialize;

/// Raw shape of an evaluation export as written by the mobile client.
/// Structural validation happens in [`crate::input::parse_evaluation`], not
/// here; this module only mirrors the wire format.
#[derive(Debug, Clone, Deserialize)]
pub struct EvaluationFile {
    pub project: String,
    pub student: String,
    #[serde(default)]
    pub evaluator: Option<String>,
    #[serde(default)]
    pub evaluated_at: Option<String>,
    pub criteria: Vec<CriterionEntry>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CriterionEntry {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub short_name: Option<String>,
    #[serde(default)]
    pub description: String,
    pub score: f64,
    pub max_score: f64,
    #[serde(default)]
    pub justification: String,
}

/// Fallback axis caption when the export carries no short name: the first
/// three alphanumeric characters of the criterion name, uppercased.
pub fn derive_short_label(name: &str) -> String {
    name.chars()
        .filter(|c| c.is_alphanumeric())
        .take(3)
        .collect::<String>()
        .to_uppercase()
}
