use super::types::RiskLevel;

/// Summary sentence builder: one paragraph a clinician or patient can read
/// back without seeing the raw scores.
pub struct SummaryTemplates;

impl SummaryTemplates {
    /// Rule-based recommendation summary. Confidence is rendered as a whole
    /// percentage.
    pub fn triage(risk_level: RiskLevel, department: &str, confidence: f64) -> String {
        format!(
            "Risk classified as {} based on age, vitals, symptoms, and medical history. \
             Recommended department: {}. Confidence: {:.0}%.",
            risk_level.as_str(),
            department,
            confidence * 100.0,
        )
    }

    /// Summary after a statistical model overrode the department choice.
    /// The risk wording stays identical; only the recommendation line notes
    /// the model.
    pub fn refined(risk_level: RiskLevel, department: &str, confidence: f64) -> String {
        format!(
            "Risk classified as {} based on age, vitals, symptoms, and medical history. \
             Recommended department (AI model): {}. Confidence: {:.0}%.",
            risk_level.as_str(),
            department,
            confidence * 100.0,
        )
    }
}
