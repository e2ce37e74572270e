use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{info, warn};

use crate::models::PatientRecord;
use crate::triage::summary::SummaryTemplates;
use crate::triage::TriageResult;

/// Ranked alternatives carried after an override.
const MAX_ALTERNATIVES: usize = 3;

#[derive(Error, Debug)]
pub enum RefinerError {
    /// No trained model is present on this installation.
    #[error("department model unavailable")]
    Unavailable,

    #[error("department model failed: {0}")]
    Backend(String),
}

/// Prediction from a trained department classifier. Probabilities keep the
/// classifier's own emission order; ties between equal probabilities
/// resolve in that order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RefinerPrediction {
    pub department: String,
    pub probabilities: Vec<(String, f64)>,
}

/// A trained classifier that can override the rule-based department choice.
/// Implementations live at the application boundary; the scoring engine
/// never calls one itself.
pub trait DepartmentRefiner {
    fn predict(&self, record: &PatientRecord) -> Result<RefinerPrediction, RefinerError>;
}

/// Merge a prediction into a rule-based result. Only the department fields
/// and the summary change; the risk tier, confidence, and factor list stay
/// the rule engine's alone.
pub fn apply_refinement(result: &TriageResult, prediction: &RefinerPrediction) -> TriageResult {
    let mut ranked: Vec<&(String, f64)> = prediction
        .probabilities
        .iter()
        .filter(|(department, probability)| {
            *department != prediction.department && *probability > 0.0
        })
        .collect();
    // Stable sort: equal probabilities keep the classifier's emission order.
    ranked.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));

    let alternative_departments = ranked
        .iter()
        .take(MAX_ALTERNATIVES)
        .map(|(department, _)| department.clone())
        .collect();

    TriageResult {
        risk_level: result.risk_level,
        confidence_score: result.confidence_score,
        recommended_department: prediction.department.clone(),
        alternative_departments,
        contributing_factors: result.contributing_factors.clone(),
        summary: SummaryTemplates::refined(
            result.risk_level,
            &prediction.department,
            result.confidence_score,
        ),
    }
}

/// Ask the refiner for a department and merge its answer in. Any refiner
/// failure is absorbed here: the rule-based result always comes back, so a
/// triage answer is produced no matter what the model does.
pub fn refine_with<R: DepartmentRefiner + ?Sized>(
    refiner: &R,
    record: &PatientRecord,
    result: TriageResult,
) -> TriageResult {
    match refiner.predict(record) {
        Ok(prediction) => {
            let refined = apply_refinement(&result, &prediction);
            info!(
                department = %refined.recommended_department,
                "department refined by statistical model"
            );
            refined
        }
        Err(error) => {
            warn!(%error, "department refiner unavailable, keeping rule-based recommendation");
            result
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::triage::score;

    fn sample_record() -> PatientRecord {
        PatientRecord {
            age: 55,
            gender: "Male".into(),
            symptoms: "persistent cough and fever".into(),
            blood_pressure_systolic: Some(130),
            blood_pressure_diastolic: Some(85),
            heart_rate: Some(88),
            temperature: Some(37.8),
            pre_existing_conditions: vec!["Asthma".into()],
        }
    }

    struct FixedRefiner(RefinerPrediction);

    impl DepartmentRefiner for FixedRefiner {
        fn predict(&self, _record: &PatientRecord) -> Result<RefinerPrediction, RefinerError> {
            Ok(self.0.clone())
        }
    }

    struct FailingRefiner;

    impl DepartmentRefiner for FailingRefiner {
        fn predict(&self, _record: &PatientRecord) -> Result<RefinerPrediction, RefinerError> {
            Err(RefinerError::Unavailable)
        }
    }

    /// The override replaces department fields and the summary, nothing else.
    #[test]
    fn override_preserves_risk_fields() {
        let base = score(&sample_record());
        let prediction = RefinerPrediction {
            department: "Cardiology".into(),
            probabilities: vec![
                ("Cardiology".into(), 0.48),
                ("Pulmonology".into(), 0.30),
                ("General Medicine".into(), 0.12),
                ("Neurology".into(), 0.10),
            ],
        };

        let refined = apply_refinement(&base, &prediction);

        assert_eq!(refined.risk_level, base.risk_level);
        assert_eq!(refined.confidence_score, base.confidence_score);
        assert_eq!(refined.contributing_factors, base.contributing_factors);
        assert_eq!(refined.recommended_department, "Cardiology");
        assert!(refined.summary.contains("(AI model)"));
    }

    /// Alternatives rank by descending probability, excluding the predicted
    /// department and zero-probability entries, capped at three.
    #[test]
    fn alternatives_ranked_by_probability() {
        let base = score(&sample_record());
        let prediction = RefinerPrediction {
            department: "Pulmonology".into(),
            probabilities: vec![
                ("General Medicine".into(), 0.05),
                ("Cardiology".into(), 0.20),
                ("Pulmonology".into(), 0.40),
                ("Neurology".into(), 0.25),
                ("Dermatology".into(), 0.0),
                ("Orthopedics".into(), 0.10),
            ],
        };

        let refined = apply_refinement(&base, &prediction);
        assert_eq!(
            refined.alternative_departments,
            vec!["Neurology", "Cardiology", "Orthopedics"]
        );
    }

    /// Equal probabilities keep the classifier's emission order.
    #[test]
    fn probability_ties_keep_emission_order() {
        let base = score(&sample_record());
        let prediction = RefinerPrediction {
            department: "Emergency".into(),
            probabilities: vec![
                ("Neurology".into(), 0.25),
                ("Cardiology".into(), 0.25),
                ("Emergency".into(), 0.50),
            ],
        };

        let refined = apply_refinement(&base, &prediction);
        assert_eq!(
            refined.alternative_departments,
            vec!["Neurology", "Cardiology"]
        );
    }

    /// An empty probability map still overrides the department.
    #[test]
    fn empty_probabilities_yield_no_alternatives() {
        let base = score(&sample_record());
        let prediction = RefinerPrediction {
            department: "Neurology".into(),
            probabilities: vec![],
        };

        let refined = apply_refinement(&base, &prediction);
        assert_eq!(refined.recommended_department, "Neurology");
        assert!(refined.alternative_departments.is_empty());
    }

    /// A working refiner flows through `refine_with`.
    #[test]
    fn refine_with_applies_prediction() {
        let record = sample_record();
        let base = score(&record);
        let refiner = FixedRefiner(RefinerPrediction {
            department: "Cardiology".into(),
            probabilities: vec![
                ("Cardiology".into(), 0.6),
                ("Pulmonology".into(), 0.4),
            ],
        });

        let refined = refine_with(&refiner, &record, base);
        assert_eq!(refined.recommended_department, "Cardiology");
        assert_eq!(refined.alternative_departments, vec!["Pulmonology"]);
    }

    /// A failing refiner degrades to the untouched rule-based result.
    #[test]
    fn refiner_failure_keeps_rule_result() {
        let record = sample_record();
        let base = score(&record);

        let result = refine_with(&FailingRefiner, &record, base.clone());
        assert_eq!(result, base);
    }
}
