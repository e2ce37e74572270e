use tracing::{debug, info};

use crate::models::PatientRecord;

use super::keywords::{DEPARTMENTS, FALLBACK_DEPARTMENT, SYMPTOM_DEPARTMENTS};
use super::rules::{HIGH_RISK_THRESHOLD, MEDIUM_RISK_THRESHOLD};
use super::scoring::{
    score_age, score_blood_pressure, score_conditions, score_heart_rate, score_symptoms,
    score_temperature,
};
use super::summary::SummaryTemplates;
use super::types::{RiskLevel, TriageResult};

/// Maximum number of ranked alternative departments carried in a result.
const MAX_ALTERNATIVES: usize = 3;

/// Score a patient record into a triage decision.
///
/// Pure function of its input: no randomness, no I/O, no shared state, and
/// it never fails. Dimensions whose vitals are unknown are skipped; they
/// contribute to neither the score nor the weight ceiling.
pub fn score(record: &PatientRecord) -> TriageResult {
    let mut risk_score = 0.0;
    let mut max_score = 0.0;
    let mut factors = Vec::new();

    let outcomes = [
        Some(score_age(record.age)),
        score_blood_pressure(
            record.blood_pressure_systolic,
            record.blood_pressure_diastolic,
        ),
        score_heart_rate(record.heart_rate),
        score_temperature(record.temperature),
        Some(score_symptoms(&record.symptoms)),
        Some(score_conditions(&record.pre_existing_conditions)),
    ];

    for outcome in outcomes.into_iter().flatten() {
        risk_score += outcome.points;
        max_score += outcome.weight;
        if let Some(factor) = outcome.factor {
            debug!(
                factor = %factor.factor,
                impact = factor.impact.as_str(),
                points = outcome.points,
                "dimension scored"
            );
            factors.push(factor);
        }
    }

    let normalized = risk_score / max_score.max(1.0);
    let (risk_level, confidence) = classify(normalized);
    let confidence_score = round_to_cents(confidence);

    let recommended = recommend_department(&record.symptoms);
    let alternative_departments = alternatives(recommended);
    let summary = SummaryTemplates::triage(risk_level, recommended, confidence_score);

    info!(
        risk = risk_level.as_str(),
        department = recommended,
        confidence = confidence_score,
        factors = factors.len(),
        "triage scored"
    );

    TriageResult {
        risk_level,
        confidence_score,
        recommended_department: recommended.to_string(),
        alternative_departments,
        contributing_factors: factors,
        summary,
    }
}

/// Map the normalized score to a tier and its confidence estimate. Low-tier
/// confidence grows as the score shrinks: a clearly low score is an easier
/// call than a borderline one.
fn classify(normalized: f64) -> (RiskLevel, f64) {
    if normalized >= HIGH_RISK_THRESHOLD {
        (RiskLevel::High, (0.75 + normalized * 0.20).min(0.98))
    } else if normalized >= MEDIUM_RISK_THRESHOLD {
        (RiskLevel::Medium, (0.65 + normalized * 0.25).min(0.92))
    } else {
        (RiskLevel::Low, (0.70 + (1.0 - normalized) * 0.20).min(0.90))
    }
}

fn round_to_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// The first routing phrase found in the lowercased symptom text picks the
/// department; nothing matched falls back to general medicine.
pub fn recommend_department(symptoms: &str) -> &'static str {
    let text = symptoms.to_lowercase();
    SYMPTOM_DEPARTMENTS
        .iter()
        .find(|(phrase, _)| text.contains(phrase))
        .map(|(_, department)| *department)
        .unwrap_or(FALLBACK_DEPARTMENT)
}

/// Alternatives come from the canonical department order, minus the
/// recommendation, truncated.
fn alternatives(recommended: &str) -> Vec<String> {
    DEPARTMENTS
        .iter()
        .filter(|department| **department != recommended)
        .take(MAX_ALTERNATIVES)
        .map(|department| department.to_string())
        .collect()
}
