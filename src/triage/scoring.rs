use std::sync::LazyLock;

use regex::Regex;

use super::keywords::{EMERGENCY_KEYWORDS, HIGH_RISK_CONDITIONS, MEDIUM_KEYWORDS};
use super::rules;
use super::types::{ContributingFactor, Impact};

static RE_SYMPTOM_SEPARATOR: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[,;]").unwrap());

/// Points and weight one dimension contributes, plus the factor explaining
/// the outcome. A `None` factor means the dimension scored without anything
/// worth reporting (empty symptom text).
#[derive(Debug, Clone)]
pub struct DimensionOutcome {
    pub points: f64,
    pub weight: f64,
    pub factor: Option<ContributingFactor>,
}

impl DimensionOutcome {
    fn from_band<T: Copy + 'static>(rule: &rules::VitalRule<T>, value: T) -> Self {
        let band = rule.evaluate(value);
        Self {
            points: band.points,
            weight: rule.weight,
            factor: Some(band.to_factor()),
        }
    }
}

// ---------------------------------------------------------------------------
// [1] Age
// ---------------------------------------------------------------------------

/// Age is always scored; there is no unknown state.
pub fn score_age(age: i64) -> DimensionOutcome {
    DimensionOutcome::from_band(&rules::AGE, age)
}

// ---------------------------------------------------------------------------
// [2] Blood pressure
// ---------------------------------------------------------------------------

/// Scored only when a systolic reading is known; a lone diastolic value is
/// not enough to place the reading in a band.
pub fn score_blood_pressure(
    systolic: Option<i64>,
    diastolic: Option<i64>,
) -> Option<DimensionOutcome> {
    let sys = systolic?;
    Some(DimensionOutcome::from_band(
        &rules::BLOOD_PRESSURE,
        (sys, diastolic),
    ))
}

// ---------------------------------------------------------------------------
// [3] Heart rate
// ---------------------------------------------------------------------------

pub fn score_heart_rate(heart_rate: Option<i64>) -> Option<DimensionOutcome> {
    Some(DimensionOutcome::from_band(&rules::HEART_RATE, heart_rate?))
}

// ---------------------------------------------------------------------------
// [4] Temperature
// ---------------------------------------------------------------------------

pub fn score_temperature(temperature: Option<f64>) -> Option<DimensionOutcome> {
    Some(DimensionOutcome::from_band(
        &rules::TEMPERATURE,
        temperature?,
    ))
}

// ---------------------------------------------------------------------------
// [5] Symptom keywords
// ---------------------------------------------------------------------------

/// Ordered keyword scan over the lowercased symptom text. An emergency
/// keyword ends the scan at full points; otherwise a medium keyword scores
/// partial points; otherwise any documented symptom text earns the baseline.
/// Empty text scores zero but the dimension still counts toward the weight
/// ceiling.
pub fn score_symptoms(symptoms: &str) -> DimensionOutcome {
    let lowered = symptoms.to_lowercase();
    let text = lowered.trim();

    for keyword in EMERGENCY_KEYWORDS {
        if text.contains(keyword) {
            return DimensionOutcome {
                points: rules::EMERGENCY_SYMPTOM_POINTS,
                weight: rules::SYMPTOM_WEIGHT,
                factor: Some(ContributingFactor {
                    factor: format!("Symptom: {keyword}"),
                    impact: Impact::High,
                    description: "Emergency-level symptom reported.".to_string(),
                }),
            };
        }
    }

    for keyword in MEDIUM_KEYWORDS {
        if text.contains(keyword) {
            return DimensionOutcome {
                points: rules::MEDIUM_SYMPTOM_POINTS,
                weight: rules::SYMPTOM_WEIGHT,
                factor: Some(ContributingFactor {
                    factor: format!("Symptom: {keyword}"),
                    impact: Impact::Medium,
                    description: "Symptom may require clinical evaluation.".to_string(),
                }),
            };
        }
    }

    if has_documented_symptoms(text) {
        return DimensionOutcome {
            points: rules::DOCUMENTED_SYMPTOM_POINTS,
            weight: rules::SYMPTOM_WEIGHT,
            factor: Some(ContributingFactor {
                factor: "Reported symptoms".to_string(),
                impact: Impact::Low,
                description: "Symptoms documented for clinician review.".to_string(),
            }),
        };
    }

    DimensionOutcome {
        points: 0.0,
        weight: rules::SYMPTOM_WEIGHT,
        factor: None,
    }
}

/// True when the text still holds at least one non-empty token after
/// splitting on commas and semicolons.
fn has_documented_symptoms(text: &str) -> bool {
    RE_SYMPTOM_SEPARATOR
        .split(text)
        .any(|token| !token.trim().is_empty())
}

// ---------------------------------------------------------------------------
// [6] Pre-existing conditions
// ---------------------------------------------------------------------------

/// Cross-product substring count: every reported condition is checked
/// against every high-risk term, so one condition naming two terms counts
/// twice.
pub fn score_conditions(conditions: &[String]) -> DimensionOutcome {
    let matches: usize = conditions
        .iter()
        .map(|condition| {
            let lowered = condition.to_lowercase();
            HIGH_RISK_CONDITIONS
                .iter()
                .filter(|term| lowered.contains(*term))
                .count()
        })
        .sum();

    let factor = if matches >= 2 {
        ContributingFactor {
            factor: "Multiple high-risk conditions".to_string(),
            impact: Impact::High,
            description: "Pre-existing conditions increase complexity.".to_string(),
        }
    } else if matches == 1 {
        ContributingFactor {
            factor: "Pre-existing condition".to_string(),
            impact: Impact::Medium,
            description: "One chronic condition noted.".to_string(),
        }
    } else {
        ContributingFactor {
            factor: "Medical history".to_string(),
            impact: Impact::Low,
            description: "No high-risk conditions identified.".to_string(),
        }
    };

    let points = match matches {
        0 => rules::NO_CONDITION_POINTS,
        1 => rules::SINGLE_CONDITION_POINTS,
        _ => rules::MULTIPLE_CONDITION_POINTS,
    };

    DimensionOutcome {
        points,
        weight: rules::CONDITION_WEIGHT,
        factor: Some(factor),
    }
}
