use std::sync::LazyLock;

use regex::Regex;
use serde::Deserialize;
use thiserror::Error;

use crate::models::PatientRecord;

/// Form default applied when no usable age arrives.
const DEFAULT_AGE: i64 = 35;
const DEFAULT_GENDER: &str = "Unknown";

/// Regex patterns for free-text field splitting (compiled once via LazyLock).
static RE_WHITESPACE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());
static RE_BP_SEPARATOR: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[/\-]").unwrap());
static RE_LIST_SEPARATOR: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[,;]").unwrap());

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum IntakeError {
    /// The caller's workflow requires symptom text and it resolved empty.
    #[error("symptoms are required")]
    MissingSymptoms,
}

/// A numeric attribute as it arrives from a form or an extraction pipeline:
/// an integer, a float, or a string that may or may not parse.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum NumericField {
    Int(i64),
    Float(f64),
    Text(String),
}

/// Pre-existing conditions arrive either as one delimited string
/// ("Diabetes; Asthma") or as a list of strings.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum ConditionsField {
    Delimited(String),
    List(Vec<String>),
}

/// Loosely-typed attribute bag as submitted by a web form, a document
/// extraction pipeline, or an image analysis pipeline. Every field is
/// optional at this stage; [`normalize`] decides what is required.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawTriageRequest {
    pub age: Option<NumericField>,
    pub gender: Option<String>,
    pub symptoms: Option<String>,
    /// Combined reading like "120/80" or "120-80". Used only when no
    /// explicit systolic value is supplied.
    pub blood_pressure: Option<NumericField>,
    pub blood_pressure_systolic: Option<NumericField>,
    pub blood_pressure_diastolic: Option<NumericField>,
    pub heart_rate: Option<NumericField>,
    pub temperature: Option<NumericField>,
    pub pre_existing_conditions: Option<ConditionsField>,
}

/// Validate and canonicalize a raw attribute bag into a [`PatientRecord`].
///
/// Missing or malformed optional vitals are a business-valid state, not a
/// format error: they stay unset and the affected scoring dimension is
/// skipped. The only failure is empty symptom text.
pub fn normalize(raw: &RawTriageRequest) -> Result<PatientRecord, IntakeError> {
    let symptoms = raw.symptoms.as_deref().unwrap_or("").trim().to_string();
    if symptoms.is_empty() {
        return Err(IntakeError::MissingSymptoms);
    }

    let age = coerce_int(raw.age.as_ref()).unwrap_or(DEFAULT_AGE);
    let gender = match raw.gender.as_deref().map(str::trim) {
        Some(g) if !g.is_empty() => g.to_string(),
        _ => DEFAULT_GENDER.to_string(),
    };

    let mut systolic = coerce_int(raw.blood_pressure_systolic.as_ref());
    let mut diastolic = coerce_int(raw.blood_pressure_diastolic.as_ref());
    if systolic.is_none() {
        if let Some(NumericField::Text(combined)) = raw.blood_pressure.as_ref() {
            (systolic, diastolic) = parse_blood_pressure(combined);
        }
    }

    Ok(PatientRecord {
        age,
        gender,
        symptoms,
        blood_pressure_systolic: systolic,
        blood_pressure_diastolic: diastolic,
        heart_rate: coerce_int(raw.heart_rate.as_ref()),
        temperature: coerce_float(raw.temperature.as_ref()),
        pre_existing_conditions: parse_conditions(raw.pre_existing_conditions.as_ref()),
    })
}

/// Parse a combined blood-pressure string like "120/80", "120-80" or "120".
/// Whitespace is stripped before splitting. Two parseable segments set both
/// sides; otherwise a parseable first segment sets systolic alone; a fully
/// malformed string leaves both sides unset.
pub fn parse_blood_pressure(raw: &str) -> (Option<i64>, Option<i64>) {
    let compact = RE_WHITESPACE.replace_all(raw, "");
    if compact.is_empty() {
        return (None, None);
    }
    let parts: Vec<&str> = RE_BP_SEPARATOR.split(&compact).collect();
    if parts.len() >= 2 {
        if let (Ok(sys), Ok(dia)) = (parts[0].parse::<i64>(), parts[1].parse::<i64>()) {
            return (Some(sys), Some(dia));
        }
    }
    match parts.first().and_then(|p| p.parse::<i64>().ok()) {
        Some(sys) => (Some(sys), None),
        None => (None, None),
    }
}

/// Split a delimited condition string on commas or semicolons; a list passes
/// through verbatim.
pub fn parse_conditions(field: Option<&ConditionsField>) -> Vec<String> {
    match field {
        None => Vec::new(),
        Some(ConditionsField::List(items)) => items.clone(),
        Some(ConditionsField::Delimited(text)) => RE_LIST_SEPARATOR
            .split(text)
            .map(str::trim)
            .filter(|token| !token.is_empty())
            .map(str::to_string)
            .collect(),
    }
}

fn coerce_int(field: Option<&NumericField>) -> Option<i64> {
    match field? {
        NumericField::Int(value) => Some(*value),
        NumericField::Float(value) => Some(*value as i64),
        NumericField::Text(text) => {
            let trimmed = text.trim();
            if trimmed.is_empty() {
                None
            } else {
                trimmed.parse().ok()
            }
        }
    }
}

fn coerce_float(field: Option<&NumericField>) -> Option<f64> {
    match field? {
        NumericField::Int(value) => Some(*value as f64),
        NumericField::Float(value) => Some(*value),
        NumericField::Text(text) => {
            let trimmed = text.trim();
            if trimmed.is_empty() {
                None
            } else {
                trimmed.parse().ok()
            }
        }
    }
}
