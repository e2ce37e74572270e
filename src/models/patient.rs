use serde::{Deserialize, Serialize};

/// A normalized patient snapshot, built once by intake (or directly by the
/// caller) and never mutated afterwards. This is the only input the scoring
/// engine sees; it carries no session, storage, or transport context.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PatientRecord {
    pub age: i64,
    /// Free text. Carried for downstream model features; the rule engine
    /// does not read it.
    pub gender: String,
    /// Free text, matched case-insensitively. May be empty.
    pub symptoms: String,
    pub blood_pressure_systolic: Option<i64>,
    pub blood_pressure_diastolic: Option<i64>,
    /// Beats per minute.
    pub heart_rate: Option<i64>,
    /// Degrees Celsius.
    pub temperature: Option<f64>,
    pub pre_existing_conditions: Vec<String>,
}
