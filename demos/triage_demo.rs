//! End-to-end walkthrough: raw attribute bag -> intake -> scoring ->
//! optional department refinement.
//!
//! Run with `cargo run --example triage_demo`.

use acuity::{
    normalize, refine_with, score, DepartmentRefiner, PatientRecord, RawTriageRequest,
    RefinerError, RefinerPrediction,
};
use tracing_subscriber::EnvFilter;

/// Stands in for a trained classifier wired up at the application layer.
/// This one has no model on disk, so the rule-based recommendation stands.
struct OfflineRefiner;

impl DepartmentRefiner for OfflineRefiner {
    fn predict(&self, _record: &PatientRecord) -> Result<RefinerPrediction, RefinerError> {
        Err(RefinerError::Unavailable)
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(acuity::config::default_log_filter())),
        )
        .init();

    let raw: RawTriageRequest = serde_json::from_value(serde_json::json!({
        "age": "70",
        "gender": "Female",
        "symptoms": "chest pain and shortness of breath",
        "blood_pressure": "185/125",
        "heart_rate": 130,
        "temperature": 39.5,
        "pre_existing_conditions": "Heart Disease; Diabetes"
    }))?;

    let record = normalize(&raw)?;
    let result = refine_with(&OfflineRefiner, &record, score(&record));

    println!("{}", serde_json::to_string_pretty(&result)?);
    Ok(())
}
