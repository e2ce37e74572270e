pub mod config;
pub mod intake;
pub mod models;
pub mod refine;
pub mod triage;

pub use intake::{normalize, IntakeError, RawTriageRequest};
pub use models::PatientRecord;
pub use refine::{
    apply_refinement, refine_with, DepartmentRefiner, RefinerError, RefinerPrediction,
};
pub use triage::{score, ContributingFactor, Impact, RiskLevel, TriageResult};
