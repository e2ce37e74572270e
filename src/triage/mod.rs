pub mod engine;
pub mod keywords;
pub mod rules;
pub mod scoring;
pub mod summary;
pub mod types;

pub use engine::{recommend_department, score};
pub use types::{ContributingFactor, Impact, RiskLevel, TriageResult};
