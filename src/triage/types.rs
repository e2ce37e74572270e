use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// RiskLevel
// ---------------------------------------------------------------------------

/// Primary triage classification tier.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
        }
    }
}

// ---------------------------------------------------------------------------
// Impact
// ---------------------------------------------------------------------------

/// Weight class a contributing factor carries in the explanation list.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Impact {
    High,
    Medium,
    Low,
}

impl Impact {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::High => "high",
            Self::Medium => "medium",
            Self::Low => "low",
        }
    }
}

// ---------------------------------------------------------------------------
// ContributingFactor
// ---------------------------------------------------------------------------

/// One explanatory entry tying a scoring dimension's outcome to its clinical
/// rationale. Factors appear in evaluation order and are never deduplicated.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ContributingFactor {
    pub factor: String,
    pub impact: Impact,
    pub description: String,
}

// ---------------------------------------------------------------------------
// TriageResult
// ---------------------------------------------------------------------------

/// The full triage decision for one patient record. Immutable; every scoring
/// call produces a fresh value with no shared state.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TriageResult {
    pub risk_level: RiskLevel,
    /// In (0, 1], rounded to 2 decimal places.
    pub confidence_score: f64,
    pub recommended_department: String,
    /// At most 3, unique, never containing the recommended department.
    pub alternative_departments: Vec<String>,
    pub contributing_factors: Vec<ContributingFactor>,
    pub summary: String,
}
