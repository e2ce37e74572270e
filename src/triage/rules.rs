//! Vital-sign scoring rules kept as ordered data tables rather than branch
//! code, so the thresholds stay auditable in one place.

use super::types::{ContributingFactor, Impact};

/// Risk tier cutoffs over the normalized score.
pub const HIGH_RISK_THRESHOLD: f64 = 0.60;
pub const MEDIUM_RISK_THRESHOLD: f64 = 0.35;

/// Symptom-keyword dimension: always counted toward the weight ceiling.
pub const SYMPTOM_WEIGHT: f64 = 25.0;
pub const EMERGENCY_SYMPTOM_POINTS: f64 = 25.0;
pub const MEDIUM_SYMPTOM_POINTS: f64 = 12.0;
pub const DOCUMENTED_SYMPTOM_POINTS: f64 = 5.0;

/// Pre-existing condition dimension.
pub const CONDITION_WEIGHT: f64 = 15.0;
pub const MULTIPLE_CONDITION_POINTS: f64 = 15.0;
pub const SINGLE_CONDITION_POINTS: f64 = 8.0;
pub const NO_CONDITION_POINTS: f64 = 2.0;

/// One row of a vital-sign rule table. The first band whose predicate
/// matches wins, so row order is part of the rule.
pub struct Band<T: Copy> {
    pub matches: fn(T) -> bool,
    pub points: f64,
    pub impact: Impact,
    pub factor: &'static str,
    pub description: &'static str,
}

impl<T: Copy> Band<T> {
    pub fn to_factor(&self) -> ContributingFactor {
        ContributingFactor {
            factor: self.factor.to_string(),
            impact: self.impact,
            description: self.description.to_string(),
        }
    }
}

/// A scoring dimension: its weight ceiling plus ordered threshold bands.
/// Every table ends in a catch-all band, so evaluation always lands.
pub struct VitalRule<T: Copy + 'static> {
    pub weight: f64,
    pub bands: &'static [Band<T>],
}

impl<T: Copy + 'static> VitalRule<T> {
    /// First-match-wins scan over the ordered bands.
    pub fn evaluate(&self, value: T) -> &Band<T> {
        self.bands
            .iter()
            .find(|band| (band.matches)(value))
            .expect("rule table ends in a catch-all band")
    }
}

pub const AGE: VitalRule<i64> = VitalRule {
    weight: 20.0,
    bands: &[
        Band {
            matches: |age| age >= 65,
            points: 18.0,
            impact: Impact::High,
            factor: "Age 65+",
            description: "Older age increases risk and requires closer assessment.",
        },
        Band {
            matches: |age| age >= 50,
            points: 10.0,
            impact: Impact::Medium,
            factor: "Age 50-64",
            description: "Middle age may warrant additional monitoring.",
        },
        Band {
            matches: |_| true,
            points: 2.0,
            impact: Impact::Low,
            factor: "Age",
            description: "Age within lower-risk range.",
        },
    ],
};

/// Evaluated against (systolic, diastolic); diastolic may be unknown.
pub const BLOOD_PRESSURE: VitalRule<(i64, Option<i64>)> = VitalRule {
    weight: 15.0,
    bands: &[
        Band {
            matches: |(sys, dia)| sys >= 180 || dia.is_some_and(|d| d >= 120),
            points: 15.0,
            impact: Impact::High,
            factor: "Severe hypertension",
            description: "Blood pressure in hypertensive crisis range.",
        },
        Band {
            matches: |(sys, dia)| sys >= 140 || dia.is_some_and(|d| d >= 90),
            points: 10.0,
            impact: Impact::Medium,
            factor: "Elevated blood pressure",
            description: "Blood pressure above normal range.",
        },
        Band {
            matches: |_| true,
            points: 2.0,
            impact: Impact::Low,
            factor: "Blood pressure",
            description: "Blood pressure within acceptable range.",
        },
    ],
};

pub const HEART_RATE: VitalRule<i64> = VitalRule {
    weight: 15.0,
    bands: &[
        Band {
            matches: |hr| hr >= 120 || hr < 50,
            points: 14.0,
            impact: Impact::High,
            factor: "Abnormal heart rate",
            description: "Heart rate outside safe range.",
        },
        Band {
            matches: |hr| hr >= 100 || hr < 60,
            points: 8.0,
            impact: Impact::Medium,
            factor: "Elevated or low heart rate",
            description: "Heart rate may need monitoring.",
        },
        Band {
            matches: |_| true,
            points: 2.0,
            impact: Impact::Low,
            factor: "Heart rate",
            description: "Heart rate within normal range.",
        },
    ],
};

/// Degrees Celsius.
pub const TEMPERATURE: VitalRule<f64> = VitalRule {
    weight: 10.0,
    bands: &[
        Band {
            matches: |temp| temp >= 39.0 || temp < 35.0,
            points: 10.0,
            impact: Impact::High,
            factor: "Abnormal temperature",
            description: "Fever or hypothermia detected.",
        },
        Band {
            matches: |temp| temp >= 37.5 || temp < 36.0,
            points: 5.0,
            impact: Impact::Medium,
            factor: "Mild fever or low temp",
            description: "Temperature slightly outside normal.",
        },
        Band {
            matches: |_| true,
            points: 1.0,
            impact: Impact::Low,
            factor: "Temperature",
            description: "Temperature within normal range.",
        },
    ],
};
