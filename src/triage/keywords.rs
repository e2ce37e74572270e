//! Ordered keyword tables. Every lookup here is a first-substring-match
//! linear scan, so list order is part of the contract; a map type would
//! lose the tie-break.

/// Emergency-level symptom phrases, scanned in order against lowercased
/// symptom text. The first hit stops the scan.
pub const EMERGENCY_KEYWORDS: &[&str] = &[
    "chest pain",
    "shortness of breath",
    "stroke",
    "seizure",
    "unconscious",
    "severe bleeding",
    "severe pain",
    "cannot breathe",
    "collapse",
    "fainting",
];

/// Checked only when no emergency keyword matched.
pub const MEDIUM_KEYWORDS: &[&str] = &[
    "dizziness",
    "headache",
    "vomiting",
    "fever",
    "palpitation",
    "numbness",
    "confusion",
    "weakness",
    "abdominal pain",
    "cough",
    "rash",
];

/// Chronic conditions that raise triage complexity, matched as substrings
/// of each reported condition.
pub const HIGH_RISK_CONDITIONS: &[&str] = &[
    "heart disease",
    "diabetes",
    "copd",
    "asthma",
    "hypertension",
    "kidney disease",
];

/// The clinical departments the engine can route to, in canonical order.
/// Alternative recommendations are drawn from this order.
pub const DEPARTMENTS: &[&str] = &[
    "General Medicine",
    "Cardiology",
    "Emergency",
    "Neurology",
    "Pulmonology",
    "Gastroenterology",
    "Dermatology",
    "Orthopedics",
];

pub const FALLBACK_DEPARTMENT: &str = "General Medicine";

/// Symptom phrase to department routing. Scanned in order; the first phrase
/// found in the symptom text picks the department.
pub const SYMPTOM_DEPARTMENTS: &[(&str, &str)] = &[
    ("chest pain", "Cardiology"),
    ("palpitation", "Cardiology"),
    ("heart", "Cardiology"),
    ("shortness of breath", "Pulmonology"),
    ("cough", "Pulmonology"),
    ("asthma", "Pulmonology"),
    ("headache", "Neurology"),
    ("dizziness", "Neurology"),
    ("seizure", "Neurology"),
    ("stroke", "Neurology"),
    ("numbness", "Neurology"),
    ("fever", "General Medicine"),
    ("vomiting", "Gastroenterology"),
    ("abdominal", "Gastroenterology"),
    ("diarrhea", "Gastroenterology"),
    ("rash", "Dermatology"),
    ("skin", "Dermatology"),
    ("joint pain", "Orthopedics"),
    ("fracture", "Orthopedics"),
    ("bleeding", "Emergency"),
    ("unconscious", "Emergency"),
    ("severe pain", "Emergency"),
    ("trauma", "Emergency"),
];

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    /// Every routed department belongs to the canonical set.
    #[test]
    fn routed_departments_are_canonical() {
        for (phrase, department) in SYMPTOM_DEPARTMENTS {
            assert!(
                DEPARTMENTS.contains(department),
                "{phrase} routes to unknown department {department}",
            );
        }
        assert!(DEPARTMENTS.contains(&FALLBACK_DEPARTMENT));
    }

    /// Keyword tables are lowercase; matching lowercases the text only.
    #[test]
    fn keyword_tables_are_lowercase() {
        for keyword in EMERGENCY_KEYWORDS
            .iter()
            .chain(MEDIUM_KEYWORDS)
            .chain(HIGH_RISK_CONDITIONS)
        {
            assert_eq!(*keyword, keyword.to_lowercase());
        }
        for (phrase, _) in SYMPTOM_DEPARTMENTS {
            assert_eq!(*phrase, phrase.to_lowercase());
        }
    }

    /// Duplicate phrases would make the scan order meaningless.
    #[test]
    fn no_duplicate_phrases() {
        let mut seen = HashSet::new();
        for (phrase, _) in SYMPTOM_DEPARTMENTS {
            assert!(seen.insert(*phrase), "duplicate routing phrase {phrase}");
        }

        let mut seen = HashSet::new();
        for keyword in EMERGENCY_KEYWORDS.iter().chain(MEDIUM_KEYWORDS) {
            assert!(seen.insert(*keyword), "duplicate symptom keyword {keyword}");
        }
    }

    #[test]
    fn departments_are_unique() {
        let unique: HashSet<_> = DEPARTMENTS.iter().collect();
        assert_eq!(unique.len(), DEPARTMENTS.len());
    }
}
