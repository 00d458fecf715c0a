/// Patient census and treatment recommendations.
///
/// The dashboard shows a total-patient count, the cases currently under
/// treatment, and per-patient treatment recommendations. Like the region
/// registry, the roster here is the single source of truth for the demo
/// dataset; the filters are pure functions over it.

use serde::Serialize;

// ---------------------------------------------------------------------------
// Case types
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum CaseStatus {
    UnderTreatment,
    Discharged,
}

impl std::fmt::Display for CaseStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CaseStatus::UnderTreatment => write!(f, "Under Treatment"),
            CaseStatus::Discharged => write!(f, "Discharged"),
        }
    }
}

/// One patient's case row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CaseRecord {
    pub patient_id: u32,
    pub name: &'static str,
    pub status: CaseStatus,
}

/// A treatment recommendation for a patient.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TreatmentRecommendation {
    pub patient_id: u32,
    pub recommendation: &'static str,
}

// ---------------------------------------------------------------------------
// Roster
// ---------------------------------------------------------------------------

/// Total registered patients across all regions.
pub const TOTAL_PATIENTS: u32 = 125;

/// The tracked case roster.
pub static CASE_ROSTER: &[CaseRecord] = &[
    CaseRecord { patient_id: 102, name: "John Doe", status: CaseStatus::UnderTreatment },
    CaseRecord { patient_id: 103, name: "John Doe", status: CaseStatus::UnderTreatment },
    CaseRecord { patient_id: 104, name: "Jane Smith", status: CaseStatus::Discharged },
    CaseRecord { patient_id: 105, name: "Bob Lee", status: CaseStatus::UnderTreatment },
];

/// Current recommendations, one per tracked patient.
pub static RECOMMENDATIONS: &[TreatmentRecommendation] = &[
    TreatmentRecommendation { patient_id: 102, recommendation: "Increase Medication" },
    TreatmentRecommendation { patient_id: 103, recommendation: "Regular Monitoring" },
    TreatmentRecommendation { patient_id: 104, recommendation: "Discharge Soon" },
    TreatmentRecommendation { patient_id: 105, recommendation: "Discharge" },
];

// ---------------------------------------------------------------------------
// Queries
// ---------------------------------------------------------------------------

/// Cases currently under treatment, in roster order.
pub fn under_treatment() -> Vec<&'static CaseRecord> {
    CASE_ROSTER
        .iter()
        .filter(|case| case.status == CaseStatus::UnderTreatment)
        .collect()
}

/// The recommendation for one patient, if tracked.
pub fn recommendation_for(patient_id: u32) -> Option<&'static str> {
    RECOMMENDATIONS
        .iter()
        .find(|r| r.patient_id == patient_id)
        .map(|r| r.recommendation)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roster_has_no_duplicate_patient_ids() {
        let mut seen = std::collections::HashSet::new();
        for case in CASE_ROSTER {
            assert!(
                seen.insert(case.patient_id),
                "duplicate patient id {} in CASE_ROSTER",
                case.patient_id
            );
        }
    }

    #[test]
    fn test_under_treatment_excludes_discharged() {
        let active = under_treatment();
        assert_eq!(active.len(), 3);
        assert!(active.iter().all(|c| c.status == CaseStatus::UnderTreatment));
        assert!(
            !active.iter().any(|c| c.patient_id == 104),
            "patient 104 is discharged and must not appear"
        );
    }

    #[test]
    fn test_every_tracked_case_has_a_recommendation() {
        for case in CASE_ROSTER {
            assert!(
                recommendation_for(case.patient_id).is_some(),
                "patient {} has no recommendation",
                case.patient_id
            );
        }
    }

    #[test]
    fn test_recommendation_lookup_for_unknown_patient_is_none() {
        assert_eq!(recommendation_for(9_999), None);
    }
}
