//! Lookup catalogs supplied to the engine by the caller.
//!
//! The engine itself never consults these; the composition adapter
//! resolves identifiers through them before calling the aggregator.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A school degree with its automatic reduction grant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DegreeEntry {
    /// Stable identifier used by form values.
    pub id: String,
    /// Human-readable label.
    pub label: String,
    /// Months of reduction granted for this degree.
    pub months: u32,
}

/// Abstraction over the degree-to-months lookup table for testability.
#[cfg_attr(test, mockall::automock)]
pub trait DegreeCatalog {
    /// Months granted for a degree identifier, or `None` if unknown.
    fn reduction_months(&self, degree_id: &str) -> Option<u32>;
    /// All known degrees, for UI pickers.
    fn entries(&self) -> Vec<DegreeEntry>;
}

/// The fixed statutory degree table.
#[derive(Debug, Default, Clone)]
pub struct StandardDegreeCatalog;

impl StandardDegreeCatalog {
    /// Create a new standard catalog.
    pub fn new() -> Self {
        Self
    }
}

const STANDARD_DEGREES: &[(&str, &str, u32)] = &[
    ("hauptschulabschluss", "Hauptschulabschluss", 0),
    ("mittlerer-abschluss", "Mittlerer Schulabschluss", 6),
    ("fachhochschulreife", "Fachhochschulreife", 12),
    ("abitur", "Abitur", 12),
    ("berufsausbildung", "Abgeschlossene Berufsausbildung", 12),
];

impl DegreeCatalog for StandardDegreeCatalog {
    fn reduction_months(&self, degree_id: &str) -> Option<u32> {
        let wanted = degree_id.trim().to_lowercase();
        STANDARD_DEGREES
            .iter()
            .find(|(id, _, _)| *id == wanted)
            .map(|(_, _, months)| *months)
    }

    fn entries(&self) -> Vec<DegreeEntry> {
        STANDARD_DEGREES
            .iter()
            .map(|(id, label, months)| DegreeEntry {
                id: (*id).to_string(),
                label: (*label).to_string(),
                months: *months,
            })
            .collect()
    }
}

/// A qualification-based reduction reason selected by the user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct QualificationReason {
    /// Stable identifier of the reason.
    pub id: String,
    /// Months of reduction this reason contributes.
    pub months: f64,
}

/// Sum selected qualification reasons into the raw, uncapped figure fed
/// to the aggregator. Non-finite or negative contributions are ignored.
pub fn sum_qualification_months(reasons: &[QualificationReason]) -> f64 {
    reasons
        .iter()
        .map(|reason| reason.months)
        .filter(|months| months.is_finite() && *months > 0.0)
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_catalog_resolves_known_degrees() {
        let catalog = StandardDegreeCatalog::new();
        assert_eq!(catalog.reduction_months("abitur"), Some(12));
        assert_eq!(catalog.reduction_months("mittlerer-abschluss"), Some(6));
        assert_eq!(catalog.reduction_months("hauptschulabschluss"), Some(0));
    }

    #[test]
    fn standard_catalog_ignores_case_and_whitespace() {
        let catalog = StandardDegreeCatalog::new();
        assert_eq!(catalog.reduction_months(" Abitur "), Some(12));
    }

    #[test]
    fn unknown_degree_resolves_to_none() {
        let catalog = StandardDegreeCatalog::new();
        assert_eq!(catalog.reduction_months("doktor"), None);
    }

    #[test]
    fn entries_cover_the_whole_table() {
        let entries = StandardDegreeCatalog::new().entries();
        assert_eq!(entries.len(), 5);
        assert!(entries.iter().any(|e| e.id == "berufsausbildung" && e.months == 12));
    }

    #[test]
    fn qualification_sum_skips_unusable_contributions() {
        let reasons = vec![
            QualificationReason {
                id: "prior-training".to_string(),
                months: 6.0,
            },
            QualificationReason {
                id: "bogus".to_string(),
                months: f64::NAN,
            },
            QualificationReason {
                id: "negative".to_string(),
                months: -2.0,
            },
            QualificationReason {
                id: "work-experience".to_string(),
                months: 4.0,
            },
        ];
        assert_eq!(sum_qualification_months(&reasons), 10.0);
    }

    #[test]
    fn empty_qualification_list_sums_to_zero() {
        assert_eq!(sum_qualification_months(&[]), 0.0);
    }
}
