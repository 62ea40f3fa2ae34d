//! Status classification
//!
//! Status labels are stored as free text. `StatusKind` is the closed
//! classification derived from that text, used for display styling. The
//! mapping works on substrings so legacy labels keep their meaning.

use serde::Serialize;

/// The exact label for a qualification that has not been submitted anywhere
pub const NOT_SUBMITTED: &str = "Not Submitted";

const SUBMITTED: &str = "Submitted";
const APPROVED: &str = "Approved";
const REGISTERED_MARKERS: [&str; 2] = ["Registered", "Registration"];

/// Classified approval status
///
/// The stage is the remainder of the label with the marker word removed,
/// e.g. "DHET Submitted" is `Submitted("DHET")`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "stage", rename_all = "snake_case")]
pub enum StatusKind {
    NotSubmitted,
    Submitted(String),
    Approved(String),
    Registered(String),
    Unclassified,
}

impl StatusKind {
    /// Classify a free-text status label
    ///
    /// "Not Submitted" is matched exactly before the "Submitted" substring
    /// check, since it contains that substring too.
    pub fn classify(status: &str) -> Self {
        if status == NOT_SUBMITTED {
            return StatusKind::NotSubmitted;
        }
        if status.contains(SUBMITTED) {
            return StatusKind::Submitted(stage_of(status, SUBMITTED));
        }
        if status.contains(APPROVED) {
            return StatusKind::Approved(stage_of(status, APPROVED));
        }
        for marker in REGISTERED_MARKERS {
            if status.contains(marker) {
                return StatusKind::Registered(stage_of(status, marker));
            }
        }
        StatusKind::Unclassified
    }
}

fn stage_of(status: &str, marker: &str) -> String {
    status
        .replacen(marker, "", 1)
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_submitted_is_exact() {
        assert_eq!(StatusKind::classify("Not Submitted"), StatusKind::NotSubmitted);
    }

    #[test]
    fn test_not_submitted_with_suffix_is_submitted() {
        // Only the exact label is NotSubmitted; anything else containing
        // "Submitted" falls through to the substring rule.
        assert_eq!(
            StatusKind::classify("Not Submitted yet"),
            StatusKind::Submitted("Not yet".to_string())
        );
    }

    #[test]
    fn test_stage_extraction() {
        assert_eq!(
            StatusKind::classify("DHET Submitted"),
            StatusKind::Submitted("DHET".to_string())
        );
        assert_eq!(
            StatusKind::classify("DHET Approved"),
            StatusKind::Approved("DHET".to_string())
        );
        assert_eq!(
            StatusKind::classify("SAQA Registration"),
            StatusKind::Registered("SAQA".to_string())
        );
        assert_eq!(
            StatusKind::classify("Registered"),
            StatusKind::Registered(String::new())
        );
    }

    #[test]
    fn test_unclassified() {
        assert_eq!(StatusKind::classify(""), StatusKind::Unclassified);
        assert_eq!(
            StatusKind::classify("CHE Recommendation Approval"),
            StatusKind::Unclassified
        );
        assert_eq!(StatusKind::classify("not submitted"), StatusKind::Unclassified);
    }

    #[test]
    fn test_serialize_adjacently_tagged() {
        let json = serde_json::to_value(StatusKind::classify("DHET Approved")).unwrap();
        assert_eq!(json, serde_json::json!({"kind": "approved", "stage": "DHET"}));

        let json = serde_json::to_value(StatusKind::NotSubmitted).unwrap();
        assert_eq!(json, serde_json::json!({"kind": "not_submitted"}));
    }
}
