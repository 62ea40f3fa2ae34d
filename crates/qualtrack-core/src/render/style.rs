//! Status-driven row styling

use serde::Serialize;

use crate::model::StatusKind;

const BASE_STYLE: &str = "color: white; font-weight: bold;";

/// Display style for a table row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RowStyle {
    /// Not submitted (red)
    Alert,
    /// Submitted, awaiting an outcome (orange)
    Pending,
    /// Approved or registered (green)
    Success,
}

impl RowStyle {
    pub fn background(&self) -> &'static str {
        match self {
            RowStyle::Alert => "#FF4C4C",
            RowStyle::Pending => "#FFA500",
            RowStyle::Success => "#2E8B57",
        }
    }

    /// Inline CSS applied to every cell of a styled row
    pub fn css(&self) -> String {
        format!("{} background-color: {}", BASE_STYLE, self.background())
    }

    pub fn class_name(&self) -> &'static str {
        match self {
            RowStyle::Alert => "row-alert",
            RowStyle::Pending => "row-pending",
            RowStyle::Success => "row-success",
        }
    }
}

/// Map a classified status to its row style
pub fn style_for_kind(kind: &StatusKind) -> Option<RowStyle> {
    match kind {
        StatusKind::NotSubmitted => Some(RowStyle::Alert),
        StatusKind::Submitted(_) => Some(RowStyle::Pending),
        StatusKind::Approved(_) | StatusKind::Registered(_) => Some(RowStyle::Success),
        StatusKind::Unclassified => None,
    }
}

/// Map a free-text status label to its row style
pub fn style_for_status(status: &str) -> Option<RowStyle> {
    style_for_kind(&StatusKind::classify(status))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_submitted_is_alert_not_pending() {
        assert_eq!(style_for_status("Not Submitted"), Some(RowStyle::Alert));
    }

    #[test]
    fn test_submitted_is_pending() {
        assert_eq!(style_for_status("DHET Submitted"), Some(RowStyle::Pending));
        assert_eq!(style_for_status("CHE Submitted"), Some(RowStyle::Pending));
    }

    #[test]
    fn test_approved_and_registered_are_success() {
        assert_eq!(style_for_status("DHET Approved"), Some(RowStyle::Success));
        assert_eq!(style_for_status("SAQA Registration"), Some(RowStyle::Success));
        assert_eq!(style_for_status("SAQA Registered"), Some(RowStyle::Success));
    }

    #[test]
    fn test_no_style() {
        assert_eq!(style_for_status(""), None);
        assert_eq!(style_for_status("CHE Recommendation Approval"), None);
    }

    #[test]
    fn test_css() {
        assert_eq!(
            RowStyle::Alert.css(),
            "color: white; font-weight: bold; background-color: #FF4C4C"
        );
        assert!(RowStyle::Success.css().ends_with("#2E8B57"));
    }
}
