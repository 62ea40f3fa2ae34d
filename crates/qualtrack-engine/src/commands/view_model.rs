//! View models returned to the presentation layer

use qualtrack_core::render::{filter_by_status, status_options};
use qualtrack_core::{style_for_status, QualificationRecord, RowStyle, StatusFilter, StatusKind};
use serde::{Deserialize, Serialize};

/// The two mutually exclusive presentation states
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    /// Read-only styled table with filter and CSV export
    #[default]
    View,
    /// Editable grid with save, add and delete
    Edit,
}

impl ViewMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ViewMode::View => "view",
            ViewMode::Edit => "edit",
        }
    }

    /// The other mode (what the toggle switches to)
    pub fn toggled(&self) -> Self {
        match self {
            ViewMode::View => ViewMode::Edit,
            ViewMode::Edit => ViewMode::View,
        }
    }
}

/// A record with its derived display style
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StyledRow {
    #[serde(flatten)]
    pub record: QualificationRecord,
    pub status_kind: StatusKind,
    pub style: Option<RowStyle>,
}

impl StyledRow {
    pub fn new(record: QualificationRecord) -> Self {
        let style = style_for_status(&record.status);
        Self {
            status_kind: record.status_kind(),
            style,
            record,
        }
    }
}

/// Success acknowledgement shown after a mutation
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notice {
    pub message: String,
}

impl Notice {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Everything the page needs to render one state of the dashboard
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardView {
    pub mode: ViewMode,
    /// Selector value of the active filter (`All` when unfiltered)
    pub filter: String,
    /// `All` followed by the distinct statuses of the unfiltered set
    pub status_options: Vec<String>,
    pub rows: Vec<StyledRow>,
}

impl DashboardView {
    /// Build a view from the full record set
    ///
    /// Edit mode always shows every row; the filter only applies to view mode.
    pub fn build(all: &[QualificationRecord], mode: ViewMode, filter: &StatusFilter) -> Self {
        let visible = match mode {
            ViewMode::View => filter_by_status(all, filter),
            ViewMode::Edit => all.to_vec(),
        };

        Self {
            mode,
            filter: filter.as_selector().to_string(),
            status_options: status_options(all),
            rows: visible.into_iter().map(StyledRow::new).collect(),
        }
    }

    /// The plain records currently visible
    pub fn records(&self) -> Vec<QualificationRecord> {
        self.rows.iter().map(|r| r.record.clone()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use qualtrack_core::RecordFields;

    fn rows() -> Vec<QualificationRecord> {
        vec![
            QualificationRecord::new(1, RecordFields::new("EMS", "BCom", "DHET Approved", "")),
            QualificationRecord::new(2, RecordFields::new("Arts", "MA", "Not Submitted", "")),
        ]
    }

    #[test]
    fn test_view_mode_filters() {
        let view = DashboardView::build(&rows(), ViewMode::View, &StatusFilter::parse("Not Submitted"));
        assert_eq!(view.rows.len(), 1);
        assert_eq!(view.rows[0].style, Some(RowStyle::Alert));
        assert_eq!(view.status_options, vec!["All", "DHET Approved", "Not Submitted"]);
    }

    #[test]
    fn test_edit_mode_ignores_filter() {
        let view = DashboardView::build(&rows(), ViewMode::Edit, &StatusFilter::parse("Not Submitted"));
        assert_eq!(view.rows.len(), 2);
    }

    #[test]
    fn test_styled_row_serializes_flat() {
        let row = StyledRow::new(rows().remove(0));
        let json = serde_json::to_value(&row).unwrap();
        assert_eq!(json["id"], 1);
        assert_eq!(json["status"], "DHET Approved");
        assert_eq!(json["style"], "success");
        assert_eq!(json["status_kind"]["kind"], "approved");
    }

    #[test]
    fn test_mode_toggle() {
        assert_eq!(ViewMode::default(), ViewMode::View);
        assert_eq!(ViewMode::View.toggled(), ViewMode::Edit);
        assert_eq!(ViewMode::Edit.toggled().as_str(), "view");
    }
}
