//! Status filter for the read-only view

use crate::model::QualificationRecord;

/// Selector value meaning "no filter"
pub const ALL_STATUSES: &str = "All";

/// Status selector: everything, or rows whose status equals the label exactly
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum StatusFilter {
    #[default]
    All,
    Exact(String),
}

impl StatusFilter {
    /// Parse a selector value; only the literal `All` means no filter
    pub fn parse(selector: &str) -> Self {
        if selector == ALL_STATUSES {
            StatusFilter::All
        } else {
            StatusFilter::Exact(selector.to_string())
        }
    }

    /// The selector value this filter was parsed from
    pub fn as_selector(&self) -> &str {
        match self {
            StatusFilter::All => ALL_STATUSES,
            StatusFilter::Exact(s) => s,
        }
    }

    pub fn matches(&self, status: &str) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Exact(s) => s == status,
        }
    }
}

impl From<Option<String>> for StatusFilter {
    fn from(selector: Option<String>) -> Self {
        selector
            .as_deref()
            .map(StatusFilter::parse)
            .unwrap_or_default()
    }
}

/// Rows matching the filter, in input order
pub fn filter_by_status(
    rows: &[QualificationRecord],
    filter: &StatusFilter,
) -> Vec<QualificationRecord> {
    rows.iter()
        .filter(|r| filter.matches(&r.status))
        .cloned()
        .collect()
}

/// Distinct status labels in first-seen order
pub fn distinct_statuses(rows: &[QualificationRecord]) -> Vec<String> {
    let mut seen: Vec<String> = Vec::new();
    for row in rows {
        if !seen.iter().any(|s| s == &row.status) {
            seen.push(row.status.clone());
        }
    }
    seen
}

/// Options offered by the status selector: `All` then each distinct status
pub fn status_options(rows: &[QualificationRecord]) -> Vec<String> {
    std::iter::once(ALL_STATUSES.to_string())
        .chain(distinct_statuses(rows))
        .collect()
}
