//! Presentation logic: filtering, row styling and CSV export
//!
//! Everything here is pure and works on slices of already-loaded records.

pub mod csv_export;
pub mod filter;
pub mod style;

pub use csv_export::{fields_from_csv, from_csv, to_csv, CSV_HEADER};
pub use filter::{distinct_statuses, filter_by_status, status_options, StatusFilter, ALL_STATUSES};
pub use style::{style_for_kind, style_for_status, RowStyle};
