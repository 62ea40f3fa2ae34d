//! Qualtrack Core - domain model and presentation logic for the
//! qualification approval tracker
//!
//! This crate provides:
//! - The `QualificationRecord` model and its mutable `RecordFields`
//! - Status classification (`StatusKind`) derived from free-text labels
//! - Status filtering, row styling and CSV export/import
//! - The structured error facility (`ExError`) and logging facility
//!
//! Nothing in here touches the database; persistence lives in `qualtrack-store`.

pub mod errors;
pub mod logging_facility;
pub mod model;
pub mod render;

// Re-export commonly used types
pub use qualtrack_core_types::{schema, RequestId};
pub use errors::{ExError, ExErrorKind, QualTrackError, Result};
pub use model::{QualificationRecord, RecordFields, StatusKind};
pub use render::{filter_by_status, style_for_status, to_csv, RowStyle, StatusFilter};
