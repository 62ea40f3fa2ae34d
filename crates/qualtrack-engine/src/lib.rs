//! Qualtrack Engine - request/response handlers for dashboard actions
//!
//! Each user action (load, save, add, delete) is a `DashboardCommand`
//! applied against a `QualificationRepo`, producing a fresh `DashboardView`.

pub mod commands;

pub use commands::dashboard_command::{
    apply_dashboard_command, export_csv, load_view, DashboardCommand, DashboardOutcome,
};
pub use commands::view_model::{DashboardView, Notice, StyledRow, ViewMode};
