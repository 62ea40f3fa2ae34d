//! Dashboard actions applied against the repository.

use std::time::Instant;

use crate::commands::view_model::{DashboardView, Notice, ViewMode};
use qualtrack_core::render::filter_by_status;
use qualtrack_core::{log_op_end, log_op_error, log_op_start};
use qualtrack_core::{to_csv, QualificationRecord, RecordFields, StatusFilter};
use qualtrack_store::errors::Result;
use qualtrack_store::QualificationRepo;

/// One user action on the dashboard.
#[derive(Debug, Clone, PartialEq)]
pub enum DashboardCommand {
    /// Load the table in the given mode with the given status filter.
    Load { mode: ViewMode, filter: StatusFilter },
    /// Write back every row of the edit grid ("Save Changes").
    Save { rows: Vec<QualificationRecord> },
    /// Append a row from the add-row form.
    Add { fields: RecordFields },
    /// Delete by id.
    Delete { id: i64 },
}

impl DashboardCommand {
    /// Operation name used in log events.
    pub fn op_name(&self) -> &'static str {
        match self {
            DashboardCommand::Load { .. } => "dashboard_load",
            DashboardCommand::Save { .. } => "dashboard_save",
            DashboardCommand::Add { .. } => "dashboard_add",
            DashboardCommand::Delete { .. } => "dashboard_delete",
        }
    }
}

/// Result of applying a dashboard command.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardOutcome {
    /// Freshly reloaded view after the action.
    pub view: DashboardView,
    /// Acknowledgement for mutations; `None` for plain loads.
    pub notice: Option<Notice>,
    /// Rows changed by the action (0 for loads and no-op mutations).
    pub affected: usize,
}

/// Apply a dashboard command and reload the view.
///
/// Mutations always return the edit-mode view, since that is where they are
/// issued from.
pub fn apply_dashboard_command(
    cmd: DashboardCommand,
    repo: &mut QualificationRepo,
) -> Result<DashboardOutcome> {
    let op = cmd.op_name();
    let start = Instant::now();
    log_op_start!(op);

    let result = execute(cmd, repo);

    let duration_ms = start.elapsed().as_millis() as u64;
    match &result {
        Ok(outcome) => {
            log_op_end!(
                op,
                duration_ms = duration_ms,
                affected = outcome.affected as u64,
                row_count = outcome.view.rows.len() as u64
            );
        }
        Err(e) => {
            log_op_error!(op, e.clone(), duration_ms = duration_ms);
        }
    }
    result
}

fn execute(cmd: DashboardCommand, repo: &mut QualificationRepo) -> Result<DashboardOutcome> {
    match cmd {
        DashboardCommand::Load { mode, filter } => Ok(DashboardOutcome {
            view: load_view(repo, mode, &filter)?,
            notice: None,
            affected: 0,
        }),

        DashboardCommand::Save { rows } => {
            let affected = repo.save_all(&rows)?;
            mutation_outcome(repo, affected, "Changes saved successfully!")
        }

        DashboardCommand::Add { fields } => {
            if fields.is_blank() {
                return mutation_outcome(repo, 0, "Nothing to add: all fields are empty.");
            }
            let id = repo.insert_row(&fields)?;
            mutation_outcome(repo, 1, format!("Record with ID {} added successfully!", id))
        }

        // Acknowledged even when no row matched.
        DashboardCommand::Delete { id } => {
            let affected = repo.delete_row(id)?;
            mutation_outcome(
                repo,
                affected,
                format!("Record with ID {} deleted successfully!", id),
            )
        }
    }
}

fn mutation_outcome(
    repo: &QualificationRepo,
    affected: usize,
    message: impl Into<String>,
) -> Result<DashboardOutcome> {
    Ok(DashboardOutcome {
        view: load_view(repo, ViewMode::Edit, &StatusFilter::All)?,
        notice: Some(Notice::new(message)),
        affected,
    })
}

/// Load every record and build the view for `mode`.
pub fn load_view(
    repo: &QualificationRepo,
    mode: ViewMode,
    filter: &StatusFilter,
) -> Result<DashboardView> {
    let all = repo.load_all()?;
    Ok(DashboardView::build(&all, mode, filter))
}

/// CSV bytes of the (possibly filtered) read-only view.
pub fn export_csv(repo: &QualificationRepo, filter: &StatusFilter) -> Result<Vec<u8>> {
    let start = Instant::now();
    log_op_start!("export_csv", filter = filter.as_selector());

    let result = repo
        .load_all()
        .and_then(|all| to_csv(&filter_by_status(&all, filter)));

    let duration_ms = start.elapsed().as_millis() as u64;
    match &result {
        Ok(bytes) => {
            log_op_end!(
                "export_csv",
                duration_ms = duration_ms,
                bytes = bytes.len() as u64
            );
        }
        Err(e) => {
            log_op_error!("export_csv", e.clone(), duration_ms = duration_ms);
        }
    }
    result
}
