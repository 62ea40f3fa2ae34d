//! Record commands
//!
//! Usage:
//!   qualtrack list [--status <STATUS>] [--json]
//!   qualtrack add --faculty <F> --qualification <Q> --status <S> [--date <D>]
//!   qualtrack update <ID> --faculty <F> --qualification <Q> --status <S> [--date <D>]
//!   qualtrack delete <ID>

use std::path::Path;

use clap::Args;
use qualtrack_core::{QualificationRecord, RecordFields, StatusFilter};
use qualtrack_engine::{
    apply_dashboard_command, DashboardCommand, DashboardOutcome, StyledRow, ViewMode,
};
use qualtrack_store::QualificationRepo;

use super::CommandResult;

#[derive(Debug, Args)]
pub struct ListArgs {
    /// Only show rows whose status equals this label (`All` for every row)
    #[arg(long, default_value = "All")]
    pub status: String,

    /// Print the view as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Args)]
pub struct FieldArgs {
    #[arg(long)]
    pub faculty: String,
    #[arg(long)]
    pub qualification: String,
    #[arg(long)]
    pub status: String,
    #[arg(long, default_value = "")]
    pub date: String,
}

impl From<FieldArgs> for RecordFields {
    fn from(args: FieldArgs) -> Self {
        RecordFields::new(args.faculty, args.qualification, args.status, args.date)
    }
}

#[derive(Debug, Args)]
pub struct AddArgs {
    #[command(flatten)]
    pub fields: FieldArgs,
}

#[derive(Debug, Args)]
pub struct UpdateArgs {
    pub id: i64,

    #[command(flatten)]
    pub fields: FieldArgs,
}

#[derive(Debug, Args)]
pub struct DeleteArgs {
    pub id: i64,
}

fn run(db: &Path, cmd: DashboardCommand) -> Result<DashboardOutcome, Box<dyn std::error::Error>> {
    let mut repo = QualificationRepo::bootstrap(db)?;
    Ok(apply_dashboard_command(cmd, &mut repo)?)
}

pub fn execute_list(args: ListArgs, db: &Path) -> CommandResult {
    let outcome = run(
        db,
        DashboardCommand::Load {
            mode: ViewMode::View,
            filter: StatusFilter::parse(&args.status),
        },
    )?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&outcome.view)?);
        return Ok(());
    }

    for row in &outcome.view.rows {
        println!("{}", format_row(row));
    }
    println!("{} record(s)", outcome.view.rows.len());
    Ok(())
}

fn format_row(row: &StyledRow) -> String {
    let r = &row.record;
    let marker = row.style.map(|s| s.class_name()).unwrap_or("row-plain");
    format!(
        "{:>4}  {:<18} {:<28} {:<11} {}  [{}]",
        r.id, r.faculty, r.status, r.date, r.qualification, marker
    )
}

pub fn execute_add(args: AddArgs, db: &Path) -> CommandResult {
    let outcome = run(
        db,
        DashboardCommand::Add {
            fields: args.fields.into(),
        },
    )?;
    print_notice(&outcome);
    Ok(())
}

pub fn execute_update(args: UpdateArgs, db: &Path) -> CommandResult {
    let row = QualificationRecord::new(args.id, args.fields.into());
    let outcome = run(db, DashboardCommand::Save { rows: vec![row] })?;
    if outcome.affected == 0 {
        println!("No record with ID {}; nothing updated", args.id);
    } else {
        println!("✓ Record with ID {} updated", args.id);
    }
    Ok(())
}

pub fn execute_delete(args: DeleteArgs, db: &Path) -> CommandResult {
    let outcome = run(db, DashboardCommand::Delete { id: args.id })?;
    print_notice(&outcome);
    Ok(())
}

fn print_notice(outcome: &DashboardOutcome) {
    if let Some(notice) = &outcome.notice {
        println!("✓ {}", notice.message);
    }
}
