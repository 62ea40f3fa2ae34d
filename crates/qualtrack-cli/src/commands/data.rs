//! Seed, import and export commands
//!
//! Usage:
//!   qualtrack seed
//!   qualtrack import <CSV>
//!   qualtrack export [--status <STATUS>] [--output <PATH>]

use std::io::Write;
use std::path::{Path, PathBuf};

use clap::Args;
use qualtrack_core::StatusFilter;
use qualtrack_engine::export_csv;
use qualtrack_store::QualificationRepo;

use super::CommandResult;

#[derive(Debug, Args)]
pub struct ImportArgs {
    /// CSV file with a `faculty,qualification,status,date` header (`id` is ignored)
    pub path: PathBuf,
}

#[derive(Debug, Args)]
pub struct ExportArgs {
    /// Only export rows whose status equals this label
    #[arg(long, default_value = "All")]
    pub status: String,

    /// Write to a file instead of stdout
    #[arg(long, short)]
    pub output: Option<PathBuf>,
}

pub fn execute_seed(db: &Path) -> CommandResult {
    let mut repo = QualificationRepo::open(db)?;
    repo.initialize()?;
    let inserted = repo.seed_if_empty()?;
    if inserted > 0 {
        println!("✓ Seeded {} sample records", inserted);
    } else {
        println!("Table already has {} records; nothing seeded", repo.count()?);
    }
    Ok(())
}

pub fn execute_import(args: ImportArgs, db: &Path) -> CommandResult {
    let mut repo = QualificationRepo::open(db)?;
    repo.initialize()?;

    println!("Importing {}...", args.path.display());
    let ids = repo.import_csv_file(&args.path)?;
    match (ids.first(), ids.last()) {
        (Some(first), Some(last)) => {
            println!("✓ Imported {} records (ids {}..={})", ids.len(), first, last)
        }
        _ => println!("Nothing to import"),
    }
    Ok(())
}

pub fn execute_export(args: ExportArgs, db: &Path) -> CommandResult {
    let repo = QualificationRepo::bootstrap(db)?;
    let bytes = export_csv(&repo, &StatusFilter::parse(&args.status))?;

    match args.output {
        Some(path) => {
            std::fs::write(&path, &bytes)?;
            println!("✓ Wrote {}", path.display());
        }
        None => std::io::stdout().write_all(&bytes)?,
    }
    Ok(())
}
