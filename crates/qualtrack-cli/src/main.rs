//! Qualtrack CLI
//!
//! Command-line interface for the qualification approval tracker

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use qualtrack_core::logging_facility::{init, Profile};
use qualtrack_web::config::DEFAULT_DB_PATH;

mod commands;

#[derive(Debug, Parser)]
#[command(name = "qualtrack")]
#[command(about = "Qualification Approval Tracker", long_about = None)]
struct Cli {
    /// SQLite database file [default: qualifications.db]
    #[arg(long, global = true, env = "QUALTRACK_DB_PATH")]
    db: Option<PathBuf>,

    /// Log output format (`text` or `json`)
    #[arg(long, global = true, env = "QUALTRACK_LOG_FORMAT", default_value = "text")]
    log_format: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Run the web dashboard
    Serve(commands::serve::ServeArgs),
    /// Print records, optionally filtered by status
    List(commands::records::ListArgs),
    /// Append a record
    Add(commands::records::AddArgs),
    /// Overwrite all fields of a record
    Update(commands::records::UpdateArgs),
    /// Delete a record by id
    Delete(commands::records::DeleteArgs),
    /// Write records as CSV
    Export(commands::data::ExportArgs),
    /// Create the table and insert the sample records if it is empty
    Seed,
    /// Append the rows of a CSV file
    Import(commands::data::ImportArgs),
}

fn main() {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();
    init(Profile::from_format(&cli.log_format));

    let db = cli
        .db
        .clone()
        .unwrap_or_else(|| PathBuf::from(DEFAULT_DB_PATH));

    let result = match cli.command {
        Commands::Serve(args) => commands::serve::execute(args, cli.db),
        Commands::List(args) => commands::records::execute_list(args, &db),
        Commands::Add(args) => commands::records::execute_add(args, &db),
        Commands::Update(args) => commands::records::execute_update(args, &db),
        Commands::Delete(args) => commands::records::execute_delete(args, &db),
        Commands::Export(args) => commands::data::execute_export(args, &db),
        Commands::Seed => commands::data::execute_seed(&db),
        Commands::Import(args) => commands::data::execute_import(args, &db),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
