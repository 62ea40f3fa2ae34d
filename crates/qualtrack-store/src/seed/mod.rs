//! Seeding and bulk import
//!
//! Provides:
//! - The fixed sample record set
//! - `seed_if_empty`, which inserts the samples only into an empty table
//! - CSV import of additional records

pub mod importer;
pub mod samples;

pub use importer::{import_csv_file, insert_all};
pub use samples::{sample_records, seed_if_empty};
