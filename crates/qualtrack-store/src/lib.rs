//! Qualtrack Store - SQLite persistence for qualification records
//!
//! Provides:
//! - Connection management (`db`)
//! - Idempotent schema initialization (`schema`)
//! - Sample-data seeding and CSV import (`seed`)
//! - The `QualificationRepo` repository object owning its connection

pub mod db;
pub mod errors;
pub mod repo;
pub mod schema;
pub mod seed;

// Re-export key types
pub use errors::Result;
pub use repo::QualificationRepo;
