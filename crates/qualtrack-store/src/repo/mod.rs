//! Repository layer over the `qualifications` table

pub mod sqlite_repo;

pub use sqlite_repo::QualificationRepo;
