pub mod record;
pub mod status;

pub use record::{QualificationRecord, RecordFields};
pub use status::{StatusKind, NOT_SUBMITTED};
