pub mod data;
pub mod records;
pub mod serve;

pub type CommandResult = Result<(), Box<dyn std::error::Error>>;
