pub mod dashboard_command;
pub mod view_model;
