//! Dialog components for the TUI

pub mod add_job;
pub mod help;
