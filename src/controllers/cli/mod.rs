//! Script controller backing the command line binary.

mod script_controller;
pub mod types;

pub use script_controller::{ScriptConfigError, ScriptController, run_script};
pub use types::{ScriptEvent, ScriptStep, ScriptSummary};
