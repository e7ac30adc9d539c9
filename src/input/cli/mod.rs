//! Command line input adapter.
//!
//! Turns process arguments into a controller config and a list of script
//! events.

mod args;
mod script;

pub use args::CliArgs;
pub use script::ScriptParseError;
