mod controllers;
mod core;
mod input;
mod presenters;

pub use crate::controllers::cli::{
    ScriptConfigError, ScriptController, ScriptEvent, ScriptStep, ScriptSummary, run_script,
};
pub use crate::controllers::value::{
    CommitOutcome, CommitReport, DetachedPresenter, RevertReason, StepReport, ValueController,
    ValueControllerConfig, ValuePresenterPort,
};
pub use crate::core::data::{StepperAvailability, Unit, UnitParseError, ValueLimits, ValueSnapshot};
pub use crate::input::cli::{CliArgs, ScriptParseError};
pub use crate::presenters::terminal::{TerminalPresenter, format_snapshot_line};

#[cfg(feature = "gui")]
pub use crate::input::gui::commands::run_gui::RunGuiCommand;
#[cfg(feature = "gui")]
pub use crate::presenters::pixels::factory::PixelsPresenterFactory;
