use std::io::Write;

use thiserror::Error;
use tracing::{info, warn};

use crate::controllers::cli::types::{ScriptEvent, ScriptStep, ScriptSummary};
use crate::controllers::value::config::ValueControllerConfig;
use crate::controllers::value::controller::ValueController;
use crate::controllers::value::ports::presenter::ValuePresenterPort;
use crate::presenters::terminal::presenter::TerminalPresenter;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ScriptConfigError {
    #[error("step must be a positive finite number, got {0}")]
    InvalidStep(f64),
    #[error("initial value must be finite, got {0}")]
    InvalidInitialValue(f64),
}

/// Replays script events against a value controller the way the
/// presentation layer would, including disabled stepper buttons.
pub struct ScriptController<P: ValuePresenterPort> {
    controller: ValueController<P>,
}

impl<P: ValuePresenterPort> ScriptController<P> {
    pub fn new(config: ValueControllerConfig, presenter: P) -> Result<Self, ScriptConfigError> {
        let step = config.limits.step;
        if !step.is_finite() || step <= 0.0 {
            return Err(ScriptConfigError::InvalidStep(step));
        }
        if !config.initial_value.is_finite() {
            return Err(ScriptConfigError::InvalidInitialValue(config.initial_value));
        }

        Ok(Self {
            controller: ValueController::with_config(config, presenter),
        })
    }

    #[must_use]
    pub fn controller(&self) -> &ValueController<P> {
        &self.controller
    }

    pub fn apply(&mut self, event: &ScriptEvent) -> ScriptStep {
        let availability = self.controller.stepper_availability();

        match event {
            ScriptEvent::Type(text) => self.controller.edit_draft(text),
            ScriptEvent::Blur => {
                let report = self.controller.commit_draft();
                if report.is_reverted() {
                    info!(outcome = ?report.outcome, value = report.value, "draft reverted");
                }
            }
            ScriptEvent::Increment if !availability.can_increment => {
                warn!(draft = self.controller.draft_text(), "increment disabled, skipping");
                return ScriptStep::Skipped;
            }
            ScriptEvent::Increment => {
                self.controller.increment();
            }
            ScriptEvent::Decrement if !availability.can_decrement => {
                warn!(draft = self.controller.draft_text(), "decrement disabled, skipping");
                return ScriptStep::Skipped;
            }
            ScriptEvent::Decrement => {
                self.controller.decrement();
            }
            ScriptEvent::SwitchUnit(unit) => {
                self.controller.switch_unit(*unit);
            }
        }

        ScriptStep::Applied
    }

    pub fn run(&mut self, events: &[ScriptEvent]) -> ScriptSummary {
        let mut summary = ScriptSummary::default();

        for event in events {
            match self.apply(event) {
                ScriptStep::Applied => summary.applied += 1,
                ScriptStep::Skipped => summary.skipped += 1,
            }
        }

        summary
    }
}

/// Prints the initial state, replays `events` and prints one line per change.
pub fn run_script<W: Write>(
    config: ValueControllerConfig,
    events: &[ScriptEvent],
    writer: W,
) -> Result<ScriptSummary, ScriptConfigError> {
    let mut script = ScriptController::new(config, TerminalPresenter::new(writer))?;
    script.controller.refresh();

    let summary = script.run(events);
    info!(
        applied = summary.applied,
        skipped = summary.skipped,
        value = script.controller.committed_value(),
        unit = %script.controller.unit(),
        step = script.controller.limits().step,
        "script finished"
    );

    Ok(summary)
}
