//! Script events replayed by the CLI controller.
//!
//! These types form the contract between the CLI input adapter and the
//! script controller. Each event mirrors one thing a user can do to the
//! control.

use crate::core::data::unit::Unit;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScriptEvent {
    /// Text field content changed.
    Type(String),
    /// Text field lost focus.
    Blur,
    Increment,
    Decrement,
    SwitchUnit(Unit),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScriptStep {
    Applied,
    /// The stepper button for this event was disabled.
    Skipped,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScriptSummary {
    pub applied: usize,
    pub skipped: usize,
}
