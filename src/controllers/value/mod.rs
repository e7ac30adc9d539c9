//! Value controller for the unit stepper input.
//!
//! This module owns the numeric state of the control and reconciles raw
//! keystrokes, stepper presses and unit changes against it.
//!
//! # Architecture
//!
//! The value controller follows the ports & adapters pattern:
//! - **Input**: plain method calls from the presentation layer
//! - **Output**: `ValuePresenterPort` trait receiving a `ValueSnapshot`
//!   after every change
//! - **Core**: pure parsing and clamping actions from `core/`

pub mod config;
pub mod controller;
pub mod ports;
pub mod report;

pub use config::ValueControllerConfig;
pub use controller::ValueController;
pub use ports::{DetachedPresenter, ValuePresenterPort};
pub use report::{CommitOutcome, CommitReport, RevertReason, StepReport};
