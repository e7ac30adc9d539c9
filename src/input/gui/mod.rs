//! GUI input adapter for the value stepper.
//!
//! This module provides a windowed interface using winit for window management,
//! pixels for the backdrop framebuffer, and egui for the control itself.

pub mod app;
pub mod commands;
