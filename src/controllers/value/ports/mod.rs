//! Port definitions for the value controller.
//!
//! Contains the trait the presentation layer implements to be told about
//! state changes.

pub mod presenter;

pub use presenter::{DetachedPresenter, ValuePresenterPort};
