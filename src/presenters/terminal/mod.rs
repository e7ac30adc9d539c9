pub mod presenter;

pub use presenter::{TerminalPresenter, format_snapshot_line};
