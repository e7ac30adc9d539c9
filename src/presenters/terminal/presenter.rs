use std::io::Write;

use tracing::warn;

use crate::controllers::value::ports::presenter::ValuePresenterPort;
use crate::core::actions::format_value::format_value;
use crate::core::data::snapshot::ValueSnapshot;

fn switch_label(enabled: bool) -> &'static str {
    if enabled { "on" } else { "off" }
}

/// One status line per snapshot, e.g.
/// `draft="12.5" value=12.5 unit=% dec=on inc=on`.
#[must_use]
pub fn format_snapshot_line(snapshot: &ValueSnapshot) -> String {
    format!(
        "draft={:?} value={} unit={} dec={} inc={}",
        snapshot.draft_text,
        format_value(snapshot.committed_value),
        snapshot.unit,
        switch_label(snapshot.availability.can_decrement),
        switch_label(snapshot.availability.can_increment),
    )
}

pub struct TerminalPresenter<W: Write> {
    writer: W,
}

impl<W: Write> TerminalPresenter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> ValuePresenterPort for TerminalPresenter<W> {
    fn present(&mut self, snapshot: &ValueSnapshot) {
        if let Err(err) = writeln!(self.writer, "{}", format_snapshot_line(snapshot)) {
            warn!(error = %err, "failed to write value snapshot");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::snapshot::StepperAvailability;
    use crate::core::data::unit::Unit;

    fn snapshot(draft: &str, value: f64, unit: Unit, can_decrement: bool, can_increment: bool) -> ValueSnapshot {
        ValueSnapshot {
            draft_text: draft.to_owned(),
            committed_value: value,
            unit,
            availability: StepperAvailability {
                can_increment,
                can_decrement,
            },
        }
    }

    #[test]
    fn test_format_snapshot_line() {
        let line = format_snapshot_line(&snapshot("12.5", 12.5, Unit::Percent, true, true));

        assert_eq!(line, r#"draft="12.5" value=12.5 unit=% dec=on inc=on"#);
    }

    #[test]
    fn test_format_snapshot_line_shows_disabled_steppers() {
        let line = format_snapshot_line(&snapshot("abc", 3.0, Unit::Pixel, false, false));

        assert_eq!(line, r#"draft="abc" value=3 unit=px dec=off inc=off"#);
    }

    #[test]
    fn test_present_writes_one_line_per_snapshot() {
        let mut presenter = TerminalPresenter::new(Vec::new());

        presenter.present(&snapshot("1", 1.0, Unit::Percent, true, true));
        presenter.present(&snapshot("100", 100.0, Unit::Percent, true, false));

        let output = String::from_utf8(presenter.into_inner()).unwrap();
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[1].ends_with("dec=on inc=off"));
    }

    #[test]
    fn test_write_failure_is_not_fatal() {
        struct BrokenWriter;

        impl Write for BrokenWriter {
            fn write(&mut self, _buf: &[u8]) -> std::io::Result<usize> {
                Err(std::io::Error::other("closed"))
            }

            fn flush(&mut self) -> std::io::Result<()> {
                Ok(())
            }
        }

        let mut presenter = TerminalPresenter::new(BrokenWriter);

        presenter.present(&snapshot("1", 1.0, Unit::Percent, true, true));
    }
}
