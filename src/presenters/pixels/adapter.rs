use std::cell::Cell;

use crate::controllers::value::ports::presenter::ValuePresenterPort;
use crate::core::data::snapshot::ValueSnapshot;

/// Marks the window dirty whenever the value controller changes.
#[derive(Debug, Default)]
pub struct RedrawAdapter {
    dirty: Cell<bool>,
}

impl ValuePresenterPort for RedrawAdapter {
    fn present(&mut self, _snapshot: &ValueSnapshot) {
        self.dirty.set(true);
    }
}

impl RedrawAdapter {
    pub fn take_dirty(&self) -> bool {
        self.dirty.replace(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::controllers::value::controller::ValueController;

    #[test]
    fn test_controller_changes_mark_adapter_dirty_once() {
        let mut controller = ValueController::new(RedrawAdapter::default());
        assert!(!controller.presenter().take_dirty());

        controller.edit_draft("5");

        assert!(controller.presenter().take_dirty());
        assert!(!controller.presenter().take_dirty());
    }
}
