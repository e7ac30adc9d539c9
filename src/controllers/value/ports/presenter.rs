use crate::core::data::snapshot::ValueSnapshot;

pub trait ValuePresenterPort {
    fn present(&mut self, snapshot: &ValueSnapshot);
}

/// Presenter for controllers that are polled instead of observed.
#[derive(Debug, Clone, Copy, Default)]
pub struct DetachedPresenter;

impl ValuePresenterPort for DetachedPresenter {
    fn present(&mut self, _snapshot: &ValueSnapshot) {}
}
