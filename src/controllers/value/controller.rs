use tracing::{debug, trace, warn};

use crate::controllers::value::config::ValueControllerConfig;
use crate::controllers::value::ports::presenter::{DetachedPresenter, ValuePresenterPort};
use crate::controllers::value::report::{CommitOutcome, CommitReport, RevertReason, StepReport};
use crate::core::actions::clamp_value::clamp_value;
use crate::core::actions::format_value::format_value;
use crate::core::actions::normalize_decimal::normalize_decimal_separator;
use crate::core::actions::parse_float_prefix::parse_float_prefix;
use crate::core::actions::scan_numeric::{is_strict_decimal, lenient_decimal_prefix};
use crate::core::data::snapshot::{StepperAvailability, ValueSnapshot};
use crate::core::data::unit::Unit;
use crate::core::data::value_limits::ValueLimits;

/// Owns the committed value, the draft text and the unit of a stepper input.
///
/// The draft may hold anything the user typed. Only [`commit_draft`],
/// [`increment`], [`decrement`] and [`switch_unit`] change the committed
/// value, and each of them leaves the draft equal to the committed value's
/// text form.
///
/// Stepper availability is derived from the *parsed draft* while the stepper
/// arithmetic starts from the *committed value*. Until the draft is committed
/// the two can disagree: with a committed 100% and a draft of `"40"` the
/// increment button is enabled, and pressing it yields 100 again.
///
/// [`commit_draft`]: ValueController::commit_draft
/// [`increment`]: ValueController::increment
/// [`decrement`]: ValueController::decrement
/// [`switch_unit`]: ValueController::switch_unit
pub struct ValueController<P: ValuePresenterPort = DetachedPresenter> {
    committed_value: f64,
    draft_text: String,
    unit: Unit,
    limits: ValueLimits,
    presenter: P,
}

impl Default for ValueController<DetachedPresenter> {
    fn default() -> Self {
        Self::new(DetachedPresenter)
    }
}

impl<P: ValuePresenterPort> ValueController<P> {
    pub fn new(presenter: P) -> Self {
        Self::with_config(ValueControllerConfig::default(), presenter)
    }

    pub fn with_config(config: ValueControllerConfig, presenter: P) -> Self {
        let limits = config.limits.sanitized();
        if limits != config.limits {
            warn!(requested = ?config.limits, using = ?limits, "value limits adjusted");
        }

        let initial_value = if config.initial_value.is_finite() {
            config.initial_value
        } else {
            limits.min
        };
        let committed_value = clamp_value(initial_value, config.initial_unit, &limits).value;

        Self {
            committed_value,
            draft_text: format_value(committed_value),
            unit: config.initial_unit,
            limits,
            presenter,
        }
    }

    #[must_use]
    pub fn committed_value(&self) -> f64 {
        self.committed_value
    }

    #[must_use]
    pub fn draft_text(&self) -> &str {
        &self.draft_text
    }

    #[must_use]
    pub fn unit(&self) -> Unit {
        self.unit
    }

    #[must_use]
    pub fn limits(&self) -> &ValueLimits {
        &self.limits
    }

    #[must_use]
    pub fn presenter(&self) -> &P {
        &self.presenter
    }

    /// Hands the current state to the presenter without changing it.
    pub fn refresh(&mut self) {
        self.notify();
    }

    /// Stores a raw keystroke result. Commas become dots, nothing else is
    /// validated.
    pub fn edit_draft(&mut self, raw_text: &str) {
        self.draft_text = normalize_decimal_separator(raw_text);
        trace!(draft = %self.draft_text, "draft edited");
        self.notify();
    }

    /// Reconciles the draft into the committed value.
    ///
    /// A draft that is entirely a plain decimal number (`-?DIGITS(.DIGITS)?`)
    /// is committed as is. A malformed draft commits its leading numeric
    /// part (`"12.5x"` commits 12.5). Empty
    /// drafts, drafts with several decimal points and drafts with no usable
    /// numeric prefix revert to the committed value. Every committed value is
    /// clamped for the current unit.
    pub fn commit_draft(&mut self) -> CommitReport {
        let trimmed = self.draft_text.trim();
        if trimmed.is_empty() {
            return self.revert(RevertReason::Empty);
        }

        let normalized = normalize_decimal_separator(trimmed);

        if is_strict_decimal(&normalized) {
            let parsed = normalized.parse::<f64>().unwrap_or(self.committed_value);

            return self.commit(parsed, CommitOutcome::Accepted);
        }

        if normalized.matches('.').count() > 1 {
            return self.revert(RevertReason::MultipleDecimalPoints);
        }

        let prefix = lenient_decimal_prefix(&normalized);
        if prefix.is_empty() || prefix == "-" || prefix == "." {
            return self.revert(RevertReason::NoNumericPrefix);
        }

        match prefix.parse::<f64>() {
            Ok(value) => self.commit(value, CommitOutcome::Recovered),
            Err(_) => self.revert(RevertReason::Unparsable),
        }
    }

    /// Adds one step to the committed value, ignoring the draft.
    pub fn increment(&mut self) -> StepReport {
        let mut next = self.committed_value + self.limits.step;
        let mut clamped = false;

        if let Some(max) = self.unit.upper_bound(self.limits.percent_max) {
            if next > max {
                next = max;
                clamped = true;
            }
        }

        self.apply_step(next, clamped)
    }

    /// Removes one step from the committed value, ignoring the draft.
    pub fn decrement(&mut self) -> StepReport {
        let mut next = self.committed_value - self.limits.step;
        let mut clamped = false;

        if next < self.limits.min {
            next = self.limits.min;
            clamped = true;
        }

        self.apply_step(next, clamped)
    }

    /// Changes the unit. Entering percent re-clamps a committed value above
    /// the percent bound; no other conversion happens.
    pub fn switch_unit(&mut self, new_unit: Unit) -> StepReport {
        let mut clamped = false;

        if new_unit == Unit::Percent && self.committed_value > self.limits.percent_max {
            debug!(
                from = self.committed_value,
                to = self.limits.percent_max,
                "value clamped on switch to percent"
            );
            self.committed_value = self.limits.percent_max;
            self.draft_text = format_value(self.committed_value);
            clamped = true;
        }

        self.unit = new_unit;
        self.notify();

        StepReport {
            clamped,
            value: self.committed_value,
        }
    }

    /// Number the draft currently reads as, or `None` when it has no numeric
    /// prefix. Drives stepper availability only.
    #[must_use]
    pub fn parsed_draft(&self) -> Option<f64> {
        parse_float_prefix(&normalize_decimal_separator(&self.draft_text))
    }

    #[must_use]
    pub fn stepper_availability(&self) -> StepperAvailability {
        StepperAvailability::from_parsed_draft(
            self.parsed_draft(),
            self.unit,
            self.limits.min,
            self.limits.percent_max,
        )
    }

    #[must_use]
    pub fn snapshot(&self) -> ValueSnapshot {
        ValueSnapshot {
            draft_text: self.draft_text.clone(),
            committed_value: self.committed_value,
            unit: self.unit,
            availability: self.stepper_availability(),
        }
    }

    /// Clamps and commits `value`. An overflowing literal clamps to the
    /// percent bound; one that stays infinite after clamping is unparsable.
    fn commit(&mut self, value: f64, outcome: CommitOutcome) -> CommitReport {
        let result = clamp_value(value, self.unit, &self.limits);
        if !result.value.is_finite() {
            return self.revert(RevertReason::Unparsable);
        }

        if result.clamped {
            debug!(parsed = value, clamped = result.value, unit = %self.unit, "draft clamped");
        }

        self.committed_value = result.value;
        self.draft_text = format_value(result.value);
        self.notify();

        CommitReport {
            outcome,
            clamped: result.clamped,
            value: result.value,
        }
    }

    fn revert(&mut self, reason: RevertReason) -> CommitReport {
        debug!(draft = %self.draft_text, ?reason, "draft reverted");

        self.draft_text = format_value(self.committed_value);
        self.notify();

        CommitReport {
            outcome: CommitOutcome::Reverted(reason),
            clamped: false,
            value: self.committed_value,
        }
    }

    fn apply_step(&mut self, next: f64, clamped: bool) -> StepReport {
        if next.is_finite() {
            self.committed_value = next;
        }
        self.draft_text = format_value(self.committed_value);
        self.notify();

        StepReport {
            clamped,
            value: self.committed_value,
        }
    }

    fn notify(&mut self) {
        let snapshot = self.snapshot();
        self.presenter.present(&snapshot);
    }
}
