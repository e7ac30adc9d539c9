use crate::core::data::unit::Unit;

/// Which stepper buttons should be enabled.
///
/// Computed from the parsed *draft*, not from the committed value, so a
/// button can be enabled while the committed value already sits at a bound
/// (and the other way round) until the draft is committed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StepperAvailability {
    pub can_increment: bool,
    pub can_decrement: bool,
}

impl StepperAvailability {
    #[must_use]
    pub fn from_parsed_draft(
        parsed: Option<f64>,
        unit: Unit,
        min: f64,
        percent_max: f64,
    ) -> Self {
        let Some(value) = parsed else {
            return Self::default();
        };

        let can_increment = match unit.upper_bound(percent_max) {
            Some(max) => value < max,
            None => true,
        };

        Self {
            can_increment,
            can_decrement: value > min,
        }
    }
}

/// Read-only view of the controller handed to presenters.
#[derive(Debug, Clone, PartialEq)]
pub struct ValueSnapshot {
    pub draft_text: String,
    pub committed_value: f64,
    pub unit: Unit,
    pub availability: StepperAvailability,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unparsable_draft_disables_both_buttons() {
        let availability = StepperAvailability::from_parsed_draft(None, Unit::Pixel, 0.0, 100.0);

        assert!(!availability.can_increment);
        assert!(!availability.can_decrement);
    }

    #[test]
    fn percent_draft_at_max_disables_increment_only() {
        let availability =
            StepperAvailability::from_parsed_draft(Some(100.0), Unit::Percent, 0.0, 100.0);

        assert!(!availability.can_increment);
        assert!(availability.can_decrement);
    }

    #[test]
    fn pixel_draft_above_percent_max_can_still_increment() {
        let availability =
            StepperAvailability::from_parsed_draft(Some(250.0), Unit::Pixel, 0.0, 100.0);

        assert!(availability.can_increment);
        assert!(availability.can_decrement);
    }

    #[test]
    fn draft_at_or_below_zero_disables_decrement() {
        let at_zero = StepperAvailability::from_parsed_draft(Some(0.0), Unit::Percent, 0.0, 100.0);
        let negative =
            StepperAvailability::from_parsed_draft(Some(-3.0), Unit::Percent, 0.0, 100.0);

        assert!(!at_zero.can_decrement);
        assert!(at_zero.can_increment);
        assert!(!negative.can_decrement);
    }
}
