use crate::core::data::unit::Unit;
use crate::core::data::value_limits::ValueLimits;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClampedValue {
    pub value: f64,
    pub clamped: bool,
}

/// Constrains `value` to `[min, ∞)` for pixels or `[min, percent_max]` for
/// percentages. Negative zero is folded into positive zero.
#[must_use]
pub fn clamp_value(value: f64, unit: Unit, limits: &ValueLimits) -> ClampedValue {
    if value < limits.min {
        return ClampedValue {
            value: limits.min,
            clamped: true,
        };
    }

    if let Some(max) = unit.upper_bound(limits.percent_max) {
        if value > max {
            return ClampedValue {
                value: max,
                clamped: true,
            };
        }
    }

    ClampedValue {
        value: if value == 0.0 { 0.0 } else { value },
        clamped: false,
    }
}
