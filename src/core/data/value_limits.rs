#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ValueLimits {
    pub step: f64,
    pub min: f64,
    pub percent_max: f64,
}

impl Default for ValueLimits {
    fn default() -> Self {
        Self {
            step: 1.0,
            min: 0.0,
            percent_max: 100.0,
        }
    }
}

impl ValueLimits {
    /// Replaces limits that would let a committed value go negative or a
    /// step go nowhere. `min` is raised to at least zero, a non-positive
    /// `step` falls back to the default, and `percent_max` is kept at or
    /// above `min`.
    #[must_use]
    pub fn sanitized(self) -> Self {
        let defaults = Self::default();

        let min = if self.min.is_finite() && self.min > 0.0 {
            self.min
        } else {
            defaults.min
        };

        let step = if self.step.is_finite() && self.step > 0.0 {
            self.step
        } else {
            defaults.step
        };

        let percent_max = if self.percent_max.is_finite() {
            self.percent_max.max(min)
        } else {
            defaults.percent_max.max(min)
        };

        Self {
            step,
            min,
            percent_max,
        }
    }
}
