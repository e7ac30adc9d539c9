use crate::core::data::unit::Unit;
use crate::core::data::value_limits::ValueLimits;

const DEFAULT_INITIAL_VALUE: f64 = 1.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ValueControllerConfig {
    pub initial_value: f64,
    pub initial_unit: Unit,
    pub limits: ValueLimits,
}

impl Default for ValueControllerConfig {
    fn default() -> Self {
        Self {
            initial_value: DEFAULT_INITIAL_VALUE,
            initial_unit: Unit::default(),
            limits: ValueLimits::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_starts_at_one_percent() {
        let config = ValueControllerConfig::default();

        assert_eq!(config.initial_value, 1.0);
        assert_eq!(config.initial_unit, Unit::Percent);
        assert_eq!(config.limits, ValueLimits::default());
    }
}
