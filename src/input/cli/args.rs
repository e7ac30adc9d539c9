use clap::Parser;

use crate::controllers::cli::types::ScriptEvent;
use crate::controllers::value::config::ValueControllerConfig;
use crate::core::data::unit::Unit;
use crate::core::data::value_limits::ValueLimits;

#[derive(Parser, Debug)]
#[command(
    name = "unit_value_stepper",
    about = "Replays text edits, blurs, stepper presses and unit switches against the value stepper"
)]
pub struct CliArgs {
    /// Initial committed value.
    #[arg(long, default_value_t = 1.0, allow_negative_numbers = true)]
    pub value: f64,

    /// Initial unit (`%` or `px`).
    #[arg(long, default_value_t = Unit::Percent)]
    pub unit: Unit,

    /// Stepper increment.
    #[arg(long, default_value_t = 1.0)]
    pub step: f64,

    /// Events: type:<text>, blur, inc, dec, unit:<unit>.
    #[arg(value_name = "EVENT", allow_hyphen_values = true)]
    pub events: Vec<ScriptEvent>,
}

impl CliArgs {
    #[must_use]
    pub fn controller_config(&self) -> ValueControllerConfig {
        ValueControllerConfig {
            initial_value: self.value,
            initial_unit: self.unit,
            limits: ValueLimits {
                step: self.step,
                ..ValueLimits::default()
            },
        }
    }
}
