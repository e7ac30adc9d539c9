pub mod snapshot;
pub mod unit;
pub mod value_limits;

pub use snapshot::{StepperAvailability, ValueSnapshot};
pub use unit::{Unit, UnitParseError};
pub use value_limits::ValueLimits;
