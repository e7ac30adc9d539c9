use std::fmt;
use std::str::FromStr;

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UnitParseError {
    #[error("unknown unit `{0}`, expected one of: %, px")]
    Unknown(String),
}

/// Measurement unit of the stepper value.
///
/// The unit only decides the upper clamp bound. Switching units never
/// rescales the number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Unit {
    #[default]
    Percent,
    Pixel,
}

impl Unit {
    pub const ALL: &'static [Self] = &[Self::Percent, Self::Pixel];

    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Percent => "%",
            Self::Pixel => "px",
        }
    }

    /// Upper bound for this unit, `None` when unbounded.
    #[must_use]
    pub const fn upper_bound(self, percent_max: f64) -> Option<f64> {
        match self {
            Self::Percent => Some(percent_max),
            Self::Pixel => None,
        }
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str((*self).symbol())
    }
}

impl FromStr for Unit {
    type Err = UnitParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "%" | "percent" => Ok(Self::Percent),
            "px" | "pixel" | "pixels" => Ok(Self::Pixel),
            _ => Err(UnitParseError::Unknown(s.to_owned())),
        }
    }
}
