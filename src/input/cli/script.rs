use std::str::FromStr;

use thiserror::Error;

use crate::controllers::cli::types::ScriptEvent;
use crate::core::data::unit::{Unit, UnitParseError};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScriptParseError {
    #[error("unknown script event `{0}`, expected type:<text>, blur, inc (+), dec (-) or unit:<unit>")]
    UnknownEvent(String),
    #[error(transparent)]
    Unit(#[from] UnitParseError),
}

impl FromStr for ScriptEvent {
    type Err = ScriptParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Some(text) = s.strip_prefix("type:") {
            return Ok(Self::Type(text.to_owned()));
        }
        if let Some(unit) = s.strip_prefix("unit:") {
            return Ok(Self::SwitchUnit(unit.parse::<Unit>()?));
        }

        match s {
            "blur" => Ok(Self::Blur),
            "inc" | "+" => Ok(Self::Increment),
            "dec" | "-" => Ok(Self::Decrement),
            _ => Err(ScriptParseError::UnknownEvent(s.to_owned())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_type_event_verbatim() {
        assert_eq!("type:12,5".parse(), Ok(ScriptEvent::Type("12,5".to_owned())));
        assert_eq!("type:".parse(), Ok(ScriptEvent::Type(String::new())));
        assert_eq!("type: a:b ".parse(), Ok(ScriptEvent::Type(" a:b ".to_owned())));
    }

    #[test]
    fn test_parses_keyword_events() {
        assert_eq!("blur".parse(), Ok(ScriptEvent::Blur));
        assert_eq!("inc".parse(), Ok(ScriptEvent::Increment));
        assert_eq!("+".parse(), Ok(ScriptEvent::Increment));
        assert_eq!("dec".parse(), Ok(ScriptEvent::Decrement));
        assert_eq!("-".parse(), Ok(ScriptEvent::Decrement));
    }

    #[test]
    fn test_parses_unit_event() {
        assert_eq!("unit:px".parse(), Ok(ScriptEvent::SwitchUnit(Unit::Pixel)));
        assert_eq!("unit:%".parse(), Ok(ScriptEvent::SwitchUnit(Unit::Percent)));
    }

    #[test]
    fn test_rejects_unknown_events() {
        assert_eq!(
            "jump".parse::<ScriptEvent>(),
            Err(ScriptParseError::UnknownEvent("jump".to_owned()))
        );
        assert_eq!(
            "unit:em".parse::<ScriptEvent>(),
            Err(ScriptParseError::Unit(UnitParseError::Unknown("em".to_owned())))
        );
    }
}
