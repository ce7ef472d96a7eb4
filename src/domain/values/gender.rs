//! Driver gender code

use std::fmt;
use std::str::FromStr;

use crate::shared::errors::ValidationError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Gender {
    Female,
    Male,
    Other,
}

impl Gender {
    /// Accepts `F`, `M` or `O` in either case.
    pub fn parse(raw: &str) -> Result<Self, ValidationError> {
        match raw {
            "F" | "f" => Ok(Self::Female),
            "M" | "m" => Ok(Self::Male),
            "O" | "o" => Ok(Self::Other),
            _ => Err(ValidationError::InvalidGender(raw.to_string())),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Female => "F",
            Self::Male => "M",
            Self::Other => "O",
        }
    }
}

impl FromStr for Gender {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
