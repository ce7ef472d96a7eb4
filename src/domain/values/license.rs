//! CNH license class

use std::fmt;
use std::str::FromStr;

use crate::shared::errors::ValidationError;

/// Brazilian driving-license category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LicenseClass {
    A,
    B,
    C,
    D,
    E,
}

impl LicenseClass {
    /// Accepts a single letter `A`..=`E` in either case.
    pub fn parse(raw: &str) -> Result<Self, ValidationError> {
        match raw.to_ascii_uppercase().as_str() {
            "A" => Ok(Self::A),
            "B" => Ok(Self::B),
            "C" => Ok(Self::C),
            "D" => Ok(Self::D),
            "E" => Ok(Self::E),
            _ => Err(ValidationError::InvalidLicenseClass(raw.to_string())),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::A => "A",
            Self::B => "B",
            Self::C => "C",
            Self::D => "D",
            Self::E => "E",
        }
    }
}

impl FromStr for LicenseClass {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for LicenseClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
