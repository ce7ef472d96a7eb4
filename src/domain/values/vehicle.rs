//! Vehicle classification

use std::fmt;

use crate::shared::errors::ValidationError;

/// Closed set of vehicle kinds a trip can be made with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VehicleClass {
    /// Code 0
    Truck,
    /// Code 1, the "¾" light truck
    ThreeQuarterTruck,
    /// Code 2
    StumpTruck,
}

impl VehicleClass {
    pub fn from_code(code: i64) -> Result<Self, ValidationError> {
        match code {
            0 => Ok(Self::Truck),
            1 => Ok(Self::ThreeQuarterTruck),
            2 => Ok(Self::StumpTruck),
            other => Err(ValidationError::InvalidVehicleClass(other)),
        }
    }

    pub fn code(&self) -> i64 {
        match self {
            Self::Truck => 0,
            Self::ThreeQuarterTruck => 1,
            Self::StumpTruck => 2,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Truck => "TRUCK",
            Self::ThreeQuarterTruck => "THREE_QUARTER_TRUCK",
            Self::StumpTruck => "STUMP_TRUCK",
        }
    }
}

impl fmt::Display for VehicleClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
