//! Geographic location with fixed 7-digit precision

use std::fmt;
use std::str::FromStr;

use rust_decimal::{Decimal, RoundingStrategy};

use crate::shared::errors::ValidationError;

/// Fractional digits kept for both coordinates (~1 cm at the equator).
pub const COORDINATE_SCALE: u32 = 7;

const MAX_LATITUDE: i64 = 90;
const MAX_LONGITUDE: i64 = 180;

/// A latitude/longitude pair truncated to [`COORDINATE_SCALE`] digits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Location {
    latitude: Decimal,
    longitude: Decimal,
}

impl Location {
    /// Truncates both coordinates, then range-checks latitude before
    /// longitude. Errors carry the value as given, before truncation.
    pub fn new(latitude: Decimal, longitude: Decimal) -> Result<Self, ValidationError> {
        let raw_latitude = latitude;
        let latitude = truncate(latitude);
        if latitude.abs() > Decimal::from(MAX_LATITUDE) {
            return Err(ValidationError::InvalidLatitude(raw_latitude.to_string()));
        }

        let raw_longitude = longitude;
        let longitude = truncate(longitude);
        if longitude.abs() > Decimal::from(MAX_LONGITUDE) {
            return Err(ValidationError::InvalidLongitude(raw_longitude.to_string()));
        }

        Ok(Self {
            latitude,
            longitude,
        })
    }

    /// Builds a location from binary floats using their shortest decimal
    /// representation, so `90.0000001` is read as written rather than as
    /// the nearest representable double.
    pub fn from_f64(latitude: f64, longitude: f64) -> Result<Self, ValidationError> {
        let lat = float_to_decimal(latitude)
            .ok_or_else(|| ValidationError::InvalidLatitude(latitude.to_string()))?;
        let long = float_to_decimal(longitude)
            .ok_or_else(|| ValidationError::InvalidLongitude(longitude.to_string()))?;
        Self::new(lat, long)
    }

    pub fn latitude(&self) -> Decimal {
        self.latitude
    }

    pub fn longitude(&self) -> Decimal {
        self.longitude
    }

    /// Conversion for JSON output and float-typed storage columns. Goes
    /// through the decimal text so that `from_f64` reads back the same value.
    pub fn to_f64(&self) -> (f64, f64) {
        (decimal_to_float(self.latitude), decimal_to_float(self.longitude))
    }
}

fn truncate(value: Decimal) -> Decimal {
    value
        .round_dp_with_strategy(COORDINATE_SCALE, RoundingStrategy::ToZero)
        .normalize()
}

fn decimal_to_float(value: Decimal) -> f64 {
    f64::from_str(&value.to_string()).unwrap_or_default()
}

/// Shortest-representation conversion; `None` for non-finite or
/// out-of-range input.
pub fn float_to_decimal(value: f64) -> Option<Decimal> {
    if !value.is_finite() {
        return None;
    }
    Decimal::from_str(&value.to_string()).ok()
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.latitude, self.longitude)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn truncates_instead_of_rounding() {
        let loc = Location::new(dec("-23.55052349"), dec("-46.63330819")).unwrap();
        assert_eq!(loc.latitude(), dec("-23.5505234"));
        assert_eq!(loc.longitude(), dec("-46.6333081"));
    }

    #[test]
    fn longitude_just_past_bound_truncates_into_range() {
        let loc = Location::new(dec("0"), dec("180.00000001")).unwrap();
        assert_eq!(loc.longitude(), Decimal::from(180));
        assert_eq!(loc.longitude().to_string(), "180");
    }

    #[test]
    fn latitude_past_bound_at_seventh_digit_is_rejected() {
        assert_eq!(
            Location::new(dec("90.0000001"), dec("0")),
            Err(ValidationError::InvalidLatitude("90.0000001".into()))
        );
    }

    #[test]
    fn errors_report_the_untruncated_value() {
        assert_eq!(
            Location::new(dec("90.00000019"), dec("0")),
            Err(ValidationError::InvalidLatitude("90.00000019".into()))
        );
        assert_eq!(
            Location::new(dec("0"), dec("-180.00000019")),
            Err(ValidationError::InvalidLongitude("-180.00000019".into()))
        );
    }

    #[test]
    fn bounds_are_inclusive() {
        assert!(Location::new(dec("90"), dec("180")).is_ok());
        assert!(Location::new(dec("-90"), dec("-180")).is_ok());
        assert!(Location::new(dec("-90.00000009"), dec("-180.00000009")).is_ok());
        assert!(matches!(
            Location::new(dec("0"), dec("-180.0000001")),
            Err(ValidationError::InvalidLongitude(_))
        ));
    }

    #[test]
    fn latitude_is_checked_first() {
        assert!(matches!(
            Location::new(dec("91"), dec("181")),
            Err(ValidationError::InvalidLatitude(_))
        ));
    }

    #[test]
    fn floats_follow_decimal_semantics() {
        let loc = Location::from_f64(0.0, 180.00000001).unwrap();
        assert_eq!(loc.longitude(), Decimal::from(180));
        assert!(Location::from_f64(90.0000001, 0.0).is_err());
        assert!(Location::from_f64(f64::NAN, 0.0).is_err());
        assert!(Location::from_f64(0.0, f64::INFINITY).is_err());
    }

    #[test]
    fn float_round_trip_is_stable() {
        let loc = Location::from_f64(-23.5505234, -46.6333081).unwrap();
        let (lat, long) = loc.to_f64();
        assert_eq!(Location::from_f64(lat, long).unwrap(), loc);
    }
}
