//! Validation constants shared by the value types and aggregates.

use chrono::{DateTime, Months, TimeDelta, Utc};

/// Seconds from the Unix epoch back to 1950-01-01T00:00:00Z.
pub const MIN_BIRTH_TIMESTAMP: i64 = -631_152_000;

/// Minimum age, in whole years, to register as a driver.
pub const MIN_DRIVING_AGE: u32 = 18;

/// Earliest accepted birth date.
pub fn min_birth_date() -> DateTime<Utc> {
    DateTime::UNIX_EPOCH + TimeDelta::seconds(MIN_BIRTH_TIMESTAMP)
}

/// Earliest accepted trip start: the first instant at which the oldest
/// possible driver is of driving age.
pub fn min_trip_start() -> DateTime<Utc> {
    min_birth_date()
        .checked_add_months(Months::new(MIN_DRIVING_AGE * 12))
        .unwrap_or(DateTime::<Utc>::MAX_UTC)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn min_birth_date_is_1950() {
        assert_eq!(
            min_birth_date(),
            Utc.with_ymd_and_hms(1950, 1, 1, 0, 0, 0).unwrap()
        );
    }

    #[test]
    fn min_trip_start_is_eighteen_years_later() {
        assert_eq!(
            min_trip_start(),
            Utc.with_ymd_and_hms(1968, 1, 1, 0, 0, 0).unwrap()
        );
    }
}
