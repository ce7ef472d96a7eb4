//! Birth date and age arithmetic

use chrono::{DateTime, Datelike, TimeZone, Utc};

use crate::domain::rules::min_birth_date;
use crate::shared::errors::ValidationError;

/// A birth date normalized to UTC and not earlier than the minimum birth date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BirthDate(DateTime<Utc>);

impl BirthDate {
    pub fn new<Tz: TimeZone>(raw: DateTime<Tz>) -> Result<Self, ValidationError> {
        let utc = raw.with_timezone(&Utc);
        if utc < min_birth_date() {
            return Err(ValidationError::InvalidBirthDate(utc.to_rfc3339()));
        }
        Ok(Self(utc))
    }

    pub fn value(&self) -> DateTime<Utc> {
        self.0
    }

    /// Whole years elapsed as of now. Not cached.
    pub fn age(&self) -> u32 {
        self.age_at(Utc::now())
    }

    /// Whole years elapsed as of `now`; zero for birth dates in the future.
    pub fn age_at(&self, now: DateTime<Utc>) -> u32 {
        let birth = self.0;
        let mut years = now.year() - birth.year();
        if (now.month(), now.day()) < (birth.month(), birth.day()) {
            years -= 1;
        }
        years.max(0) as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{FixedOffset, Months, TimeDelta};

    fn fixed_now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 15, 12, 0, 0).unwrap()
    }

    fn years_before(now: DateTime<Utc>, n: u32) -> DateTime<Utc> {
        now.checked_sub_months(Months::new(n * 12)).unwrap()
    }

    #[test]
    fn rejects_dates_before_minimum() {
        let too_old = Utc.with_ymd_and_hms(1949, 12, 31, 23, 59, 59).unwrap();
        assert!(matches!(
            BirthDate::new(too_old),
            Err(ValidationError::InvalidBirthDate(_))
        ));
        assert!(BirthDate::new(min_birth_date()).is_ok());
    }

    #[test]
    fn normalizes_offsets_to_utc() {
        let offset = FixedOffset::west_opt(3 * 3600).unwrap();
        let local = offset.with_ymd_and_hms(1990, 5, 1, 22, 0, 0).unwrap();
        let birth = BirthDate::new(local).unwrap();
        assert_eq!(
            birth.value(),
            Utc.with_ymd_and_hms(1990, 5, 2, 1, 0, 0).unwrap()
        );
    }

    #[test]
    fn offset_is_applied_before_minimum_check() {
        // 1950-01-01T01:00:00+03:00 is still 1949 in UTC
        let offset = FixedOffset::east_opt(3 * 3600).unwrap();
        let local = offset.with_ymd_and_hms(1950, 1, 1, 1, 0, 0).unwrap();
        assert!(BirthDate::new(local).is_err());
    }

    #[test]
    fn age_counts_full_years() {
        let now = fixed_now();
        for n in [0, 1, 18, 30, 74] {
            let birth = BirthDate::new(years_before(now, n)).unwrap();
            assert_eq!(birth.age_at(now), n, "exactly {n} years");
        }
    }

    #[test]
    fn age_is_one_less_a_day_short() {
        let now = fixed_now();
        for n in [1, 18, 30] {
            let birth = BirthDate::new(years_before(now, n) + TimeDelta::days(1)).unwrap();
            assert_eq!(birth.age_at(now), n - 1, "a day short of {n} years");
        }
    }

    #[test]
    fn age_never_goes_negative() {
        let birth = BirthDate::new(fixed_now() + TimeDelta::days(400)).unwrap();
        assert_eq!(birth.age_at(fixed_now()), 0);
    }

    #[test]
    fn leap_day_birthdays() {
        let birth = BirthDate::new(Utc.with_ymd_and_hms(2000, 2, 29, 0, 0, 0).unwrap()).unwrap();
        let feb_28 = Utc.with_ymd_and_hms(2023, 2, 28, 12, 0, 0).unwrap();
        let mar_1 = Utc.with_ymd_and_hms(2023, 3, 1, 0, 0, 0).unwrap();
        assert_eq!(birth.age_at(feb_28), 22);
        assert_eq!(birth.age_at(mar_1), 23);
    }

    #[test]
    fn age_uses_current_time() {
        let birth = BirthDate::new(years_before(Utc::now(), 30)).unwrap();
        assert_eq!(birth.age(), 30);
    }
}
