//! Driver query filter

use super::model::Driver;
use crate::domain::values::{Gender, LicenseClass};
use crate::shared::errors::ValidationError;

/// Optional per-field constraints over drivers. `None` means unconstrained.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FindDriversQuery {
    pub license: Option<LicenseClass>,
    pub gender: Option<Gender>,
    pub has_vehicle: Option<bool>,
    pub limit: Option<u64>,
}

impl FindDriversQuery {
    /// Validates license, then gender; the first invalid filter aborts the
    /// whole query. A zero limit is treated as no limit.
    pub fn new(
        license: Option<&str>,
        gender: Option<&str>,
        has_vehicle: Option<bool>,
        limit: Option<u64>,
    ) -> Result<Self, ValidationError> {
        Ok(Self {
            license: license.map(LicenseClass::parse).transpose()?,
            gender: gender.map(Gender::parse).transpose()?,
            has_vehicle,
            limit: limit.filter(|&n| n > 0),
        })
    }

    pub fn matches(&self, driver: &Driver) -> bool {
        self.license.map_or(true, |l| driver.license() == l)
            && self.gender.map_or(true, |g| driver.gender() == g)
            && self.has_vehicle.map_or(true, |v| driver.has_vehicle() == v)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn driver(gender: &str, license: &str, has_vehicle: bool) -> Driver {
        let birth = Utc.with_ymd_and_hms(1980, 3, 10, 0, 0, 0).unwrap();
        Driver::new("10804773068", "Maria Silva", gender, license, birth, has_vehicle).unwrap()
    }

    #[test]
    fn empty_query_matches_everything() {
        let q = FindDriversQuery::new(None, None, None, None).unwrap();
        assert_eq!(q, FindDriversQuery::default());
        assert!(q.matches(&driver("F", "A", true)));
        assert!(q.matches(&driver("M", "E", false)));
    }

    #[test]
    fn present_fields_are_anded() {
        let q = FindDriversQuery::new(Some("e"), Some("m"), Some(false), None).unwrap();
        assert!(q.matches(&driver("M", "E", false)));
        assert!(!q.matches(&driver("F", "E", false)));
        assert!(!q.matches(&driver("M", "D", false)));
        assert!(!q.matches(&driver("M", "E", true)));
    }

    #[test]
    fn invalid_filter_fails_fast() {
        assert_eq!(
            FindDriversQuery::new(Some("Z"), Some("x"), None, None),
            Err(ValidationError::InvalidLicenseClass("Z".into()))
        );
        assert_eq!(
            FindDriversQuery::new(Some("A"), Some("x"), None, None),
            Err(ValidationError::InvalidGender("x".into()))
        );
    }

    #[test]
    fn zero_limit_means_unbounded() {
        assert_eq!(FindDriversQuery::new(None, None, None, Some(0)).unwrap().limit, None);
        assert_eq!(FindDriversQuery::new(None, None, None, Some(5)).unwrap().limit, Some(5));
    }
}
