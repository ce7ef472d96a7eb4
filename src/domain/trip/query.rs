//! Trip query filter

use super::model::Trip;
use crate::domain::values::{Cpf, VehicleClass};
use crate::shared::errors::ValidationError;

/// Optional per-field constraints over trips. `None` means unconstrained.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FindTripsQuery {
    pub driver_cpf: Option<Cpf>,
    pub has_load: Option<bool>,
    pub vehicle: Option<VehicleClass>,
    pub limit: Option<u64>,
}

impl FindTripsQuery {
    /// Validates CPF, then vehicle code, returning the first failure.
    /// `has_load` and `limit` pass through; a zero limit means no limit.
    pub fn new(
        cpf: Option<&str>,
        has_load: Option<bool>,
        limit: Option<u64>,
        vehicle: Option<i64>,
    ) -> Result<Self, ValidationError> {
        Ok(Self {
            driver_cpf: cpf.map(Cpf::parse).transpose()?,
            has_load,
            vehicle: vehicle.map(VehicleClass::from_code).transpose()?,
            limit: limit.filter(|&n| n > 0),
        })
    }

    pub fn matches(&self, trip: &Trip) -> bool {
        self.driver_cpf
            .as_ref()
            .map_or(true, |cpf| trip.driver_cpf() == cpf)
            && self.has_load.map_or(true, |l| trip.has_load() == l)
            && self.vehicle.map_or(true, |v| trip.vehicle() == v)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::trip::{Coordinates, TripInput};
    use chrono::{TimeDelta, TimeZone, Utc};
    use rust_decimal::Decimal;

    fn trip(cpf: &str, has_load: bool, vehicle: i64) -> Trip {
        let start = Utc.with_ymd_and_hms(2023, 7, 1, 6, 0, 0).unwrap();
        let here = Coordinates {
            lat: Decimal::ZERO,
            long: Decimal::ZERO,
        };
        Trip::new(
            "t",
            TripInput {
                driver_cpf: cpf.into(),
                has_load,
                origin: here,
                destination: here,
                vehicle,
                start,
                end: start + TimeDelta::hours(5),
            },
        )
        .unwrap()
    }

    #[test]
    fn empty_query_matches_everything() {
        let q = FindTripsQuery::new(None, None, None, None).unwrap();
        assert!(q.matches(&trip("64351283084", true, 0)));
        assert!(q.matches(&trip("10804773068", false, 2)));
    }

    #[test]
    fn present_fields_are_anded() {
        let q = FindTripsQuery::new(Some("64351283084"), Some(true), Some(10), Some(1)).unwrap();
        assert_eq!(q.limit, Some(10));
        assert!(q.matches(&trip("64351283084", true, 1)));
        assert!(!q.matches(&trip("10804773068", true, 1)));
        assert!(!q.matches(&trip("64351283084", false, 1)));
        assert!(!q.matches(&trip("64351283084", true, 0)));
    }

    #[test]
    fn invalid_filters_fail_fast_in_order() {
        assert_eq!(
            FindTripsQuery::new(Some("00000000000"), None, None, Some(7)),
            Err(ValidationError::InvalidCpf("00000000000".into()))
        );
        assert_eq!(
            FindTripsQuery::new(None, None, None, Some(7)),
            Err(ValidationError::InvalidVehicleClass(7))
        );
    }

    #[test]
    fn zero_limit_means_unbounded() {
        assert_eq!(FindTripsQuery::new(None, None, Some(0), None).unwrap().limit, None);
    }
}
