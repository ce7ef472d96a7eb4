//! Trip DTOs

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use crate::application::services::{CoordinatesPatch, TripPatch};
use crate::domain::values::location::float_to_decimal;
use crate::domain::{Coordinates, Location, Trip, TripInput, ValidationError};

/// Top-level keys accepted by `?fields=`.
pub const TRIP_FIELDS: &[&str] = &[
    "id",
    "driver_cpf",
    "has_load",
    "origin",
    "destination",
    "start",
    "end",
    "duration_seconds",
    "vehicle",
];

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CoordinatesDto {
    pub lat: f64,
    pub long: f64,
}

impl From<Location> for CoordinatesDto {
    fn from(l: Location) -> Self {
        let (lat, long) = l.to_f64();
        Self { lat, long }
    }
}

fn latitude(v: f64) -> Result<Decimal, ValidationError> {
    float_to_decimal(v).ok_or_else(|| ValidationError::InvalidLatitude(v.to_string()))
}

fn longitude(v: f64) -> Result<Decimal, ValidationError> {
    float_to_decimal(v).ok_or_else(|| ValidationError::InvalidLongitude(v.to_string()))
}

impl TryFrom<CoordinatesDto> for Coordinates {
    type Error = ValidationError;

    fn try_from(c: CoordinatesDto) -> Result<Self, Self::Error> {
        Ok(Self {
            lat: latitude(c.lat)?,
            long: longitude(c.long)?,
        })
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct TripDto {
    pub id: String,
    pub driver_cpf: String,
    pub has_load: bool,
    pub origin: CoordinatesDto,
    pub destination: CoordinatesDto,
    pub start: String,
    pub end: String,
    /// Fractional seconds, microsecond resolution
    pub duration_seconds: f64,
    /// 0 = truck, 1 = three-quarter truck, 2 = stump truck
    pub vehicle: i64,
}

impl From<&Trip> for TripDto {
    fn from(t: &Trip) -> Self {
        let micros = t.duration().num_microseconds().unwrap_or(i64::MAX);
        Self {
            id: t.id().to_string(),
            driver_cpf: t.driver_cpf().to_string(),
            has_load: t.has_load(),
            origin: t.origin().into(),
            destination: t.destination().into(),
            start: t.start().to_rfc3339(),
            end: t.end().to_rfc3339(),
            duration_seconds: micros as f64 / 1_000_000.0,
            vehicle: t.vehicle().code(),
        }
    }
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateTripRequest {
    #[validate(length(min = 1, message = "is required"))]
    pub driver_cpf: String,
    #[serde(default)]
    pub has_load: bool,
    pub origin: CoordinatesDto,
    pub destination: CoordinatesDto,
    pub vehicle: i64,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl TryFrom<CreateTripRequest> for TripInput {
    type Error = ValidationError;

    fn try_from(r: CreateTripRequest) -> Result<Self, Self::Error> {
        Ok(Self {
            driver_cpf: r.driver_cpf,
            has_load: r.has_load,
            origin: r.origin.try_into()?,
            destination: r.destination.try_into()?,
            vehicle: r.vehicle,
            start: r.start,
            end: r.end,
        })
    }
}

/// Either component may be omitted to keep the stored one.
#[derive(Debug, Clone, Copy, Default, Deserialize, ToSchema)]
pub struct CoordinatesPatchDto {
    pub lat: Option<f64>,
    pub long: Option<f64>,
}

impl TryFrom<CoordinatesPatchDto> for CoordinatesPatch {
    type Error = ValidationError;

    fn try_from(c: CoordinatesPatchDto) -> Result<Self, Self::Error> {
        Ok(Self {
            lat: c.lat.map(latitude).transpose()?,
            long: c.long.map(longitude).transpose()?,
        })
    }
}

#[derive(Debug, Default, Deserialize, Validate, ToSchema)]
pub struct UpdateTripRequest {
    pub start: Option<DateTime<Utc>>,
    pub end: Option<DateTime<Utc>>,
    pub origin: Option<CoordinatesPatchDto>,
    pub destination: Option<CoordinatesPatchDto>,
    pub vehicle: Option<i64>,
    pub has_load: Option<bool>,
}

impl TryFrom<UpdateTripRequest> for TripPatch {
    type Error = ValidationError;

    fn try_from(r: UpdateTripRequest) -> Result<Self, Self::Error> {
        Ok(Self {
            start: r.start,
            end: r.end,
            origin: r.origin.map(TryInto::try_into).transpose()?,
            destination: r.destination.map(TryInto::try_into).transpose()?,
            vehicle: r.vehicle,
            has_load: r.has_load,
        })
    }
}

#[derive(Debug, Default, Deserialize, IntoParams)]
pub struct ListTripsParams {
    /// Driver CPF filter
    pub cpf: Option<String>,
    pub has_load: Option<bool>,
    /// Vehicle class code
    pub vehicle: Option<i64>,
    /// Maximum number of records; 0 means no limit
    pub limit: Option<u64>,
    /// Comma-separated subset of trip fields
    pub fields: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeDelta, TimeZone};

    #[test]
    fn dto_reports_truncated_coordinates_and_fractional_duration() {
        let start = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let request = CreateTripRequest {
            driver_cpf: "64351283084".into(),
            has_load: false,
            origin: CoordinatesDto {
                lat: -23.55051999,
                long: -46.63330949,
            },
            destination: CoordinatesDto { lat: 0.0, long: 0.0 },
            vehicle: 0,
            start,
            end: start + TimeDelta::milliseconds(1500),
        };
        let trip = Trip::new("t", request.try_into().unwrap()).unwrap();
        let dto = TripDto::from(&trip);

        assert_eq!(dto.origin, CoordinatesDto { lat: -23.5505199, long: -46.6333094 });
        assert_eq!(dto.duration_seconds, 1.5);
        assert_eq!(dto.vehicle, 0);
    }

    #[test]
    fn non_representable_coordinates_are_rejected() {
        let patch = CoordinatesPatchDto {
            lat: None,
            long: Some(1e300),
        };
        assert!(matches!(
            CoordinatesPatch::try_from(patch),
            Err(ValidationError::InvalidLongitude(_))
        ));
    }
}
