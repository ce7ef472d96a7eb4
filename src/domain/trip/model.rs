//! Trip domain entity

use chrono::{DateTime, TimeDelta, Utc};
use rust_decimal::Decimal;

use crate::domain::rules::min_trip_start;
use crate::domain::values::{Cpf, Location, VehicleClass};
use crate::shared::errors::ValidationError;

/// Unvalidated latitude/longitude pair as received from a caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Coordinates {
    pub lat: Decimal,
    pub long: Decimal,
}

/// Raw trip attributes, validated by [`Trip::new`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TripInput {
    pub driver_cpf: String,
    pub has_load: bool,
    pub origin: Coordinates,
    pub destination: Coordinates,
    pub vehicle: i64,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

/// A driver's trip between two locations over a time interval.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Trip {
    id: String,
    driver_cpf: Cpf,
    has_load: bool,
    origin: Location,
    destination: Location,
    vehicle: VehicleClass,
    start: DateTime<Utc>,
    end: DateTime<Utc>,
}

impl Trip {
    /// Validates id, driver CPF, origin, destination, vehicle and the
    /// interval in that order.
    pub fn new(id: impl Into<String>, input: TripInput) -> Result<Self, ValidationError> {
        let id = id.into();
        if id.is_empty() {
            return Err(ValidationError::InvalidTripId(id));
        }

        let driver_cpf = Cpf::parse(&input.driver_cpf)?;
        let origin = Location::new(input.origin.lat, input.origin.long)?;
        let destination = Location::new(input.destination.lat, input.destination.long)?;
        let vehicle = VehicleClass::from_code(input.vehicle)?;
        validate_interval(input.start, input.end)?;

        Ok(Self {
            id,
            driver_cpf,
            has_load: input.has_load,
            origin,
            destination,
            vehicle,
            start: input.start,
            end: input.end,
        })
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn driver_cpf(&self) -> &Cpf {
        &self.driver_cpf
    }

    pub fn has_load(&self) -> bool {
        self.has_load
    }

    pub fn origin(&self) -> Location {
        self.origin
    }

    pub fn destination(&self) -> Location {
        self.destination
    }

    pub fn vehicle(&self) -> VehicleClass {
        self.vehicle
    }

    pub fn start(&self) -> DateTime<Utc> {
        self.start
    }

    pub fn end(&self) -> DateTime<Utc> {
        self.end
    }

    /// Always `end - start`; positive by construction.
    pub fn duration(&self) -> TimeDelta {
        self.end - self.start
    }

    /// Replaces either bound of the interval. The missing bound is taken
    /// from the current trip and the pair is validated as a whole.
    pub fn set_interval(
        &mut self,
        start: Option<DateTime<Utc>>,
        end: Option<DateTime<Utc>>,
    ) -> Result<(), ValidationError> {
        let start = start.unwrap_or(self.start);
        let end = end.unwrap_or(self.end);
        validate_interval(start, end)?;
        self.start = start;
        self.end = end;
        Ok(())
    }

    pub fn set_origin(
        &mut self,
        lat: Option<Decimal>,
        long: Option<Decimal>,
    ) -> Result<(), ValidationError> {
        self.origin = overlay(self.origin, lat, long)?;
        Ok(())
    }

    pub fn set_destination(
        &mut self,
        lat: Option<Decimal>,
        long: Option<Decimal>,
    ) -> Result<(), ValidationError> {
        self.destination = overlay(self.destination, lat, long)?;
        Ok(())
    }

    pub fn set_vehicle(&mut self, code: i64) -> Result<(), ValidationError> {
        self.vehicle = VehicleClass::from_code(code)?;
        Ok(())
    }

    pub fn set_has_load(&mut self, has_load: bool) {
        self.has_load = has_load;
    }
}

fn validate_interval(start: DateTime<Utc>, end: DateTime<Utc>) -> Result<(), ValidationError> {
    if start < min_trip_start() {
        return Err(ValidationError::InvalidTripStartDate(start.to_rfc3339()));
    }
    if end <= start {
        return Err(ValidationError::InvalidTripEndDate(end.to_rfc3339()));
    }
    Ok(())
}

fn overlay(
    current: Location,
    lat: Option<Decimal>,
    long: Option<Decimal>,
) -> Result<Location, ValidationError> {
    Location::new(
        lat.unwrap_or(current.latitude()),
        long.unwrap_or(current.longitude()),
    )
}

// ── Tests ──────────────────────────────────────────────────────
