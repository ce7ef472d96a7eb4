//! Domain layer: value types, aggregates, query filters and
//! repository contracts. No I/O happens here.

pub mod driver;
pub mod repositories;
pub mod rules;
pub mod trip;
pub mod values;

// Re-export commonly used types
pub use driver::{Driver, DriverRepository, FindDriversQuery};
pub use repositories::{DomainResult, RepositoryProvider};
pub use trip::{Coordinates, FindTripsQuery, Trip, TripInput, TripRepository};
pub use values::{BirthDate, Cpf, Gender, LicenseClass, Location, Name, VehicleClass};

pub use crate::shared::errors::{DomainError, ValidationError};
