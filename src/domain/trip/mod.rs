//! Trip aggregate
//!
//! Trip entity with its query filter and repository trait.

pub mod model;
pub mod query;
pub mod repository;

pub use model::{Coordinates, Trip, TripInput};
pub use query::FindTripsQuery;
pub use repository::TripRepository;
