//! Application services

mod driver;
mod trip;

pub use driver::{DriverPatch, DriverService, NewDriverInput};
pub use trip::{CoordinatesPatch, TripPatch, TripService};
