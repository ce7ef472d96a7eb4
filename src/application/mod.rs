//! Application layer: use cases orchestrating the domain and repositories

pub mod services;

pub use services::{DriverPatch, DriverService, NewDriverInput, TripPatch, TripService};
