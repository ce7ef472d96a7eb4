//! Driver aggregate
//!
//! Driver entity with its query filter and repository trait.

pub mod model;
pub mod query;
pub mod repository;

pub use model::Driver;
pub use query::FindDriversQuery;
pub use repository::DriverRepository;
