//! # Truckers
//!
//! Registry service for truck drivers and their trips.
//!
//! ## Architecture
//!
//! The project follows Clean Architecture principles:
//!
//! - **domain**: Self-validating value types, the Driver and Trip aggregates,
//!   query filters and repository contracts
//! - **application**: Use cases (`DriverService`, `TripService`)
//! - **infrastructure**: In-memory and SeaORM/SQLite repositories, migrations
//! - **interfaces**: REST API with Swagger documentation
//! - **shared**: Error taxonomy and graceful shutdown

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod interfaces;
pub mod server;
pub mod shared;

pub use config::{default_config_path, AppConfig};

pub use infrastructure::{
    init_database, DatabaseConfig, InMemoryRepositoryProvider, SeaOrmRepositoryProvider,
};

pub use interfaces::http::create_api_router;
