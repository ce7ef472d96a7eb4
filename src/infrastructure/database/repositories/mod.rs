//! Database repository implementations
//!
//! Per-aggregate SeaORM repositories + unified RepositoryProvider.

pub mod driver_repository;
pub mod repository_provider;
pub mod trip_repository;

pub use repository_provider::SeaOrmRepositoryProvider;

use sea_orm::{DbErr, SqlErr};

use crate::domain::DomainError;

fn db_err(e: DbErr) -> DomainError {
    DomainError::Storage(format!("Database error: {}", e))
}

fn is_unique_violation(e: &DbErr) -> bool {
    matches!(e.sql_err(), Some(SqlErr::UniqueConstraintViolation(_)))
}
