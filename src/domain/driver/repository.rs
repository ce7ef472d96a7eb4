//! Driver repository interface

use async_trait::async_trait;

use super::model::Driver;
use super::query::FindDriversQuery;
use crate::domain::values::Cpf;
use crate::shared::errors::DomainResult;

#[async_trait]
pub trait DriverRepository: Send + Sync {
    /// Fails with `DriverNotFound` when no driver has this CPF
    async fn find_by_cpf(&self, cpf: &Cpf) -> DomainResult<Driver>;

    /// Drivers matching every present filter, ordered by CPF, at most `limit`
    async fn find(&self, query: &FindDriversQuery) -> DomainResult<Vec<Driver>>;

    /// Fails with `DriverAlreadyExists` when the CPF is taken
    async fn save(&self, driver: &Driver) -> DomainResult<()>;

    /// Fails with `DriverNotFound` when the CPF is unknown
    async fn update(&self, driver: &Driver) -> DomainResult<()>;

    async fn delete(&self, cpf: &Cpf) -> DomainResult<()>;
}
