//! Repository provider for the domain layer
//!
//! Contains:
//! - `RepositoryProvider`: unified access to the per-aggregate repositories
//! - `DomainResult`: standard result type for domain operations

use super::driver::DriverRepository;
use super::trip::TripRepository;

pub use crate::shared::errors::DomainResult;

/// Provides access to all domain repositories.
///
/// Consumers request only the repository they need:
///
/// ```ignore
/// async fn handle(repos: &dyn RepositoryProvider, cpf: &Cpf) -> DomainResult<()> {
///     let driver = repos.drivers().find_by_cpf(cpf).await?;
///     let query = FindTripsQuery { driver_cpf: Some(driver.cpf().clone()), ..Default::default() };
///     let trips = repos.trips().find(&query).await?;
///     Ok(())
/// }
/// ```
pub trait RepositoryProvider: Send + Sync {
    fn drivers(&self) -> &dyn DriverRepository;
    fn trips(&self) -> &dyn TripRepository;

    /// Short backend label for health reporting
    fn backend(&self) -> &'static str;
}
