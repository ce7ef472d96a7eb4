//! Trip repository interface

use async_trait::async_trait;

use super::model::Trip;
use super::query::FindTripsQuery;
use crate::shared::errors::DomainResult;

#[async_trait]
pub trait TripRepository: Send + Sync {
    /// Fails with `TripNotFound` when the id is unknown
    async fn find_by_id(&self, id: &str) -> DomainResult<Trip>;

    /// Trips matching every present filter, ordered by start then id, at most `limit`
    async fn find(&self, query: &FindTripsQuery) -> DomainResult<Vec<Trip>>;

    /// Fails with `TripAlreadyExists` when the id is taken
    async fn save(&self, trip: &Trip) -> DomainResult<()>;

    /// Fails with `TripNotFound` when the id is unknown
    async fn update(&self, trip: &Trip) -> DomainResult<()>;

    async fn delete(&self, id: &str) -> DomainResult<()>;
}
