//! In-memory storage implementation

use async_trait::async_trait;
use dashmap::mapref::entry::Entry;
use dashmap::DashMap;

use crate::domain::{
    Cpf, DomainError, DomainResult, Driver, DriverRepository, FindDriversQuery, FindTripsQuery,
    RepositoryProvider, Trip, TripRepository,
};

/// Truncates to `limit` when one is set.
fn apply_limit<T>(mut items: Vec<T>, limit: Option<u64>) -> Vec<T> {
    if let Some(limit) = limit {
        items.truncate(usize::try_from(limit).unwrap_or(usize::MAX));
    }
    items
}

/// In-memory driver storage for development and testing
#[derive(Default)]
pub struct InMemoryDriverRepository {
    drivers: DashMap<String, Driver>,
}

#[async_trait]
impl DriverRepository for InMemoryDriverRepository {
    async fn find_by_cpf(&self, cpf: &Cpf) -> DomainResult<Driver> {
        self.drivers
            .get(cpf.as_str())
            .map(|d| d.clone())
            .ok_or_else(|| DomainError::DriverNotFound(cpf.to_string()))
    }

    async fn find(&self, query: &FindDriversQuery) -> DomainResult<Vec<Driver>> {
        let mut found: Vec<Driver> = self
            .drivers
            .iter()
            .filter(|d| query.matches(d.value()))
            .map(|d| d.value().clone())
            .collect();
        found.sort_by(|a, b| a.cpf().cmp(b.cpf()));
        Ok(apply_limit(found, query.limit))
    }

    async fn save(&self, driver: &Driver) -> DomainResult<()> {
        match self.drivers.entry(driver.cpf().to_string()) {
            Entry::Occupied(_) => Err(DomainError::DriverAlreadyExists(driver.cpf().to_string())),
            Entry::Vacant(slot) => {
                slot.insert(driver.clone());
                Ok(())
            }
        }
    }

    async fn update(&self, driver: &Driver) -> DomainResult<()> {
        let mut stored = self
            .drivers
            .get_mut(driver.cpf().as_str())
            .ok_or_else(|| DomainError::DriverNotFound(driver.cpf().to_string()))?;
        *stored = driver.clone();
        Ok(())
    }

    async fn delete(&self, cpf: &Cpf) -> DomainResult<()> {
        self.drivers
            .remove(cpf.as_str())
            .ok_or_else(|| DomainError::DriverNotFound(cpf.to_string()))?;
        Ok(())
    }
}

/// In-memory trip storage for development and testing
#[derive(Default)]
pub struct InMemoryTripRepository {
    trips: DashMap<String, Trip>,
}

#[async_trait]
impl TripRepository for InMemoryTripRepository {
    async fn find_by_id(&self, id: &str) -> DomainResult<Trip> {
        self.trips
            .get(id)
            .map(|t| t.clone())
            .ok_or_else(|| DomainError::TripNotFound(id.to_string()))
    }

    async fn find(&self, query: &FindTripsQuery) -> DomainResult<Vec<Trip>> {
        let mut found: Vec<Trip> = self
            .trips
            .iter()
            .filter(|t| query.matches(t.value()))
            .map(|t| t.value().clone())
            .collect();
        found.sort_by(|a, b| a.start().cmp(&b.start()).then_with(|| a.id().cmp(b.id())));
        Ok(apply_limit(found, query.limit))
    }

    async fn save(&self, trip: &Trip) -> DomainResult<()> {
        match self.trips.entry(trip.id().to_string()) {
            Entry::Occupied(_) => Err(DomainError::TripAlreadyExists(trip.id().to_string())),
            Entry::Vacant(slot) => {
                slot.insert(trip.clone());
                Ok(())
            }
        }
    }

    async fn update(&self, trip: &Trip) -> DomainResult<()> {
        let mut stored = self
            .trips
            .get_mut(trip.id())
            .ok_or_else(|| DomainError::TripNotFound(trip.id().to_string()))?;
        *stored = trip.clone();
        Ok(())
    }

    async fn delete(&self, id: &str) -> DomainResult<()> {
        self.trips
            .remove(id)
            .ok_or_else(|| DomainError::TripNotFound(id.to_string()))?;
        Ok(())
    }
}

/// Repository provider holding everything in process memory.
#[derive(Default)]
pub struct InMemoryRepositoryProvider {
    drivers: InMemoryDriverRepository,
    trips: InMemoryTripRepository,
}

impl InMemoryRepositoryProvider {
    pub fn new() -> Self {
        Self::default()
    }
}

impl RepositoryProvider for InMemoryRepositoryProvider {
    fn drivers(&self) -> &dyn DriverRepository {
        &self.drivers
    }

    fn trips(&self) -> &dyn TripRepository {
        &self.trips
    }

    fn backend(&self) -> &'static str {
        "memory"
    }
}

// ── Tests ──────────────────────────────────────────────────────
