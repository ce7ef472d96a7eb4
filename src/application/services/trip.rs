//! Trip use cases

use std::sync::Arc;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use tracing::{debug, info};

use crate::domain::{DomainResult, FindTripsQuery, RepositoryProvider, Trip, TripInput};

/// Latitude/longitude overlay; a `None` component keeps the stored one.
#[derive(Debug, Clone, Copy, Default)]
pub struct CoordinatesPatch {
    pub lat: Option<Decimal>,
    pub long: Option<Decimal>,
}

/// Partial trip update.
#[derive(Debug, Clone, Default)]
pub struct TripPatch {
    pub start: Option<DateTime<Utc>>,
    pub end: Option<DateTime<Utc>>,
    pub origin: Option<CoordinatesPatch>,
    pub destination: Option<CoordinatesPatch>,
    pub vehicle: Option<i64>,
    pub has_load: Option<bool>,
}

impl TripPatch {
    /// Applies interval, origin, destination, vehicle and has_load in that
    /// order.
    fn apply(&self, trip: &mut Trip) -> DomainResult<()> {
        if self.start.is_some() || self.end.is_some() {
            trip.set_interval(self.start, self.end)?;
        }
        if let Some(origin) = self.origin {
            trip.set_origin(origin.lat, origin.long)?;
        }
        if let Some(destination) = self.destination {
            trip.set_destination(destination.lat, destination.long)?;
        }
        if let Some(vehicle) = self.vehicle {
            trip.set_vehicle(vehicle)?;
        }
        if let Some(has_load) = self.has_load {
            trip.set_has_load(has_load);
        }
        Ok(())
    }
}

pub struct TripService {
    repos: Arc<dyn RepositoryProvider>,
}

impl TripService {
    pub fn new(repos: Arc<dyn RepositoryProvider>) -> Self {
        Self { repos }
    }

    /// The driver reference is not checked against the driver registry.
    pub async fn create(&self, id: impl Into<String>, input: TripInput) -> DomainResult<Trip> {
        let trip = Trip::new(id, input)?;
        self.repos.trips().save(&trip).await?;
        info!(
            trip_id = %trip.id(),
            cpf = %trip.driver_cpf(),
            vehicle = %trip.vehicle(),
            "Trip registered"
        );
        Ok(trip)
    }

    pub async fn get(&self, id: &str) -> DomainResult<Trip> {
        self.repos.trips().find_by_id(id).await
    }

    pub async fn list(&self, query: &FindTripsQuery) -> DomainResult<Vec<Trip>> {
        let trips = self.repos.trips().find(query).await?;
        debug!(count = trips.len(), "Listed trips");
        Ok(trips)
    }

    pub async fn update(&self, id: &str, patch: &TripPatch) -> DomainResult<Trip> {
        let mut trip = self.repos.trips().find_by_id(id).await?;
        patch.apply(&mut trip)?;
        self.repos.trips().update(&trip).await?;
        info!(trip_id = %id, "Trip updated");
        Ok(trip)
    }

    pub async fn delete(&self, id: &str) -> DomainResult<()> {
        self.repos.trips().delete(id).await?;
        info!(trip_id = %id, "Trip removed");
        Ok(())
    }
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Coordinates, DomainError, ValidationError};
    use crate::infrastructure::storage::InMemoryRepositoryProvider;
    use chrono::{TimeDelta, TimeZone};
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn service() -> TripService {
        TripService::new(Arc::new(InMemoryRepositoryProvider::new()))
    }

    fn input() -> TripInput {
        let start = Utc.with_ymd_and_hms(2024, 2, 10, 6, 30, 0).unwrap();
        TripInput {
            driver_cpf: "64351283084".into(),
            has_load: true,
            origin: Coordinates {
                lat: dec("-23.5505199"),
                long: dec("-46.6333094"),
            },
            destination: Coordinates {
                lat: dec("-22.9068467"),
                long: dec("-43.1728965"),
            },
            vehicle: 1,
            start,
            end: start + TimeDelta::hours(6),
        }
    }

    #[tokio::test]
    async fn create_get_list() {
        let svc = service();
        let trip = svc.create("trip-1", input()).await.unwrap();
        assert_eq!(trip.duration(), TimeDelta::hours(6));
        assert_eq!(svc.get("trip-1").await.unwrap(), trip);

        let q = FindTripsQuery::new(None, Some(true), None, Some(1)).unwrap();
        assert_eq!(svc.list(&q).await.unwrap().len(), 1);
        let q = FindTripsQuery::new(None, None, None, Some(0)).unwrap();
        assert_eq!(svc.list(&q).await.unwrap().len(), 1);

        assert!(matches!(
            svc.create("trip-1", input()).await,
            Err(DomainError::TripAlreadyExists(_))
        ));
    }

    #[tokio::test]
    async fn create_rejects_empty_id() {
        assert!(matches!(
            service().create("", input()).await,
            Err(DomainError::Validation(ValidationError::InvalidTripId(_)))
        ));
    }

    #[tokio::test]
    async fn patch_overlays_single_coordinate_and_bound() {
        let svc = service();
        let original = svc.create("trip-1", input()).await.unwrap();

        let new_end = original.start() + TimeDelta::hours(2);
        let patch = TripPatch {
            end: Some(new_end),
            origin: Some(CoordinatesPatch {
                lat: Some(dec("-23.1")),
                long: None,
            }),
            vehicle: Some(2),
            ..Default::default()
        };
        let updated = svc.update("trip-1", &patch).await.unwrap();
        assert_eq!(updated.start(), original.start());
        assert_eq!(updated.end(), new_end);
        assert_eq!(updated.origin().latitude(), dec("-23.1"));
        assert_eq!(updated.origin().longitude(), original.origin().longitude());
        assert_eq!(updated.vehicle().code(), 2);
    }

    #[tokio::test]
    async fn invalid_patch_leaves_stored_trip_alone() {
        let svc = service();
        let original = svc.create("trip-1", input()).await.unwrap();

        let patch = TripPatch {
            has_load: Some(false),
            end: Some(original.start()),
            ..Default::default()
        };
        assert!(matches!(
            svc.update("trip-1", &patch).await,
            Err(DomainError::Validation(ValidationError::InvalidTripEndDate(_)))
        ));
        assert_eq!(svc.get("trip-1").await.unwrap(), original);

        assert!(matches!(
            svc.update("missing", &TripPatch::default()).await,
            Err(DomainError::TripNotFound(_))
        ));
    }

    #[tokio::test]
    async fn delete_removes_trip() {
        let svc = service();
        svc.create("trip-1", input()).await.unwrap();
        svc.delete("trip-1").await.unwrap();
        assert!(svc.get("trip-1").await.is_err());
        assert!(svc.delete("trip-1").await.is_err());
    }
}
