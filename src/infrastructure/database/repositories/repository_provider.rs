//! SeaORM implementation of RepositoryProvider

use sea_orm::DatabaseConnection;

use crate::domain::driver::DriverRepository;
use crate::domain::repositories::RepositoryProvider;
use crate::domain::trip::TripRepository;

use super::driver_repository::SeaOrmDriverRepository;
use super::trip_repository::SeaOrmTripRepository;

/// Unified repository provider backed by SeaORM.
///
/// Holds one connection pool and exposes per-aggregate repository accessors.
///
/// ```ignore
/// let repos = SeaOrmRepositoryProvider::new(db.clone());
/// let driver = repos.drivers().find_by_cpf(&cpf).await?;
/// ```
pub struct SeaOrmRepositoryProvider {
    drivers: SeaOrmDriverRepository,
    trips: SeaOrmTripRepository,
}

impl SeaOrmRepositoryProvider {
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            drivers: SeaOrmDriverRepository::new(db.clone()),
            trips: SeaOrmTripRepository::new(db),
        }
    }
}

impl RepositoryProvider for SeaOrmRepositoryProvider {
    fn drivers(&self) -> &dyn DriverRepository {
        &self.drivers
    }

    fn trips(&self) -> &dyn TripRepository {
        &self.trips
    }

    fn backend(&self) -> &'static str {
        "sqlite"
    }
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{
        Coordinates, Cpf, DomainError, Driver, FindDriversQuery, FindTripsQuery, Trip, TripInput,
    };
    use crate::infrastructure::database::migrator::Migrator;
    use crate::infrastructure::database::{init_database, DatabaseConfig};
    use sea_orm_migration::MigratorTrait;
    use chrono::{TimeDelta, TimeZone, Utc};
    use rust_decimal::Decimal;
    use std::str::FromStr;

    async fn provider() -> SeaOrmRepositoryProvider {
        let db = init_database(&DatabaseConfig::in_memory()).await.unwrap();
        Migrator::up(&db, None).await.unwrap();
        SeaOrmRepositoryProvider::new(db)
    }

    fn driver(cpf: &str) -> Driver {
        let birth = Utc.with_ymd_and_hms(1979, 11, 2, 0, 0, 0).unwrap();
        Driver::new(cpf, "Maria da Silva", "f", "d", birth, false).unwrap()
    }

    fn trip(id: &str) -> Trip {
        let start = Utc.with_ymd_and_hms(2023, 8, 14, 9, 15, 0).unwrap();
        Trip::new(
            id,
            TripInput {
                driver_cpf: "64351283084".into(),
                has_load: true,
                origin: Coordinates {
                    lat: Decimal::from_str("-23.5505199").unwrap(),
                    long: Decimal::from_str("-46.6333094").unwrap(),
                },
                destination: Coordinates {
                    lat: Decimal::from_str("-19.9166813").unwrap(),
                    long: Decimal::from_str("-43.9344931").unwrap(),
                },
                vehicle: 0,
                start,
                end: start + TimeDelta::microseconds(1),
            },
        )
        .unwrap()
    }

    #[tokio::test]
    async fn drivers_round_trip_through_sqlite() {
        let repos = provider().await;
        let d = driver("64351283084");

        repos.drivers().save(&d).await.unwrap();
        assert!(matches!(
            repos.drivers().save(&d).await,
            Err(DomainError::DriverAlreadyExists(_))
        ));
        assert_eq!(repos.drivers().find_by_cpf(d.cpf()).await.unwrap(), d);

        repos.drivers().save(&driver("10804773068")).await.unwrap();
        let q = FindDriversQuery::new(Some("D"), Some("F"), Some(false), Some(1)).unwrap();
        let found = repos.drivers().find(&q).await.unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].cpf().as_str(), "10804773068");

        let missing = Cpf::parse("52998224725").unwrap();
        assert!(matches!(
            repos.drivers().delete(&missing).await,
            Err(DomainError::DriverNotFound(_))
        ));
        assert!(matches!(
            repos.drivers().update(&driver("52998224725")).await,
            Err(DomainError::DriverNotFound(_))
        ));
    }

    #[tokio::test]
    async fn stored_names_reload_unchanged() {
        let repos = provider().await;
        let birth = Utc.with_ymd_and_hms(1988, 4, 9, 0, 0, 0).unwrap();
        let d = Driver::new("64351283084", "ÉLODIE ΠΑΠΑΣ", "F", "E", birth, true).unwrap();
        assert_eq!(d.name().as_str(), "élodie παπας");

        repos.drivers().save(&d).await.unwrap();
        assert_eq!(repos.drivers().find_by_cpf(d.cpf()).await.unwrap(), d);
        assert_eq!(
            repos.drivers().find(&FindDriversQuery::default()).await.unwrap(),
            vec![d]
        );

        // rejected up front instead of failing on every later read
        assert!(Driver::new("10804773068", "İbrahim", "M", "E", birth, true).is_err());
    }

    #[tokio::test]
    async fn trips_keep_coordinates_and_interval() {
        let repos = provider().await;
        let t = trip("t-1");

        repos.trips().save(&t).await.unwrap();
        let loaded = repos.trips().find_by_id("t-1").await.unwrap();
        assert_eq!(loaded, t);
        assert_eq!(loaded.duration(), TimeDelta::microseconds(1));

        let q = FindTripsQuery::new(Some("64351283084"), Some(true), None, Some(0)).unwrap();
        assert_eq!(repos.trips().find(&q).await.unwrap().len(), 1);
        let q = FindTripsQuery::new(None, None, None, Some(2)).unwrap();
        assert_eq!(repos.trips().find(&q).await.unwrap().len(), 1);

        repos.trips().delete("t-1").await.unwrap();
        assert!(matches!(
            repos.trips().find_by_id("t-1").await,
            Err(DomainError::TripNotFound(_))
        ));
        assert_eq!(repos.backend(), "sqlite");
    }
}
