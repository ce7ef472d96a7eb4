//! Driver registry use cases
//!
//! HTTP handlers stay thin and delegate to this service. Raw CPF input is
//! validated here before any repository access.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use tracing::{debug, info};

use crate::domain::{Cpf, DomainResult, Driver, FindDriversQuery, RepositoryProvider};

/// Raw attributes for registering a driver.
#[derive(Debug, Clone)]
pub struct NewDriverInput {
    pub cpf: String,
    pub name: String,
    pub gender: String,
    pub license: String,
    pub birth_date: DateTime<Utc>,
    pub has_vehicle: bool,
}

/// Partial driver update. Fields left as `None` keep their stored value.
#[derive(Debug, Clone, Default)]
pub struct DriverPatch {
    pub name: Option<String>,
    pub gender: Option<String>,
    pub license: Option<String>,
    pub has_vehicle: Option<bool>,
}

impl DriverPatch {
    /// Applies name, gender, license and has_vehicle in that order.
    fn apply(&self, driver: &mut Driver) -> DomainResult<()> {
        if let Some(name) = &self.name {
            driver.set_name(name)?;
        }
        if let Some(gender) = &self.gender {
            driver.set_gender(gender)?;
        }
        if let Some(license) = &self.license {
            driver.set_license(license)?;
        }
        if let Some(has_vehicle) = self.has_vehicle {
            driver.set_has_vehicle(has_vehicle);
        }
        Ok(())
    }
}

pub struct DriverService {
    repos: Arc<dyn RepositoryProvider>,
}

impl DriverService {
    pub fn new(repos: Arc<dyn RepositoryProvider>) -> Self {
        Self { repos }
    }

    pub async fn create(&self, input: NewDriverInput) -> DomainResult<Driver> {
        let driver = Driver::new(
            &input.cpf,
            &input.name,
            &input.gender,
            &input.license,
            input.birth_date,
            input.has_vehicle,
        )?;
        self.repos.drivers().save(&driver).await?;
        info!(cpf = %driver.cpf(), license = %driver.license(), "Driver registered");
        Ok(driver)
    }

    pub async fn get(&self, cpf: &str) -> DomainResult<Driver> {
        let cpf = Cpf::parse(cpf)?;
        self.repos.drivers().find_by_cpf(&cpf).await
    }

    pub async fn list(&self, query: &FindDriversQuery) -> DomainResult<Vec<Driver>> {
        let drivers = self.repos.drivers().find(query).await?;
        debug!(count = drivers.len(), "Listed drivers");
        Ok(drivers)
    }

    /// Loads the driver, applies the patch to a copy and persists it only
    /// if every field validated.
    pub async fn update(&self, cpf: &str, patch: &DriverPatch) -> DomainResult<Driver> {
        let cpf = Cpf::parse(cpf)?;
        let mut driver = self.repos.drivers().find_by_cpf(&cpf).await?;
        patch.apply(&mut driver)?;
        self.repos.drivers().update(&driver).await?;
        info!(cpf = %cpf, "Driver updated");
        Ok(driver)
    }

    pub async fn delete(&self, cpf: &str) -> DomainResult<()> {
        let cpf = Cpf::parse(cpf)?;
        self.repos.drivers().delete(&cpf).await?;
        info!(cpf = %cpf, "Driver removed");
        Ok(())
    }
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{DomainError, ValidationError};
    use crate::infrastructure::storage::InMemoryRepositoryProvider;
    use chrono::TimeZone;

    fn service() -> DriverService {
        DriverService::new(Arc::new(InMemoryRepositoryProvider::new()))
    }

    fn input(cpf: &str) -> NewDriverInput {
        NewDriverInput {
            cpf: cpf.into(),
            name: "Alexandre Ferreira".into(),
            gender: "m".into(),
            license: "a".into(),
            birth_date: Utc.with_ymd_and_hms(1990, 6, 15, 0, 0, 0).unwrap(),
            has_vehicle: true,
        }
    }

    #[tokio::test]
    async fn create_then_get() {
        let svc = service();
        let created = svc.create(input("64351283084")).await.unwrap();
        assert_eq!(created.name().as_str(), "alexandre ferreira");

        let loaded = svc.get("64351283084").await.unwrap();
        assert_eq!(loaded, created);
    }

    #[tokio::test]
    async fn create_rejects_duplicates_and_invalid_input() {
        let svc = service();
        svc.create(input("64351283084")).await.unwrap();
        assert!(matches!(
            svc.create(input("64351283084")).await,
            Err(DomainError::DriverAlreadyExists(_))
        ));

        let mut bad = input("10804773068");
        bad.license = "Z".into();
        assert!(matches!(
            svc.create(bad).await,
            Err(DomainError::Validation(ValidationError::InvalidLicenseClass(_)))
        ));
    }

    #[tokio::test]
    async fn get_validates_cpf_before_lookup() {
        let svc = service();
        assert!(matches!(
            svc.get("123").await,
            Err(DomainError::Validation(ValidationError::InvalidCpf(_)))
        ));
        assert!(matches!(
            svc.get("64351283084").await,
            Err(DomainError::DriverNotFound(_))
        ));
    }

    #[tokio::test]
    async fn failed_patch_persists_nothing() {
        let svc = service();
        svc.create(input("64351283084")).await.unwrap();

        let patch = DriverPatch {
            name: Some("Bruno Dias".into()),
            license: Some("X".into()),
            ..Default::default()
        };
        assert!(svc.update("64351283084", &patch).await.is_err());

        let stored = svc.get("64351283084").await.unwrap();
        assert_eq!(stored.name().as_str(), "alexandre ferreira");
        assert_eq!(stored.license().as_str(), "A");
    }

    #[tokio::test]
    async fn patch_and_delete() {
        let svc = service();
        svc.create(input("64351283084")).await.unwrap();

        let patch = DriverPatch {
            gender: Some("o".into()),
            has_vehicle: Some(false),
            ..Default::default()
        };
        let updated = svc.update("64351283084", &patch).await.unwrap();
        assert_eq!(updated.gender().as_str(), "O");
        assert!(!updated.has_vehicle());

        let query = FindDriversQuery::new(None, Some("O"), Some(false), None).unwrap();
        assert_eq!(svc.list(&query).await.unwrap().len(), 1);

        svc.delete("64351283084").await.unwrap();
        assert!(svc.list(&FindDriversQuery::default()).await.unwrap().is_empty());
        assert!(matches!(
            svc.delete("64351283084").await,
            Err(DomainError::DriverNotFound(_))
        ));
    }
}
