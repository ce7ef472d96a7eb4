//! SeaORM implementation of DriverRepository

use async_trait::async_trait;
use log::debug;
use sea_orm::{
    ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder, QuerySelect,
    Set,
};

use super::{db_err, is_unique_violation};
use crate::domain::{
    Cpf, DomainError, DomainResult, Driver, DriverRepository, FindDriversQuery,
};
use crate::infrastructure::database::entities::driver;

pub struct SeaOrmDriverRepository {
    db: DatabaseConnection,
}

impl SeaOrmDriverRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

// ── Conversion helpers ──────────────────────────────────────────

fn model_to_domain(m: driver::Model) -> DomainResult<Driver> {
    Driver::new(
        &m.cpf,
        &m.name,
        &m.gender,
        &m.license,
        m.birth_date,
        m.has_vehicle,
    )
    .map_err(|e| DomainError::Storage(format!("Stored driver {} is invalid: {}", m.cpf, e)))
}

fn domain_to_active(d: &Driver) -> driver::ActiveModel {
    driver::ActiveModel {
        cpf: Set(d.cpf().to_string()),
        name: Set(d.name().as_str().to_string()),
        gender: Set(d.gender().as_str().to_string()),
        license: Set(d.license().as_str().to_string()),
        birth_date: Set(d.birth_date().value()),
        has_vehicle: Set(d.has_vehicle()),
    }
}

#[async_trait]
impl DriverRepository for SeaOrmDriverRepository {
    async fn find_by_cpf(&self, cpf: &Cpf) -> DomainResult<Driver> {
        let model = driver::Entity::find_by_id(cpf.as_str())
            .one(&self.db)
            .await
            .map_err(db_err)?
            .ok_or_else(|| DomainError::DriverNotFound(cpf.to_string()))?;
        model_to_domain(model)
    }

    async fn find(&self, query: &FindDriversQuery) -> DomainResult<Vec<Driver>> {
        let mut select = driver::Entity::find();
        if let Some(license) = query.license {
            select = select.filter(driver::Column::License.eq(license.as_str()));
        }
        if let Some(gender) = query.gender {
            select = select.filter(driver::Column::Gender.eq(gender.as_str()));
        }
        if let Some(has_vehicle) = query.has_vehicle {
            select = select.filter(driver::Column::HasVehicle.eq(has_vehicle));
        }

        let models = select
            .order_by_asc(driver::Column::Cpf)
            .limit(query.limit)
            .all(&self.db)
            .await
            .map_err(db_err)?;

        debug!("Found {} drivers", models.len());
        models.into_iter().map(model_to_domain).collect()
    }

    async fn save(&self, d: &Driver) -> DomainResult<()> {
        let exists = driver::Entity::find_by_id(d.cpf().as_str())
            .one(&self.db)
            .await
            .map_err(db_err)?
            .is_some();
        if exists {
            return Err(DomainError::DriverAlreadyExists(d.cpf().to_string()));
        }

        driver::Entity::insert(domain_to_active(d))
            .exec(&self.db)
            .await
            .map_err(|e| {
                if is_unique_violation(&e) {
                    DomainError::DriverAlreadyExists(d.cpf().to_string())
                } else {
                    db_err(e)
                }
            })?;

        debug!("Driver {} saved", d.cpf());
        Ok(())
    }

    async fn update(&self, d: &Driver) -> DomainResult<()> {
        match driver::Entity::update(domain_to_active(d)).exec(&self.db).await {
            Ok(_) => {
                debug!("Driver {} updated", d.cpf());
                Ok(())
            }
            Err(DbErr::RecordNotUpdated) => Err(DomainError::DriverNotFound(d.cpf().to_string())),
            Err(e) => Err(db_err(e)),
        }
    }

    async fn delete(&self, cpf: &Cpf) -> DomainResult<()> {
        let result = driver::Entity::delete_by_id(cpf.as_str())
            .exec(&self.db)
            .await
            .map_err(db_err)?;

        if result.rows_affected == 0 {
            return Err(DomainError::DriverNotFound(cpf.to_string()));
        }
        debug!("Driver {} deleted", cpf);
        Ok(())
    }
}
