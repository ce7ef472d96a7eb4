//! SeaORM implementation of TripRepository

use async_trait::async_trait;
use log::debug;
use sea_orm::{
    ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder, QuerySelect,
    Set,
};

use super::{db_err, is_unique_violation};
use crate::domain::{
    Coordinates, DomainError, DomainResult, FindTripsQuery, Location, Trip, TripInput,
    TripRepository, ValidationError,
};
use crate::infrastructure::database::entities::trip;

pub struct SeaOrmTripRepository {
    db: DatabaseConnection,
}

impl SeaOrmTripRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

// ── Conversion helpers ──────────────────────────────────────────

fn coordinates(lat: f64, long: f64) -> Result<Coordinates, ValidationError> {
    let location = Location::from_f64(lat, long)?;
    Ok(Coordinates {
        lat: location.latitude(),
        long: location.longitude(),
    })
}

fn model_to_domain(m: trip::Model) -> DomainResult<Trip> {
    let invalid =
        |e: ValidationError| DomainError::Storage(format!("Stored trip {} is invalid: {}", m.id, e));

    let input = TripInput {
        driver_cpf: m.driver_cpf.clone(),
        has_load: m.has_load,
        origin: coordinates(m.origin_lat, m.origin_long).map_err(invalid)?,
        destination: coordinates(m.destination_lat, m.destination_long).map_err(invalid)?,
        vehicle: m.vehicle,
        start: m.start_time,
        end: m.end_time,
    };
    Trip::new(m.id.clone(), input).map_err(invalid)
}

fn domain_to_active(t: &Trip) -> trip::ActiveModel {
    let (origin_lat, origin_long) = t.origin().to_f64();
    let (destination_lat, destination_long) = t.destination().to_f64();
    trip::ActiveModel {
        id: Set(t.id().to_string()),
        driver_cpf: Set(t.driver_cpf().to_string()),
        has_load: Set(t.has_load()),
        origin_lat: Set(origin_lat),
        origin_long: Set(origin_long),
        destination_lat: Set(destination_lat),
        destination_long: Set(destination_long),
        vehicle: Set(t.vehicle().code()),
        start_time: Set(t.start()),
        end_time: Set(t.end()),
    }
}

#[async_trait]
impl TripRepository for SeaOrmTripRepository {
    async fn find_by_id(&self, id: &str) -> DomainResult<Trip> {
        let model = trip::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(db_err)?
            .ok_or_else(|| DomainError::TripNotFound(id.to_string()))?;
        model_to_domain(model)
    }

    async fn find(&self, query: &FindTripsQuery) -> DomainResult<Vec<Trip>> {
        let mut select = trip::Entity::find();
        if let Some(cpf) = &query.driver_cpf {
            select = select.filter(trip::Column::DriverCpf.eq(cpf.as_str()));
        }
        if let Some(has_load) = query.has_load {
            select = select.filter(trip::Column::HasLoad.eq(has_load));
        }
        if let Some(vehicle) = query.vehicle {
            select = select.filter(trip::Column::Vehicle.eq(vehicle.code()));
        }

        let models = select
            .order_by_asc(trip::Column::StartTime)
            .order_by_asc(trip::Column::Id)
            .limit(query.limit)
            .all(&self.db)
            .await
            .map_err(db_err)?;

        debug!("Found {} trips", models.len());
        models.into_iter().map(model_to_domain).collect()
    }

    async fn save(&self, t: &Trip) -> DomainResult<()> {
        let exists = trip::Entity::find_by_id(t.id())
            .one(&self.db)
            .await
            .map_err(db_err)?
            .is_some();
        if exists {
            return Err(DomainError::TripAlreadyExists(t.id().to_string()));
        }

        trip::Entity::insert(domain_to_active(t))
            .exec(&self.db)
            .await
            .map_err(|e| {
                if is_unique_violation(&e) {
                    DomainError::TripAlreadyExists(t.id().to_string())
                } else {
                    db_err(e)
                }
            })?;

        debug!("Trip {} saved for driver {}", t.id(), t.driver_cpf());
        Ok(())
    }

    async fn update(&self, t: &Trip) -> DomainResult<()> {
        match trip::Entity::update(domain_to_active(t)).exec(&self.db).await {
            Ok(_) => {
                debug!("Trip {} updated", t.id());
                Ok(())
            }
            Err(DbErr::RecordNotUpdated) => Err(DomainError::TripNotFound(t.id().to_string())),
            Err(e) => Err(db_err(e)),
        }
    }

    async fn delete(&self, id: &str) -> DomainResult<()> {
        let result = trip::Entity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(db_err)?;

        if result.rows_affected == 0 {
            return Err(DomainError::TripNotFound(id.to_string()));
        }
        debug!("Trip {} deleted", id);
        Ok(())
    }
}
