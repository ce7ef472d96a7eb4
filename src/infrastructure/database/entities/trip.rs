//! Trip entity for database

use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Coordinates are stored as doubles; the repository truncates them back to
/// seven decimal places when rebuilding the domain value.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "trips")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,

    /// Weak reference to `drivers.cpf`; no foreign key
    pub driver_cpf: String,

    pub has_load: bool,

    pub origin_lat: f64,
    pub origin_long: f64,
    pub destination_lat: f64,
    pub destination_long: f64,

    /// Vehicle class code (0..=2)
    pub vehicle: i64,

    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
