//! Driver entity for database

use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "drivers")]
pub struct Model {
    /// Canonical 11-digit CPF
    #[sea_orm(primary_key, auto_increment = false)]
    pub cpf: String,

    /// Lowercased, single-space separated
    pub name: String,

    pub gender: String,

    /// CNH category letter
    pub license: String,

    pub birth_date: DateTime<Utc>,

    pub has_vehicle: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
