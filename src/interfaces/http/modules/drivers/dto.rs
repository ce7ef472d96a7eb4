//! Driver DTOs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use crate::application::services::{DriverPatch, NewDriverInput};
use crate::domain::Driver;

/// Top-level keys accepted by `?fields=`.
pub const DRIVER_FIELDS: &[&str] = &[
    "cpf",
    "name",
    "gender",
    "cnh",
    "birth_date",
    "age",
    "has_vehicle",
];

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct DriverDto {
    pub cpf: String,
    pub name: String,
    /// `F`, `M` or `O`
    pub gender: String,
    /// License category `A`..`E`
    pub cnh: String,
    pub birth_date: String,
    pub age: u32,
    pub has_vehicle: bool,
}

impl From<&Driver> for DriverDto {
    fn from(d: &Driver) -> Self {
        Self {
            cpf: d.cpf().to_string(),
            name: d.name().as_str().to_string(),
            gender: d.gender().to_string(),
            cnh: d.license().to_string(),
            birth_date: d.birth_date().value().to_rfc3339(),
            age: d.age(),
            has_vehicle: d.has_vehicle(),
        }
    }
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateDriverRequest {
    #[validate(length(min = 1, message = "is required"))]
    pub cpf: String,
    #[validate(length(min = 1, message = "is required"))]
    pub name: String,
    #[validate(length(min = 1, message = "is required"))]
    pub gender: String,
    #[validate(length(min = 1, message = "is required"))]
    pub cnh: String,
    /// RFC 3339 timestamp
    pub birth_date: DateTime<Utc>,
    #[serde(default)]
    pub has_vehicle: bool,
}

impl From<CreateDriverRequest> for NewDriverInput {
    fn from(r: CreateDriverRequest) -> Self {
        Self {
            cpf: r.cpf,
            name: r.name,
            gender: r.gender,
            license: r.cnh,
            birth_date: r.birth_date,
            has_vehicle: r.has_vehicle,
        }
    }
}

#[derive(Debug, Default, Deserialize, Validate, ToSchema)]
pub struct UpdateDriverRequest {
    #[validate(length(min = 1, message = "must not be empty"))]
    pub name: Option<String>,
    #[validate(length(min = 1, message = "must not be empty"))]
    pub gender: Option<String>,
    #[validate(length(min = 1, message = "must not be empty"))]
    pub cnh: Option<String>,
    pub has_vehicle: Option<bool>,
}

impl From<UpdateDriverRequest> for DriverPatch {
    fn from(r: UpdateDriverRequest) -> Self {
        Self {
            name: r.name,
            gender: r.gender,
            license: r.cnh,
            has_vehicle: r.has_vehicle,
        }
    }
}

#[derive(Debug, Default, Deserialize, IntoParams)]
pub struct ListDriversParams {
    /// License category filter
    pub cnh: Option<String>,
    pub gender: Option<String>,
    pub has_vehicle: Option<bool>,
    /// Maximum number of records; 0 means no limit
    pub limit: Option<u64>,
    /// Comma-separated subset of driver fields
    pub fields: Option<String>,
}

#[derive(Debug, Default, Deserialize, IntoParams)]
pub struct FieldsParams {
    /// Comma-separated subset of top-level fields
    pub fields: Option<String>,
}
