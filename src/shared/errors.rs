use thiserror::Error;

/// Field or rule specific validation failure.
///
/// Every variant carries the rejected input so callers can report exactly
/// what was refused.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("invalid CPF: {0:?}")]
    InvalidCpf(String),

    #[error("invalid gender: {0:?}")]
    InvalidGender(String),

    #[error("invalid license class: {0:?}")]
    InvalidLicenseClass(String),

    #[error("invalid name: {0:?}")]
    InvalidName(String),

    #[error("invalid birth date: {0}")]
    InvalidBirthDate(String),

    #[error("invalid age: {0} is below the minimum driving age")]
    InvalidAge(u32),

    #[error("invalid latitude: {0}")]
    InvalidLatitude(String),

    #[error("invalid longitude: {0}")]
    InvalidLongitude(String),

    #[error("invalid vehicle class: {0}")]
    InvalidVehicleClass(i64),

    #[error("invalid trip id: {0:?}")]
    InvalidTripId(String),

    #[error("invalid trip start date: {0}")]
    InvalidTripStartDate(String),

    #[error("invalid trip end date: {0}")]
    InvalidTripEndDate(String),
}

#[derive(Debug, Error)]
pub enum DomainError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Driver not found: {0}")]
    DriverNotFound(String),

    #[error("Trip not found: {0}")]
    TripNotFound(String),

    #[error("Driver already exists: {0}")]
    DriverAlreadyExists(String),

    #[error("Trip already exists: {0}")]
    TripAlreadyExists(String),

    /// Any other repository failure, passed through unchanged.
    #[error("Storage error: {0}")]
    Storage(String),
}

impl DomainError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::DriverNotFound(_) | Self::TripNotFound(_))
    }

    pub fn is_conflict(&self) -> bool {
        matches!(self, Self::DriverAlreadyExists(_) | Self::TripAlreadyExists(_))
    }
}

/// Result type for domain operations
pub type DomainResult<T> = Result<T, DomainError>;

#[derive(Debug, Error)]
pub enum InfraError {
    #[error("Database error: {0}")]
    Database(#[from] sea_orm::DbErr),

    #[error("Config error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error(transparent)]
    Infra(#[from] InfraError),
}
