//! Shared HTTP plumbing: response envelope, error mapping, extractors

pub mod projection;
pub mod validated_json;

pub use projection::{parse_fields, project};
pub use validated_json::{ValidatedJson, ValidatedJsonRejection};

use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};
use tracing::{error, warn};
use utoipa::ToSchema;

use crate::domain::DomainError;

/// Standard API response envelope
///
/// Every REST endpoint wraps its payload:
/// on success `{"success": true, "data": {...}}`,
/// on failure `{"success": false, "data": null, "error": "..."}`.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(message.into()),
        }
    }
}

/// Error half of every handler result.
pub type ApiError<T> = (StatusCode, Json<ApiResponse<T>>);

/// HTTP status for a domain failure.
pub fn status_for(err: &DomainError) -> StatusCode {
    match err {
        DomainError::Validation(_) => StatusCode::BAD_REQUEST,
        DomainError::DriverNotFound(_) | DomainError::TripNotFound(_) => StatusCode::NOT_FOUND,
        DomainError::DriverAlreadyExists(_) | DomainError::TripAlreadyExists(_) => {
            StatusCode::CONFLICT
        }
        DomainError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

pub fn domain_error<T>(err: DomainError) -> ApiError<T> {
    let status = status_for(&err);
    if status.is_server_error() {
        error!(error = %err, "Request failed");
    } else {
        warn!(status = status.as_u16(), error = %err, "Request rejected");
    }
    (status, Json(ApiResponse::error(err.to_string())))
}

pub fn bad_request<T>(message: impl Into<String>) -> ApiError<T> {
    (StatusCode::BAD_REQUEST, Json(ApiResponse::error(message)))
}

pub fn internal_error<T>(message: impl Into<String>) -> ApiError<T> {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ApiResponse::error(message)),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ValidationError;

    #[test]
    fn maps_each_error_kind_to_status() {
        let cases = [
            (
                DomainError::Validation(ValidationError::InvalidGender("x".into())),
                StatusCode::BAD_REQUEST,
            ),
            (DomainError::DriverNotFound("1".into()), StatusCode::NOT_FOUND),
            (DomainError::TripNotFound("1".into()), StatusCode::NOT_FOUND),
            (DomainError::DriverAlreadyExists("1".into()), StatusCode::CONFLICT),
            (DomainError::TripAlreadyExists("1".into()), StatusCode::CONFLICT),
            (
                DomainError::Storage("disk".into()),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];
        for (err, expected) in cases {
            assert_eq!(status_for(&err), expected, "{err}");
        }
    }

    #[test]
    fn error_envelope_omits_nothing_but_error_on_success() {
        let ok = serde_json::to_value(ApiResponse::success(1)).unwrap();
        assert_eq!(ok, serde_json::json!({"success": true, "data": 1}));

        let (status, Json(body)) = domain_error::<()>(DomainError::TripNotFound("t".into()));
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert!(!body.success);
        assert_eq!(body.error.as_deref(), Some("Trip not found: t"));
    }
}
