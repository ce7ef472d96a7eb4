//! Validated JSON extractor for Axum
//!
//! `ValidatedJson<T>` deserializes like `axum::Json<T>` and then runs
//! `validator::Validate::validate()`. Malformed bodies answer 400, shape
//! violations answer 422 with one `field: message` entry per failure.

use axum::extract::rejection::JsonRejection;
use axum::extract::FromRequest;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::de::DeserializeOwned;
use validator::{Validate, ValidationErrors};

use super::ApiResponse;

/// ```ignore
/// #[derive(Deserialize, Validate)]
/// struct CreateDriverRequest {
///     #[validate(length(min = 1))]
///     cpf: String,
/// }
///
/// async fn handler(ValidatedJson(body): ValidatedJson<CreateDriverRequest>) {}
/// ```
pub struct ValidatedJson<T>(pub T);

pub enum ValidatedJsonRejection {
    Json(JsonRejection),
    Invalid(ValidationErrors),
}

/// Flattens field errors into `field: message` strings, sorted by field so
/// the output is stable.
fn describe(errors: &ValidationErrors) -> String {
    let mut fields: Vec<_> = errors.field_errors().into_iter().collect();
    fields.sort_by(|a, b| a.0.cmp(&b.0));

    let messages: Vec<String> = fields
        .into_iter()
        .flat_map(|(field, errs)| {
            errs.iter().map(move |e| {
                let msg = e
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| e.code.to_string());
                format!("{}: {}", field, msg)
            })
        })
        .collect();

    if messages.is_empty() {
        "Validation failed".to_string()
    } else {
        messages.join("; ")
    }
}

impl IntoResponse for ValidatedJsonRejection {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            Self::Json(rejection) => (
                StatusCode::BAD_REQUEST,
                format!("Invalid JSON: {}", rejection.body_text()),
            ),
            Self::Invalid(errors) => (StatusCode::UNPROCESSABLE_ENTITY, describe(&errors)),
        };
        (status, Json(ApiResponse::<()>::error(message))).into_response()
    }
}

impl<S, T> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = ValidatedJsonRejection;

    async fn from_request(req: axum::extract::Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(ValidatedJsonRejection::Json)?;
        value.validate().map_err(ValidatedJsonRejection::Invalid)?;
        Ok(ValidatedJson(value))
    }
}

// ── Tests ──────────────────────────────────────────────────────
