//! Trip handlers

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde_json::Value;
use uuid::Uuid;

use super::dto::{CreateTripRequest, ListTripsParams, TripDto, UpdateTripRequest, TRIP_FIELDS};
use crate::application::services::{TripPatch, TripService};
use crate::domain::{DomainError, FindTripsQuery, TripInput};
use crate::interfaces::http::common::{
    bad_request, domain_error, internal_error, parse_fields, project, ApiError, ApiResponse,
    ValidatedJson,
};
use crate::interfaces::http::modules::drivers::FieldsParams;

#[derive(Clone)]
pub struct TripHandlerState {
    pub service: Arc<TripService>,
}

#[utoipa::path(
    get,
    path = "/api/v1/trips",
    tag = "Trips",
    params(ListTripsParams),
    responses(
        (status = 200, description = "Trips matching every given filter, ordered by start", body = ApiResponse<Vec<TripDto>>),
        (status = 400, description = "Invalid filter or unknown field")
    )
)]
pub async fn list_trips(
    State(state): State<TripHandlerState>,
    Query(params): Query<ListTripsParams>,
) -> Result<Json<ApiResponse<Value>>, ApiError<Value>> {
    let query = FindTripsQuery::new(
        params.cpf.as_deref(),
        params.has_load,
        params.limit,
        params.vehicle,
    )
    .map_err(|e| domain_error(DomainError::from(e)))?;
    let fields = parse_fields(params.fields.as_deref(), TRIP_FIELDS).map_err(bad_request)?;

    let trips = state.service.list(&query).await.map_err(domain_error)?;
    let items = trips
        .iter()
        .map(|t| project(&TripDto::from(t), fields.as_deref()))
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| internal_error(e.to_string()))?;

    Ok(Json(ApiResponse::success(Value::Array(items))))
}

#[utoipa::path(
    post,
    path = "/api/v1/trips",
    tag = "Trips",
    request_body = CreateTripRequest,
    responses(
        (status = 201, description = "Trip registered with a generated id", body = ApiResponse<TripDto>),
        (status = 400, description = "Invalid trip data"),
        (status = 422, description = "Missing required field")
    )
)]
pub async fn create_trip(
    State(state): State<TripHandlerState>,
    ValidatedJson(request): ValidatedJson<CreateTripRequest>,
) -> Result<(StatusCode, Json<ApiResponse<TripDto>>), ApiError<TripDto>> {
    let input = TripInput::try_from(request)
        .map_err(|e| domain_error(DomainError::Validation(e)))?;
    let trip = state
        .service
        .create(Uuid::new_v4().to_string(), input)
        .await
        .map_err(domain_error)?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(TripDto::from(&trip))),
    ))
}

#[utoipa::path(
    get,
    path = "/api/v1/trips/{id}",
    tag = "Trips",
    params(("id" = String, Path, description = "Trip id"), FieldsParams),
    responses(
        (status = 200, description = "Trip details", body = ApiResponse<TripDto>),
        (status = 400, description = "Unknown field"),
        (status = 404, description = "Not found")
    )
)]
pub async fn get_trip(
    State(state): State<TripHandlerState>,
    Path(id): Path<String>,
    Query(params): Query<FieldsParams>,
) -> Result<Json<ApiResponse<Value>>, ApiError<Value>> {
    let fields = parse_fields(params.fields.as_deref(), TRIP_FIELDS).map_err(bad_request)?;
    let trip = state.service.get(&id).await.map_err(domain_error)?;
    let value = project(&TripDto::from(&trip), fields.as_deref())
        .map_err(|e| internal_error(e.to_string()))?;

    Ok(Json(ApiResponse::success(value)))
}

#[utoipa::path(
    patch,
    path = "/api/v1/trips/{id}",
    tag = "Trips",
    params(("id" = String, Path, description = "Trip id")),
    request_body = UpdateTripRequest,
    responses(
        (status = 200, description = "Updated", body = ApiResponse<TripDto>),
        (status = 400, description = "Invalid value; nothing was changed"),
        (status = 404, description = "Not found")
    )
)]
pub async fn update_trip(
    State(state): State<TripHandlerState>,
    Path(id): Path<String>,
    ValidatedJson(request): ValidatedJson<UpdateTripRequest>,
) -> Result<Json<ApiResponse<TripDto>>, ApiError<TripDto>> {
    let patch = TripPatch::try_from(request)
        .map_err(|e| domain_error(DomainError::Validation(e)))?;
    let trip = state
        .service
        .update(&id, &patch)
        .await
        .map_err(domain_error)?;

    Ok(Json(ApiResponse::success(TripDto::from(&trip))))
}

#[utoipa::path(
    delete,
    path = "/api/v1/trips/{id}",
    tag = "Trips",
    params(("id" = String, Path, description = "Trip id")),
    responses(
        (status = 200, description = "Deleted"),
        (status = 404, description = "Not found")
    )
)]
pub async fn delete_trip(
    State(state): State<TripHandlerState>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<String>>, ApiError<String>> {
    state.service.delete(&id).await.map_err(domain_error)?;
    Ok(Json(ApiResponse::success(format!("Trip {} deleted", id))))
}
