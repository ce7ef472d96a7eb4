//! Driver handlers

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde_json::Value;

use super::dto::{
    CreateDriverRequest, DriverDto, FieldsParams, ListDriversParams, UpdateDriverRequest,
    DRIVER_FIELDS,
};
use crate::application::services::DriverService;
use crate::domain::{DomainError, FindDriversQuery};
use crate::interfaces::http::common::{
    bad_request, domain_error, internal_error, parse_fields, project, ApiError, ApiResponse,
    ValidatedJson,
};

#[derive(Clone)]
pub struct DriverHandlerState {
    pub service: Arc<DriverService>,
}

fn render(dtos: &[DriverDto], fields: Option<&[String]>) -> Result<Vec<Value>, ApiError<Value>> {
    dtos.iter()
        .map(|d| project(d, fields).map_err(|e| internal_error(e.to_string())))
        .collect()
}

#[utoipa::path(
    get,
    path = "/api/v1/drivers",
    tag = "Drivers",
    params(ListDriversParams),
    responses(
        (status = 200, description = "Drivers matching every given filter, ordered by CPF", body = ApiResponse<Vec<DriverDto>>),
        (status = 400, description = "Invalid filter or unknown field")
    )
)]
pub async fn list_drivers(
    State(state): State<DriverHandlerState>,
    Query(params): Query<ListDriversParams>,
) -> Result<Json<ApiResponse<Value>>, ApiError<Value>> {
    let query = FindDriversQuery::new(
        params.cnh.as_deref(),
        params.gender.as_deref(),
        params.has_vehicle,
        params.limit,
    )
    .map_err(|e| domain_error(DomainError::from(e)))?;
    let fields = parse_fields(params.fields.as_deref(), DRIVER_FIELDS).map_err(bad_request)?;

    let drivers = state.service.list(&query).await.map_err(domain_error)?;
    let dtos: Vec<DriverDto> = drivers.iter().map(DriverDto::from).collect();
    let items = render(&dtos, fields.as_deref())?;

    Ok(Json(ApiResponse::success(Value::Array(items))))
}

#[utoipa::path(
    post,
    path = "/api/v1/drivers",
    tag = "Drivers",
    request_body = CreateDriverRequest,
    responses(
        (status = 201, description = "Driver registered", body = ApiResponse<DriverDto>),
        (status = 400, description = "Invalid driver data"),
        (status = 409, description = "CPF already registered"),
        (status = 422, description = "Missing required field")
    )
)]
pub async fn create_driver(
    State(state): State<DriverHandlerState>,
    ValidatedJson(request): ValidatedJson<CreateDriverRequest>,
) -> Result<(StatusCode, Json<ApiResponse<DriverDto>>), ApiError<DriverDto>> {
    let driver = state
        .service
        .create(request.into())
        .await
        .map_err(domain_error)?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(DriverDto::from(&driver))),
    ))
}

#[utoipa::path(
    get,
    path = "/api/v1/drivers/{cpf}",
    tag = "Drivers",
    params(("cpf" = String, Path, description = "11-digit CPF"), FieldsParams),
    responses(
        (status = 200, description = "Driver details", body = ApiResponse<DriverDto>),
        (status = 400, description = "Invalid CPF or unknown field"),
        (status = 404, description = "Not found")
    )
)]
pub async fn get_driver(
    State(state): State<DriverHandlerState>,
    Path(cpf): Path<String>,
    Query(params): Query<FieldsParams>,
) -> Result<Json<ApiResponse<Value>>, ApiError<Value>> {
    let fields = parse_fields(params.fields.as_deref(), DRIVER_FIELDS).map_err(bad_request)?;
    let driver = state.service.get(&cpf).await.map_err(domain_error)?;
    let value = project(&DriverDto::from(&driver), fields.as_deref())
        .map_err(|e| internal_error(e.to_string()))?;

    Ok(Json(ApiResponse::success(value)))
}

#[utoipa::path(
    patch,
    path = "/api/v1/drivers/{cpf}",
    tag = "Drivers",
    params(("cpf" = String, Path, description = "11-digit CPF")),
    request_body = UpdateDriverRequest,
    responses(
        (status = 200, description = "Updated", body = ApiResponse<DriverDto>),
        (status = 400, description = "Invalid value; nothing was changed"),
        (status = 404, description = "Not found")
    )
)]
pub async fn update_driver(
    State(state): State<DriverHandlerState>,
    Path(cpf): Path<String>,
    ValidatedJson(request): ValidatedJson<UpdateDriverRequest>,
) -> Result<Json<ApiResponse<DriverDto>>, ApiError<DriverDto>> {
    let driver = state
        .service
        .update(&cpf, &request.into())
        .await
        .map_err(domain_error)?;

    Ok(Json(ApiResponse::success(DriverDto::from(&driver))))
}

#[utoipa::path(
    delete,
    path = "/api/v1/drivers/{cpf}",
    tag = "Drivers",
    params(("cpf" = String, Path, description = "11-digit CPF")),
    responses(
        (status = 200, description = "Deleted"),
        (status = 404, description = "Not found")
    )
)]
pub async fn delete_driver(
    State(state): State<DriverHandlerState>,
    Path(cpf): Path<String>,
) -> Result<Json<ApiResponse<String>>, ApiError<String>> {
    state.service.delete(&cpf).await.map_err(domain_error)?;
    Ok(Json(ApiResponse::success(format!("Driver {} deleted", cpf))))
}
