//! API Router with Swagger UI

use std::sync::Arc;
use std::time::Instant;

use axum::{
    middleware,
    routing::get,
    Router,
};
use metrics_exporter_prometheus::PrometheusHandle;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::application::services::{DriverService, TripService};
use crate::domain::RepositoryProvider;
use crate::interfaces::http::common::ApiResponse;
use crate::interfaces::http::modules::{
    drivers::{self, DriverHandlerState},
    health::{self, HealthState},
    metrics::{self as http_metrics, MetricsState},
    request_id::request_id_middleware,
    trips::{self, TripHandlerState},
};

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        // Health
        health::health_check,
        // Drivers
        drivers::list_drivers,
        drivers::create_driver,
        drivers::get_driver,
        drivers::update_driver,
        drivers::delete_driver,
        // Trips
        trips::list_trips,
        trips::create_trip,
        trips::get_trip,
        trips::update_trip,
        trips::delete_trip,
    ),
    components(
        schemas(
            ApiResponse<String>,
            health::HealthResponse,
            health::StorageHealth,
            drivers::DriverDto,
            drivers::CreateDriverRequest,
            drivers::UpdateDriverRequest,
            trips::TripDto,
            trips::CoordinatesDto,
            trips::CoordinatesPatchDto,
            trips::CreateTripRequest,
            trips::UpdateTripRequest,
        )
    ),
    tags(
        (name = "Health", description = "Service and storage health"),
        (name = "Drivers", description = "Truck driver registry keyed by CPF"),
        (name = "Trips", description = "Driver trips between two locations"),
    ),
    info(
        title = "Truckers API",
        version = "1.0.0",
        description = "REST API for registering truck drivers and their trips",
        license(name = "MIT")
    )
)]
pub struct ApiDoc;

/// Create the API router with all routes
pub fn create_api_router(
    repos: Arc<dyn RepositoryProvider>,
    prometheus_handle: PrometheusHandle,
) -> Router {
    let driver_state = DriverHandlerState {
        service: Arc::new(DriverService::new(repos.clone())),
    };
    let trip_state = TripHandlerState {
        service: Arc::new(TripService::new(repos.clone())),
    };
    let health_state = HealthState {
        repos,
        started_at: Arc::new(Instant::now()),
    };

    let driver_routes = Router::new()
        .route(
            "/",
            get(drivers::list_drivers).post(drivers::create_driver),
        )
        .route(
            "/{cpf}",
            get(drivers::get_driver)
                .patch(drivers::update_driver)
                .delete(drivers::delete_driver),
        )
        .with_state(driver_state);

    let trip_routes = Router::new()
        .route("/", get(trips::list_trips).post(trips::create_trip))
        .route(
            "/{id}",
            get(trips::get_trip)
                .patch(trips::update_trip)
                .delete(trips::delete_trip),
        )
        .with_state(trip_state);

    let health_routes = Router::new()
        .route("/health", get(health::health_check))
        .with_state(health_state);

    let metrics_routes = Router::new()
        .route("/metrics", get(http_metrics::prometheus_metrics))
        .with_state(MetricsState {
            handle: prometheus_handle,
        });

    let swagger_routes = SwaggerUi::new("/docs").url("/api-doc/openapi.json", ApiDoc::openapi());

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .merge(swagger_routes)
        .merge(health_routes)
        .merge(metrics_routes)
        .nest("/api/v1/drivers", driver_routes)
        .nest("/api/v1/trips", trip_routes)
        .layer(middleware::from_fn(http_metrics::http_metrics_middleware))
        .layer(middleware::from_fn(request_id_middleware))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}

// ── Tests ──────────────────────────────────────────────────────
