//! Health check handler

use std::sync::Arc;
use std::time::Instant;

use axum::{extract::State, http::StatusCode, Json};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{FindDriversQuery, RepositoryProvider};

/// Health check state
#[derive(Clone)]
pub struct HealthState {
    pub repos: Arc<dyn RepositoryProvider>,
    pub started_at: Arc<Instant>,
}

/// Service health response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub uptime_seconds: u64,
    pub storage: StorageHealth,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct StorageHealth {
    /// `memory` or `sqlite`
    pub backend: String,
    pub status: String,
    pub latency_ms: Option<u64>,
}

#[utoipa::path(
    get,
    path = "/health",
    tag = "Health",
    responses(
        (status = 200, description = "Service is healthy", body = HealthResponse),
        (status = 503, description = "Storage is unreachable", body = HealthResponse)
    )
)]
pub async fn health_check(State(state): State<HealthState>) -> (StatusCode, Json<HealthResponse>) {
    // One-row read as a storage probe
    let probe = FindDriversQuery {
        limit: Some(1),
        ..Default::default()
    };
    let probe_start = Instant::now();
    let storage = match state.repos.drivers().find(&probe).await {
        Ok(_) => StorageHealth {
            backend: state.repos.backend().to_string(),
            status: "ok".to_string(),
            latency_ms: Some(probe_start.elapsed().as_millis() as u64),
        },
        Err(e) => {
            tracing::warn!(error = %e, "Storage health probe failed");
            StorageHealth {
                backend: state.repos.backend().to_string(),
                status: "error".to_string(),
                latency_ms: None,
            }
        }
    };

    let (http_status, status) = if storage.status == "ok" {
        (StatusCode::OK, "ok")
    } else {
        (StatusCode::SERVICE_UNAVAILABLE, "degraded")
    };

    (
        http_status,
        Json(HealthResponse {
            status: status.to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            uptime_seconds: state.started_at.elapsed().as_secs(),
            storage,
        }),
    )
}
