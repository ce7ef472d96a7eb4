//! `GET /metrics` in Prometheus text format, rendered from the
//! process-wide `metrics-exporter-prometheus` recorder.

use axum::{extract::State, http::header, response::IntoResponse};
use metrics_exporter_prometheus::PrometheusHandle;

#[derive(Clone)]
pub struct MetricsState {
    pub handle: PrometheusHandle,
}

pub async fn prometheus_metrics(State(state): State<MetricsState>) -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4; charset=utf-8")],
        state.handle.render(),
    )
}
