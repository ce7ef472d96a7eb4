//! HTTP request metrics middleware

use std::time::Instant;

use axum::{body::Body, extract::MatchedPath, http::Request, middleware::Next, response::Response};

/// Records `truckers_http_requests_total` (method, path, status) and
/// `truckers_http_request_duration_seconds` (method, path). The path label is
/// the matched route template so CPFs and trip ids don't explode cardinality.
pub async fn http_metrics_middleware(request: Request<Body>, next: Next) -> Response {
    let method = request.method().to_string();
    let path = request
        .extensions()
        .get::<MatchedPath>()
        .map(|mp| mp.as_str().to_string())
        .unwrap_or_else(|| "unmatched".to_string());

    let start = Instant::now();
    let response = next.run(request).await;
    let elapsed = start.elapsed().as_secs_f64();

    let status = response.status().as_u16().to_string();
    metrics::counter!(
        "truckers_http_requests_total",
        "method" => method.clone(),
        "path" => path.clone(),
        "status" => status
    )
    .increment(1);
    metrics::histogram!(
        "truckers_http_request_duration_seconds",
        "method" => method,
        "path" => path
    )
    .record(elapsed);

    response
}
