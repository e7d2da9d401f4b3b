use axum::{
    http::StatusCode,
    middleware::from_fn,
    response::IntoResponse,
    routing::get,
    Router,
};
use tower_http::trace::TraceLayer;

use crate::handlers::{get_options, health_check, readiness_check, recommend_usecases};
use crate::middleware::{metrics_middleware, request_id_middleware};
use crate::services::get_metrics;

async fn metrics_endpoint() -> impl IntoResponse {
    (
        StatusCode::OK,
        [("content-type", "text/plain; charset=utf-8")],
        get_metrics(),
    )
}

pub fn build_router() -> Router {
    Router::new()
        .route("/api/usecases", get(get_options).post(recommend_usecases))
        .route("/health", get(health_check))
        .route("/ready", get(readiness_check))
        .route("/metrics", get(metrics_endpoint))
        .layer(from_fn(metrics_middleware))
        .layer(
            TraceLayer::new_for_http().make_span_with(|request: &axum::http::Request<_>| {
                let request_id = request
                    .headers()
                    .get("x-request-id")
                    .and_then(|value| value.to_str().ok())
                    .unwrap_or("-");

                tracing::info_span!(
                    "http_request",
                    request_id = %request_id,
                    method = %request.method(),
                    uri = %request.uri(),
                )
            }),
        )
        .layer(from_fn(request_id_middleware))
}
