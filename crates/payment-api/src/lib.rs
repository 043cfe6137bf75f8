//! HTTP liveness probe for the payment service.
//!
//! Serves `GET /inner-api/payment/health` with structured logging (tracing)
//! and Prometheus metrics.

pub mod config;
pub mod error;
pub mod routes;
pub mod state;
pub mod telemetry;

use axum::Router;
use axum::middleware;
use axum::routing::get;
use metrics_exporter_prometheus::PrometheusHandle;
use tower_http::trace::TraceLayer;

pub use state::AppState;

/// Path prefix of the payment service's internal API.
pub const INNER_API_PREFIX: &str = "/inner-api/payment";

/// Creates the Axum application router with all routes and shared state.
pub fn create_app(state: AppState, metrics_handle: PrometheusHandle) -> Router {
    let metrics_router = Router::new()
        .route("/metrics", get(routes::metrics::get))
        .with_state(metrics_handle);

    let inner_api = Router::new().route(
        "/health",
        get(routes::health::check).fallback(routes::method_not_allowed),
    );

    Router::new()
        .nest(INNER_API_PREFIX, inner_api)
        .with_state(state)
        .merge(metrics_router)
        .fallback(routes::not_found)
        .layer(middleware::from_fn(routes::metrics::track_requests))
        .layer(TraceLayer::new_for_http())
}
