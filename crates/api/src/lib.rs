//! HTTP API server for the visitor kiosk.
//!
//! Serves staff directory search plus stubbed mail, token and SharePoint
//! endpoints as JSON, with structured logging (tracing) and Prometheus
//! metrics.

pub mod config;
pub mod error;
pub mod extract;
pub mod routes;
pub mod state;

use std::sync::Arc;

use axum::Router;
use axum::extract::DefaultBodyLimit;
use axum::routing::{get, post};
use metrics_exporter_prometheus::PrometheusHandle;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

pub use config::Config;
pub use state::AppState;

/// Creates the Axum application router with all routes and shared state.
///
/// Unknown paths and known paths called with the wrong method both get
/// the JSON 404. Bodies over `body_limit` bytes and handler panics get the
/// catch-all 500.
pub fn create_app(
    state: Arc<AppState>,
    metrics_handle: PrometheusHandle,
    body_limit: usize,
) -> Router {
    let metrics_router = Router::new()
        .route("/metrics", get(routes::metrics::get))
        .with_state(metrics_handle);

    Router::new()
        .route("/", get(routes::health::root))
        .route("/health", get(routes::health::check))
        .route("/api/directory/search", post(routes::directory::search))
        .route("/api/mail/send", post(routes::mail::send))
        .route("/api/auth/token", post(routes::auth::token))
        .route("/api/sharepoint/upload", post(routes::sharepoint::upload))
        .with_state(state)
        .merge(metrics_router)
        .fallback(routes::fallback::not_found)
        .method_not_allowed_fallback(routes::fallback::not_found)
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(CatchPanicLayer::custom(error::panic_response))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
}
