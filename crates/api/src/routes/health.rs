//! Service status endpoints.

use std::sync::Arc;

use axum::Json;
use axum::extract::State;
use serde::Serialize;

use crate::state::AppState;

pub const SERVICE_STATUS: &str = "Visitor Kiosk API is running!";

#[derive(Serialize)]
pub struct StatusResponse {
    pub status: &'static str,
    pub timestamp: String,
    pub version: &'static str,
    pub port: u16,
}

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub timestamp: String,
    /// Seconds since startup.
    pub uptime: f64,
}

/// GET / — service banner with version and port.
pub async fn root(State(state): State<Arc<AppState>>) -> Json<StatusResponse> {
    Json(StatusResponse {
        status: SERVICE_STATUS,
        timestamp: common::iso_timestamp(),
        version: env!("CARGO_PKG_VERSION"),
        port: state.port,
    })
}

/// GET /health — liveness with process uptime.
pub async fn check(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        timestamp: common::iso_timestamp(),
        uptime: state.uptime().as_secs_f64(),
    })
}
