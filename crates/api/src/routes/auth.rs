//! Token check used by the kiosk frontend.
//!
//! The default validator accepts everything; see
//! [`services::AcceptAllTokenValidator`].

use std::sync::Arc;

use axum::Json;
use axum::extract::State;
use serde::Serialize;
use serde_json::Value;

use crate::error::{ApiError, Endpoint};
use crate::extract::JsonBody;
use crate::state::AppState;

#[derive(Serialize)]
pub struct TokenResponse {
    pub success: bool,
    pub timestamp: String,
    pub valid: bool,
}

/// POST /api/auth/token — accepts any body; a string `token` field, if
/// present, is passed to the validator.
#[tracing::instrument(skip(state, body))]
pub async fn token(
    State(state): State<Arc<AppState>>,
    JsonBody(body): JsonBody<Value>,
) -> Result<Json<TokenResponse>, ApiError> {
    let token = body.get("token").and_then(Value::as_str);

    let validation = state
        .tokens
        .validate(token)
        .await
        .map_err(ApiError::service(Endpoint::TokenValidation))?;

    metrics::counter!("token_validations_total").increment(1);

    Ok(Json(TokenResponse {
        success: true,
        timestamp: common::iso_timestamp(),
        valid: validation.valid,
    }))
}
