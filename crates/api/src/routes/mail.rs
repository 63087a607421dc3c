//! Email relay endpoint.

use std::sync::Arc;

use axum::Json;
use axum::extract::State;
use common::EmailRequest;
use serde::Serialize;

use crate::error::{ApiError, Endpoint};
use crate::extract::JsonBody;
use crate::state::AppState;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SendResponse {
    pub success: bool,
    pub message_id: String,
    pub timestamp: String,
    pub note: String,
}

/// POST /api/mail/send — hands the message to the configured mail sender.
#[tracing::instrument(skip(state, req))]
pub async fn send(
    State(state): State<Arc<AppState>>,
    JsonBody(req): JsonBody<EmailRequest>,
) -> Result<Json<SendResponse>, ApiError> {
    let message = req
        .into_message()
        .map_err(ApiError::validation(Endpoint::MailSend))?;

    let receipt = state
        .mailer
        .send(&message)
        .await
        .map_err(ApiError::service(Endpoint::MailSend))?;

    metrics::counter!("mail_requests_total").increment(1);

    Ok(Json(SendResponse {
        success: true,
        message_id: receipt.message_id,
        timestamp: common::iso_timestamp(),
        note: receipt.note,
    }))
}
