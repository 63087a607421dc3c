//! Monthly visitor report upload.

use std::sync::Arc;

use axum::Json;
use axum::extract::State;
use common::UploadPayload;
use serde::Serialize;
use serde_json::Value;

use crate::error::{ApiError, Endpoint};
use crate::extract::JsonBody;
use crate::state::AppState;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadResponse {
    pub success: bool,
    pub visitors_uploaded: usize,
    pub staff_uploaded: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub month: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub year: Option<Value>,
    pub timestamp: String,
}

/// POST /api/sharepoint/upload — reports how many visitor and staff
/// records the document store accepted.
#[tracing::instrument(skip(state, payload))]
pub async fn upload(
    State(state): State<Arc<AppState>>,
    JsonBody(payload): JsonBody<UploadPayload>,
) -> Result<Json<UploadResponse>, ApiError> {
    let receipt = state
        .documents
        .upload_month(&payload)
        .await
        .map_err(ApiError::service(Endpoint::SharePointUpload))?;

    metrics::counter!("sharepoint_uploads_total").increment(1);

    Ok(Json(UploadResponse {
        success: true,
        visitors_uploaded: receipt.visitors_uploaded,
        staff_uploaded: receipt.staff_uploaded,
        month: payload.month_name,
        year: payload.year,
        timestamp: common::iso_timestamp(),
    }))
}
