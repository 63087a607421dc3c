//! Staff directory search.

use std::sync::Arc;

use axum::Json;
use axum::extract::State;
use common::{DirectoryUser, SearchQuery};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{ApiError, Endpoint};
use crate::extract::JsonBody;
use crate::state::AppState;

/// The query is raw JSON: clients occasionally send numbers or arrays.
#[derive(Debug, Default, Deserialize)]
pub struct SearchRequest {
    pub query: Option<Value>,
}

#[derive(Serialize)]
pub struct SearchResponse {
    pub users: Vec<DirectoryUser>,
    pub count: usize,
    pub query: String,
}

/// POST /api/directory/search — case-insensitive substring match over
/// name, mail, department and job title.
#[tracing::instrument(skip(state, req))]
pub async fn search(
    State(state): State<Arc<AppState>>,
    JsonBody(req): JsonBody<SearchRequest>,
) -> Result<Json<SearchResponse>, ApiError> {
    let query = SearchQuery::from_json(req.query.as_ref())
        .map_err(ApiError::query(Endpoint::DirectorySearch))?;

    let users = state
        .directory
        .search(&query)
        .await
        .map_err(ApiError::service(Endpoint::DirectorySearch))?;

    metrics::counter!("directory_searches_total").increment(1);

    Ok(Json(SearchResponse {
        count: users.len(),
        users,
        query: query.into_inner(),
    }))
}
