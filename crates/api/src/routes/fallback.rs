//! Handler for requests no route accepts.

use axum::extract::OriginalUri;
use axum::http::Method;

use crate::error::ApiError;

/// Any unmatched method or path — returns 404 naming the request target.
pub async fn not_found(method: Method, OriginalUri(uri): OriginalUri) -> ApiError {
    let path = uri
        .path_and_query()
        .map_or_else(|| uri.path().to_string(), |pq| pq.as_str().to_string());
    ApiError::NotFound { method, path }
}
