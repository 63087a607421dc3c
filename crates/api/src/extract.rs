//! Lenient JSON body extractor.
//!
//! Kiosk clients do not always send a body or a JSON content type (the
//! token check is typically a bare POST). Such requests are read as an
//! empty object, so missing fields surface as validation errors instead
//! of rejections. A body that claims to be JSON but does not parse, or that
//! exceeds the body limit, is a transport failure.

use axum::body::Bytes;
use axum::extract::{FromRequest, Request};
use axum::http::HeaderMap;
use axum::http::header::CONTENT_TYPE;
use serde::de::DeserializeOwned;

use crate::error::ApiError;

const EMPTY_OBJECT: &[u8] = b"{}";

/// Deserializes the request body as JSON, treating an absent or non-JSON
/// body as `{}`.
#[derive(Debug, Clone)]
pub struct JsonBody<T>(pub T);

impl<S, T> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let is_json = has_json_content_type(req.headers());
        let bytes = Bytes::from_request(req, state).await?;

        let raw: &[u8] = if is_json && !bytes.is_empty() {
            &bytes
        } else {
            EMPTY_OBJECT
        };
        Ok(JsonBody(serde_json::from_slice(raw)?))
    }
}

fn has_json_content_type(headers: &HeaderMap) -> bool {
    let Some(content_type) = headers.get(CONTENT_TYPE).and_then(|v| v.to_str().ok()) else {
        return false;
    };
    let essence = content_type
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase();
    essence == "application/json"
}
