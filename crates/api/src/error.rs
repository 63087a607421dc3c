//! API error types with HTTP response mapping.
//!
//! Every failure is turned into a JSON body here. Error bodies always carry
//! `error`; endpoint errors also carry the endpoint's fallback fields so
//! clients can read them with the same shape as a success.

use std::any::Any;

use axum::Json;
use axum::extract::rejection::BytesRejection;
use axum::http::{Method, StatusCode};
use axum::response::{IntoResponse, Response};
use common::{QueryError, ValidationError};
use serde_json::{Map, Value, json};
use services::ServiceError;

/// The endpoint an error was raised from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    DirectorySearch,
    MailSend,
    TokenValidation,
    SharePointUpload,
}

impl Endpoint {
    fn failure_message(self) -> &'static str {
        match self {
            Endpoint::DirectorySearch => "Directory search failed",
            Endpoint::MailSend => "Email send failed",
            Endpoint::TokenValidation => "Token validation failed",
            Endpoint::SharePointUpload => "SharePoint upload failed",
        }
    }

    fn add_fallback_fields(self, body: &mut Map<String, Value>) {
        match self {
            Endpoint::DirectorySearch => {
                body.insert("users".into(), Value::Array(Vec::new()));
                body.insert("count".into(), json!(0));
            }
            Endpoint::MailSend | Endpoint::TokenValidation | Endpoint::SharePointUpload => {
                body.insert("success".into(), Value::Bool(false));
            }
        }
    }
}

/// API-level error type that maps to HTTP responses.
#[derive(Debug)]
pub enum ApiError {
    /// The request failed a presence or length check.
    Validation {
        endpoint: Endpoint,
        source: ValidationError,
    },
    /// A backing service failed while handling the request.
    Service {
        endpoint: Endpoint,
        source: ServiceError,
    },
    /// The handler could not process an otherwise well-formed request.
    Internal { endpoint: Endpoint, message: String },
    /// No route for the method and path.
    NotFound { method: Method, path: String },
    /// The request body could not be read or parsed.
    Transport(String),
}

impl ApiError {
    pub fn validation(endpoint: Endpoint) -> impl FnOnce(ValidationError) -> Self {
        move |source| ApiError::Validation { endpoint, source }
    }

    pub fn service(endpoint: Endpoint) -> impl FnOnce(ServiceError) -> Self {
        move |source| ApiError::Service { endpoint, source }
    }

    /// Splits a query error into a 400 for missing/short queries and an
    /// endpoint 500 for values that are not text.
    pub fn query(endpoint: Endpoint) -> impl FnOnce(QueryError) -> Self {
        move |err| match err {
            QueryError::Invalid(source) => ApiError::Validation { endpoint, source },
            QueryError::NotText(_) => ApiError::Internal {
                endpoint,
                message: err.to_string(),
            },
        }
    }

    fn kind(&self) -> &'static str {
        match self {
            ApiError::Validation { .. } => "validation",
            ApiError::Service { .. } => "service",
            ApiError::Internal { .. } => "internal",
            ApiError::NotFound { .. } => "not_found",
            ApiError::Transport(_) => "transport",
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        metrics::counter!("api_errors_total", "kind" => self.kind()).increment(1);

        match self {
            ApiError::Validation { endpoint, source } => {
                tracing::debug!(?endpoint, error = %source, "request validation failed");
                let mut body = Map::new();
                body.insert("error".into(), Value::String(source.to_string()));
                endpoint.add_fallback_fields(&mut body);
                (StatusCode::BAD_REQUEST, Json(Value::Object(body))).into_response()
            }
            ApiError::Service { endpoint, source } => endpoint_failure(endpoint, &source),
            ApiError::Internal { endpoint, message } => endpoint_failure(endpoint, &message),
            ApiError::NotFound { method, path } => {
                let body = json!({
                    "error": "Endpoint not found",
                    "path": path,
                    "method": method.as_str(),
                });
                (StatusCode::NOT_FOUND, Json(body)).into_response()
            }
            ApiError::Transport(msg) => {
                tracing::error!(error = %msg, "unhandled request error");
                internal_error()
            }
        }
    }
}

fn endpoint_failure(endpoint: Endpoint, cause: &dyn std::fmt::Display) -> Response {
    tracing::error!(?endpoint, error = %cause, "{}", endpoint.failure_message());
    let mut body = Map::new();
    body.insert(
        "error".into(),
        Value::String(endpoint.failure_message().to_string()),
    );
    body.insert("message".into(), Value::String(cause.to_string()));
    endpoint.add_fallback_fields(&mut body);
    (StatusCode::INTERNAL_SERVER_ERROR, Json(Value::Object(body))).into_response()
}

impl From<BytesRejection> for ApiError {
    fn from(rejection: BytesRejection) -> Self {
        ApiError::Transport(rejection.body_text())
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::Transport(format!("invalid JSON body: {err}"))
    }
}

/// The catch-all 500 body, used when nothing more specific applies.
pub fn internal_error() -> Response {
    let body = json!({
        "error": "Internal server error",
        "timestamp": common::iso_timestamp(),
    });
    (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
}

/// Converts a handler panic into the catch-all 500.
pub fn panic_response(panic: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = panic.downcast_ref::<String>() {
        s.as_str()
    } else if let Some(s) = panic.downcast_ref::<&str>() {
        s
    } else {
        "unknown panic payload"
    };
    metrics::counter!("api_errors_total", "kind" => "panic").increment(1);
    tracing::error!(panic = %detail, "handler panicked");
    internal_error()
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn body_json(response: Response) -> Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn validation_on_directory_adds_empty_users() {
        let err = ApiError::validation(Endpoint::DirectorySearch)(
            ValidationError::QueryTooShort { min: 2 },
        );
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let json = body_json(response).await;
        assert_eq!(json["error"], "Query must be at least 2 characters");
        assert_eq!(json["users"], json!([]));
        assert_eq!(json["count"], 0);
        assert!(json.get("success").is_none());
    }

    #[tokio::test]
    async fn service_failure_carries_message_and_success_false() {
        let err = ApiError::service(Endpoint::SharePointUpload)(ServiceError::DocumentStore(
            "site unreachable".to_string(),
        ));
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let json = body_json(response).await;
        assert_eq!(json["error"], "SharePoint upload failed");
        assert_eq!(json["message"], "Document store error: site unreachable");
        assert_eq!(json["success"], false);
    }

    #[tokio::test]
    async fn non_text_query_is_a_directory_failure() {
        let err = ApiError::query(Endpoint::DirectorySearch)(QueryError::NotText("number"));
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let json = body_json(response).await;
        assert_eq!(json["error"], "Directory search failed");
        assert_eq!(json["message"], "query must be a string, got number");
        assert_eq!(json["users"], json!([]));
        assert_eq!(json["count"], 0);
    }

    #[tokio::test]
    async fn short_query_stays_a_validation_error() {
        let err = ApiError::query(Endpoint::DirectorySearch)(QueryError::Invalid(
            ValidationError::QueryTooShort { min: 2 },
        ));
        assert_eq!(err.into_response().status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn not_found_reports_path_and_method() {
        let err = ApiError::NotFound {
            method: Method::DELETE,
            path: "/api/unknown?x=1".to_string(),
        };
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let json = body_json(response).await;
        assert_eq!(json["error"], "Endpoint not found");
        assert_eq!(json["path"], "/api/unknown?x=1");
        assert_eq!(json["method"], "DELETE");
    }

    #[tokio::test]
    async fn transport_error_is_generic() {
        let response = ApiError::Transport("bad bytes".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let json = body_json(response).await;
        assert_eq!(json["error"], "Internal server error");
        assert!(json["timestamp"].as_str().is_some());
        assert!(json.get("message").is_none());
    }

    #[tokio::test]
    async fn panic_payloads_map_to_internal_error() {
        let response = panic_response(Box::new("boom"));
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let json = body_json(response).await;
        assert_eq!(json["error"], "Internal server error");
    }
}
