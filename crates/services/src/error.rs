//! Service error types.

use thiserror::Error;

/// Errors raised by a capability implementation.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// Directory backend failure.
    #[error("Directory service error: {0}")]
    Directory(String),

    /// Mail backend failure.
    #[error("Mail service error: {0}")]
    Mail(String),

    /// Token validation backend failure.
    #[error("Token service error: {0}")]
    Token(String),

    /// Document store failure.
    #[error("Document store error: {0}")]
    DocumentStore(String),
}

/// Convenience type alias for service results.
pub type Result<T> = std::result::Result<T, ServiceError>;
