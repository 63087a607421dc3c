//! Request validation errors.

use thiserror::Error;

/// A request failed a presence or length check.
///
/// The display strings are returned to callers verbatim in the `error`
/// field of a 400 response.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Search query missing or shorter than the minimum length.
    #[error("Query must be at least {min} characters")]
    QueryTooShort { min: usize },

    /// One or more of the email fields is absent or empty.
    #[error("Missing required fields: to, subject, body")]
    MissingEmailFields,
}

/// Why a search query could not be used.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QueryError {
    /// Missing or too short; the caller's mistake.
    #[error(transparent)]
    Invalid(#[from] ValidationError),

    /// Present but not text, so it cannot be matched against the directory.
    #[error("query must be a string, got {0}")]
    NotText(&'static str),
}
