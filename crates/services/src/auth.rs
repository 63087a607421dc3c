//! Token validator trait and the accept-everything placeholder.
//!
//! [`AcceptAllTokenValidator`] performs no verification at all. It exists so
//! the kiosk frontend has an endpoint to call; it is not an authorization
//! mechanism and must be replaced before anything depends on it.

use async_trait::async_trait;

use crate::error::Result;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TokenValidation {
    pub valid: bool,
}

/// Trait for checking an access token.
#[async_trait]
pub trait TokenValidator: Send + Sync {
    /// Validates `token`, which is `None` when the caller sent none.
    async fn validate(&self, token: Option<&str>) -> Result<TokenValidation>;
}

#[derive(Debug, Clone, Default)]
pub struct AcceptAllTokenValidator;

impl AcceptAllTokenValidator {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl TokenValidator for AcceptAllTokenValidator {
    async fn validate(&self, token: Option<&str>) -> Result<TokenValidation> {
        tracing::debug!(token_present = token.is_some(), "token validation");
        Ok(TokenValidation { valid: true })
    }
}
