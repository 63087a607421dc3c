//! Shared application state.

use std::sync::Arc;
use std::time::{Duration, Instant};

use services::{
    AcceptAllTokenValidator, DirectorySource, DocumentStore, LoggingDocumentStore,
    LoggingMailSender, MailSender, TokenValidator,
};

/// Capabilities and process facts accessible from all handlers.
///
/// Everything here is read-only after startup.
pub struct AppState {
    pub directory: Arc<dyn DirectorySource>,
    pub mailer: Arc<dyn MailSender>,
    pub tokens: Arc<dyn TokenValidator>,
    pub documents: Arc<dyn DocumentStore>,
    /// Port reported by `GET /`.
    pub port: u16,
    started_at: Instant,
}

impl AppState {
    /// Creates state around `directory`, with the log-only mail sender and
    /// document store and the accept-all token validator.
    pub fn new(directory: impl DirectorySource + 'static, port: u16) -> Self {
        Self {
            directory: Arc::new(directory),
            mailer: Arc::new(LoggingMailSender::new()),
            tokens: Arc::new(AcceptAllTokenValidator::new()),
            documents: Arc::new(LoggingDocumentStore::new()),
            port,
            started_at: Instant::now(),
        }
    }

    pub fn with_mailer(mut self, mailer: impl MailSender + 'static) -> Self {
        self.mailer = Arc::new(mailer);
        self
    }

    pub fn with_token_validator(mut self, tokens: impl TokenValidator + 'static) -> Self {
        self.tokens = Arc::new(tokens);
        self
    }

    pub fn with_document_store(mut self, documents: impl DocumentStore + 'static) -> Self {
        self.documents = Arc::new(documents);
        self
    }

    /// Time since the state was created, i.e. since startup.
    pub fn uptime(&self) -> Duration {
        self.started_at.elapsed()
    }
}
