//! Capabilities the kiosk API delegates to.
//!
//! Each external concern is a trait with a default implementation that
//! performs no real side effect:
//! - [`DirectorySource`]: staff lookup, backed by [`StaticDirectory`]
//! - [`MailSender`]: outbound email, backed by [`LoggingMailSender`]
//! - [`TokenValidator`]: token checks, backed by [`AcceptAllTokenValidator`]
//! - [`DocumentStore`]: monthly report upload, backed by [`LoggingDocumentStore`]
//!
//! Real integrations plug in by implementing the trait.

pub mod auth;
pub mod directory;
pub mod documents;
pub mod error;
pub mod mail;

pub use auth::{AcceptAllTokenValidator, TokenValidation, TokenValidator};
pub use directory::{DirectoryLoadError, DirectorySource, StaticDirectory};
pub use documents::{DocumentStore, LoggingDocumentStore, UploadReceipt};
pub use error::ServiceError;
pub use mail::{LoggingMailSender, MailSender, SendReceipt};
