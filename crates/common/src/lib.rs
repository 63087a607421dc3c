//! Shared types for the visitor kiosk API.
//!
//! Wire shapes use the camelCase field names the kiosk frontend sends and
//! expects, so the same structs serve both request parsing and responses.

pub mod error;
pub mod json;
pub mod requests;
pub mod time;
pub mod types;

pub use error::{QueryError, ValidationError};
pub use requests::{EmailMessage, EmailRequest, MonthlyData, UploadPayload};
pub use time::{epoch_millis, iso_timestamp};
pub use types::{DirectoryUser, SearchQuery};
