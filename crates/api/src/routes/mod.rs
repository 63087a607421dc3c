//! Route handlers.

pub mod auth;
pub mod directory;
pub mod fallback;
pub mod health;
pub mod mail;
pub mod metrics;
pub mod sharepoint;
