//! Application configuration loaded from environment variables.

use std::path::PathBuf;

/// Request bodies larger than this are rejected (10 MiB).
pub const DEFAULT_BODY_LIMIT: usize = 10 * 1024 * 1024;

pub const DEFAULT_PORT: u16 = 8080;

/// Server configuration with sensible defaults.
///
/// Reads from environment variables:
/// - `HOST` — bind address (default: `"0.0.0.0"`)
/// - `PORT` — listen port (default: `8080`)
/// - `RUST_LOG` — tracing filter directive (default: `"info"`)
/// - `APP_ENV` — deployment label shown in startup logs (default: `"development"`)
/// - `DIRECTORY_FILE` — JSON file of directory users (default: bundled list)
/// - `BODY_LIMIT_BYTES` — maximum request body size (default: 10 MiB)
#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub log_level: String,
    pub environment: String,
    pub directory_file: Option<PathBuf>,
    pub body_limit: usize,
}

impl Config {
    /// Loads configuration from environment variables, falling back to defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds configuration from an arbitrary key lookup. Unparseable
    /// numeric values fall back to their defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        Self {
            host: lookup("HOST").unwrap_or(defaults.host),
            port: lookup("PORT")
                .and_then(|p| p.parse().ok())
                .unwrap_or(defaults.port),
            log_level: lookup("RUST_LOG").unwrap_or(defaults.log_level),
            environment: lookup("APP_ENV").unwrap_or(defaults.environment),
            directory_file: lookup("DIRECTORY_FILE")
                .filter(|p| !p.is_empty())
                .map(PathBuf::from),
            body_limit: lookup("BODY_LIMIT_BYTES")
                .and_then(|n| n.parse().ok())
                .unwrap_or(defaults.body_limit),
        }
    }

    /// Returns the `"host:port"` bind address string.
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: DEFAULT_PORT,
            log_level: "info".to_string(),
            environment: "development".to_string(),
            directory_file: None,
            body_limit: DEFAULT_BODY_LIMIT,
        }
    }
}
