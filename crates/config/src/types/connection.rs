//! Connection configuration types.
//!
//! Responsibilities:
//! - Define connection settings (host, search job path, TLS, timeout, extra headers).
//! - Define the main `Config` structure combining connection and auth.
//!
//! Does NOT handle:
//! - Configuration loading from env (see `loader` module).
//! - Actual network connections (see client crate).
//!
//! Invariants:
//! - `host_url` never ends with a slash and `query_path` always starts with one,
//!   so `format!("{host_url}{query_path}")` is always well formed.

use crate::constants::{DEFAULT_HOST_URL, DEFAULT_QUERY_PATH, DEFAULT_TIMEOUT_SECS};
use crate::types::auth::AuthConfig;
use secrecy::SecretString;
use std::time::Duration;

/// Connection settings for the Search Job API.
#[derive(Debug, Clone)]
pub struct ConnectionConfig {
    /// API host including the version prefix (e.g. `https://api.us2.sumologic.com/api/v1`).
    pub host_url: String,
    /// Search job endpoint path relative to the host (e.g. `/search/jobs`).
    pub query_path: String,
    /// Whether to skip TLS verification.
    pub skip_verify: bool,
    /// Per-request timeout.
    pub timeout: Duration,
    /// Additional headers applied to every request.
    pub extra_headers: Vec<(String, String)>,
}

impl Default for ConnectionConfig {
    fn default() -> Self {
        Self {
            host_url: DEFAULT_HOST_URL.to_string(),
            query_path: DEFAULT_QUERY_PATH.to_string(),
            skip_verify: false,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            extra_headers: Vec::new(),
        }
    }
}

impl ConnectionConfig {
    /// Full URL of the search job collection.
    pub fn search_jobs_url(&self) -> String {
        format!("{}{}", self.host_url, self.query_path)
    }
}

/// Main configuration structure.
#[derive(Debug, Clone)]
pub struct Config {
    /// Connection settings
    pub connection: ConnectionConfig,
    /// Authentication settings
    pub auth: AuthConfig,
}

impl Config {
    /// Create a config for the given host with default connection settings.
    pub fn with_credentials(host_url: String, access_id: String, access_key: SecretString) -> Self {
        Self {
            connection: ConnectionConfig {
                host_url,
                ..ConnectionConfig::default()
            },
            auth: AuthConfig::new(access_id, access_key),
        }
    }
}
