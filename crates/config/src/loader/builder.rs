//! Configuration loader builder implementation.
//!
//! Responsibilities:
//! - Provide a builder-pattern `ConfigLoader` for layered configuration merging.
//! - Validate and normalize the host URL and search job path.
//! - Build the final `Config`.
//!
//! Does NOT handle:
//! - Direct environment variable parsing logic (delegated to env.rs).
//!
//! Invariants / Assumptions:
//! - Builder methods called after `from_env()` override environment values.
//! - `load_dotenv()` must be called explicitly to enable `.env` file loading.
//! - The `DOTENV_DISABLED` variable is checked before `dotenvy::dotenv()` is called.

use secrecy::SecretString;
use std::time::Duration;

use super::env::apply_env;
use super::error::ConfigError;
use crate::constants::{
    DEFAULT_HOST_URL, DEFAULT_QUERY_PATH, DEFAULT_TIMEOUT_SECS, MAX_TIMEOUT_SECS,
};
use crate::types::{AuthConfig, Config, ConnectionConfig};

/// Configuration loader that builds config from environment variables and overrides.
#[derive(Default)]
pub struct ConfigLoader {
    host_url: Option<String>,
    query_path: Option<String>,
    access_id: Option<String>,
    access_key: Option<SecretString>,
    skip_verify: Option<bool>,
    timeout: Option<Duration>,
    extra_headers: Vec<(String, String)>,
}

impl ConfigLoader {
    /// Create a new configuration loader.
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if dotenv loading is disabled via environment variable.
    fn dotenv_disabled() -> bool {
        matches!(
            std::env::var("DOTENV_DISABLED").ok().as_deref(),
            Some("true") | Some("1")
        )
    }

    /// Load environment variables from .env file if present.
    ///
    /// If `DOTENV_DISABLED` is set to "true" or "1", the .env file is not loaded.
    ///
    /// # Errors
    ///
    /// Returns an error if the `.env` file exists but has invalid syntax
    /// (`ConfigError::DotenvParse`) or cannot be read (`ConfigError::DotenvIo`).
    /// Missing `.env` files are silently ignored.
    ///
    /// SAFETY: Error messages never include raw .env line contents to prevent secret leakage.
    pub fn load_dotenv(self) -> Result<Self, ConfigError> {
        if Self::dotenv_disabled() {
            return Ok(self);
        }

        match dotenvy::dotenv() {
            Ok(_) => Ok(self),
            Err(e) if Self::is_not_found(&e) => Ok(self),
            Err(dotenvy::Error::LineParse(_, idx)) => {
                Err(ConfigError::DotenvParse { error_index: idx })
            }
            Err(dotenvy::Error::Io(io_err)) => Err(ConfigError::DotenvIo {
                kind: io_err.kind(),
            }),
            Err(_) => Err(ConfigError::DotenvUnknown),
        }
    }

    fn is_not_found(err: &dotenvy::Error) -> bool {
        matches!(
            err,
            dotenvy::Error::Io(io_err) if io_err.kind() == std::io::ErrorKind::NotFound
        )
    }

    /// Read configuration from `SUMO_*` environment variables.
    pub fn from_env(mut self) -> Result<Self, ConfigError> {
        apply_env(&mut self)?;
        Ok(self)
    }

    /// Set the API host URL (e.g. `https://api.us2.sumologic.com/api/v1`).
    pub fn with_host_url(mut self, url: String) -> Self {
        self.host_url = Some(url);
        self
    }

    /// Set the search job path (e.g. `/search/jobs`).
    pub fn with_query_path(mut self, path: String) -> Self {
        self.query_path = Some(path);
        self
    }

    /// Set the access id.
    pub fn with_access_id(mut self, id: String) -> Self {
        self.access_id = Some(id);
        self
    }

    /// Set the access key.
    pub fn with_access_key(mut self, key: String) -> Self {
        self.access_key = Some(SecretString::new(key.into()));
        self
    }

    /// Set whether to skip TLS verification.
    pub fn with_skip_verify(mut self, skip: bool) -> Self {
        self.skip_verify = Some(skip);
        self
    }

    /// Set the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Add a header applied to every request. Later values for the same name win.
    pub fn with_header(mut self, name: String, value: String) -> Self {
        self.push_header(name, value);
        self
    }

    /// Build the final configuration.
    pub fn build(self) -> Result<Config, ConfigError> {
        let host_url = validate_and_normalize_host_url(
            self.host_url.as_deref().unwrap_or(DEFAULT_HOST_URL),
        )?;
        let query_path =
            normalize_query_path(self.query_path.as_deref().unwrap_or(DEFAULT_QUERY_PATH))?;

        let access_id = self
            .access_id
            .filter(|id| !id.trim().is_empty())
            .ok_or(ConfigError::MissingAccessId)?;
        let access_key = self.access_key.ok_or(ConfigError::MissingAccessKey)?;

        let timeout = self
            .timeout
            .unwrap_or(Duration::from_secs(DEFAULT_TIMEOUT_SECS));
        validate_timeout(timeout)?;

        Ok(Config {
            connection: ConnectionConfig {
                host_url,
                query_path,
                skip_verify: self.skip_verify.unwrap_or(false),
                timeout,
                extra_headers: self.extra_headers,
            },
            auth: AuthConfig::new(access_id, access_key),
        })
    }

    fn push_header(&mut self, name: String, value: String) {
        self.extra_headers
            .retain(|(existing, _)| !existing.eq_ignore_ascii_case(&name));
        self.extra_headers.push((name, value));
    }

    pub(crate) fn set_host_url(&mut self, url: Option<String>) {
        self.host_url = url;
    }

    pub(crate) fn set_query_path(&mut self, path: Option<String>) {
        self.query_path = path;
    }

    pub(crate) fn set_access_id(&mut self, id: Option<String>) {
        self.access_id = id;
    }

    pub(crate) fn set_access_key(&mut self, key: Option<SecretString>) {
        self.access_key = key;
    }

    pub(crate) fn set_skip_verify(&mut self, skip: Option<bool>) {
        self.skip_verify = skip;
    }

    pub(crate) fn set_timeout(&mut self, timeout: Option<Duration>) {
        self.timeout = timeout;
    }

    pub(crate) fn extend_headers(&mut self, headers: Vec<(String, String)>) {
        for (name, value) in headers {
            self.push_header(name, value);
        }
    }
}

/// Checks the timeout is within `1..=MAX_TIMEOUT_SECS` seconds.
fn validate_timeout(timeout: Duration) -> Result<(), ConfigError> {
    let secs = timeout.as_secs();
    if secs == 0 {
        return Err(ConfigError::InvalidTimeout {
            message: "timeout must be greater than 0 seconds".to_string(),
        });
    }
    if secs > MAX_TIMEOUT_SECS {
        return Err(ConfigError::InvalidTimeout {
            message: format!(
                "timeout exceeds maximum allowed value of {} seconds",
                MAX_TIMEOUT_SECS
            ),
        });
    }
    Ok(())
}

/// Validates and normalizes the host URL.
///
/// Validation rules:
/// - Trim surrounding whitespace
/// - Parse as an absolute URL with an http or https scheme and a host
/// - Normalize by stripping trailing slashes
fn validate_and_normalize_host_url(raw: &str) -> Result<String, ConfigError> {
    let trimmed = raw.trim();

    let parsed = url::Url::parse(trimmed).map_err(|e| ConfigError::InvalidValue {
        var: "host_url".into(),
        message: format!(
            "must be an absolute http(s) URL (e.g. https://api.sumologic.com/api/v1): {e}"
        ),
    })?;

    let scheme = parsed.scheme();
    if scheme != "http" && scheme != "https" {
        return Err(ConfigError::InvalidValue {
            var: "host_url".into(),
            message: format!("scheme must be http or https, got: {scheme}"),
        });
    }

    if parsed.host_str().is_none() {
        return Err(ConfigError::InvalidValue {
            var: "host_url".into(),
            message: "host is required".into(),
        });
    }

    Ok(parsed.as_str().trim_end_matches('/').to_string())
}

/// Normalizes the search job path to `/segment/segment` form.
fn normalize_query_path(raw: &str) -> Result<String, ConfigError> {
    let trimmed = raw.trim().trim_matches('/');
    if trimmed.is_empty() {
        return Err(ConfigError::InvalidValue {
            var: "query_path".into(),
            message: "must not be empty (e.g. /search/jobs)".into(),
        });
    }
    Ok(format!("/{trimmed}"))
}
