//! Environment variable parsing for configuration.
//!
//! Responsibilities:
//! - Read and parse `SUMO_*` environment variables.
//! - Apply environment variable values to a ConfigLoader instance.
//! - Parse the `NAME=VALUE,NAME=VALUE` extra header syntax.
//!
//! Invariants:
//! - Empty or whitespace-only environment variables are treated as unset.
//! - Returned values are trimmed (leading/trailing whitespace removed).
//! - Invalid numeric or boolean values return ConfigError::InvalidValue.

use secrecy::SecretString;
use std::time::Duration;

use super::builder::ConfigLoader;
use super::error::ConfigError;

/// Read an environment variable, returning None if unset, empty, or whitespace-only.
/// Returns the trimmed value if present.
pub fn env_var_or_none(key: &str) -> Option<String> {
    std::env::var(key).ok().and_then(|s| {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            None
        } else if trimmed.len() == s.len() {
            Some(s)
        } else {
            Some(trimmed.to_string())
        }
    })
}

/// Parse a comma separated list of `NAME=VALUE` header pairs.
///
/// Blank entries are skipped; names and values are trimmed. A value may
/// itself contain `=`.
pub fn parse_extra_headers(raw: &str) -> Result<Vec<(String, String)>, ConfigError> {
    raw.split(',')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(parse_header_pair)
        .collect()
}

/// Parse one `NAME=VALUE` header pair. The value may contain `=`. A `,` only
/// survives when the pair is given on its own (`--header`); inside
/// `SUMO_EXTRA_HEADERS` it separates pairs.
pub fn parse_header_pair(entry: &str) -> Result<(String, String), ConfigError> {
    match entry.split_once('=') {
        Some((name, value)) if !name.trim().is_empty() => {
            Ok((name.trim().to_string(), value.trim().to_string()))
        }
        _ => Err(ConfigError::InvalidHeader {
            entry: entry.to_string(),
        }),
    }
}

/// Apply environment variable configuration to the loader.
pub fn apply_env(loader: &mut ConfigLoader) -> Result<(), ConfigError> {
    if let Some(url) = env_var_or_none("SUMO_HOST_URL") {
        loader.set_host_url(Some(url));
    }
    if let Some(path) = env_var_or_none("SUMO_QUERY_PATH") {
        loader.set_query_path(Some(path));
    }
    if let Some(id) = env_var_or_none("SUMO_ACCESS_ID") {
        loader.set_access_id(Some(id));
    }
    if let Some(key) = env_var_or_none("SUMO_ACCESS_KEY") {
        loader.set_access_key(Some(SecretString::new(key.into())));
    }
    if let Some(skip) = env_var_or_none("SUMO_SKIP_VERIFY") {
        loader.set_skip_verify(Some(skip.parse().map_err(|_| {
            ConfigError::InvalidValue {
                var: "SUMO_SKIP_VERIFY".to_string(),
                message: "must be true or false".to_string(),
            }
        })?));
    }
    if let Some(timeout) = env_var_or_none("SUMO_TIMEOUT") {
        let secs: u64 = timeout.parse().map_err(|_| ConfigError::InvalidValue {
            var: "SUMO_TIMEOUT".to_string(),
            message: "must be a number".to_string(),
        })?;
        loader.set_timeout(Some(Duration::from_secs(secs)));
    }
    if let Some(headers) = env_var_or_none("SUMO_EXTRA_HEADERS") {
        loader.extend_headers(parse_extra_headers(&headers)?);
    }

    Ok(())
}
