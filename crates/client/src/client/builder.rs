//! Client builder for constructing [`SumoClient`] instances.
//!
//! This module is responsible for:
//! - Providing a fluent builder API for client configuration
//! - Validating required configuration (host URL, credentials)
//! - Normalizing the host URL and search job path
//! - Configuring the underlying HTTP client (timeouts, TLS verification,
//!   cookie store, extra headers)
//!
//! # What this module does NOT handle:
//! - Actual API calls (handled by [`crate::endpoints`])
//! - Loading configuration from the environment (see `sumo_config::ConfigLoader`)
//!
//! # Invariants
//! - `host_url` and `credentials` are required and must be provided before calling `build()`
//! - The host URL never ends with a slash; the query path always starts with one
//! - `skip_verify` only affects HTTPS connections; HTTP connections log a warning

use std::time::Duration;

use reqwest::Url;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use sumo_config::{
    Config,
    constants::{DEFAULT_MAX_REDIRECTS, DEFAULT_QUERY_PATH, DEFAULT_TIMEOUT_SECS},
};

use crate::auth::Credentials;
use crate::client::SumoClient;
use crate::error::{ClientError, Result};
use crate::metrics::MetricsCollector;

/// Builder for creating a new [`SumoClient`].
///
/// All options have defaults except `host_url` and `credentials`.
pub struct SumoClientBuilder {
    host_url: Option<String>,
    query_path: String,
    credentials: Option<Credentials>,
    headers: Vec<(String, String)>,
    skip_verify: bool,
    timeout: Duration,
    metrics: Option<MetricsCollector>,
}

impl Default for SumoClientBuilder {
    fn default() -> Self {
        Self {
            host_url: None,
            query_path: DEFAULT_QUERY_PATH.to_string(),
            credentials: None,
            headers: Vec::new(),
            skip_verify: false,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            metrics: None,
        }
    }
}

impl SumoClientBuilder {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the API host, including the version prefix
    /// (e.g. `https://api.us2.sumologic.com/api/v1`).
    ///
    /// Trailing slashes are removed.
    pub fn host_url(mut self, url: String) -> Self {
        self.host_url = Some(url);
        self
    }

    /// Set the search job path relative to the host. Default `/search/jobs`.
    pub fn query_path(mut self, path: String) -> Self {
        self.query_path = path;
        self
    }

    pub fn credentials(mut self, credentials: Credentials) -> Self {
        self.credentials = Some(credentials);
        self
    }

    /// Add a header sent with every request.
    ///
    /// A later header with the same name (compared case-insensitively)
    /// replaces an earlier one.
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        let name = name.into();
        self.headers.retain(|(n, _)| !n.eq_ignore_ascii_case(&name));
        self.headers.push((name, value.into()));
        self
    }

    /// Set whether to skip TLS certificate verification.
    ///
    /// # Security Warning
    /// Only use this against test endpoints. Disabling verification makes the
    /// connection vulnerable to man-in-the-middle attacks.
    pub fn skip_verify(mut self, skip: bool) -> Self {
        self.skip_verify = skip;
        self
    }

    /// Set the request timeout. Default is 30 seconds.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Record request metrics through the `metrics` facade.
    pub fn metrics(mut self, metrics: MetricsCollector) -> Self {
        self.metrics = Some(metrics);
        self
    }

    /// Create a client builder from loaded configuration.
    pub fn from_config(mut self, config: &Config) -> Self {
        self.host_url = Some(config.connection.host_url.clone());
        self.query_path = config.connection.query_path.clone();
        self.credentials = Some(Credentials::new(
            config.auth.access_id.clone(),
            config.auth.access_key.clone(),
        ));
        self.skip_verify = config.connection.skip_verify;
        self.timeout = config.connection.timeout;
        for (name, value) in &config.connection.extra_headers {
            self = self.header(name.clone(), value.clone());
        }
        self
    }

    /// Validate and normalize a host URL.
    ///
    /// - `"https://api.sumologic.com/api/v1/"` -> `"https://api.sumologic.com/api/v1"`
    /// - `"ftp://example.com"` -> error
    fn normalize_host_url(url: &str) -> Result<String> {
        let trimmed = url.trim().trim_end_matches('/');
        let parsed = Url::parse(trimmed)
            .map_err(|e| ClientError::InvalidUrl(format!("{trimmed}: {e}")))?;
        match parsed.scheme() {
            "http" | "https" => Ok(trimmed.to_string()),
            other => Err(ClientError::InvalidUrl(format!(
                "unsupported scheme '{other}' in {trimmed}"
            ))),
        }
    }

    /// Normalize a query path to a single leading slash and no trailing slash.
    fn normalize_query_path(path: &str) -> Result<String> {
        let trimmed = path.trim().trim_matches('/');
        if trimmed.is_empty() {
            return Err(ClientError::InvalidUrl(
                "query_path must not be empty".to_string(),
            ));
        }
        Ok(format!("/{trimmed}"))
    }

    fn default_headers(headers: &[(String, String)]) -> Result<HeaderMap> {
        let mut map = HeaderMap::with_capacity(headers.len());
        for (name, value) in headers {
            let header_name = HeaderName::from_bytes(name.trim().as_bytes()).map_err(|_| {
                ClientError::InvalidRequest(format!("invalid header name '{name}'"))
            })?;
            let header_value = HeaderValue::from_str(value.trim()).map_err(|_| {
                ClientError::InvalidRequest(format!("invalid value for header '{name}'"))
            })?;
            map.insert(header_name, header_value);
        }
        Ok(map)
    }

    /// Build the [`SumoClient`] with the configured options.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::InvalidUrl`] if the host URL is missing or
    /// malformed, or the query path is empty.
    /// Returns [`ClientError::InvalidRequest`] if credentials are missing or
    /// an extra header is not a valid HTTP header.
    /// Returns [`ClientError::HttpError`] if the HTTP client fails to build.
    pub fn build(self) -> Result<SumoClient> {
        let host_url = self
            .host_url
            .as_deref()
            .ok_or_else(|| ClientError::InvalidUrl("host_url is required".to_string()))?;
        let host_url = Self::normalize_host_url(host_url)?;
        let query_path = Self::normalize_query_path(&self.query_path)?;

        let credentials = self
            .credentials
            .ok_or_else(|| ClientError::InvalidRequest("credentials are required".to_string()))?;
        let auth_header = credentials.header_value()?;
        let default_headers = Self::default_headers(&self.headers)?;

        let mut http_builder = reqwest::Client::builder()
            .timeout(self.timeout)
            .redirect(reqwest::redirect::Policy::limited(DEFAULT_MAX_REDIRECTS))
            .cookie_store(true)
            .default_headers(default_headers);

        if self.skip_verify {
            if host_url.starts_with("https://") {
                http_builder = http_builder.danger_accept_invalid_certs(true);
            } else {
                tracing::warn!(
                    "skip_verify=true has no effect on HTTP URLs. TLS verification only applies to HTTPS connections."
                );
            }
        }

        let http = http_builder.build()?;
        let jobs_url = format!("{host_url}{query_path}");

        tracing::debug!(
            jobs_url = %jobs_url,
            access_id = credentials.access_id(),
            extra_headers = self.headers.len(),
            "Built search job client"
        );

        Ok(SumoClient {
            http,
            host_url,
            query_path,
            jobs_url,
            auth_header,
            metrics: self.metrics,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use secrecy::SecretString;

    fn credentials() -> Credentials {
        Credentials::new("suABC123", SecretString::new("secret".to_string().into()))
    }

    #[test]
    fn test_from_config() {
        let mut config = Config::with_credentials(
            "https://api.us2.sumologic.com/api/v1/".to_string(),
            "suABC123".to_string(),
            SecretString::new("secret".to_string().into()),
        );
        config.connection.timeout = Duration::from_secs(90);
        config.connection.extra_headers = vec![("X-Team".to_string(), "search".to_string())];

        let builder = SumoClient::builder().from_config(&config);
        assert_eq!(builder.timeout, Duration::from_secs(90));
        assert_eq!(builder.headers.len(), 1);

        let client = builder.build().unwrap();
        assert_eq!(client.host_url(), "https://api.us2.sumologic.com/api/v1");
        assert_eq!(
            client.jobs_url(),
            "https://api.us2.sumologic.com/api/v1/search/jobs"
        );
    }

    #[test]
    fn test_build_requires_host_url() {
        let result = SumoClient::builder().credentials(credentials()).build();
        assert!(matches!(result, Err(ClientError::InvalidUrl(_))));
    }

    #[test]
    fn test_build_rejects_malformed_host_url() {
        let result = SumoClient::builder()
            .host_url("not a url".to_string())
            .credentials(credentials())
            .build();
        assert!(matches!(result, Err(ClientError::InvalidUrl(_))));

        let result = SumoClient::builder()
            .host_url("ftp://api.sumologic.com".to_string())
            .credentials(credentials())
            .build();
        assert!(matches!(result, Err(ClientError::InvalidUrl(msg)) if msg.contains("ftp")));
    }

    #[test]
    fn test_build_requires_credentials() {
        let result = SumoClient::builder()
            .host_url("https://api.sumologic.com/api/v1".to_string())
            .build();
        assert!(matches!(result, Err(ClientError::InvalidRequest(_))));
    }

    #[test]
    fn test_query_path_normalized() {
        let client = SumoClient::builder()
            .host_url("https://api.sumologic.com/api/v1".to_string())
            .query_path("search/jobs/".to_string())
            .credentials(credentials())
            .build()
            .unwrap();
        assert_eq!(client.query_path(), "/search/jobs");
        assert_eq!(
            client.jobs_url(),
            "https://api.sumologic.com/api/v1/search/jobs"
        );
    }

    #[test]
    fn test_empty_query_path_rejected() {
        let result = SumoClient::builder()
            .host_url("https://api.sumologic.com/api/v1".to_string())
            .query_path("/".to_string())
            .credentials(credentials())
            .build();
        assert!(matches!(result, Err(ClientError::InvalidUrl(_))));
    }

    #[test]
    fn test_invalid_header_rejected() {
        let result = SumoClient::builder()
            .host_url("https://api.sumologic.com/api/v1".to_string())
            .credentials(credentials())
            .header("Bad Header", "x")
            .build();
        assert!(matches!(result, Err(ClientError::InvalidRequest(_))));
    }

    #[test]
    fn test_header_replaces_same_name() {
        let builder = SumoClient::builder()
            .header("X-Team", "a")
            .header("x-team", "b");
        assert_eq!(builder.headers, vec![("x-team".to_string(), "b".to_string())]);
    }

    #[test]
    fn test_skip_verify_with_http_url_builds() {
        let client = SumoClient::builder()
            .host_url("http://localhost:8080/api/v1".to_string())
            .credentials(credentials())
            .skip_verify(true)
            .build();
        assert!(client.is_ok());
    }

    #[test]
    fn test_debug_output_redacts_auth_header() {
        let client = SumoClient::builder()
            .host_url("https://api.sumologic.com/api/v1".to_string())
            .credentials(credentials())
            .build()
            .unwrap();
        let debug = format!("{client:?}");
        assert!(!debug.contains("c3VBQkMxMjM6c2VjcmV0"), "{debug}");
    }
}
