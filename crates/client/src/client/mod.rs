//! Search Job API client.
//!
//! # Submodules
//! - [`builder`]: Client construction and configuration
//! - `jobs`: One method per Search Job API call
//! - [`session`]: Per-job lifecycle state on top of a shared client
//!
//! # What this module does NOT handle:
//! - Direct HTTP request implementation (delegated to [`crate::endpoints`])
//! - Poll pacing (callers sleep between [`session::SearchJobSession::poll_status`] calls)
//!
//! # Invariants
//! - A built client is immutable; all per-job state lives in a session
//! - `jobs_url` is `host_url` joined with `query_path` and never ends with a slash

pub mod builder;
mod jobs;
pub mod session;

use reqwest::header::HeaderValue;

use crate::endpoints::RequestContext;
use crate::metrics::MetricsCollector;

/// Sumo Logic Search Job API client.
///
/// Holds the connection configuration and the underlying HTTP client
/// (including its cookie store, which the API uses to pin a job to the
/// node that created it). Share it by reference between sessions.
///
/// ```rust,ignore
/// use secrecy::SecretString;
/// use sumo_client::{Credentials, SearchJobQuery, SumoClient};
///
/// let client = SumoClient::builder()
///     .host_url("https://api.us2.sumologic.com/api/v1".to_string())
///     .credentials(Credentials::new("suABC", SecretString::from("key")))
///     .build()?;
///
/// let query = SearchJobQuery::new("error", "2020-03-01T00:00:00", "2020-03-29T00:00:00", "UTC");
/// let mut session = client.session(query);
/// let job = session.submit().await?;
/// ```
#[derive(Debug)]
pub struct SumoClient {
    pub(crate) http: reqwest::Client,
    pub(crate) host_url: String,
    pub(crate) query_path: String,
    pub(crate) jobs_url: String,
    pub(crate) auth_header: HeaderValue,
    pub(crate) metrics: Option<MetricsCollector>,
}

impl SumoClient {
    /// Create a new client builder.
    pub fn builder() -> builder::SumoClientBuilder {
        builder::SumoClientBuilder::new()
    }

    /// API host, without a trailing slash.
    pub fn host_url(&self) -> &str {
        &self.host_url
    }

    /// Search job path relative to the host.
    pub fn query_path(&self) -> &str {
        &self.query_path
    }

    /// Full URL of the search job collection.
    pub fn jobs_url(&self) -> &str {
        &self.jobs_url
    }

    pub(crate) fn context(&self) -> RequestContext<'_> {
        RequestContext::new(&self.jobs_url, &self.auth_header).with_metrics(self.metrics.as_ref())
    }
}
