//! Request execution and response handling shared by all endpoints.
//!
//! # What this module handles:
//! - Sending a built request and recording its metrics
//! - Enforcing the status an operation accepts
//! - Turning rejected responses into [`ClientError::ApiError`]
//! - Decoding JSON bodies
//!
//! # What this module does NOT handle:
//! - Retries or rate-limit backoff (the API client never retries)
//! - URL construction (see [`super::jobs`])
//!
//! # Invariants
//! - Every response body is read to the end, on success and failure paths
//! - A rejected response never produces a partially decoded value

use std::time::Instant;

use reqwest::header::{AUTHORIZATION, CONTENT_TYPE, HeaderValue};
use reqwest::{RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::error::{ClientError, Result};
use crate::metrics::MetricsCollector;
use crate::models::ApiErrorBody;

/// Everything an endpoint call needs besides the HTTP client.
#[derive(Debug, Clone, Copy)]
pub struct RequestContext<'a> {
    /// Host URL joined with the search job path, without a trailing slash.
    pub jobs_url: &'a str,
    pub auth_header: &'a HeaderValue,
    pub metrics: Option<&'a MetricsCollector>,
}

impl<'a> RequestContext<'a> {
    pub fn new(jobs_url: &'a str, auth_header: &'a HeaderValue) -> Self {
        Self {
            jobs_url,
            auth_header,
            metrics: None,
        }
    }

    pub fn with_metrics(mut self, metrics: Option<&'a MetricsCollector>) -> Self {
        self.metrics = metrics;
        self
    }

    /// Attach the `Authorization` header.
    pub(crate) fn authorize(&self, builder: RequestBuilder) -> RequestBuilder {
        builder.header(AUTHORIZATION, self.auth_header.clone())
    }

    /// Attach `Authorization` and `Content-Type: application/json`.
    pub(crate) fn authorize_json(&self, builder: RequestBuilder) -> RequestBuilder {
        self.authorize(builder)
            .header(CONTENT_TYPE, HeaderValue::from_static("application/json"))
    }

    pub(crate) fn record_error(&self, endpoint: &str, method: &str, error: &ClientError) {
        if let Some(m) = self.metrics {
            m.record_client_error(endpoint, method, error);
        }
    }
}

/// Which statuses an operation accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Expect {
    /// Only this exact status.
    Exactly(StatusCode),
    /// Any 2xx.
    Success,
}

impl Expect {
    fn accepts(self, status: StatusCode) -> bool {
        match self {
            Self::Exactly(expected) => status == expected,
            Self::Success => status.is_success(),
        }
    }
}

/// Where the message of an [`ClientError::ApiError`] comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorMessage {
    /// The body's `message` field, falling back to the raw body.
    Body,
    /// The body's `code` field (the records endpoint reports 400s this way).
    Code,
}

/// Send a request once, recording duration and request count.
///
/// Transport failures are returned as [`ClientError::HttpError`]. Status
/// codes are not inspected here; see [`expect_status`].
pub async fn send_request(
    builder: RequestBuilder,
    endpoint: &str,
    method: &str,
    metrics: Option<&MetricsCollector>,
) -> Result<Response> {
    let start = Instant::now();
    if let Some(m) = metrics {
        m.record_request(endpoint, method);
    }

    let result = builder.send().await;
    let elapsed = start.elapsed();

    match result {
        Ok(response) => {
            let status = response.status();
            debug!(
                endpoint,
                method,
                status = status.as_u16(),
                elapsed_ms = elapsed.as_millis() as u64,
                "Search job API response"
            );
            if let Some(m) = metrics {
                m.record_request_duration(endpoint, method, elapsed, Some(status.as_u16()));
            }
            Ok(response)
        }
        Err(e) => {
            debug!(endpoint, method, error = %e, "Search job API request failed");
            if let Some(m) = metrics {
                m.record_request_duration(endpoint, method, elapsed, None);
            }
            Err(ClientError::from(e))
        }
    }
}

/// Pass the response through if its status is accepted, else consume the
/// body and build an [`ClientError::ApiError`].
pub async fn expect_status(
    response: Response,
    expect: Expect,
    message: ErrorMessage,
) -> Result<Response> {
    if expect.accepts(response.status()) {
        Ok(response)
    } else {
        Err(api_error(response, message).await)
    }
}

/// Build an [`ClientError::ApiError`] from a rejected response.
pub async fn api_error(response: Response, message: ErrorMessage) -> ClientError {
    let status = response.status();
    let status_text = status_text(status);
    let url = response.url().to_string();
    let body = response.text().await.unwrap_or_default();
    let parsed: ApiErrorBody = serde_json::from_str(&body).unwrap_or_default();

    let text = match message {
        ErrorMessage::Code => parsed.code.clone(),
        ErrorMessage::Body => parsed.message.clone(),
    };
    let text = text
        .or_else(|| (!body.trim().is_empty()).then(|| body.trim().to_string()))
        .unwrap_or_else(|| status_text.clone());

    ClientError::ApiError {
        status: status.as_u16(),
        status_text,
        url,
        code: parsed.code,
        message: text,
    }
}

/// Read the whole body and decode it as JSON.
pub async fn read_json<T: DeserializeOwned>(response: Response, what: &str) -> Result<T> {
    let bytes = response.bytes().await?;
    serde_json::from_slice(&bytes)
        .map_err(|e| ClientError::InvalidResponse(format!("Failed to parse {what}: {e}")))
}

/// Read and discard the body so the connection can be reused.
pub async fn drain(response: Response) -> Result<()> {
    response.bytes().await?;
    Ok(())
}

/// Status line text such as `404 Not Found`.
pub fn status_text(status: StatusCode) -> String {
    match status.canonical_reason() {
        Some(reason) => format!("{} {}", status.as_u16(), reason),
        None => status.as_u16().to_string(),
    }
}
