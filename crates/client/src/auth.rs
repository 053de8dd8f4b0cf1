//! Basic authentication for the Search Job API.
//!
//! The API authenticates every request with an access id / access key pair
//! sent as an HTTP Basic `Authorization` header. There is no session or
//! token exchange.

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use reqwest::header::HeaderValue;
use secrecy::{ExposeSecret, SecretString};

use crate::error::{ClientError, Result};

/// Build a Basic `Authorization` header value from an identifier and secret.
///
/// The result is `"Basic "` followed by the standard, padded base64 encoding
/// of `identifier:secret`.
///
/// ```
/// assert_eq!(
///     sumo_client::build_auth_header("Aladdin", "open sesame"),
///     "Basic QWxhZGRpbjpvcGVuIHNlc2FtZQ=="
/// );
/// ```
pub fn build_auth_header(identifier: &str, secret: &str) -> String {
    let encoded = STANDARD.encode(format!("{identifier}:{secret}"));
    format!("Basic {encoded}")
}

/// Access id / access key pair.
///
/// Immutable for the life of a client. The key never appears in `Debug` output.
#[derive(Debug, Clone)]
pub struct Credentials {
    access_id: String,
    access_key: SecretString,
}

impl Credentials {
    pub fn new(access_id: impl Into<String>, access_key: SecretString) -> Self {
        Self {
            access_id: access_id.into(),
            access_key,
        }
    }

    /// The access id (not secret).
    pub fn access_id(&self) -> &str {
        &self.access_id
    }

    /// Encode the credentials as a sensitive `Authorization` header value.
    ///
    /// Sensitive header values are redacted from `Debug` output by `http`.
    pub(crate) fn header_value(&self) -> Result<HeaderValue> {
        let raw = build_auth_header(&self.access_id, self.access_key.expose_secret());
        let mut value = HeaderValue::from_str(&raw).map_err(|e| {
            ClientError::InvalidRequest(format!("credentials are not a valid header value: {e}"))
        })?;
        value.set_sensitive(true);
        Ok(value)
    }
}
