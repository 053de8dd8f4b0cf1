//! Credential types.

use secrecy::SecretString;

/// Access id / access key pair used for Basic authentication.
///
/// The key is kept in a [`SecretString`] so that `Debug` output and logs
/// never contain it.
#[derive(Debug, Clone)]
pub struct AuthConfig {
    /// Access id (the user part of the Basic credentials).
    pub access_id: String,
    /// Access key (the password part of the Basic credentials).
    pub access_key: SecretString,
}

impl AuthConfig {
    pub fn new(access_id: impl Into<String>, access_key: SecretString) -> Self {
        Self {
            access_id: access_id.into(),
            access_key,
        }
    }
}
