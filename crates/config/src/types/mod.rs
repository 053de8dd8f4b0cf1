//! Configuration type definitions.
//!
//! Responsibilities:
//! - Define the credentials and connection settings used to build a client.
//! - Provide convenience constructors with documented defaults.
//!
//! Does NOT handle:
//! - Loading values from `.env` files or environment variables (see `loader`).
//! - Network connections or header encoding (see the client crate).
//!
//! Invariants:
//! - The access key is always held as `secrecy::SecretString`.

mod auth;
mod connection;

pub use auth::AuthConfig;
pub use connection::{Config, ConnectionConfig};
