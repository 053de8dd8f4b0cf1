//! Configuration loader for `.env` files, environment variables and overrides.
//!
//! Responsibilities:
//! - Load configuration from `.env` files and `SUMO_*` environment variables.
//! - Provide a builder-pattern `ConfigLoader` for layered configuration merging.
//! - Enforce the `DOTENV_DISABLED` gate to prevent accidental dotenv loading in tests.
//!
//! Does NOT handle:
//! - Persisting configuration to disk.
//! - Building HTTP clients (see the client crate).
//!
//! Invariants / Assumptions:
//! - Builder overrides take precedence over environment variables.
//! - `load_dotenv()` must be called explicitly to enable `.env` file loading.

mod builder;
mod env;
mod error;

pub use builder::ConfigLoader;
pub use env::{env_var_or_none, parse_extra_headers, parse_header_pair};
pub use error::ConfigError;

#[cfg(test)]
mod tests;
