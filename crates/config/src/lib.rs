//! Configuration management for the Sumo Logic search job client.
//!
//! This crate provides types and loaders for managing the Search Job API
//! connection configuration from `.env` files, environment variables and
//! explicit overrides.

pub mod constants;
mod loader;
pub mod types;

pub use loader::{
    ConfigError, ConfigLoader, env_var_or_none, parse_extra_headers, parse_header_pair,
};
pub use types::{AuthConfig, Config, ConnectionConfig};
