//! Sumo Logic Search Job API client.
//!
//! This crate provides a type-safe client for the Search Job API: submit a
//! query, poll the job until it has finished gathering results, page
//! through the matching messages or aggregate records, and delete the job.
//!
//! [`SumoClient`] holds the immutable connection configuration and can be
//! shared by reference. [`SearchJobSession`] tracks one job's state and
//! most recently fetched page.

mod auth;
pub mod client;
pub mod endpoints;
pub mod error;
pub mod metrics;
pub mod models;

#[cfg(any(test, feature = "test-utils"))]
pub mod testing;

pub use auth::{Credentials, build_auth_header};
pub use client::SumoClient;
pub use client::builder::SumoClientBuilder;
pub use client::session::SearchJobSession;
pub use error::{ClientError, Result};
pub use metrics::{ErrorCategory, MetricsCollector};
pub use models::{
    FieldDescriptor, JobLifecycle, Message, MessagePage, PageRequest, RecordPage, SearchJobQuery,
    SearchJobState,
};
