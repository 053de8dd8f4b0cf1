//! Centralized constants for the Sumo Logic search workspace.
//!
//! Default values used across crates live here to avoid magic number
//! duplication.

// =============================================================================
// Connection & Timeout Defaults
// =============================================================================

/// Default API host, including the API version prefix.
pub const DEFAULT_HOST_URL: &str = "https://api.sumologic.com/api/v1";

/// Default path of the Search Job API relative to the host.
pub const DEFAULT_QUERY_PATH: &str = "/search/jobs";

/// Default HTTP request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Maximum allowed request timeout in seconds (1 hour).
pub const MAX_TIMEOUT_SECS: u64 = 3600;

/// Default maximum number of HTTP redirects to follow.
pub const DEFAULT_MAX_REDIRECTS: usize = 5;

// =============================================================================
// Search & Polling Defaults
// =============================================================================

/// Recommended pause between job status polls, in seconds.
pub const DEFAULT_POLL_INTERVAL_SECS: u64 = 3;

/// Default maximum time to wait for a job to finish gathering, in seconds.
pub const DEFAULT_MAX_WAIT_SECS: u64 = 600;

/// Default page size when paging messages or records.
pub const DEFAULT_PAGE_SIZE: u64 = 1000;

/// Largest page the Search Job API will serve in one request.
pub const MAX_PAGE_SIZE: u64 = 10_000;

/// Default time zone sent with search queries.
pub const DEFAULT_TIME_ZONE: &str = "UTC";
