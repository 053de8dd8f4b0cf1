//! Search job query and state models.
//!
//! # What this module handles:
//! - The query payload submitted to create a job
//! - The job state returned by create and status calls
//! - Interpreting the server's state string as a lifecycle phase
//!
//! # What this module does NOT handle:
//! - Job creation or polling logic (see [`crate::client::session`])

use serde::{Deserialize, Serialize};

/// State string reported while the job is still collecting results.
pub const STATE_GATHERING: &str = "GATHERING RESULTS";

/// State string reported once the job has finished collecting results.
pub const STATE_DONE_GATHERING: &str = "DONE GATHERING RESULTS";

/// Query submitted to create a search job.
///
/// `from` and `to` are ISO 8601 timestamps without an offset
/// (`2020-03-01T00:00:00`) or epoch milliseconds; `time_zone` applies to
/// offset-less timestamps.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchJobQuery {
    pub query: String,
    pub from: String,
    pub to: String,
    #[serde(rename = "timeZone")]
    pub time_zone: String,
    /// Search by receipt time instead of message time.
    #[serde(
        rename = "byReceiptTime",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub by_receipt_time: Option<bool>,
}

impl SearchJobQuery {
    pub fn new(
        query: impl Into<String>,
        from: impl Into<String>,
        to: impl Into<String>,
        time_zone: impl Into<String>,
    ) -> Self {
        Self {
            query: query.into(),
            from: from.into(),
            to: to.into(),
            time_zone: time_zone.into(),
            by_receipt_time: None,
        }
    }

    /// Search by receipt time instead of message time.
    pub fn by_receipt_time(mut self, enabled: bool) -> Self {
        self.by_receipt_time = Some(enabled);
        self
    }
}

/// Current state of a search job.
///
/// The create call answers with `id` only; status calls answer with the
/// state and counts but no `id`. Missing fields default.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchJobState {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub state: String,
    #[serde(rename = "messageCount", default)]
    pub message_count: u64,
    #[serde(rename = "recordCount", default)]
    pub record_count: u64,
    #[serde(rename = "pendingWarnings", default)]
    pub pending_warnings: Vec<String>,
    #[serde(rename = "pendingErrors", default)]
    pub pending_errors: Vec<String>,
    #[serde(rename = "histogramBuckets", default)]
    pub histogram_buckets: Vec<serde_json::Value>,
}

impl SearchJobState {
    /// Lifecycle phase implied by the server's state string.
    pub fn lifecycle(&self) -> JobLifecycle {
        JobLifecycle::from_state(&self.state)
    }

    /// Whether the job has finished gathering results.
    pub fn is_done(&self) -> bool {
        self.state == STATE_DONE_GATHERING
    }
}

/// Lifecycle phase of a search job.
///
/// `Submitted → Gathering → Done → Deleted`, with `Gathering` repeating
/// while the caller polls. States the client does not recognise are kept
/// verbatim in `Other`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum JobLifecycle {
    /// Created; no state reported yet.
    Submitted,
    /// `GATHERING RESULTS`
    Gathering,
    /// `DONE GATHERING RESULTS`
    Done,
    /// Deleted by this client.
    Deleted,
    /// Any other server state (`NOT STARTED`, `CANCELLED`, `FORCE PAUSED`, ...).
    Other(String),
}

impl JobLifecycle {
    /// Map a server state string to a lifecycle phase.
    pub fn from_state(state: &str) -> Self {
        match state {
            "" => Self::Submitted,
            STATE_GATHERING => Self::Gathering,
            STATE_DONE_GATHERING => Self::Done,
            other => Self::Other(other.to_string()),
        }
    }

    /// Whether messages and records can be fetched in this phase.
    pub fn results_available(&self) -> bool {
        matches!(self, Self::Done)
    }
}

impl std::fmt::Display for JobLifecycle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Submitted => f.write_str("SUBMITTED"),
            Self::Gathering => f.write_str(STATE_GATHERING),
            Self::Done => f.write_str(STATE_DONE_GATHERING),
            Self::Deleted => f.write_str("DELETED"),
            Self::Other(state) => f.write_str(state),
        }
    }
}
