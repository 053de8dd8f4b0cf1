//! Data models for Search Job API requests and responses.
//!
//! # What this module handles:
//! - Search job query and state payloads
//! - Message and record pages
//! - Offset/limit page cursors
//! - Error bodies returned by the API
//!
//! # What this module does NOT handle:
//! - HTTP transport (see [`crate::endpoints`])
//! - Session state transitions (see [`crate::client::session`])

mod jobs;
mod messages;
mod pagination;
mod records;

pub use jobs::{JobLifecycle, STATE_DONE_GATHERING, STATE_GATHERING, SearchJobQuery, SearchJobState};
pub use messages::{FieldDescriptor, Message, MessagePage, MessagesResponse};
pub use pagination::PageRequest;
pub use records::RecordPage;

use serde::Deserialize;

/// Error body returned by the API on failed requests.
///
/// All fields are optional: proxies and load balancers may answer with
/// bodies of a different shape.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ApiErrorBody {
    #[serde(default)]
    pub status: Option<u16>,
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}
