//! Search Job API endpoint functions.
//!
//! Each function issues exactly one HTTP request and is the only place its
//! URL is formed. [`crate::SumoClient`] and [`crate::SearchJobSession`] are
//! thin wrappers over these.

mod jobs;
mod request;
pub mod url_encoding;

pub use jobs::{create_job, delete_job, get_job_status, get_messages, get_records};
pub use request::{
    ErrorMessage, Expect, RequestContext, api_error, expect_status, read_json, send_request,
    status_text,
};
pub use url_encoding::encode_path_segment;
