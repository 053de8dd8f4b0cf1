//! Search job methods for [`SumoClient`].
//!
//! Each method is one API call with no client-side state. Use
//! [`SumoClient::session`] or [`SumoClient::attach`] to track a job across calls.

use crate::client::SumoClient;
use crate::client::session::SearchJobSession;
use crate::endpoints;
use crate::error::Result;
use crate::models::{MessagePage, PageRequest, RecordPage, SearchJobQuery, SearchJobState};

impl SumoClient {
    /// Submit a query. Succeeds only on `202 Accepted` with a non-empty id.
    pub async fn create_search_job(&self, query: &SearchJobQuery) -> Result<SearchJobState> {
        endpoints::create_job(&self.http, &self.context(), query).await
    }

    /// Current state of a job. The returned `id` is empty; the API omits it.
    pub async fn get_search_job_status(&self, job_id: &str) -> Result<SearchJobState> {
        endpoints::get_job_status(&self.http, &self.context(), job_id).await
    }

    /// One page of raw messages.
    pub async fn get_search_job_messages(
        &self,
        job_id: &str,
        page: PageRequest,
    ) -> Result<MessagePage> {
        endpoints::get_messages(&self.http, &self.context(), job_id, page).await
    }

    /// One page of aggregate records.
    pub async fn get_search_job_records(
        &self,
        job_id: &str,
        page: PageRequest,
    ) -> Result<RecordPage> {
        endpoints::get_records(&self.http, &self.context(), job_id, page).await
    }

    /// Delete a job. Succeeds only on `200 OK`.
    pub async fn delete_search_job(&self, job_id: &str) -> Result<()> {
        endpoints::delete_job(&self.http, &self.context(), job_id).await
    }

    /// Start a session for a new query. Nothing is sent until
    /// [`SearchJobSession::submit`].
    pub fn session(&self, query: SearchJobQuery) -> SearchJobSession<'_> {
        SearchJobSession::new(self, query)
    }

    /// Start a session for an existing job id.
    pub fn attach(&self, job_id: impl Into<String>) -> Result<SearchJobSession<'_>> {
        SearchJobSession::attach(self, job_id)
    }
}
