//! Per-job lifecycle state.
//!
//! A [`SearchJobSession`] tracks one job through
//! `Submitted → Gathering → Done → Deleted`, holding the query, the last
//! known job state, and the most recently fetched message and record pages.
//!
//! # Invariants
//! - Operations that address a job fail with [`ClientError::JobNotSubmitted`]
//!   until a job id is known, and again after the job is deleted
//! - Stored state changes only after a fully successful call; a failed
//!   submit or poll leaves the previous state untouched
//! - Each fetch replaces the previously stored page of the same kind
//!
//! State-changing operations take `&mut self`, so one session cannot be
//! driven from two places at once. Run several sessions against the same
//! [`SumoClient`] to manage several jobs.

use tracing::debug;

use crate::client::SumoClient;
use crate::error::{ClientError, Result};
use crate::models::{
    JobLifecycle, MessagePage, PageRequest, RecordPage, SearchJobQuery, SearchJobState,
};

/// One search job's client-side state.
#[derive(Debug)]
pub struct SearchJobSession<'c> {
    client: &'c SumoClient,
    query: Option<SearchJobQuery>,
    state: Option<SearchJobState>,
    deleted: bool,
    messages: Option<MessagePage>,
    records: Option<RecordPage>,
}

impl<'c> SearchJobSession<'c> {
    /// A session for a query that has not been submitted yet.
    pub fn new(client: &'c SumoClient, query: SearchJobQuery) -> Self {
        Self {
            client,
            query: Some(query),
            state: None,
            deleted: false,
            messages: None,
            records: None,
        }
    }

    /// A session for a job created elsewhere (another process, an earlier run).
    ///
    /// The session has no query, so [`submit`](Self::submit) fails with
    /// [`ClientError::MissingQuery`].
    pub fn attach(client: &'c SumoClient, job_id: impl Into<String>) -> Result<Self> {
        let job_id = job_id.into().trim().to_string();
        if job_id.is_empty() {
            return Err(ClientError::JobNotSubmitted);
        }
        Ok(Self {
            client,
            query: None,
            state: Some(SearchJobState {
                id: job_id,
                ..SearchJobState::default()
            }),
            deleted: false,
            messages: None,
            records: None,
        })
    }

    pub fn client(&self) -> &'c SumoClient {
        self.client
    }

    pub fn query(&self) -> Option<&SearchJobQuery> {
        self.query.as_ref()
    }

    /// Last known job state, if a job has been submitted or attached.
    pub fn state(&self) -> Option<&SearchJobState> {
        self.state.as_ref()
    }

    /// The job id, if one is known. Still reported after deletion.
    pub fn job_id(&self) -> Option<&str> {
        self.state
            .as_ref()
            .map(|s| s.id.as_str())
            .filter(|id| !id.is_empty())
    }

    /// Current lifecycle phase, or `None` before a job exists.
    pub fn lifecycle(&self) -> Option<JobLifecycle> {
        if self.deleted {
            return Some(JobLifecycle::Deleted);
        }
        self.state.as_ref().map(SearchJobState::lifecycle)
    }

    /// Most recently fetched message page.
    pub fn messages(&self) -> Option<&MessagePage> {
        self.messages.as_ref()
    }

    /// Most recently fetched record page.
    pub fn records(&self) -> Option<&RecordPage> {
        self.records.as_ref()
    }

    fn active_job_id(&self) -> Result<String> {
        if self.deleted {
            return Err(ClientError::JobNotSubmitted);
        }
        self.job_id()
            .map(str::to_string)
            .ok_or(ClientError::JobNotSubmitted)
    }

    /// Submit the session's query as a new job.
    ///
    /// On success the returned state replaces any previous one and stored
    /// pages are cleared. A session whose job was deleted can submit again.
    pub async fn submit(&mut self) -> Result<&SearchJobState> {
        let query = self.query.as_ref().ok_or(ClientError::MissingQuery)?;
        let state = self.client.create_search_job(query).await?;

        debug!(job_id = %state.id, "Search job submitted");
        self.deleted = false;
        self.messages = None;
        self.records = None;
        Ok(self.state.insert(state))
    }

    /// Refresh the job state.
    ///
    /// Makes one request; callers pace repeated polls themselves.
    pub async fn poll_status(&mut self) -> Result<&SearchJobState> {
        let job_id = self.active_job_id()?;
        let mut status = self.client.get_search_job_status(&job_id).await?;
        if status.id.is_empty() {
            status.id = job_id;
        }

        let previous = self.state.as_ref().map(SearchJobState::lifecycle);
        let current = status.lifecycle();
        if previous.as_ref() != Some(&current) {
            debug!(
                job_id = %status.id,
                state = %current,
                message_count = status.message_count,
                record_count = status.record_count,
                "Search job state changed"
            );
        }

        Ok(self.state.insert(status))
    }

    /// Fetch one page of messages, replacing the stored message page.
    pub async fn fetch_messages(&mut self, page: PageRequest) -> Result<&MessagePage> {
        let job_id = self.active_job_id()?;
        let fetched = self.client.get_search_job_messages(&job_id, page).await?;
        Ok(self.messages.insert(fetched))
    }

    /// Fetch one page of records, replacing the stored record page.
    pub async fn fetch_records(&mut self, page: PageRequest) -> Result<&RecordPage> {
        let job_id = self.active_job_id()?;
        let fetched = self.client.get_search_job_records(&job_id, page).await?;
        Ok(self.records.insert(fetched))
    }

    /// Delete the job. Afterwards the session reports
    /// [`JobLifecycle::Deleted`] and rejects further job operations.
    pub async fn delete(&mut self) -> Result<()> {
        let job_id = self.active_job_id()?;
        self.client.delete_search_job(&job_id).await?;

        debug!(job_id = %job_id, "Search job deleted");
        self.deleted = true;
        self.messages = None;
        self.records = None;
        Ok(())
    }
}
