//! Search command implementation.
//!
//! Responsibilities:
//! - Drive one job through submit, poll, page and delete.
//! - Stream every page to stdout as NDJSON as soon as it arrives.
//!
//! Invariants:
//! - The job is deleted on every exit path after a successful submit
//!   (success, failure, timeout, Ctrl+C) unless `--keep-job` is given.
//! - Polls are paced by `poll_interval`; the client itself never sleeps.

use std::time::Duration;

use anyhow::{Context, Result, bail};
use sumo_client::{
    JobLifecycle, PageRequest, SearchJobQuery, SearchJobSession, SearchJobState, SumoClient,
};
use tokio::time::Instant;
use tracing::{info, warn};

use crate::cancellation::{CancellationToken, Cancelled};
use crate::output::print_ndjson;

/// Server state reported when a job stopped gathering because it hit
/// result limits. Results gathered so far can still be paged.
const STATE_FORCE_PAUSED: &str = "FORCE PAUSED";

/// Options for one `search` invocation.
#[derive(Debug, Clone)]
pub struct SearchOptions {
    pub query: SearchJobQuery,
    pub records: bool,
    pub page_size: u64,
    pub poll_interval: Duration,
    pub max_wait: Duration,
    pub keep_job: bool,
}

pub async fn run(
    client: &SumoClient,
    options: SearchOptions,
    cancel: &CancellationToken,
) -> Result<()> {
    info!(
        query_len = options.query.query.len(),
        from = %options.query.from,
        to = %options.query.to,
        "Executing search"
    );

    let mut session = client.session(options.query.clone());
    // A job whose submit was interrupted is never polled and expires on the server.
    let job_id = tokio::select! {
        res = session.submit() => res.context("Failed to submit search job")?.id.clone(),
        _ = cancel.cancelled() => return Err(Cancelled.into()),
    };
    info!(job_id = %job_id, "Search job submitted");

    let outcome = collect(&mut session, &options, cancel).await;

    if options.keep_job {
        eprintln!("Search job {job_id} kept on the server");
        return outcome;
    }

    match (outcome, session.delete().await) {
        (Ok(()), Ok(())) => Ok(()),
        (Ok(()), Err(e)) => {
            Err(e).with_context(|| format!("Failed to delete search job {job_id}"))
        }
        (Err(e), Ok(())) => Err(e),
        (Err(e), Err(delete_err)) => {
            warn!(job_id = %job_id, error = %delete_err, "Failed to delete search job");
            Err(e)
        }
    }
}

async fn collect(
    session: &mut SearchJobSession<'_>,
    options: &SearchOptions,
    cancel: &CancellationToken,
) -> Result<()> {
    let state = wait_for_results(session, options, cancel).await?;

    if options.records {
        page_records(session, state.record_count, options.page_size, cancel).await
    } else {
        page_messages(session, state.message_count, options.page_size, cancel).await
    }
}

/// Poll until the job has results to page, returning the final state.
async fn wait_for_results(
    session: &mut SearchJobSession<'_>,
    options: &SearchOptions,
    cancel: &CancellationToken,
) -> Result<SearchJobState> {
    let deadline = Instant::now() + options.max_wait;

    loop {
        let state = tokio::select! {
            res = session.poll_status() => res.context("Failed to poll search job status")?,
            _ = cancel.cancelled() => return Err(Cancelled.into()),
        };

        for warning in &state.pending_warnings {
            warn!(job_id = %state.id, warning = %warning, "Search job warning");
        }
        if !state.pending_errors.is_empty() {
            bail!(
                "Search job {} reported errors: {}",
                state.id,
                state.pending_errors.join("; ")
            );
        }

        match state.lifecycle() {
            JobLifecycle::Done => return Ok(state.clone()),
            JobLifecycle::Other(s) if s == STATE_FORCE_PAUSED => {
                warn!(job_id = %state.id, "Search job paused at result limit; results are partial");
                return Ok(state.clone());
            }
            JobLifecycle::Other(s) if s == "CANCELLED" => {
                bail!("Search job {} was cancelled on the server", state.id)
            }
            _ => {}
        }

        if Instant::now() >= deadline {
            bail!(
                "Search job {} did not finish within {}s (last state: {})",
                state.id,
                options.max_wait.as_secs(),
                state.lifecycle()
            );
        }

        tokio::select! {
            _ = cancel.cancelled() => return Err(Cancelled.into()),
            _ = tokio::time::sleep(options.poll_interval) => {}
        }
    }
}

async fn page_messages(
    session: &mut SearchJobSession<'_>,
    total: u64,
    page_size: u64,
    cancel: &CancellationToken,
) -> Result<()> {
    let mut next = (total > 0).then(|| PageRequest::first(page_size));

    while let Some(request) = next {
        let page = tokio::select! {
            res = session.fetch_messages(request) => res.with_context(|| {
                format!("Failed to fetch messages at offset {}", request.offset)
            })?,
            _ = cancel.cancelled() => return Err(Cancelled.into()),
        };
        print_ndjson(&page.messages)?;
        next = page.next_request(total);
    }

    Ok(())
}

async fn page_records(
    session: &mut SearchJobSession<'_>,
    total: u64,
    page_size: u64,
    cancel: &CancellationToken,
) -> Result<()> {
    let mut next = (total > 0).then(|| PageRequest::first(page_size));

    while let Some(request) = next {
        let page = tokio::select! {
            res = session.fetch_records(request) => res.with_context(|| {
                format!("Failed to fetch records at offset {}", request.offset)
            })?,
            _ = cancel.cancelled() => return Err(Cancelled.into()),
        };
        print_ndjson(page.records())?;
        next = page.next_request(total);
    }

    Ok(())
}
