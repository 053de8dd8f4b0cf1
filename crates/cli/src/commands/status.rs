//! Status command implementation.

use anyhow::{Context, Result};
use sumo_client::SumoClient;

use crate::cancellation::{CancellationToken, Cancelled};
use crate::output::print_json;

pub async fn run(client: &SumoClient, job_id: &str, cancel: &CancellationToken) -> Result<()> {
    let mut session = client.attach(job_id)?;
    let state = tokio::select! {
        res = session.poll_status() => {
            res.with_context(|| format!("Failed to get status of search job {job_id}"))?
        }
        _ = cancel.cancelled() => return Err(Cancelled.into()),
    };
    print_json(state)
}
