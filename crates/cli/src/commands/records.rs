//! Records command implementation.

use anyhow::{Context, Result};
use sumo_client::{PageRequest, SumoClient};

use crate::cancellation::{CancellationToken, Cancelled};
use crate::output::print_ndjson;

pub async fn run(
    client: &SumoClient,
    job_id: &str,
    page: PageRequest,
    cancel: &CancellationToken,
) -> Result<()> {
    let mut session = client.attach(job_id)?;
    let page = tokio::select! {
        res = session.fetch_records(page) => {
            res.with_context(|| format!("Failed to fetch records of search job {job_id}"))?
        }
        _ = cancel.cancelled() => return Err(Cancelled.into()),
    };
    print_ndjson(page.records())
}
