//! Delete command implementation.

use anyhow::{Context, Result};
use sumo_client::SumoClient;

use crate::cancellation::{CancellationToken, Cancelled};

pub async fn run(client: &SumoClient, job_id: &str, cancel: &CancellationToken) -> Result<()> {
    let mut session = client.attach(job_id)?;
    tokio::select! {
        res = session.delete() => {
            res.with_context(|| format!("Failed to delete search job {job_id}"))?
        }
        _ = cancel.cancelled() => return Err(Cancelled.into()),
    };
    println!("Deleted search job {job_id}");
    Ok(())
}
