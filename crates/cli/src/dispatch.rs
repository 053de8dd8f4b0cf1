//! Command dispatch logic.
//!
//! Responsibilities:
//! - Route parsed CLI arguments to appropriate command handlers.
//!
//! Does NOT handle:
//! - CLI structure definitions (see `args` module).
//! - Configuration loading or client construction (see `main()`).

use std::time::Duration;

use anyhow::Result;
use sumo_client::{PageRequest, SearchJobQuery, SumoClient};

use crate::args::Commands;
use crate::cancellation::CancellationToken;
use crate::commands;
use crate::commands::search::SearchOptions;

/// Dispatch a CLI command to its handler.
pub(crate) async fn run_command(
    command: Commands,
    client: &SumoClient,
    cancel_token: &CancellationToken,
) -> Result<()> {
    match command {
        Commands::Search {
            query,
            from,
            to,
            time_zone,
            by_receipt_time,
            records,
            page_size,
            poll_interval,
            max_wait,
            keep_job,
        } => {
            let mut query = SearchJobQuery::new(query, from, to, time_zone);
            if by_receipt_time {
                query = query.by_receipt_time(true);
            }
            let options = SearchOptions {
                query,
                records,
                page_size,
                poll_interval: Duration::from_secs(poll_interval),
                max_wait: Duration::from_secs(max_wait),
                keep_job,
            };
            commands::search::run(client, options, cancel_token).await?;
        }
        Commands::Status { job_id } => {
            commands::status::run(client, &job_id, cancel_token).await?;
        }
        Commands::Messages {
            job_id,
            offset,
            limit,
        } => {
            let page = PageRequest::new(offset, limit);
            commands::messages::run(client, &job_id, page, cancel_token).await?;
        }
        Commands::Records {
            job_id,
            offset,
            limit,
        } => {
            let page = PageRequest::new(offset, limit);
            commands::records::run(client, &job_id, page, cancel_token).await?;
        }
        Commands::Delete { job_id } => {
            commands::delete::run(client, &job_id, cancel_token).await?;
        }
    }

    Ok(())
}
