//! CLI argument definitions and parsing.
//!
//! Responsibilities:
//! - Define the CLI structure using clap derive macros.
//! - Parse command-line arguments and `SUMO_*` environment variables.
//!
//! Non-responsibilities:
//! - Does not execute commands (see `dispatch` module).
//! - Does not validate connection settings (see `sumo_config::ConfigLoader`).

use clap::{Parser, Subcommand};
use sumo_config::constants::{
    DEFAULT_MAX_WAIT_SECS, DEFAULT_PAGE_SIZE, DEFAULT_POLL_INTERVAL_SECS, DEFAULT_TIME_ZONE,
    MAX_PAGE_SIZE,
};

#[derive(Parser)]
#[command(name = "sumo-cli")]
#[command(about = "Run Sumo Logic search jobs from the command line", long_about = None)]
#[command(version)]
#[command(
    after_help = "Examples:\n  sumo-cli search '\"error\" | count by _sourcehost' --from 2020-03-01T00:00:00 --to 2020-03-29T00:00:00 --records\n  sumo-cli search 'error' --from 2020-03-01T00:00:00 --to 2020-03-02T00:00:00 --time-zone GB\n  sumo-cli status IUUQI-DGH5I-TJ045\n  sumo-cli messages IUUQI-DGH5I-TJ045 --offset 1000 --limit 1000\n  sumo-cli delete IUUQI-DGH5I-TJ045\n"
)]
pub struct Cli {
    /// API host including the version prefix (e.g., https://api.us2.sumologic.com/api/v1)
    #[arg(long, global = true, env = "SUMO_HOST_URL")]
    pub host_url: Option<String>,

    /// Search job path relative to the host
    #[arg(long, global = true, env = "SUMO_QUERY_PATH")]
    pub query_path: Option<String>,

    /// Access id
    #[arg(long, global = true, env = "SUMO_ACCESS_ID")]
    pub access_id: Option<String>,

    /// Access key
    #[arg(long, global = true, env = "SUMO_ACCESS_KEY", hide_env_values = true)]
    pub access_key: Option<String>,

    /// Request timeout in seconds
    #[arg(long, global = true, env = "SUMO_TIMEOUT")]
    pub timeout: Option<u64>,

    /// Skip TLS certificate verification
    #[arg(long, global = true, env = "SUMO_SKIP_VERIFY")]
    pub skip_verify: bool,

    /// Extra header sent with every request (repeatable)
    #[arg(long = "header", global = true, value_name = "NAME=VALUE", value_parser = parse_header)]
    pub headers: Vec<(String, String)>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run a search: submit, wait for completion, print results as NDJSON, delete the job
    Search {
        /// The search query (e.g., '"error" | count by _sourcehost')
        query: String,

        /// Start of the time range (ISO 8601 without offset, or epoch milliseconds)
        #[arg(long)]
        from: String,

        /// End of the time range (ISO 8601 without offset, or epoch milliseconds)
        #[arg(long)]
        to: String,

        /// Time zone for `--from`/`--to` (e.g., UTC, GB, America/New_York)
        #[arg(long, default_value = DEFAULT_TIME_ZONE)]
        time_zone: String,

        /// Match on receipt time instead of message time
        #[arg(long)]
        by_receipt_time: bool,

        /// Print aggregate records instead of raw messages
        #[arg(long)]
        records: bool,

        /// Entries requested per page
        #[arg(
            long,
            default_value_t = DEFAULT_PAGE_SIZE,
            value_parser = clap::value_parser!(u64).range(1..=MAX_PAGE_SIZE)
        )]
        page_size: u64,

        /// Seconds between status polls
        #[arg(long, default_value_t = DEFAULT_POLL_INTERVAL_SECS)]
        poll_interval: u64,

        /// Give up if the job has not finished after this many seconds
        #[arg(long, default_value_t = DEFAULT_MAX_WAIT_SECS)]
        max_wait: u64,

        /// Leave the job on the server instead of deleting it
        #[arg(long)]
        keep_job: bool,
    },

    /// Show the state of an existing search job
    Status {
        /// Search job id
        job_id: String,
    },

    /// Print one page of raw messages from an existing search job
    Messages {
        /// Search job id
        job_id: String,

        /// Offset of the first message
        #[arg(long, default_value_t = 0)]
        offset: u64,

        /// Number of messages to fetch
        #[arg(
            long,
            default_value_t = DEFAULT_PAGE_SIZE,
            value_parser = clap::value_parser!(u64).range(1..=MAX_PAGE_SIZE)
        )]
        limit: u64,
    },

    /// Print one page of aggregate records from an existing search job
    Records {
        /// Search job id
        job_id: String,

        /// Offset of the first record
        #[arg(long, default_value_t = 0)]
        offset: u64,

        /// Number of records to fetch
        #[arg(
            long,
            default_value_t = DEFAULT_PAGE_SIZE,
            value_parser = clap::value_parser!(u64).range(1..=MAX_PAGE_SIZE)
        )]
        limit: u64,
    },

    /// Delete an existing search job
    Delete {
        /// Search job id
        job_id: String,
    },
}

fn parse_header(raw: &str) -> Result<(String, String), String> {
    sumo_config::parse_header_pair(raw).map_err(|e| e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_search_defaults() {
        let cli = Cli::try_parse_from([
            "sumo-cli",
            "search",
            "error",
            "--from",
            "2020-03-01T00:00:00",
            "--to",
            "2020-03-29T00:00:00",
        ])
        .unwrap();

        match cli.command {
            Commands::Search {
                time_zone,
                page_size,
                poll_interval,
                records,
                keep_job,
                ..
            } => {
                assert_eq!(time_zone, "UTC");
                assert_eq!(page_size, 1000);
                assert_eq!(poll_interval, 3);
                assert!(!records);
                assert!(!keep_job);
            }
            _ => panic!("expected search"),
        }
    }

    #[test]
    fn test_page_size_bounds() {
        let result = Cli::try_parse_from([
            "sumo-cli", "search", "x", "--from", "1", "--to", "2", "--page-size", "0",
        ]);
        assert!(result.is_err());

        let result = Cli::try_parse_from([
            "sumo-cli", "search", "x", "--from", "1", "--to", "2", "--page-size", "10001",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_repeated_headers() {
        let cli = Cli::try_parse_from([
            "sumo-cli",
            "--header",
            "X-Team=search",
            "--header",
            "X-Filter=a=b",
            "status",
            "ABC",
        ])
        .unwrap();

        assert_eq!(
            cli.headers,
            vec![
                ("X-Team".to_string(), "search".to_string()),
                ("X-Filter".to_string(), "a=b".to_string()),
            ]
        );
    }

    #[test]
    fn test_malformed_header_rejected() {
        let result = Cli::try_parse_from(["sumo-cli", "--header", "novalue", "status", "ABC"]);
        assert!(result.is_err());
    }
}
