//! Sumo CLI - run Sumo Logic search jobs from the command line.
//!
//! Responsibilities:
//! - Parse command-line arguments and environment variables.
//! - Build the search job client from layered configuration.
//! - Execute the requested command and map failures to structured exit codes.
//!
//! Does NOT handle:
//! - REST API implementation (see `crates/client`).
//! - Persistence of search results beyond stdout.
//!
//! Invariants:
//! - `load_dotenv()` is called BEFORE CLI parsing to allow `.env` to provide clap defaults.
//! - Logs go to stderr so stdout carries only results.

mod args;
mod cancellation;
mod commands;
mod dispatch;
mod error;
mod output;

use std::time::Duration;

use args::Cli;
use cancellation::{CancellationToken, is_cancelled_error, print_cancelled_message};
use clap::Parser;
use dispatch::run_command;
use error::{ExitCode, ExitCodeExt};
use sumo_client::SumoClient;
use sumo_config::{Config, ConfigLoader};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

fn build_config(cli: &Cli) -> anyhow::Result<Config> {
    let mut loader = ConfigLoader::new().from_env()?;

    if let Some(ref url) = cli.host_url {
        loader = loader.with_host_url(url.clone());
    }
    if let Some(ref path) = cli.query_path {
        loader = loader.with_query_path(path.clone());
    }
    if let Some(ref id) = cli.access_id {
        loader = loader.with_access_id(id.clone());
    }
    if let Some(ref key) = cli.access_key {
        loader = loader.with_access_key(key.clone());
    }
    if let Some(timeout_secs) = cli.timeout {
        loader = loader.with_timeout(Duration::from_secs(timeout_secs));
    }
    if cli.skip_verify {
        loader = loader.with_skip_verify(true);
    }
    for (name, value) in &cli.headers {
        loader = loader.with_header(name.clone(), value.clone());
    }

    Ok(loader.build()?)
}

#[tokio::main]
async fn main() {
    // Load .env file BEFORE CLI parsing so clap env defaults can read .env values
    if let Err(e) = ConfigLoader::new().load_dotenv() {
        eprintln!("Failed to load environment: {}", e);
        std::process::exit(ExitCode::GeneralError.as_i32());
    }

    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env())
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = match build_config(&cli) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to build configuration: {:#}", e);
            std::process::exit(ExitCode::GeneralError.as_i32());
        }
    };

    let client = match SumoClient::builder().from_config(&config).build() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to create client: {}", e);
            std::process::exit(ExitCode::from(&e).as_i32());
        }
    };

    let cancel = CancellationToken::new();
    let cancel_clone = cancel.clone();

    tokio::spawn(async move {
        if let Err(e) = tokio::signal::ctrl_c().await {
            eprintln!("Failed to listen for Ctrl+C: {}", e);
            return;
        }
        cancel_clone.cancel();
    });

    let exit_code = match run_command(cli.command, &client, &cancel).await {
        Ok(()) => ExitCode::Success,
        Err(e) if is_cancelled_error(&e) => {
            print_cancelled_message();
            ExitCode::Interrupted
        }
        Err(e) => {
            eprintln!("{:#}", e);
            e.exit_code()
        }
    };

    std::process::exit(exit_code.as_i32());
}
