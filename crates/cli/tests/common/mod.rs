//! Shared test utilities for sumo-cli integration tests.
//!
//! Responsibilities:
//! - Provide a hermetic CLI command factory that prevents dotenv loading.
//! - Ensure consistent test credentials and host URLs.
//!
//! Invariants / Assumptions:
//! - All integration tests using this helper are hermetic by default.
//! - `SUMO_ACCESS_ID`/`SUMO_ACCESS_KEY` are set to dummy values unless overridden.

use assert_cmd::Command;

#[allow(unused_imports)]
pub use sumo_client::testing::load_fixture;

/// Path of the job collection on the mock server.
#[allow(dead_code)]
pub const JOBS_PATH: &str = "/api/v1/search/jobs";

/// Job id returned by `jobs/create_job.json`.
#[allow(dead_code)]
pub const JOB_ID: &str = "IUUQI-DGH5I-TJ045";

/// Returns a hermetic `sumo-cli` command for integration testing.
///
/// It ensures:
/// - `DOTENV_DISABLED=1` is set to prevent local `.env` contamination.
/// - Credentials are set to dummy values to satisfy config validation.
/// - Other `SUMO_*` variables are cleared so the host cannot leak in.
pub fn sumo_cmd() -> Command {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("sumo-cli");

    cmd.env("DOTENV_DISABLED", "1");
    cmd.env("SUMO_ACCESS_ID", "test-id");
    cmd.env("SUMO_ACCESS_KEY", "test-key");

    cmd.env_remove("SUMO_HOST_URL")
        .env_remove("SUMO_QUERY_PATH")
        .env_remove("SUMO_TIMEOUT")
        .env_remove("SUMO_SKIP_VERIFY")
        .env_remove("SUMO_EXTRA_HEADERS")
        .env_remove("RUST_LOG");

    cmd
}

/// Returns a hermetic `sumo-cli` command pointed at a mock server.
#[allow(dead_code)]
pub fn sumo_cmd_with_server(server_uri: &str) -> Command {
    let mut cmd = sumo_cmd();
    cmd.env("SUMO_HOST_URL", format!("{server_uri}/api/v1"));
    cmd
}

/// `Authorization` header for the dummy credentials.
#[allow(dead_code)]
pub fn test_auth_header() -> String {
    sumo_client::build_auth_header("test-id", "test-key")
}
