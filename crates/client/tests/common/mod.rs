//! Common test utilities for integration tests.
//!
//! # Invariants
//! - Fixtures are loaded from the `fixtures/` directory relative to the crate root
//! - Clients built here point at a wiremock server's `/api/v1` prefix
//!
//! # What this does NOT handle
//! - Mock server setup (use wiremock directly in tests)

use secrecy::SecretString;

#[allow(unused_imports)]
pub use sumo_client::testing::load_fixture;

#[allow(unused_imports)]
pub use sumo_client::{
    ClientError, Credentials, JobLifecycle, PageRequest, SearchJobQuery, SumoClient, endpoints,
};
#[allow(unused_imports)]
pub use wiremock::{Mock, MockServer, ResponseTemplate};

/// Access id used by every test client.
#[allow(dead_code)]
pub const ACCESS_ID: &str = "suABC123";

/// Access key used by every test client.
#[allow(dead_code)]
pub const ACCESS_KEY: &str = "k3y/w1th+symbols";

/// Path of the job collection on the mock server.
#[allow(dead_code)]
pub const JOBS_PATH: &str = "/api/v1/search/jobs";

/// Job id returned by `jobs/create_job.json`.
#[allow(dead_code)]
pub const JOB_ID: &str = "IUUQI-DGH5I-TJ045";

/// Expected `Authorization` header for [`ACCESS_ID`]/[`ACCESS_KEY`].
#[allow(dead_code)]
pub fn expected_auth_header() -> String {
    sumo_client::build_auth_header(ACCESS_ID, ACCESS_KEY)
}

/// Build a client against the mock server.
#[allow(dead_code)]
pub fn test_client(server: &MockServer) -> SumoClient {
    SumoClient::builder()
        .host_url(format!("{}/api/v1", server.uri()))
        .credentials(Credentials::new(
            ACCESS_ID,
            SecretString::new(ACCESS_KEY.to_string().into()),
        ))
        .build()
        .expect("test client should build")
}

/// The query from the documented end-to-end scenario.
#[allow(dead_code)]
pub fn scenario_query() -> SearchJobQuery {
    SearchJobQuery::new(
        "\"error\" | count by host",
        "2020-03-01T00:00:00",
        "2020-03-29T00:00:00",
        "GB",
    )
}
