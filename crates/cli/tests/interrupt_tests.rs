//! Integration tests for Ctrl+C handling.
//!
//! The binary is spawned directly so SIGINT can be delivered while a request
//! is in flight; the mock server holds that request open.

#![cfg(unix)]

mod common;

use std::process::Output;
use std::time::{Duration, Instant};

use common::*;
use tokio::process::Command;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const SLOW_RESPONSE: Duration = Duration::from_secs(30);

fn sumo_process(server_uri: &str, args: &[&str]) -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("sumo-cli"));
    cmd.env("DOTENV_DISABLED", "1")
        .env("SUMO_ACCESS_ID", "test-id")
        .env("SUMO_ACCESS_KEY", "test-key")
        .env("SUMO_HOST_URL", format!("{server_uri}/api/v1"))
        .env_remove("SUMO_QUERY_PATH")
        .env_remove("SUMO_TIMEOUT")
        .env_remove("SUMO_SKIP_VERIFY")
        .env_remove("SUMO_EXTRA_HEADERS")
        .env_remove("RUST_LOG")
        .args(args)
        .stdout(std::process::Stdio::piped())
        .stderr(std::process::Stdio::piped())
        .kill_on_drop(true);
    cmd
}

/// Waits until the server has seen a `GET` for the job, then sends SIGINT.
async fn interrupt_during_poll(server: &MockServer, pid: u32) {
    let deadline = Instant::now() + Duration::from_secs(10);
    loop {
        let polled = server
            .received_requests()
            .await
            .unwrap_or_default()
            .iter()
            .any(|r| r.method.as_str() == "GET");
        if polled {
            break;
        }
        assert!(Instant::now() < deadline, "job was never polled");
        tokio::time::sleep(Duration::from_millis(20)).await;
    }
    // Give the signal listener a moment past startup.
    tokio::time::sleep(Duration::from_millis(200)).await;

    let status = Command::new("kill")
        .args(["-INT", &pid.to_string()])
        .status()
        .await
        .unwrap();
    assert!(status.success());
}

async fn run_interrupted(server: &MockServer, args: &[&str]) -> (Output, Duration) {
    let started = Instant::now();
    let child = sumo_process(&server.uri(), args).spawn().unwrap();
    let pid = child.id().unwrap();

    interrupt_during_poll(server, pid).await;

    let output = child.wait_with_output().await.unwrap();
    (output, started.elapsed())
}

async fn mount_slow_status(server: &MockServer) {
    Mock::given(method("GET"))
        .and(path(format!("{JOBS_PATH}/{JOB_ID}")))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(load_fixture("jobs/status_done.json"))
                .set_delay(SLOW_RESPONSE),
        )
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_status_interrupted_exits_130() {
    let server = MockServer::start().await;
    mount_slow_status(&server).await;

    let (output, elapsed) = run_interrupted(&server, &["status", JOB_ID]).await;

    assert_eq!(output.status.code(), Some(130));
    assert!(elapsed < SLOW_RESPONSE, "took {elapsed:?}");
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Operation cancelled by user"), "{stderr}");
}

#[tokio::test]
async fn test_search_interrupted_during_poll_deletes_job() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(JOBS_PATH))
        .respond_with(
            ResponseTemplate::new(202).set_body_json(load_fixture("jobs/create_job.json")),
        )
        .expect(1)
        .mount(&server)
        .await;
    mount_slow_status(&server).await;
    Mock::given(method("DELETE"))
        .and(path(format!("{JOBS_PATH}/{JOB_ID}")))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let args = [
        "search",
        "error",
        "--from",
        "2020-03-01T00:00:00",
        "--to",
        "2020-03-29T00:00:00",
    ];
    let (output, elapsed) = run_interrupted(&server, &args).await;

    assert_eq!(output.status.code(), Some(130));
    assert!(elapsed < SLOW_RESPONSE, "took {elapsed:?}");
    assert!(output.stdout.is_empty());
}
