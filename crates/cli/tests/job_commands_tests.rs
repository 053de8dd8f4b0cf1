//! Integration tests for the single-job commands
//! (`status`, `messages`, `records`, `delete`).

mod common;

use common::*;
use predicates::prelude::*;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn test_messages_prints_requested_page() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(format!("{JOBS_PATH}/{JOB_ID}/messages")))
        .and(query_param("offset", "10"))
        .and(query_param("limit", "2"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(load_fixture("jobs/messages_page1.json")),
        )
        .expect(1)
        .mount(&server)
        .await;

    let output = sumo_cmd_with_server(&server.uri())
        .args(["messages", JOB_ID, "--offset", "10", "--limit", "2"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let text = String::from_utf8(output).unwrap();
    assert_eq!(text.lines().count(), 2);
    assert!(text.contains("upstream timed out"));
}

#[tokio::test]
async fn test_records_bad_request_reports_code() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(format!("{JOBS_PATH}/{JOB_ID}/records")))
        .respond_with(
            ResponseTemplate::new(400).set_body_json(load_fixture("errors/not_aggregate.json")),
        )
        .mount(&server)
        .await;

    sumo_cmd_with_server(&server.uri())
        .args(["records", JOB_ID])
        .assert()
        .code(5)
        .stderr(predicate::str::contains("searchjob.query.not.aggregate"));
}

#[tokio::test]
async fn test_delete_command() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path(format!("{JOBS_PATH}/{JOB_ID}")))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    sumo_cmd_with_server(&server.uri())
        .args(["delete", JOB_ID])
        .assert()
        .success()
        .stdout(predicate::str::contains(format!("Deleted search job {JOB_ID}")));
}

#[tokio::test]
async fn test_extra_header_flag_is_sent() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(format!("{JOBS_PATH}/{JOB_ID}")))
        .and(header("x-team", "search"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(load_fixture("jobs/status_done.json")),
        )
        .expect(1)
        .mount(&server)
        .await;

    sumo_cmd_with_server(&server.uri())
        .args(["--header", "X-Team=search", "status", JOB_ID])
        .assert()
        .success();
}

#[tokio::test]
async fn test_custom_query_path() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(format!("/api/v1/custom/jobs/{JOB_ID}")))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(load_fixture("jobs/status_done.json")),
        )
        .expect(1)
        .mount(&server)
        .await;

    sumo_cmd_with_server(&server.uri())
        .args(["--query-path", "/custom/jobs", "status", JOB_ID])
        .assert()
        .success();
}

#[test]
fn test_blank_job_id_rejected() {
    sumo_cmd()
        .env("SUMO_HOST_URL", "http://127.0.0.1:9/api/v1")
        .args(["status", " "])
        .assert()
        .code(5);
}
