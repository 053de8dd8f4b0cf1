//! Error surfacing tests.
//!
//! Covers how rejected responses become [`ClientError::ApiError`] values and
//! which errors count as authentication failures.

mod common;

use common::*;
use wiremock::matchers::{method, path};

#[tokio::test]
async fn test_unauthorized_is_auth_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(JOBS_PATH))
        .respond_with(
            ResponseTemplate::new(401).set_body_json(load_fixture("errors/unauthorized.json")),
        )
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    let err = client
        .create_search_job(&scenario_query())
        .await
        .unwrap_err();

    assert!(err.is_auth_error());
    assert!(err.to_string().contains("401 Unauthorized"));
    assert!(err.to_string().contains("Credential could not be verified."));
}

#[tokio::test]
async fn test_forbidden_is_auth_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(format!("{JOBS_PATH}/{JOB_ID}")))
        .respond_with(ResponseTemplate::new(403))
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    let err = client.get_search_job_status(JOB_ID).await.unwrap_err();

    assert!(err.is_auth_error());
    match err {
        ClientError::ApiError { message, .. } => assert_eq!(message, "403 Forbidden"),
        other => panic!("expected ApiError, got {other:?}"),
    }
}

#[tokio::test]
async fn test_error_message_never_contains_credentials() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(format!("{JOBS_PATH}/{JOB_ID}")))
        .respond_with(ResponseTemplate::new(500))
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    let err = client.get_search_job_status(JOB_ID).await.unwrap_err();
    let rendered = format!("{err} {err:?}");

    assert!(!rendered.contains(ACCESS_KEY));
    assert!(!rendered.contains(&expected_auth_header()));
}

#[tokio::test]
async fn test_unknown_state_passes_through() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(format!("{JOBS_PATH}/{JOB_ID}")))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "state": "CANCELLED",
            "messageCount": 0,
            "recordCount": 0
        })))
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    let state = client.get_search_job_status(JOB_ID).await.unwrap();

    assert_eq!(state.state, "CANCELLED");
    assert_eq!(
        state.lifecycle(),
        JobLifecycle::Other("CANCELLED".to_string())
    );
}
