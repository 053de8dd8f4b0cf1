//! Search job endpoints.
//!
//! All five calls address `{host}{queryPath}` or `{host}{queryPath}/{id}`.
//! Submit accepts only `202 Accepted` and delete only `200 OK`; status,
//! messages and records accept any 2xx.

use reqwest::{Client, StatusCode};
use serde_json::{Map, Value};
use tracing::debug;

use super::request::{
    ErrorMessage, Expect, RequestContext, drain, expect_status, read_json, send_request,
};
use super::url_encoding::encode_path_segment;
use crate::error::{ClientError, Result};
use crate::models::{
    MessagePage, MessagesResponse, PageRequest, RecordPage, SearchJobQuery, SearchJobState,
};

/// Metric and log labels. Fixed templates, independent of the configured
/// query path.
const JOBS_ENDPOINT: &str = "/search/jobs";
const JOB_ENDPOINT: &str = "/search/jobs/{id}";
const MESSAGES_ENDPOINT: &str = "/search/jobs/{id}/messages";
const RECORDS_ENDPOINT: &str = "/search/jobs/{id}/records";

fn job_url(ctx: &RequestContext<'_>, job_id: &str) -> String {
    format!("{}/{}", ctx.jobs_url, encode_path_segment(job_id))
}

/// Create a search job.
///
/// Returns the new job's state, whose `id` is guaranteed non-empty.
pub async fn create_job(
    client: &Client,
    ctx: &RequestContext<'_>,
    query: &SearchJobQuery,
) -> Result<SearchJobState> {
    // Search text can carry sensitive literals; log its size only.
    debug!(
        query_len = query.query.len(),
        from = %query.from,
        to = %query.to,
        time_zone = %query.time_zone,
        "Creating search job"
    );

    let result = async {
        let builder = ctx.authorize_json(client.post(ctx.jobs_url)).json(query);
        let response = send_request(builder, JOBS_ENDPOINT, "POST", ctx.metrics).await?;
        let response = expect_status(
            response,
            Expect::Exactly(StatusCode::ACCEPTED),
            ErrorMessage::Body,
        )
        .await?;
        let state: SearchJobState = read_json(response, "search job").await?;
        if state.id.is_empty() {
            return Err(ClientError::InvalidResponse(
                "search job response carried no id".to_string(),
            ));
        }
        Ok(state)
    }
    .await;

    result.inspect_err(|e| ctx.record_error(JOBS_ENDPOINT, "POST", e))
}

/// Get the current state of a search job.
///
/// The status body carries no `id`; the returned state's `id` is empty.
pub async fn get_job_status(
    client: &Client,
    ctx: &RequestContext<'_>,
    job_id: &str,
) -> Result<SearchJobState> {
    debug!(job_id, "Getting search job status");

    let result = async {
        let builder = ctx.authorize_json(client.get(job_url(ctx, job_id)));
        let response = send_request(builder, JOB_ENDPOINT, "GET", ctx.metrics).await?;
        let response = expect_status(response, Expect::Success, ErrorMessage::Body).await?;
        read_json(response, "search job status").await
    }
    .await;

    result.inspect_err(|e| ctx.record_error(JOB_ENDPOINT, "GET", e))
}

/// Fetch one page of raw messages.
pub async fn get_messages(
    client: &Client,
    ctx: &RequestContext<'_>,
    job_id: &str,
    page: PageRequest,
) -> Result<MessagePage> {
    debug!(job_id, offset = page.offset, limit = page.limit, "Fetching messages");

    let result = async {
        let url = format!("{}/messages", job_url(ctx, job_id));
        let builder = ctx
            .authorize_json(client.get(url))
            .query(&page.query_params());
        let response = send_request(builder, MESSAGES_ENDPOINT, "GET", ctx.metrics).await?;
        let response = expect_status(response, Expect::Success, ErrorMessage::Body).await?;
        let body: MessagesResponse = read_json(response, "messages").await?;
        Ok(MessagePage::new(page, body))
    }
    .await;

    result.inspect_err(|e| ctx.record_error(MESSAGES_ENDPOINT, "GET", e))
}

/// Fetch one page of aggregate records.
///
/// A `400 Bad Request` is reported with the body's `code` as its message
/// (for example `searchjob.query.not.aggregate`).
pub async fn get_records(
    client: &Client,
    ctx: &RequestContext<'_>,
    job_id: &str,
    page: PageRequest,
) -> Result<RecordPage> {
    debug!(job_id, offset = page.offset, limit = page.limit, "Fetching records");

    let result = async {
        let url = format!("{}/records", job_url(ctx, job_id));
        let builder = ctx
            .authorize_json(client.get(url))
            .query(&page.query_params());
        let response = send_request(builder, RECORDS_ENDPOINT, "GET", ctx.metrics).await?;
        let message = if response.status() == StatusCode::BAD_REQUEST {
            ErrorMessage::Code
        } else {
            ErrorMessage::Body
        };
        let response = expect_status(response, Expect::Success, message).await?;
        let body: Map<String, Value> = read_json(response, "records").await?;
        Ok(RecordPage::new(page, body))
    }
    .await;

    result.inspect_err(|e| ctx.record_error(RECORDS_ENDPOINT, "GET", e))
}

/// Delete a search job.
pub async fn delete_job(client: &Client, ctx: &RequestContext<'_>, job_id: &str) -> Result<()> {
    debug!(job_id, "Deleting search job");

    let result = async {
        let builder = ctx.authorize(client.delete(job_url(ctx, job_id)));
        let response = send_request(builder, JOB_ENDPOINT, "DELETE", ctx.metrics).await?;
        let response =
            expect_status(response, Expect::Exactly(StatusCode::OK), ErrorMessage::Body).await?;
        drain(response).await
    }
    .await;

    result.inspect_err(|e| ctx.record_error(JOB_ENDPOINT, "DELETE", e))
}
