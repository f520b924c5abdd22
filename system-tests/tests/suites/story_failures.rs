// system-tests/tests/suites/story_failures.rs
// ============================================================================
// Module: Story Failure Tests
// Description: Negative-path conformance for the spoiler API.
// Purpose: Ensure invalid bodies and unknown ids yield the contract replies.
// Dependencies: system-tests helpers, storyspoil-client
// ============================================================================

//! Negative-path conformance: these cases share no state with the ordered
//! lifecycle and probe the service with the literal unknown ids from the
//! contract.

use std::time::Duration;

use helpers::artifacts::TestReporter;
use helpers::harness::ApiTarget;
use helpers::readiness::wait_for_api_ready;
use serde_json::json;
use storyspoil_client::StoryApiClient;
use storyspoil_client::StoryLifecycle;
use storyspoil_contract::StoryDraft;
use storyspoil_contract::StoryId;
use storyspoil_contract::messages;
use storyspoil_contract::routes;

use crate::helpers;

#[tokio::test(flavor = "multi_thread")]
async fn create_with_empty_body_is_rejected() -> Result<(), Box<dyn std::error::Error>> {
    let mut reporter = TestReporter::new("create_with_empty_body_is_rejected")?;
    let target = ApiTarget::resolve()?;
    wait_for_api_ready(target.base_url(), target.timeout()).await?;

    let lifecycle =
        StoryLifecycle::preflight(target.base_url(), target.credentials(), target.timeout())
            .await?;
    let reply = lifecycle.client().create_story_raw(&json!({})).await?;
    if reply.status != 400 {
        return Err(format!("expected status 400, got {status}", status = reply.status).into());
    }
    // The contract checks no message on this reply.

    reporter.finish(
        "pass",
        vec!["empty-body create was rejected with 400".to_string()],
        vec!["summary.json".to_string(), "summary.md".to_string()],
    )?;
    Ok(())
}

#[tokio::test(flavor = "multi_thread")]
async fn edit_with_unknown_id_reports_no_spoilers() -> Result<(), Box<dyn std::error::Error>> {
    let mut reporter = TestReporter::new("edit_with_unknown_id_reports_no_spoilers")?;
    let target = ApiTarget::resolve()?;
    wait_for_api_ready(target.base_url(), target.timeout()).await?;

    let lifecycle =
        StoryLifecycle::preflight(target.base_url(), target.credentials(), target.timeout())
            .await?;
    let mut draft = StoryDraft::new("New Title", "Test description");
    draft.url = None;
    let reply =
        lifecycle.client().edit_story(&StoryId::new("XXXXXXXXXXX"), &draft).await?;
    if reply.status != 404 {
        return Err(format!("expected status 404, got {status}", status = reply.status).into());
    }
    if reply.message.as_deref() != Some(messages::EDIT_NOT_FOUND) {
        return Err(format!("unexpected message: {message:?}", message = reply.message).into());
    }

    reporter.finish(
        "pass",
        vec!["unknown-id edit answered 404 with the contract message".to_string()],
        vec!["summary.json".to_string(), "summary.md".to_string()],
    )?;
    Ok(())
}

#[tokio::test(flavor = "multi_thread")]
async fn delete_with_unknown_id_is_rejected() -> Result<(), Box<dyn std::error::Error>> {
    let mut reporter = TestReporter::new("delete_with_unknown_id_is_rejected")?;
    let target = ApiTarget::resolve()?;
    wait_for_api_ready(target.base_url(), target.timeout()).await?;

    let lifecycle =
        StoryLifecycle::preflight(target.base_url(), target.credentials(), target.timeout())
            .await?;
    let reply = lifecycle.client().delete_story(&StoryId::new("XASDAXAS")).await?;
    if reply.status != 400 {
        return Err(format!("expected status 400, got {status}", status = reply.status).into());
    }
    if reply.message.as_deref() != Some(messages::DELETE_REJECTED) {
        return Err(format!("unexpected message: {message:?}", message = reply.message).into());
    }

    reporter.finish(
        "pass",
        vec!["unknown-id delete answered 400 with the contract message".to_string()],
        vec!["summary.json".to_string(), "summary.md".to_string()],
    )?;
    Ok(())
}

#[tokio::test(flavor = "multi_thread")]
async fn requests_without_a_valid_token_are_unauthorized()
-> Result<(), Box<dyn std::error::Error>> {
    let mut reporter = TestReporter::new("requests_without_a_valid_token_are_unauthorized")?;
    let target = ApiTarget::resolve()?;
    wait_for_api_ready(target.base_url(), target.timeout()).await?;

    // No Authorization header at all.
    let bare = reqwest::Client::builder().timeout(Duration::from_secs(5)).build()?;
    let response = bare
        .post(format!("{base}{path}", base = target.base_url(), path = routes::STORY_CREATE_PATH))
        .json(&StoryDraft::new("New Story for fun", "Test Description"))
        .send()
        .await?;
    if response.status().as_u16() != 401 {
        let status = response.status().as_u16();
        return Err(format!("expected status 401 without a token, got {status}").into());
    }

    // A token the service never issued.
    let client = StoryApiClient::new(
        target.base_url(),
        "not-a-real-token".to_string(),
        Duration::from_secs(5),
    )?;
    let reply = client.create_story(&StoryDraft::new("New Story for fun", "Test Description"))
        .await?;
    if reply.status != 401 {
        return Err(format!("expected status 401, got {status}", status = reply.status).into());
    }

    reporter.finish(
        "pass",
        vec![
            "request without an authorization header was rejected with 401".to_string(),
            "request with an unissued token was rejected with 401".to_string(),
        ],
        vec!["summary.json".to_string(), "summary.md".to_string()],
    )?;
    Ok(())
}
