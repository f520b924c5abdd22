// crates/storyspoil-client/src/client.rs
// ============================================================================
// Module: Story API Client
// Description: Bearer-authenticated HTTP client for story mutations.
// Purpose: Issue create/edit/delete requests and capture transcripts.
// Dependencies: reqwest, serde, serde_json, storyspoil-contract
// ============================================================================

//! ## Overview
//! One client, one bearer token, one request per operation, no retries.
//! Operations return a [`StoryReply`] carrying the HTTP status and the
//! tolerantly decoded body so both success and failure statuses are
//! assertable by the suite. Every call appends a [`TranscriptEntry`] for
//! artifact capture.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::sync::Arc;
use std::sync::Mutex;
use std::time::Duration;

use reqwest::Client;
use reqwest::Response;
use serde::Serialize;
use serde_json::Value;
use storyspoil_contract::ApiMessage;
use storyspoil_contract::StoryDraft;
use storyspoil_contract::StoryId;
use storyspoil_contract::routes::ApiRoutes;

use crate::error::ClientError;

// ============================================================================
// SECTION: Types
// ============================================================================

/// Outcome of a mutating story operation.
///
/// # Invariants
/// - `status` is the raw HTTP status; non-success statuses are expected
///   outcomes for the failure cases, not errors.
/// - `story_id` is populated only when the server body carries one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoryReply {
    /// HTTP status code of the response.
    pub status: u16,
    /// Identifier echoed by a successful create.
    pub story_id: Option<StoryId>,
    /// Outcome message, when the body carries one.
    pub message: Option<String>,
}

/// Recorded request/response pair for artifact capture.
#[derive(Debug, Clone, Serialize)]
pub struct TranscriptEntry {
    /// Monotonic per-client sequence number.
    pub sequence: u64,
    /// HTTP method of the request.
    pub method: String,
    /// Request path relative to the base endpoint.
    pub path: String,
    /// HTTP status of the response.
    pub status: u16,
    /// Decoded response message, when present.
    pub message: Option<String>,
}

/// Bearer-authenticated client for the spoiler API.
#[derive(Clone)]
pub struct StoryApiClient {
    routes: ApiRoutes,
    http: Client,
    bearer_token: String,
    transcript: Arc<Mutex<Vec<TranscriptEntry>>>,
}

impl std::fmt::Debug for StoryApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StoryApiClient")
            .field("base", &self.routes.base().as_str())
            .field("bearer_token", &"<redacted>")
            .finish()
    }
}

impl StoryApiClient {
    /// Creates a client for a base endpoint with a bearer token and timeout.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Config`] when the base URL is invalid or the
    /// HTTP client cannot be built.
    pub fn new(base_url: &str, bearer_token: String, timeout: Duration) -> Result<Self, ClientError> {
        let routes = ApiRoutes::new(base_url)?;
        let http = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|err| ClientError::Config(format!("failed to build http client: {err}")))?;
        Ok(Self::from_parts(routes, http, bearer_token))
    }

    /// Creates a client from pre-built routes and an existing reqwest client.
    #[must_use]
    pub fn from_parts(routes: ApiRoutes, http: Client, bearer_token: String) -> Self {
        Self {
            routes,
            http,
            bearer_token,
            transcript: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Returns the routes this client targets.
    #[must_use]
    pub const fn routes(&self) -> &ApiRoutes {
        &self.routes
    }

    /// Returns a snapshot of the transcript entries.
    #[must_use]
    pub fn transcript(&self) -> Vec<TranscriptEntry> {
        self.transcript.lock().map_or_else(|_| Vec::new(), |entries| entries.clone())
    }

    /// Creates a story from a draft.
    ///
    /// # Errors
    ///
    /// Returns transport-level [`ClientError`] variants; HTTP failure
    /// statuses are returned inside the reply.
    pub async fn create_story(&self, draft: &StoryDraft) -> Result<StoryReply, ClientError> {
        let url = self.routes.story_create()?;
        let path = url.path().to_string();
        let response = self.http.post(url).bearer_auth(&self.bearer_token).json(draft).send().await?;
        self.finish("POST", path, response).await
    }

    /// Creates a story from an arbitrary JSON body.
    ///
    /// Used by the invalid-body conformance case; the body is sent verbatim.
    ///
    /// # Errors
    ///
    /// Returns transport-level [`ClientError`] variants; HTTP failure
    /// statuses are returned inside the reply.
    pub async fn create_story_raw(&self, body: &Value) -> Result<StoryReply, ClientError> {
        let url = self.routes.story_create()?;
        let path = url.path().to_string();
        let response = self.http.post(url).bearer_auth(&self.bearer_token).json(body).send().await?;
        self.finish("POST", path, response).await
    }

    /// Edits a story by id.
    ///
    /// # Errors
    ///
    /// Returns transport-level [`ClientError`] variants; HTTP failure
    /// statuses are returned inside the reply.
    pub async fn edit_story(
        &self,
        story_id: &StoryId,
        draft: &StoryDraft,
    ) -> Result<StoryReply, ClientError> {
        let url = self.routes.story_edit(story_id)?;
        let path = url.path().to_string();
        let response = self.http.put(url).bearer_auth(&self.bearer_token).json(draft).send().await?;
        self.finish("PUT", path, response).await
    }

    /// Deletes a story by id.
    ///
    /// # Errors
    ///
    /// Returns transport-level [`ClientError`] variants; HTTP failure
    /// statuses are returned inside the reply.
    pub async fn delete_story(&self, story_id: &StoryId) -> Result<StoryReply, ClientError> {
        let url = self.routes.story_delete(story_id)?;
        let path = url.path().to_string();
        let response = self.http.delete(url).bearer_auth(&self.bearer_token).send().await?;
        self.finish("DELETE", path, response).await
    }

    /// Decodes a response into a reply and records the transcript entry.
    async fn finish(
        &self,
        method: &str,
        path: String,
        response: Response,
    ) -> Result<StoryReply, ClientError> {
        let status = response.status().as_u16();
        let bytes = response.bytes().await?;
        // Failure bodies are not uniform; decode tolerantly and keep None.
        let body: ApiMessage = if bytes.is_empty() {
            ApiMessage::default()
        } else {
            serde_json::from_slice(&bytes).unwrap_or_default()
        };
        let reply = StoryReply {
            status,
            story_id: body.story_id.map(StoryId::new),
            message: body.message,
        };
        self.record(method, path, &reply);
        Ok(reply)
    }

    /// Appends a transcript entry for a completed call.
    fn record(&self, method: &str, path: String, reply: &StoryReply) {
        let Ok(mut guard) = self.transcript.lock() else {
            return;
        };
        let sequence = u64::try_from(guard.len()).unwrap_or(u64::MAX).saturating_add(1);
        guard.push(TranscriptEntry {
            sequence,
            method: method.to_string(),
            path,
            status: reply.status,
            message: reply.message.clone(),
        });
    }
}
