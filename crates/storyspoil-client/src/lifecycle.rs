// crates/storyspoil-client/src/lifecycle.rs
// ============================================================================
// Module: Story Lifecycle
// Description: Ordered create/edit/delete steps over an explicit run context.
// Purpose: Thread story state through steps instead of shared mutable state.
// Dependencies: storyspoil-client auth/client, storyspoil-contract
// ============================================================================

//! ## Overview
//! The ordered suite depends on the id captured by the create step. Rather
//! than a shared static, [`RunContext`] carries that id explicitly between
//! steps, which keeps runs reentrant and makes out-of-order execution an
//! explicit [`ClientError::MissingStoryId`] instead of a stale-state request.
//! Setup (authentication) happens once in [`StoryLifecycle::preflight`]; a
//! rejected login is a [`SetupError`] and no step can run.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::time::Duration;

use storyspoil_contract::Credentials;
use storyspoil_contract::StoryDraft;
use storyspoil_contract::StoryId;

use crate::auth::Authenticator;
use crate::client::StoryApiClient;
use crate::client::StoryReply;
use crate::error::ClientError;
use crate::error::SetupError;

// ============================================================================
// SECTION: Run Context
// ============================================================================

/// Per-run state threaded through the ordered steps.
///
/// # Invariants
/// - `story_id` is written once by the create step and cleared by teardown;
///   it is never shared between concurrent runs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunContext {
    story_id: Option<StoryId>,
}

impl RunContext {
    /// Creates an empty run context.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            story_id: None,
        }
    }

    /// Returns the story id captured by the create step, when present.
    #[must_use]
    pub const fn story_id(&self) -> Option<&StoryId> {
        self.story_id.as_ref()
    }

    /// Returns the story id or the missing-context error.
    fn require_story_id(&self) -> Result<&StoryId, ClientError> {
        self.story_id.as_ref().ok_or(ClientError::MissingStoryId)
    }
}

// ============================================================================
// SECTION: Lifecycle Runner
// ============================================================================

/// Ordered lifecycle runner over one authenticated client.
#[derive(Debug)]
pub struct StoryLifecycle {
    client: StoryApiClient,
}

impl StoryLifecycle {
    /// Authenticates and builds the runner; the suite's pre-flight check.
    ///
    /// # Errors
    ///
    /// Returns [`SetupError`] when authentication is rejected or the client
    /// cannot be configured; no case may run after this fails.
    pub async fn preflight(
        base_url: &str,
        credentials: &Credentials,
        timeout: Duration,
    ) -> Result<Self, SetupError> {
        let authenticator = Authenticator::new(base_url, timeout)?;
        let token = authenticator.login(credentials).await?;
        let client = StoryApiClient::new(base_url, token, timeout)?;
        Ok(Self {
            client,
        })
    }

    /// Wraps an already-authenticated client.
    #[must_use]
    pub const fn from_client(client: StoryApiClient) -> Self {
        Self {
            client,
        }
    }

    /// Returns the underlying client.
    #[must_use]
    pub const fn client(&self) -> &StoryApiClient {
        &self.client
    }

    /// Ordered step 1: create a story and capture its id into the context.
    ///
    /// # Errors
    ///
    /// Returns transport-level [`ClientError`] variants.
    pub async fn create(
        &self,
        context: &mut RunContext,
        draft: &StoryDraft,
    ) -> Result<StoryReply, ClientError> {
        let reply = self.client.create_story(draft).await?;
        if let Some(story_id) = &reply.story_id {
            context.story_id = Some(story_id.clone());
        }
        Ok(reply)
    }

    /// Ordered step 2: edit the story captured by the create step.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::MissingStoryId`] when the create step has not
    /// populated the context, and transport-level variants otherwise.
    pub async fn edit(
        &self,
        context: &RunContext,
        draft: &StoryDraft,
    ) -> Result<StoryReply, ClientError> {
        let story_id = context.require_story_id()?;
        self.client.edit_story(story_id, draft).await
    }

    /// Ordered step 3: delete the story captured by the create step.
    ///
    /// The id stays in the context so post-delete probes can target it;
    /// teardown clears it.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::MissingStoryId`] when the create step has not
    /// populated the context, and transport-level variants otherwise.
    pub async fn delete(&self, context: &RunContext) -> Result<StoryReply, ClientError> {
        let story_id = context.require_story_id()?;
        self.client.delete_story(story_id).await
    }

    /// Idempotent teardown: best-effort delete of the created story.
    ///
    /// Tolerates already-deleted outcomes (400/404) and clears the context,
    /// so a partially failed ordered run leaves nothing behind on the
    /// service. On a transport-level failure the id stays in the context,
    /// keeping teardown retryable.
    ///
    /// # Errors
    ///
    /// Returns transport-level [`ClientError`] variants only.
    pub async fn teardown(&self, context: &mut RunContext) -> Result<(), ClientError> {
        let Some(story_id) = context.story_id.as_ref() else {
            return Ok(());
        };
        let _ = self.client.delete_story(story_id).await?;
        context.story_id = None;
        Ok(())
    }
}

// ============================================================================
// SECTION: Tests
// ============================================================================

#[cfg(test)]
#[allow(
    clippy::expect_used,
    clippy::unwrap_used,
    reason = "Test-only assertions favor direct unwrap/expect for clarity."
)]
mod tests {
    //! Teardown retry semantics that need a pre-populated context.

    use std::time::Duration;

    use storyspoil_contract::StoryId;

    use super::RunContext;
    use super::StoryLifecycle;
    use crate::client::StoryApiClient;
    use crate::error::ClientError;

    #[tokio::test]
    async fn teardown_keeps_the_id_when_the_delete_cannot_be_sent() {
        let client = StoryApiClient::new(
            "http://127.0.0.1:9",
            "test-token".to_string(),
            Duration::from_secs(1),
        )
        .expect("client builds");
        let lifecycle = StoryLifecycle::from_client(client);
        let mut context = RunContext {
            story_id: Some(StoryId::new("reachable-later")),
        };

        let err = lifecycle
            .teardown(&mut context)
            .await
            .expect_err("teardown against an unreachable endpoint must fail");
        assert!(matches!(err, ClientError::Transport(_)));
        // The id survives, so a later teardown can still clean up.
        assert_eq!(context.story_id().map(StoryId::as_str), Some("reachable-later"));
    }
}
