// crates/storyspoil-contract/src/types.rs
// ============================================================================
// Module: Contract Types
// Description: Wire-format data models for the StorySpoil spoiler API.
// Purpose: Provide canonical shapes for authentication and story mutations.
// Dependencies: serde
// ============================================================================

//! ## Overview
//! Pure wire-format DTOs, constructed per request and discarded. Field names
//! serialize in PascalCase to match the service contract. Response shapes are
//! deliberately tolerant: the service omits `StoryId` on every operation but
//! create, and omits `Message` on some validation failures.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fmt;

use serde::Deserialize;
use serde::Serialize;

// ============================================================================
// SECTION: Identifiers
// ============================================================================

/// Opaque identifier for a story spoiler.
///
/// # Invariants
/// - Treated as an opaque non-empty string; no shape is assumed beyond what
///   the service echoes back from a create response.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StoryId(String);

impl StoryId {
    /// Creates a new story identifier.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for StoryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<&str> for StoryId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for StoryId {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

// ============================================================================
// SECTION: Authentication Shapes
// ============================================================================

/// Login request body for `/api/User/Authentication`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    /// Account user name.
    #[serde(rename = "UserName")]
    pub user_name: String,
    /// Account password.
    #[serde(rename = "Password")]
    pub password: String,
}

impl Credentials {
    /// Creates credentials from a user name and password pair.
    #[must_use]
    pub fn new(user_name: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            user_name: user_name.into(),
            password: password.into(),
        }
    }
}

/// Successful login response body.
///
/// # Invariants
/// - `access_token` is untrusted server output; callers must reject empty
///   tokens before attaching them to requests.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthenticationReply {
    /// Bearer token attached to every request after setup.
    #[serde(rename = "AccessToken")]
    pub access_token: String,
}

// ============================================================================
// SECTION: Story Shapes
// ============================================================================

/// Request body for story create and edit operations.
///
/// # Invariants
/// - `url` is blank-allowed; [`StoryDraft::new`] sets it to `""` and `None`
///   is omitted from the serialized body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoryDraft {
    /// Story title.
    #[serde(rename = "Title")]
    pub title: String,
    /// Story description.
    #[serde(rename = "Description")]
    pub description: String,
    /// Optional story URL; omitted from the body when `None`.
    #[serde(rename = "Url", default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

impl StoryDraft {
    /// Creates a draft with a blank URL.
    #[must_use]
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            url: Some(String::new()),
        }
    }

    /// Replaces the URL on the draft.
    #[must_use]
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }
}

/// Response body for mutating story operations.
///
/// # Invariants
/// - `story_id` is present only on successful create responses.
/// - `message` may be absent on validation failures; callers assert it only
///   where the contract specifies a message.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiMessage {
    /// Identifier of the created story, when present.
    #[serde(rename = "StoryId", default, skip_serializing_if = "Option::is_none")]
    pub story_id: Option<String>,
    /// Human-readable outcome message, when present.
    #[serde(rename = "Message", default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}
