// crates/storyspoil-contract/src/routes.rs
// ============================================================================
// Module: API Routes
// Description: Endpoint paths and URL construction for the spoiler API.
// Purpose: Build absolute request URLs from a validated base endpoint.
// Dependencies: thiserror, url
// ============================================================================

//! ## Overview
//! Route construction joins fixed endpoint paths against a single base
//! endpoint. Base URLs are validated once; join failures fail closed rather
//! than producing requests against a mangled target.

// ============================================================================
// SECTION: Imports
// ============================================================================

use thiserror::Error;
use url::Url;

use crate::types::StoryId;

// ============================================================================
// SECTION: Paths
// ============================================================================

/// Authentication endpoint path.
pub const AUTHENTICATION_PATH: &str = "/api/User/Authentication";
/// Story create endpoint path.
pub const STORY_CREATE_PATH: &str = "/api/Story/Create";
/// Story edit endpoint path prefix; the story id is appended.
pub const STORY_EDIT_PREFIX: &str = "/api/Story/Edit";
/// Story delete endpoint path prefix; the story id is appended.
pub const STORY_DELETE_PREFIX: &str = "/api/Story/Delete";

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Route construction errors.
#[derive(Debug, Error)]
pub enum RouteError {
    /// Base endpoint is not a valid absolute URL.
    #[error("invalid base url: {0}")]
    InvalidBase(String),
    /// Joining a path against the base endpoint failed.
    #[error("cannot join path {path} onto base url")]
    Join {
        /// Path that failed to join.
        path: String,
    },
}

// ============================================================================
// SECTION: Route Builder
// ============================================================================

/// Absolute-URL builder for a single spoiler API deployment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiRoutes {
    base: Url,
}

impl ApiRoutes {
    /// Parses and validates the base endpoint.
    ///
    /// # Errors
    ///
    /// Returns [`RouteError::InvalidBase`] when the endpoint is not an
    /// absolute `http`/`https` URL.
    pub fn new(base: &str) -> Result<Self, RouteError> {
        let parsed = Url::parse(base).map_err(|err| RouteError::InvalidBase(err.to_string()))?;
        if parsed.scheme() != "http" && parsed.scheme() != "https" {
            return Err(RouteError::InvalidBase(format!(
                "unsupported scheme {scheme}",
                scheme = parsed.scheme()
            )));
        }
        Ok(Self {
            base: parsed,
        })
    }

    /// Returns the base endpoint.
    #[must_use]
    pub fn base(&self) -> &Url {
        &self.base
    }

    /// Returns the authentication URL.
    ///
    /// # Errors
    ///
    /// Returns [`RouteError::Join`] when the path cannot be joined.
    pub fn authentication(&self) -> Result<Url, RouteError> {
        self.join(AUTHENTICATION_PATH)
    }

    /// Returns the story create URL.
    ///
    /// # Errors
    ///
    /// Returns [`RouteError::Join`] when the path cannot be joined.
    pub fn story_create(&self) -> Result<Url, RouteError> {
        self.join(STORY_CREATE_PATH)
    }

    /// Returns the story edit URL for a story id.
    ///
    /// # Errors
    ///
    /// Returns [`RouteError::Join`] when the path cannot be joined.
    pub fn story_edit(&self, story_id: &StoryId) -> Result<Url, RouteError> {
        self.join(&format!("{STORY_EDIT_PREFIX}/{story_id}"))
    }

    /// Returns the story delete URL for a story id.
    ///
    /// # Errors
    ///
    /// Returns [`RouteError::Join`] when the path cannot be joined.
    pub fn story_delete(&self, story_id: &StoryId) -> Result<Url, RouteError> {
        self.join(&format!("{STORY_DELETE_PREFIX}/{story_id}"))
    }

    /// Joins a path against the base endpoint.
    fn join(&self, path: &str) -> Result<Url, RouteError> {
        self.base.join(path).map_err(|_| RouteError::Join {
            path: path.to_string(),
        })
    }
}
