// crates/storyspoil-client/src/error.rs
// ============================================================================
// Module: Client Errors
// Description: Error taxonomy for the StorySpoil HTTP client.
// Purpose: Separate fatal setup failures from transport and decode errors.
// Dependencies: thiserror, storyspoil-contract
// ============================================================================

//! ## Overview
//! Two error layers exist: [`ClientError`] covers individual client
//! operations, and [`SetupError`] marks the fatal pre-flight category that
//! aborts a suite run before any case executes. HTTP failure statuses on
//! story operations are not errors; they are returned as replies so cases
//! can assert them.

// ============================================================================
// SECTION: Imports
// ============================================================================

use storyspoil_contract::RouteError;
use thiserror::Error;

// ============================================================================
// SECTION: Errors
// ============================================================================

/// StorySpoil client errors.
///
/// # Invariants
/// - Variants are stable for suite error mapping and tests.
/// - String payloads may include untrusted server text.
#[derive(Debug, Error)]
pub enum ClientError {
    /// Client or URL configuration error.
    #[error("client config error: {0}")]
    Config(String),
    /// Network-level send failure.
    #[error("transport error: {0}")]
    Transport(String),
    /// Response body could not be decoded where a body is required.
    #[error("decode error: {0}")]
    Decode(String),
    /// Authentication returned a non-success status.
    #[error("authentication rejected with status {status}")]
    AuthenticationRejected {
        /// HTTP status returned by the authentication endpoint.
        status: u16,
    },
    /// Authentication succeeded but returned an empty access token.
    #[error("authentication returned an empty access token")]
    EmptyAccessToken,
    /// An ordered step ran before create populated the run context.
    #[error("run context has no story id; the create step has not run")]
    MissingStoryId,
}

impl From<RouteError> for ClientError {
    fn from(err: RouteError) -> Self {
        Self::Config(err.to_string())
    }
}

impl From<reqwest::Error> for ClientError {
    fn from(err: reqwest::Error) -> Self {
        Self::Transport(err.to_string())
    }
}

/// Fatal suite setup failure.
///
/// Wraps the client error that prevented the suite from starting; surfaced
/// separately from per-case assertion failures so a setup problem is never
/// reported as a case result.
#[derive(Debug, Error)]
#[error("suite setup failed: {source}")]
pub struct SetupError {
    /// Underlying client failure.
    #[from]
    pub source: ClientError,
}
