// crates/storyspoil-client/src/lib.rs
// ============================================================================
// Module: StorySpoil Client Library
// Description: HTTP client for the StorySpoil spoiler API.
// Purpose: Provide authentication, typed story operations, and run context.
// Dependencies: reqwest, serde, storyspoil-contract, thiserror
// ============================================================================

//! ## Overview
//! This crate drives the remote StorySpoil spoiler API: `Authenticator`
//! obtains a bearer token, `StoryApiClient` issues the story mutations with
//! that token attached, and `StoryLifecycle` threads an explicit [`RunContext`]
//! through the ordered create/edit/delete steps instead of sharing mutable
//! state between them.
//! Security posture: server responses are untrusted; bodies are decoded
//! tolerantly and secrets are redacted from `Debug` output.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod auth;
pub mod client;
pub mod error;
pub mod lifecycle;

// ============================================================================
// SECTION: Re-exports
// ============================================================================

pub use auth::Authenticator;
pub use client::StoryApiClient;
pub use client::StoryReply;
pub use client::TranscriptEntry;
pub use error::ClientError;
pub use error::SetupError;
pub use lifecycle::RunContext;
pub use lifecycle::StoryLifecycle;
