// crates/storyspoil-contract/src/lib.rs
// ============================================================================
// Module: StorySpoil Contract Library
// Description: Wire-format contract for the StorySpoil spoiler API.
// Purpose: Provide canonical request/response shapes, routes, and messages.
// Dependencies: serde, serde_json, thiserror, url
// ============================================================================

//! ## Overview
//! This crate defines the observed black-box contract of the StorySpoil
//! spoiler API: the JSON shapes exchanged on the wire, the endpoint routes,
//! and the canonical response messages the service emits. It performs no I/O;
//! the HTTP client lives in `storyspoil-client`.
//! Security posture: server responses are untrusted input; shapes tolerate
//! absent fields and callers must validate what they rely on.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod messages;
pub mod routes;
pub mod types;

// ============================================================================
// SECTION: Re-exports
// ============================================================================

pub use routes::RouteError;
pub use types::ApiMessage;
pub use types::AuthenticationReply;
pub use types::Credentials;
pub use types::StoryDraft;
pub use types::StoryId;
