// crates/storyspoil-contract/src/messages.rs
// ============================================================================
// Module: Canonical Messages
// Description: Response messages emitted by the StorySpoil spoiler API.
// Purpose: Keep expected message literals in one place for suite assertions.
// Dependencies: std
// ============================================================================

//! ## Overview
//! The service attaches fixed human-readable messages to mutating-operation
//! responses. Conformance cases assert these literals verbatim; the constants
//! here are the single source of truth for both the suite and the hermetic
//! stub.

/// Message returned by a successful story create (201).
pub const STORY_CREATED: &str = "Successfully created!";
/// Message returned by a successful story edit (200).
pub const STORY_EDITED: &str = "Successfully edited";
/// Message returned by a successful story delete (200).
pub const STORY_DELETED: &str = "Deleted successfully!";
/// Message returned when editing an unknown story id (404).
pub const EDIT_NOT_FOUND: &str = "No spoilers...";
/// Message returned when deleting an unknown story id (400).
pub const DELETE_REJECTED: &str = "Unable to delete this story spoiler!";
