// system-tests/src/lib.rs
// ============================================================================
// Module: StorySpoil System Tests Library
// Description: Shared configuration and helpers for conformance test runs.
// Purpose: Provide common utilities for StorySpoil system-test binaries.
// Dependencies: std, url
// ============================================================================

//! ## Overview
//! This crate hosts shared configuration for the StorySpoil conformance
//! binaries in `system-tests/tests`. Runs are hermetic by default (an
//! in-process stub API); environment overrides point the suite at a live
//! deployment instead.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod config;
