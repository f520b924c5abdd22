// system-tests/tests/helpers/timeouts.rs
// ============================================================================
// Module: System Test Timeouts
// Description: Centralized timeout policy for suite HTTP calls.
// Purpose: Keep suite timeouts consistent and configurable across binaries.
// ============================================================================

use std::time::Duration;

/// Default per-request timeout for suite HTTP calls.
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Returns the effective timeout for a suite run.
///
/// A configured override (parsed by the suite config from
/// `STORYSPOIL_SYSTEM_TEST_TIMEOUT_SEC`) can only lengthen the default:
/// shorter overrides would make slow live deployments flaky rather than
/// conformant.
#[must_use]
pub fn effective_timeout(configured: Option<Duration>) -> Duration {
    configured.map_or(DEFAULT_REQUEST_TIMEOUT, |timeout| {
        std::cmp::max(timeout, DEFAULT_REQUEST_TIMEOUT)
    })
}
