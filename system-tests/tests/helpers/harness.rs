// system-tests/tests/helpers/harness.rs
// ============================================================================
// Module: API Target Harness
// Description: Resolves the spoiler API deployment a suite run targets.
// Purpose: Provide deterministic target setup for hermetic and live runs.
// Dependencies: system-tests, storyspoil-contract
// ============================================================================

//! ## Overview
//! Each suite binary resolves one [`ApiTarget`]: when
//! `STORYSPOIL_SYSTEM_TEST_BASE_URL` is configured the suite drives that live
//! deployment with the configured credentials, otherwise it spawns the
//! in-process stub with baked-in test credentials. The stub handle lives on
//! the target so the server is torn down when the target drops.

use std::time::Duration;

use storyspoil_contract::Credentials;
use system_tests::config::SuiteConfig;
use system_tests::config::SuiteEnv;

use super::spoiler_stub::SpoilerStubHandle;
use super::spoiler_stub::spawn_spoiler_stub;
use super::timeouts;

/// Resolved spoiler API deployment for one suite run.
pub struct ApiTarget {
    base_url: String,
    credentials: Credentials,
    timeout: Duration,
    stub: Option<SpoilerStubHandle>,
}

impl ApiTarget {
    /// Resolves the target from the environment, spawning the stub if needed.
    ///
    /// # Errors
    ///
    /// Returns an error when configuration is invalid, live credentials are
    /// incomplete, or the stub cannot be spawned.
    pub fn resolve() -> Result<Self, String> {
        let config = SuiteConfig::load()?;
        let timeout = timeouts::effective_timeout(config.timeout);
        if let Some(base_url) = config.base_url {
            let (Some(username), Some(password)) = (config.username, config.password) else {
                return Err(format!(
                    "live runs require {user} and {pass}",
                    user = SuiteEnv::Username.as_str(),
                    pass = SuiteEnv::Password.as_str(),
                ));
            };
            return Ok(Self {
                base_url: base_url.as_str().trim_end_matches('/').to_string(),
                credentials: Credentials::new(username, password),
                timeout,
                stub: None,
            });
        }
        let stub = spawn_spoiler_stub()?;
        Ok(Self {
            base_url: stub.base_url().to_string(),
            credentials: Credentials::new(
                super::spoiler_stub::STUB_USERNAME,
                super::spoiler_stub::STUB_PASSWORD,
            ),
            timeout,
            stub: Some(stub),
        })
    }

    /// Returns the base URL of the target deployment.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Returns the credentials for the target deployment.
    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    /// Returns the per-request timeout for this run.
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Returns the stub handle for hermetic runs.
    pub fn stub(&self) -> Option<&SpoilerStubHandle> {
        self.stub.as_ref()
    }
}
