// system-tests/src/config/env.rs
// ============================================================================
// Module: System Test Environment
// Description: Environment-backed configuration for system tests.
// Purpose: Centralize env parsing with strict UTF-8 validation.
// Dependencies: std, url
// ============================================================================

//! ## Overview
//! Environment values are parsed with strict UTF-8 enforcement to avoid
//! silent misconfiguration. Invalid UTF-8, empty values, or malformed URLs
//! fail closed. When no base URL is configured the suite runs against its
//! in-process stub with baked-in test credentials.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::path::PathBuf;
use std::time::Duration;

use url::Url;

// ============================================================================
// SECTION: Environment Constants
// ============================================================================

/// Environment keys for system test configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SuiteEnv {
    /// Optional base URL of a live StorySpoil deployment.
    BaseUrl,
    /// Account user name for a live deployment.
    Username,
    /// Account password for a live deployment.
    Password,
    /// Optional timeout override in seconds (positive integer).
    TimeoutSeconds,
    /// Optional artifact run root override.
    RunRoot,
}

impl SuiteEnv {
    /// Returns the canonical environment variable name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::BaseUrl => "STORYSPOIL_SYSTEM_TEST_BASE_URL",
            Self::Username => "STORYSPOIL_SYSTEM_TEST_USERNAME",
            Self::Password => "STORYSPOIL_SYSTEM_TEST_PASSWORD",
            Self::TimeoutSeconds => "STORYSPOIL_SYSTEM_TEST_TIMEOUT_SEC",
            Self::RunRoot => "STORYSPOIL_SYSTEM_TEST_RUN_ROOT",
        }
    }
}

// ============================================================================
// SECTION: Config Types
// ============================================================================

/// Typed system test configuration derived from environment variables.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SuiteConfig {
    /// Optional base URL of a live deployment; `None` selects the stub.
    pub base_url: Option<Url>,
    /// Account user name paired with `base_url`.
    pub username: Option<String>,
    /// Account password paired with `base_url`.
    pub password: Option<String>,
    /// Optional timeout override in seconds (positive integer).
    pub timeout: Option<Duration>,
    /// Optional artifact run root override.
    pub run_root: Option<PathBuf>,
}

impl SuiteConfig {
    /// Loads configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error when an environment value is not valid UTF-8, is
    /// empty, or fails validation (a malformed base URL, an invalid timeout,
    /// or credentials supplied without a base URL).
    pub fn load() -> Result<Self, String> {
        let base_url = read_env_nonempty(SuiteEnv::BaseUrl.as_str())?
            .map(|value| parse_base_url(SuiteEnv::BaseUrl.as_str(), &value))
            .transpose()?;
        let username = read_env_nonempty(SuiteEnv::Username.as_str())?;
        let password = read_env_nonempty(SuiteEnv::Password.as_str())?;
        let timeout = read_env_nonempty(SuiteEnv::TimeoutSeconds.as_str())?
            .map(|value| parse_timeout_seconds(SuiteEnv::TimeoutSeconds.as_str(), &value))
            .transpose()?;
        let run_root = read_env_nonempty(SuiteEnv::RunRoot.as_str())?.map(PathBuf::from);
        if base_url.is_none() && (username.is_some() || password.is_some()) {
            return Err(format!(
                "{user} and {pass} require {base} to be set",
                user = SuiteEnv::Username.as_str(),
                pass = SuiteEnv::Password.as_str(),
                base = SuiteEnv::BaseUrl.as_str(),
            ));
        }
        Ok(Self {
            base_url,
            username,
            password,
            timeout,
            run_root,
        })
    }
}

// ============================================================================
// SECTION: Helpers
// ============================================================================

/// Reads an environment variable and enforces UTF-8 validity.
///
/// # Errors
///
/// Returns an error when the environment variable contains invalid UTF-8.
pub fn read_env_strict(name: &str) -> Result<Option<String>, String> {
    std::env::var_os(name).map_or(Ok(None), |raw| {
        raw.into_string().map(Some).map_err(|_| format!("{name} must be valid UTF-8"))
    })
}

/// Reads an environment variable and rejects empty values.
///
/// # Errors
///
/// Returns an error when the variable is set but empty or whitespace.
fn read_env_nonempty(name: &str) -> Result<Option<String>, String> {
    match read_env_strict(name)? {
        Some(value) if value.trim().is_empty() => Err(format!("{name} must not be empty")),
        Some(value) => Ok(Some(value)),
        None => Ok(None),
    }
}

/// Parses and validates a base URL from an environment variable string.
///
/// # Errors
///
/// Returns an error when the value is not an absolute `http`/`https` URL.
fn parse_base_url(name: &str, raw: &str) -> Result<Url, String> {
    let parsed = Url::parse(raw.trim()).map_err(|err| format!("{name} is not a valid URL: {err}"))?;
    if parsed.scheme() != "http" && parsed.scheme() != "https" {
        return Err(format!("{name} must use http or https"));
    }
    Ok(parsed)
}

/// Parses a positive timeout value from an environment variable string.
///
/// # Errors
///
/// Returns an error when the value is missing, non-numeric, or zero.
fn parse_timeout_seconds(name: &str, raw: &str) -> Result<Duration, String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(format!("{name} must be a positive integer number of seconds"));
    }
    let secs: u64 = trimmed
        .parse()
        .map_err(|_| format!("{name} must be a positive integer number of seconds"))?;
    if secs == 0 {
        return Err(format!("{name} must be greater than zero"));
    }
    Ok(Duration::from_secs(secs))
}
