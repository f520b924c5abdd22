// crates/storyspoil-client/src/auth.rs
// ============================================================================
// Module: Authenticator
// Description: Bearer-token acquisition for the StorySpoil spoiler API.
// Purpose: Exchange credentials for an access token, failing closed.
// Dependencies: reqwest, storyspoil-contract
// ============================================================================

//! ## Overview
//! Authentication is a one-shot POST of credentials to the authentication
//! endpoint. Any non-success status is fatal; there is no retry and no
//! distinction between network failure and credential rejection beyond the
//! error variant. Empty tokens are rejected rather than attached to requests.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::time::Duration;

use reqwest::Client;
use storyspoil_contract::AuthenticationReply;
use storyspoil_contract::Credentials;
use storyspoil_contract::routes::ApiRoutes;

use crate::error::ClientError;

// ============================================================================
// SECTION: Authenticator
// ============================================================================

/// One-shot authenticator for the spoiler API.
pub struct Authenticator {
    routes: ApiRoutes,
    http: Client,
}

impl std::fmt::Debug for Authenticator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Authenticator").field("base", &self.routes.base().as_str()).finish()
    }
}

impl Authenticator {
    /// Creates an authenticator for a base endpoint with a request timeout.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Config`] when the base URL is invalid or the
    /// HTTP client cannot be built.
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, ClientError> {
        let routes = ApiRoutes::new(base_url)?;
        let http = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|err| ClientError::Config(format!("failed to build http client: {err}")))?;
        Ok(Self {
            routes,
            http,
        })
    }

    /// Exchanges credentials for a bearer token.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::AuthenticationRejected`] on any non-success
    /// status, [`ClientError::EmptyAccessToken`] when the reply carries a
    /// blank token, and transport/decode variants for lower-level failures.
    pub async fn login(&self, credentials: &Credentials) -> Result<String, ClientError> {
        let url = self.routes.authentication()?;
        let response = self.http.post(url).json(credentials).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ClientError::AuthenticationRejected {
                status: status.as_u16(),
            });
        }
        let reply: AuthenticationReply = response
            .json()
            .await
            .map_err(|err| ClientError::Decode(format!("invalid authentication reply: {err}")))?;
        if reply.access_token.trim().is_empty() {
            return Err(ClientError::EmptyAccessToken);
        }
        Ok(reply.access_token)
    }

    /// Returns the routes this authenticator targets.
    #[must_use]
    pub const fn routes(&self) -> &ApiRoutes {
        &self.routes
    }
}
