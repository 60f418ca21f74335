//! REST transport for the auth endpoints.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR) and native tests: the transport reports
//! [`AuthError::Unavailable`], since submissions only happen in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every failure is mapped onto an [`AuthError`] variant; the form controller
//! decides what to do with it (log and leave the form as it was).

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use authflow::{ApiConfig, AuthApi, AuthError, AuthResponse, Credentials};

/// `AuthApi` backed by the browser's `fetch`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BrowserAuthApi {
    config: ApiConfig,
}

impl BrowserAuthApi {
    #[must_use]
    pub fn new(config: ApiConfig) -> Self {
        Self { config }
    }

    /// Transport configured from `GATEHOUSE_API_BASE` at build time
    /// (same-origin when unset).
    #[must_use]
    pub fn from_build_env() -> Self {
        Self::new(ApiConfig::new(option_env!("GATEHOUSE_API_BASE").unwrap_or_default()))
    }

    #[must_use]
    pub fn config(&self) -> &ApiConfig {
        &self.config
    }
}

impl AuthApi for BrowserAuthApi {
    async fn post_credentials(&self, endpoint: &str, credentials: &Credentials) -> Result<AuthResponse, AuthError> {
        #[cfg(feature = "hydrate")]
        {
            let url = self.config.endpoint_url(endpoint);
            let resp = gloo_net::http::Request::post(&url)
                .json(credentials)
                .map_err(|e| AuthError::Transport(e.to_string()))?
                .send()
                .await
                .map_err(|e| AuthError::Transport(e.to_string()))?;
            if !resp.ok() {
                return Err(AuthError::Status { status: resp.status() });
            }
            resp.json::<AuthResponse>()
                .await
                .map_err(|e| AuthError::Decode(e.to_string()))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (endpoint, credentials);
            Err(AuthError::Unavailable)
        }
    }
}
