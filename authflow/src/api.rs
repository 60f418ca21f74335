//! Transport seam between the form controller and the auth backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! The browser build implements [`AuthApi`] with `gloo-net`; tests implement
//! it with in-memory fakes. The controller only ever issues one call per
//! submission, so the trait is a single method.

use crate::error::AuthError;
use crate::types::{AuthResponse, Credentials};

/// Login endpoint path, relative to the configured API base.
pub const LOGIN_PATH: &str = "/auth/login";
/// Signup endpoint path, relative to the configured API base.
pub const SIGNUP_PATH: &str = "/auth/signup";

/// Posts credentials to an auth endpoint and decodes `{ user, token }`.
///
/// Futures are not required to be `Send`: submissions run on the single UI
/// thread.
#[allow(async_fn_in_trait)]
pub trait AuthApi {
    /// POST `credentials` as JSON to `endpoint` (one of [`LOGIN_PATH`] /
    /// [`SIGNUP_PATH`]).
    ///
    /// # Errors
    ///
    /// Returns an [`AuthError`] for transport failures, non-success statuses
    /// and undecodable bodies.
    async fn post_credentials(&self, endpoint: &str, credentials: &Credentials) -> Result<AuthResponse, AuthError>;
}
