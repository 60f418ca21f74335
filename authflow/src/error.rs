//! Errors raised while exchanging credentials with the auth backend.

/// Failure of a single `POST /auth/{login,signup}` round trip.
///
/// The form controller treats every variant the same way (log and carry on);
/// the split exists so logs say what actually went wrong.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AuthError {
    /// The request never produced a response (offline, DNS, CORS, ...).
    #[error("auth request failed: {0}")]
    Transport(String),

    /// The backend answered with a non-success status.
    #[error("auth request rejected: status {status}")]
    Status { status: u16 },

    /// The response body was not `{ user, token }`.
    #[error("auth response parse failed: {0}")]
    Decode(String),

    /// No transport exists in this build (e.g. during server rendering).
    #[error("auth transport not available in this build")]
    Unavailable,
}
