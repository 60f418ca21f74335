//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! One [`SessionStore`] is created by the root component and handed to the
//! rest of the app through context. The root view guard reads
//! `is_authenticated`; the credential form writes a completed login.
//!
//! INVARIANT
//! =========
//! `is_authenticated` implies both `token` and `user` are present. Only
//! [`SessionStore::complete_login`] and a guarded
//! [`SessionStore::set_authenticated`] can raise the flag.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use crate::types::UserRecord;

/// Rejected session transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum SessionError {
    #[error("cannot mark session authenticated without both a token and a user")]
    IncompleteIdentity,
}

/// Snapshot of who is signed in.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AuthSessionState {
    pub token: Option<String>,
    pub user: Option<UserRecord>,
    pub is_authenticated: bool,
}

/// Owner of the single [`AuthSessionState`] for the app's lifetime.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SessionStore {
    state: AuthSessionState,
}

impl SessionStore {
    /// Unauthenticated, empty session.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn state(&self) -> &AuthSessionState {
        &self.state
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.state.is_authenticated
    }

    /// Record a successful login or signup in one step.
    pub fn complete_login(&mut self, user: UserRecord, token: String) {
        self.state = AuthSessionState { token: Some(token), user: Some(user), is_authenticated: true };
    }

    pub fn set_token(&mut self, token: String) {
        self.state.token = Some(token);
    }

    pub fn set_user(&mut self, user: UserRecord) {
        self.state.user = Some(user);
    }

    /// Raise or lower the authenticated flag.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::IncompleteIdentity`] when raising the flag
    /// while the token or user is missing; the state is left unchanged.
    pub fn set_authenticated(&mut self, authenticated: bool) -> Result<(), SessionError> {
        if authenticated && (self.state.token.is_none() || self.state.user.is_none()) {
            return Err(SessionError::IncompleteIdentity);
        }
        self.state.is_authenticated = authenticated;
        Ok(())
    }

    /// Drop the identity and return to the initial, unauthenticated state.
    pub fn clear(&mut self) {
        self.state = AuthSessionState::default();
    }
}
