//! Credential form controller: bindings, live validation, mode, submission.
//!
//! DESIGN
//! ======
//! Submission is split around the single await point. [`CredentialForm::begin_submit`]
//! validates, flips `loading` on and hands back the request to send;
//! [`CredentialForm::finish_submit`] commits the response (or logs the
//! failure) and always clears `loading`. UI code can keep the form in a
//! signal and never hold a borrow across the network call;
//! [`CredentialForm::submit`] chains the two for callers that own the form.
//!
//! Failures are logged and otherwise silent: the form stays as it was so the
//! user can simply submit again.

#[cfg(test)]
#[path = "form_test.rs"]
mod form_test;

use crate::api::AuthApi;
use crate::error::AuthError;
use crate::session::SessionStore;
use crate::types::{AuthResponse, Credentials, Field, FormValues, Mode};
use crate::validation::{FieldErrors, validate_field};

/// Why a submission did not start.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum SubmitBlocked {
    /// At least one active field breaks a rule; errors are on the form.
    #[error("form has validation errors")]
    Invalid,
    /// A previous submission has not settled yet.
    #[error("a submission is already in flight")]
    InFlight,
}

/// What a settled submission did to the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    Authenticated,
    Failed,
}

/// One POST to send: endpoint path plus JSON body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitRequest {
    pub endpoint: &'static str,
    pub credentials: Credentials,
}

/// State behind the login/signup form.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CredentialForm {
    values: FormValues,
    mode: Mode,
    loading: bool,
    errors: FieldErrors,
}

impl CredentialForm {
    /// Empty form in login mode.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn values(&self) -> &FormValues {
        &self.values
    }

    #[must_use]
    pub fn mode(&self) -> Mode {
        self.mode
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    #[must_use]
    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    #[must_use]
    pub fn error(&self, field: Field) -> Option<&str> {
        self.errors.get(field)
    }

    /// Bind a new value and re-validate every field active in the current mode.
    pub fn set_field(&mut self, field: Field, value: impl Into<String>) {
        self.values.set(field, value.into());
        self.revalidate();
    }

    /// Switch between login and signup. Values and errors are kept as-is,
    /// including an email error left over from signup.
    pub fn toggle_mode(&mut self) {
        self.mode = self.mode.toggled();
    }

    /// Validate and, if clean, mark the form loading and build the request.
    ///
    /// # Errors
    ///
    /// [`SubmitBlocked::InFlight`] while a request is pending,
    /// [`SubmitBlocked::Invalid`] when an active field breaks a rule.
    pub fn begin_submit(&mut self) -> Result<SubmitRequest, SubmitBlocked> {
        if self.loading {
            return Err(SubmitBlocked::InFlight);
        }
        self.revalidate();
        if self.errors.blocks(self.mode) {
            return Err(SubmitBlocked::Invalid);
        }
        self.loading = true;
        let endpoint = self.mode.endpoint();
        log::debug!("submitting credentials to {endpoint}");
        Ok(SubmitRequest { endpoint, credentials: Credentials::from_values(&self.values, self.mode) })
    }

    /// Settle a submission started by [`Self::begin_submit`].
    ///
    /// A response commits the identity to `session` in one step; an error is
    /// logged and leaves `session` untouched. `loading` is cleared either way.
    pub fn finish_submit(
        &mut self,
        result: Result<AuthResponse, AuthError>,
        session: &mut SessionStore,
    ) -> SubmitOutcome {
        self.loading = false;
        match result {
            Ok(AuthResponse { user, token }) => {
                session.complete_login(user, token);
                log::info!("signed in via {}", self.mode.endpoint());
                SubmitOutcome::Authenticated
            }
            Err(e) => {
                log::warn!("credential submission failed: {e}");
                SubmitOutcome::Failed
            }
        }
    }

    /// Run a whole submission against `api`: validate, post once, settle.
    ///
    /// # Errors
    ///
    /// Only when the submission could not start (see [`Self::begin_submit`]).
    /// Network and server failures settle as [`SubmitOutcome::Failed`].
    pub async fn submit<A: AuthApi>(
        &mut self,
        api: &A,
        session: &mut SessionStore,
    ) -> Result<SubmitOutcome, SubmitBlocked> {
        let request = self.begin_submit()?;
        let result = api.post_credentials(request.endpoint, &request.credentials).await;
        Ok(self.finish_submit(result, session))
    }

    fn revalidate(&mut self) {
        for field in Field::ALL.into_iter().filter(|f| self.mode.includes(*f)) {
            self.errors.apply(field, validate_field(field, &self.values));
        }
    }
}
