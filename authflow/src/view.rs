//! Root view selection.
//!
//! The app serves a single path. Which screen it shows depends on whether the
//! deferred views have been brought up yet and, after that, on the session's
//! authenticated flag. Exactly one [`RootView`] is ever selected.

#[cfg(test)]
#[path = "view_test.rs"]
mod view_test;

use crate::session::AuthSessionState;

/// Screen rendered at `/`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RootView {
    /// Text placeholder while the views are not ready.
    Loading,
    /// Login / signup form.
    Auth,
    /// Signed-in home screen.
    Home,
}

/// Readiness of the deferred views.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ViewGate {
    #[default]
    Loading,
    Ready,
}

impl ViewGate {
    /// Views are available; stays ready for the rest of the app's life.
    pub fn mark_ready(&mut self) {
        *self = Self::Ready;
    }

    #[must_use]
    pub fn is_ready(self) -> bool {
        self == Self::Ready
    }

    /// Pick the screen for the current session.
    #[must_use]
    pub fn select(self, session: &AuthSessionState) -> RootView {
        match (self, session.is_authenticated) {
            (Self::Loading, _) => RootView::Loading,
            (Self::Ready, true) => RootView::Home,
            (Self::Ready, false) => RootView::Auth,
        }
    }
}
