//! # authflow
//!
//! Credential validation, submission and session state for the gatehouse app.
//!
//! This crate owns everything the login/signup flow decides, independent of
//! any UI framework: the per-field rule set, the form controller that turns
//! valid input into one POST, the session store that the root view guard
//! reads, and the view gate itself. The `client` crate wraps these types in
//! Leptos signals; tests drive them directly.

pub mod api;
pub mod config;
pub mod error;
pub mod form;
pub mod session;
pub mod types;
pub mod validation;
pub mod view;

pub use api::AuthApi;
pub use config::ApiConfig;
pub use error::AuthError;
pub use form::{CredentialForm, SubmitBlocked, SubmitOutcome, SubmitRequest};
pub use session::{AuthSessionState, SessionError, SessionStore};
pub use types::{AuthResponse, Credentials, Field, FormValues, Mode, UserRecord};
pub use validation::FieldErrors;
pub use view::{RootView, ViewGate};
