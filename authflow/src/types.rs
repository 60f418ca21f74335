//! Form and wire types shared by the controller, the transport and the UI.
//!
//! DESIGN
//! ======
//! `Credentials` and `AuthResponse` mirror the backend's JSON contract. The
//! user record is kept opaque: the backend owns its shape, so it stays a JSON
//! object with a couple of convenience accessors.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::api::{LOGIN_PATH, SIGNUP_PATH};

/// One input of the credential form.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    Username,
    Password,
    Email,
}

impl Field {
    /// Every field, in display order.
    pub const ALL: [Field; 3] = [Field::Username, Field::Password, Field::Email];

    /// Stable name used as the JSON key and the error-map key.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Username => "username",
            Self::Password => "password",
            Self::Email => "email",
        }
    }
}

/// Whether the form is configured to sign in or to create an account.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Mode {
    #[default]
    Login,
    Signup,
}

impl Mode {
    /// The other mode.
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Login => Self::Signup,
            Self::Signup => Self::Login,
        }
    }

    /// Endpoint path the credentials are posted to in this mode.
    #[must_use]
    pub fn endpoint(self) -> &'static str {
        match self {
            Self::Login => LOGIN_PATH,
            Self::Signup => SIGNUP_PATH,
        }
    }

    /// Whether `field` is shown, validated and submitted in this mode.
    /// Email only takes part in signup.
    #[must_use]
    pub fn includes(self, field: Field) -> bool {
        match field {
            Field::Username | Field::Password => true,
            Field::Email => self == Self::Signup,
        }
    }
}

/// Raw text bound to each input, kept across mode toggles.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormValues {
    pub username: String,
    pub password: String,
    pub email: String,
}

impl FormValues {
    #[must_use]
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Username => &self.username,
            Field::Password => &self.password,
            Field::Email => &self.email,
        }
    }

    pub fn set(&mut self, field: Field, value: String) {
        match field {
            Field::Username => self.username = value,
            Field::Password => self.password = value,
            Field::Email => self.email = value,
        }
    }
}

/// Request body for `POST /auth/login` and `POST /auth/signup`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
    /// Present only for signup; the key is omitted from login payloads.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

impl Credentials {
    /// Build the payload for `mode` from the current form values.
    #[must_use]
    pub fn from_values(values: &FormValues, mode: Mode) -> Self {
        Self {
            username: values.username.clone(),
            password: values.password.clone(),
            email: mode.includes(Field::Email).then(|| values.email.clone()),
        }
    }
}

/// Identity object returned by the backend. Shape is backend-defined.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserRecord(Map<String, Value>);

impl UserRecord {
    #[must_use]
    pub fn new(fields: Map<String, Value>) -> Self {
        Self(fields)
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// The record's `id` value, whatever its JSON type.
    #[must_use]
    pub fn id(&self) -> Option<&Value> {
        self.get("id")
    }

    /// First of `name` / `username` that is a string.
    #[must_use]
    pub fn display_name(&self) -> Option<&str> {
        ["name", "username"]
            .into_iter()
            .find_map(|key| self.get(key).and_then(Value::as_str))
    }
}

impl From<Map<String, Value>> for UserRecord {
    fn from(fields: Map<String, Value>) -> Self {
        Self(fields)
    }
}

/// Success body of both auth endpoints.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AuthResponse {
    pub user: UserRecord,
    pub token: String,
}
