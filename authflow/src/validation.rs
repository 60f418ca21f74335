//! Declarative per-field rules that gate credential submission.
//!
//! DESIGN
//! ======
//! Each field is checked on its own against an ordered list of rules and
//! reports only the first one it breaks. Fields never short-circuit each
//! other, so the error map always reflects every field that participates in
//! the current mode.

#[cfg(test)]
#[path = "validation_test.rs"]
mod validation_test;

use std::collections::BTreeMap;
use std::sync::LazyLock;

use regex::Regex;

use crate::types::{Field, FormValues, Mode};

pub const USERNAME_MIN_CHARS: usize = 5;
pub const USERNAME_MAX_CHARS: usize = 16;

pub const USERNAME_REQUIRED: &str = "Username is a required field";
pub const USERNAME_TOO_SHORT: &str = "username must be at least 5 characters";
pub const USERNAME_TOO_LONG: &str = "Username cannot be longer than 16 characters";
pub const USERNAME_HAS_DIGITS: &str = "User name should not contain numbers";
pub const PASSWORD_REQUIRED: &str = "Without a password, \"None shall pass!\"";
pub const EMAIL_REQUIRED: &str = "Email is a required field";
pub const EMAIL_INVALID: &str = "Please provide a valid email address (abc@test.com)";

/// `local@domain.tld`: atext local part, then two or more DNS labels.
static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^[A-Za-z0-9.!#$%&'*+/=?^_`{|}~-]+@[A-Za-z0-9](?:[A-Za-z0-9-]{0,61}[A-Za-z0-9])?(?:\.[A-Za-z0-9](?:[A-Za-z0-9-]{0,61}[A-Za-z0-9])?)+$",
    )
    .expect("email pattern is a valid regex")
});

/// Violation message per field. Absent key means the field is valid
/// (or was not checked).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FieldErrors(BTreeMap<Field, String>);

impl FieldErrors {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn get(&self, field: Field) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (Field, &str)> {
        self.0.iter().map(|(field, msg)| (*field, msg.as_str()))
    }

    /// Whether any field that takes part in `mode` has a violation.
    #[must_use]
    pub fn blocks(&self, mode: Mode) -> bool {
        self.0.keys().any(|field| mode.includes(*field))
    }

    /// Record the outcome of checking `field`: store the message or clear it.
    pub(crate) fn apply(&mut self, field: Field, violation: Option<&str>) {
        match violation {
            Some(msg) => {
                self.0.insert(field, msg.to_owned());
            }
            None => {
                self.0.remove(&field);
            }
        }
    }
}

/// First rule `field` breaks for the given values, if any.
#[must_use]
pub fn validate_field(field: Field, values: &FormValues) -> Option<&'static str> {
    let value = values.get(field);
    match field {
        Field::Username => check_username(value),
        Field::Password => value.is_empty().then_some(PASSWORD_REQUIRED),
        Field::Email => check_email(value),
    }
}

/// Validate every field that takes part in `mode`.
#[must_use]
pub fn validate(values: &FormValues, mode: Mode) -> FieldErrors {
    let mut errors = FieldErrors::default();
    for field in Field::ALL.into_iter().filter(|f| mode.includes(*f)) {
        errors.apply(field, validate_field(field, values));
    }
    errors
}

fn check_username(value: &str) -> Option<&'static str> {
    let chars = value.chars().count();
    if value.is_empty() {
        Some(USERNAME_REQUIRED)
    } else if chars < USERNAME_MIN_CHARS {
        Some(USERNAME_TOO_SHORT)
    } else if chars > USERNAME_MAX_CHARS {
        Some(USERNAME_TOO_LONG)
    } else if value.chars().any(|c| c.is_ascii_digit()) {
        Some(USERNAME_HAS_DIGITS)
    } else {
        None
    }
}

fn check_email(value: &str) -> Option<&'static str> {
    if value.is_empty() {
        Some(EMAIL_REQUIRED)
    } else if !EMAIL_PATTERN.is_match(value) {
        Some(EMAIL_INVALID)
    } else {
        None
    }
}
