//! Where the auth endpoints live.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// Base URL prepended to the auth endpoint paths.
///
/// Empty (the default) means same-origin requests to `/auth/...`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ApiConfig {
    base_url: String,
}

impl ApiConfig {
    /// Build a config from a base URL; trailing slashes are dropped.
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        Self { base_url: base_url.trim().trim_end_matches('/').to_owned() }
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Absolute (or same-origin) URL for an endpoint path such as `/auth/login`.
    #[must_use]
    pub fn endpoint_url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }
}
