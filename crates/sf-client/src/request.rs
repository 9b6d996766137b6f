//! HTTP request building.

use std::collections::HashMap;

/// A prepared GET request handed to a [`Transport`](crate::Transport).
///
/// Transports take the builder by value, so it is dropped once the
/// round-trip finishes no matter how it ends.
#[derive(Debug)]
pub struct RequestBuilder {
    pub(crate) url: String,
    pub(crate) headers: HashMap<String, String>,
    pub(crate) bearer_token: Option<String>,
}

impl RequestBuilder {
    /// Create a GET request builder for a fully-formed URL.
    pub fn get(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            headers: HashMap::new(),
            bearer_token: None,
        }
    }

    /// The target URL.
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Look up a header set on this request.
    pub fn header_value(&self, name: &str) -> Option<&str> {
        self.headers.get(name).map(String::as_str)
    }

    /// Returns true if a bearer token has been attached.
    pub fn has_bearer_auth(&self) -> bool {
        self.bearer_token.is_some()
    }

    /// Set the bearer token for authentication.
    pub fn bearer_auth(mut self, token: impl Into<String>) -> Self {
        self.bearer_token = Some(token.into());
        self
    }

    /// Add a header.
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }

    /// Ask for JSON back.
    pub fn accept_json(self) -> Self {
        self.header("Accept", "application/json")
    }
}
