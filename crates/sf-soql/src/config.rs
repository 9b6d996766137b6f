//! Where the SOQL endpoints live.

use crate::error::{Error, ErrorKind, Result};

/// Instance URL and API version used to build query endpoints.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SoqlConfig {
    base_url: String,
    api_version: String,
}

impl SoqlConfig {
    /// Create a config for the given instance URL at the default API version.
    ///
    /// A trailing `/` on the URL is dropped.
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        let base_url = base_url.into();
        url::Url::parse(&base_url)?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            api_version: sforce_client::DEFAULT_API_VERSION.to_string(),
        })
    }

    /// Set the API version (e.g., "58.0"). A leading `v` is accepted.
    pub fn with_api_version(mut self, version: impl Into<String>) -> Self {
        let version = version.into();
        self.api_version = version.trim_start_matches(['v', 'V']).to_string();
        self
    }

    /// Load from `SF_INSTANCE_URL` and `SF_API_VERSION`, falling back to the
    /// `SALESFORCE_*` spellings.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let base_url = lookup("SF_INSTANCE_URL")
            .or_else(|| lookup("SALESFORCE_INSTANCE_URL"))
            .ok_or_else(|| {
                Error::new(ErrorKind::Config(
                    "environment variable SF_INSTANCE_URL is not set".to_string(),
                ))
            })?;

        let config = Self::new(base_url)?;

        match lookup("SF_API_VERSION").or_else(|| lookup("SALESFORCE_API_VERSION")) {
            Some(version) => Ok(config.with_api_version(version)),
            None => Ok(config),
        }
    }

    /// Get the instance URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Get the API version.
    pub fn api_version(&self) -> &str {
        &self.api_version
    }
}
