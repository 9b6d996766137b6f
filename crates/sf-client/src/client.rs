//! reqwest-backed transport with Salesforce-friendly defaults.

use tracing::{debug, info, instrument};

use crate::config::ClientConfig;
use crate::error::{Error, ErrorKind, Result};
use crate::request::RequestBuilder;
use crate::response::RawResponse;
use crate::transport::Transport;

/// HTTP transport for Salesforce APIs.
///
/// Holds a pooled `reqwest::Client` and, optionally, the access token that is
/// attached to every outgoing request. The token is redacted in Debug output.
#[derive(Clone)]
pub struct HttpTransport {
    inner: reqwest::Client,
    config: ClientConfig,
    access_token: Option<String>,
}

impl std::fmt::Debug for HttpTransport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpTransport")
            .field("config", &self.config)
            .field(
                "access_token",
                &self.access_token.as_ref().map(|_| "[REDACTED]"),
            )
            .finish_non_exhaustive()
    }
}

impl HttpTransport {
    /// Create a new transport with the given configuration.
    pub fn new(config: ClientConfig) -> Result<Self> {
        let inner = reqwest::Client::builder()
            .timeout(config.timeout)
            .connect_timeout(config.connect_timeout)
            .pool_idle_timeout(config.pool_idle_timeout)
            .pool_max_idle_per_host(config.pool_max_idle_per_host)
            .user_agent(&config.user_agent)
            .gzip(config.accept_compressed)
            .deflate(config.accept_compressed)
            .build()
            .map_err(|e| Error::with_source(ErrorKind::Config(e.to_string()), e))?;

        Ok(Self {
            inner,
            config,
            access_token: None,
        })
    }

    /// Create a new transport with default configuration.
    pub fn default_client() -> Result<Self> {
        Self::new(ClientConfig::default())
    }

    /// Attach a bearer token to every request sent through this transport.
    pub fn with_access_token(mut self, token: impl Into<String>) -> Self {
        self.access_token = Some(token.into());
        self
    }

    /// Get the transport configuration.
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    #[instrument(skip(self, request), fields(url = %request.url))]
    async fn execute(&self, request: RequestBuilder) -> Result<RawResponse> {
        let mut req = self.inner.get(&request.url);

        // A token set on the request wins over the transport's own
        if let Some(token) = request.bearer_token.as_ref().or(self.access_token.as_ref()) {
            req = req.bearer_auth(token);
        }

        for (name, value) in &request.headers {
            req = req.header(name.as_str(), value.as_str());
        }

        if self.config.enable_tracing {
            debug!("Sending request");
        }

        let response = req.send().await?;

        if self.config.enable_tracing {
            let status = response.status().as_u16();
            let content_length = response.content_length();

            if response.status().is_success() {
                debug!(status, content_length, "Response received");
            } else {
                info!(status, content_length, "Non-success response");
            }
        }

        RawResponse::from_reqwest(response).await
    }
}

impl Transport for HttpTransport {
    fn send(
        &self,
        request: RequestBuilder,
    ) -> impl std::future::Future<Output = Result<RawResponse>> + Send {
        self.execute(request)
    }
}
