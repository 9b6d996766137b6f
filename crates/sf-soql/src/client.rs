//! The SOQL client.

use sforce_client::{HttpTransport, RawResponse, RequestBuilder, Transport};
use tracing::{debug, instrument, warn};

use crate::config::SoqlConfig;
use crate::error::{Error, ErrorKind, Result};
use crate::query::{QueryResult, Record};

/// Client for the REST `query` and `queryAll` resources.
///
/// Holds no state besides its configuration and transport, so it can be
/// shared between tasks whenever the transport can.
///
/// # Example
///
/// ```rust,ignore
/// use sforce_soql::{SoqlClient, SoqlConfig};
///
/// let config = SoqlConfig::new("https://myorg.my.salesforce.com")?.with_api_version("58.0");
/// let client = SoqlClient::new(config, "00D...!token")?;
///
/// let mut page = client.execute_query("SELECT Id, Name FROM Account").await?;
/// while let Some(path) = page.next_records_path().map(str::to_owned) {
///     page = client.get_next_page(&path).await?;
/// }
/// ```
#[derive(Debug, Clone)]
pub struct SoqlClient<T = HttpTransport> {
    config: SoqlConfig,
    transport: T,
}

impl SoqlClient<HttpTransport> {
    /// Create a client with a default HTTP transport authenticated by `access_token`.
    pub fn new(config: SoqlConfig, access_token: impl Into<String>) -> Result<Self> {
        let transport = HttpTransport::default_client()?.with_access_token(access_token);
        Ok(Self::with_transport(config, transport))
    }
}

impl<T: Transport> SoqlClient<T> {
    /// Create a client that sends its requests through `transport`.
    pub fn with_transport(config: SoqlConfig, transport: T) -> Self {
        Self { config, transport }
    }

    pub fn config(&self) -> &SoqlConfig {
        &self.config
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// `{base}/services/data/v{version}/query`
    pub fn query_endpoint(&self) -> String {
        format!(
            "{}/services/data/v{}/query",
            self.config.base_url(),
            self.config.api_version()
        )
    }

    /// `{base}/services/data/v{version}/queryAll`
    pub fn query_all_endpoint(&self) -> String {
        format!(
            "{}/services/data/v{}/queryAll",
            self.config.base_url(),
            self.config.api_version()
        )
    }

    /// Query endpoint with `soql` percent-encoded as the `q` parameter.
    pub fn query_url(&self, soql: &str) -> String {
        with_query_param(&self.query_endpoint(), soql)
    }

    /// Query-all endpoint with `soql` percent-encoded as the `q` parameter.
    pub fn query_all_url(&self, soql: &str) -> String {
        with_query_param(&self.query_all_endpoint(), soql)
    }

    /// Resolve a `nextRecordsUrl` against the instance URL.
    ///
    /// The platform returns absolute paths (`/services/data/...`), so one
    /// leading `/` is dropped before joining. Full URLs pass through.
    pub fn next_page_url(&self, next_records_path: &str) -> String {
        if next_records_path.starts_with("http://") || next_records_path.starts_with("https://") {
            return next_records_path.to_string();
        }
        let path = next_records_path
            .strip_prefix('/')
            .unwrap_or(next_records_path);
        format!("{}/{}", self.config.base_url(), path)
    }

    /// Execute a SOQL query and return the first page of results.
    ///
    /// User-supplied values spliced into `soql` must be escaped by the caller.
    #[instrument(skip(self))]
    pub async fn execute_query(&self, soql: &str) -> Result<QueryResult> {
        self.fetch(self.query_url(soql)).await
    }

    /// Execute a SOQL query including deleted and archived records.
    #[instrument(skip(self))]
    pub async fn execute_query_all(&self, soql: &str) -> Result<QueryResult> {
        self.fetch(self.query_all_url(soql)).await
    }

    /// Fetch the page a previous result pointed to with `nextRecordsUrl`.
    #[instrument(skip(self))]
    pub async fn get_next_page(&self, next_records_path: &str) -> Result<QueryResult> {
        self.fetch(self.next_page_url(next_records_path)).await
    }

    /// Execute a SOQL query and follow pagination until the last page.
    ///
    /// Records come back in server order. Fails on the first page that fails.
    #[instrument(skip(self))]
    pub async fn fetch_all(&self, soql: &str) -> Result<Vec<Record>> {
        let mut result = self.execute_query(soql).await?;
        let mut records = std::mem::take(&mut result.records);

        loop {
            let path = match result.next_records_path() {
                Some(path) if !result.done => path.to_string(),
                _ => break,
            };
            result = self.get_next_page(&path).await?;
            records.append(&mut result.records);
        }

        debug!(count = records.len(), "Fetched all query pages");
        Ok(records)
    }

    async fn fetch(&self, url: String) -> Result<QueryResult> {
        let request = RequestBuilder::get(url).accept_json();
        let response = self.transport.send(request).await?;
        parse_query_response(&response)
    }
}

fn with_query_param(endpoint: &str, soql: &str) -> String {
    format!("{}?q={}", endpoint, urlencoding::encode(soql))
}

/// Only a 200 counts as success; anything else carries its body back.
fn parse_query_response(response: &RawResponse) -> Result<QueryResult> {
    let status = response.status();
    if status != 200 {
        let body = response.text();
        warn!(status, "Query returned unexpected status");
        return Err(Error::new(ErrorKind::Response { status, body }));
    }

    let result: QueryResult = serde_json::from_slice(response.body())?;
    debug!(
        total_size = result.total_size,
        returned = result.records.len(),
        done = result.done,
        "Query page decoded"
    );
    Ok(result)
}
