use sforce_soql_api::{ClientConfig, HttpTransport, SoqlClient, SoqlConfig};
use wiremock::MockServer;

pub const API_VERSION: &str = "58.0";
pub const ACCESS_TOKEN: &str = "00Dxx0000000001!test-token";

/// A client pointed at the mock server, authenticated with [`ACCESS_TOKEN`].
pub fn client_for(server: &MockServer) -> SoqlClient {
    let config = SoqlConfig::new(server.uri())
        .expect("mock server URI should parse")
        .with_api_version(API_VERSION);
    let transport = HttpTransport::new(ClientConfig::builder().with_tracing(false).build())
        .expect("Failed to create HTTP transport")
        .with_access_token(ACCESS_TOKEN);

    SoqlClient::with_transport(config, transport)
}

pub fn query_path() -> String {
    format!("/services/data/v{}/query", API_VERSION)
}

pub fn query_all_path() -> String {
    format!("/services/data/v{}/queryAll", API_VERSION)
}
