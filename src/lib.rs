//! # sforce-soql-api
//!
//! Salesforce SOQL query client for Rust.
//!
//! ## Security
//!
//! - Access tokens are redacted in Debug output
//! - Tracing spans never record the transport's token
//!
//! ## Crates
//!
//! - **sforce-client** - HTTP transport: `Transport` trait, reqwest backend, request/response types
//! - **sforce-soql** - SOQL client: query, queryAll, pagination
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use sforce_soql_api::{SoqlClient, SoqlConfig};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = SoqlConfig::new("https://myorg.my.salesforce.com")?.with_api_version("58.0");
//!     let client = SoqlClient::new(config, std::env::var("SF_ACCESS_TOKEN")?)?;
//!
//!     let accounts = client
//!         .fetch_all("SELECT Id, Name FROM Account LIMIT 10")
//!         .await?;
//!
//!     for account in accounts {
//!         println!("{}", account["Name"]);
//!     }
//!
//!     Ok(())
//! }
//! ```

pub use sforce_client as client;
pub use sforce_soql as soql;

pub use sforce_client::{ClientConfig, HttpTransport, Transport};
pub use sforce_soql::{QueryResult, Record, SoqlClient, SoqlConfig};
