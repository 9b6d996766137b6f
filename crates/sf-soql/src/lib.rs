//! # sforce-soql
//!
//! Salesforce SOQL query client.
//!
//! ## Features
//!
//! - **Query** - `GET /services/data/vXX.X/query?q=...`
//! - **Query All** - the same against `queryAll`, including deleted and archived records
//! - **Pagination** - follow `nextRecordsUrl` one page at a time, or collect every page
//!
//! Requests go through any [`sforce_client::Transport`]; the default is the
//! reqwest-backed [`sforce_client::HttpTransport`].
//!
//! ## Example
//!
//! ```rust,ignore
//! use sforce_soql::{SoqlClient, SoqlConfig};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), sforce_soql::Error> {
//!     let client = SoqlClient::new(SoqlConfig::from_env()?, "access_token_here")?;
//!
//!     let page = client.execute_query("SELECT Id, Name FROM Account LIMIT 10").await?;
//!     for record in &page.records {
//!         println!("{}", record["Name"]);
//!     }
//!
//!     Ok(())
//! }
//! ```

mod client;
mod config;
mod error;
mod query;

pub use client::SoqlClient;
pub use config::SoqlConfig;
pub use error::{Error, ErrorKind, Result};
pub use query::{QueryResult, Record};
