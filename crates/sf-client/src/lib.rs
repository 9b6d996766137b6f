//! # sforce-client
//!
//! HTTP transport for Salesforce REST endpoints.
//!
//! This crate provides:
//! - The [`Transport`] capability that API clients are written against
//! - [`HttpTransport`], a pooled reqwest backend with bearer auth and
//!   compression support
//! - Request building and buffered responses
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                    Application Layer                        │
//! │  (sforce-soql)                                              │
//! └─────────────────────────────────────────────────────────────┘
//!                              │  Transport::send(RequestBuilder)
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │                    HttpTransport                            │
//! │  - Pooled reqwest client, timeouts, User-Agent              │
//! │  - Bearer token injection                                   │
//! │  - Buffers status, headers and body into RawResponse        │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Example
//!
//! ```rust,ignore
//! use sforce_client::{HttpTransport, RequestBuilder, Transport};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), sforce_client::Error> {
//!     let transport = HttpTransport::default_client()?.with_access_token("00D...");
//!
//!     let response = transport
//!         .send(RequestBuilder::get("https://na1.salesforce.com/services/data/"))
//!         .await?;
//!
//!     println!("{} {}", response.status(), response.text());
//!     Ok(())
//! }
//! ```

mod client;
mod config;
mod error;
mod request;
mod response;
mod transport;

pub use client::HttpTransport;
pub use config::{ClientConfig, ClientConfigBuilder};
pub use error::{Error, ErrorKind, Result};
pub use request::RequestBuilder;
pub use response::RawResponse;
pub use transport::Transport;

/// Default Salesforce API version
pub const DEFAULT_API_VERSION: &str = "62.0";

/// User-Agent string for the client
pub const USER_AGENT: &str = concat!("sforce-soql/", env!("CARGO_PKG_VERSION"));
