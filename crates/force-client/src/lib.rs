//! # ferroforce-client
//!
//! Core HTTP transport for Salesforce APIs.
//!
//! This crate provides the foundational HTTP client with:
//! - Automatic retry with exponential backoff and jitter
//! - Compression support (gzip, deflate)
//! - Rate limit detection and Retry-After handling
//! - Salesforce error-body decoding
//! - Connection pooling
//! - Request/response tracing
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                    Application Layer                        │
//! │                   (ferroforce-tooling)                      │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │                      ForceClient                            │
//! │  - Holds credentials + transport                            │
//! │  - Builds authenticated requests (validated URLs)           │
//! │  - Typed JSON methods (get_json, post_json)                 │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │                     HttpTransport                           │
//! │  - Raw HTTP with retry, compression, rate limiting          │
//! │  - Error-body decoding                                      │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Example
//!
//! ```rust,ignore
//! use ferroforce_client::ForceClient;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), ferroforce_client::Error> {
//!     let client = ForceClient::new(
//!         "https://myorg.my.salesforce.com",
//!         "access_token_here",
//!     )?;
//!
//!     let resources: serde_json::Value = client
//!         .get_json("/services/data/v62.0/tooling/")
//!         .await?;
//!
//!     Ok(())
//! }
//! ```

mod config;
mod error;
mod force_client;
mod request;
mod response;
mod retry;
mod transport;

pub use config::{ClientConfig, ClientConfigBuilder};
pub use error::{Error, ErrorKind, Result};
pub use force_client::{ForceClient, QueryResult};
pub use request::{RequestBuilder, RequestBody, RequestMethod};
pub use response::{ApiUsage, Response};
pub use retry::{BackoffStrategy, RetryConfig, RetryPolicy};
pub use transport::HttpTransport;

/// Default Salesforce API version
pub const DEFAULT_API_VERSION: &str = "62.0";

/// User-Agent string for the client
pub const USER_AGENT: &str = concat!("ferroforce/", env!("CARGO_PKG_VERSION"));
