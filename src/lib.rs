//! # ferroforce
//!
//! A Salesforce Tooling API client library for Rust.
//!
//! This library provides type-safe access to the Tooling API with built-in
//! retry logic and error handling.
//!
//! ## Security
//!
//! - Access tokens are redacted in Debug output
//! - Tracing spans skip credential and code-body parameters
//! - Error messages are sanitized before they reach logs
//!
//! ## Crates
//!
//! - **ferroforce-client** - Core HTTP transport with retry, compression, rate limiting
//! - **ferroforce-tooling** - Tooling API: describe, execute anonymous, query, search, test runs
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use ferroforce::ToolingClient;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = ToolingClient::new(
//!         "https://myorg.my.salesforce.com",
//!         std::env::var("SF_ACCESS_TOKEN")?,
//!     )?;
//!
//!     let describe = client.describe_global().await?;
//!     for sobject in &describe.sobjects {
//!         println!("{} ({})", sobject.name, sobject.label);
//!     }
//!
//!     Ok(())
//! }
//! ```

// Re-export member crates for convenient access
#[cfg(feature = "client")]
pub use ferroforce_client as client;
#[cfg(feature = "tooling")]
pub use ferroforce_tooling as tooling;

// Re-export commonly used types at the top level
#[cfg(feature = "client")]
pub use ferroforce_client::{ClientConfig, ForceClient};
#[cfg(feature = "tooling")]
pub use ferroforce_tooling::ToolingClient;
