//! # ferroforce-tooling
//!
//! Salesforce Tooling API client.
//!
//! ## Operations
//!
//! - **Describe** - List Tooling SObjects and their capability flags
//! - **Execute Anonymous** - Compile and run an ad-hoc Apex block
//! - **Query** - SOQL against Tooling objects, caller-chosen result shape
//! - **Search** - SOSL full-text search
//! - **Test Execution** - Synchronous and asynchronous Apex test runs
//!
//! Each operation builds one request, delegates to the
//! [`ferroforce-client`] transport, and returns the decoded response
//! verbatim: no retries, no pagination state, no validation. Failures
//! reported by the service inside a 200-status body (a compile error from
//! execute-anonymous, a failed test) are normal results whose status fields
//! the caller inspects.
//!
//! [`ferroforce-client`]: ferroforce_client
//!
//! ## Example
//!
//! ```rust,ignore
//! use ferroforce_tooling::ToolingClient;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), ferroforce_tooling::Error> {
//!     let client = ToolingClient::new(
//!         "https://myorg.my.salesforce.com",
//!         "access_token_here",
//!     )?;
//!
//!     // Execute anonymous Apex
//!     let result = client
//!         .execute_anonymous("System.debug('Hello World');")
//!         .await?;
//!     if !result.success {
//!         eprintln!("run failed: {:?}", result.exception_message);
//!     }
//!
//!     // Query Apex classes with a caller-chosen shape
//!     let classes: serde_json::Value = client
//!         .query("SELECT Id, Name FROM ApexClass LIMIT 10")
//!         .await?;
//!
//!     // Run tests synchronously
//!     let run = client.run_tests(&["OrderServiceTest"]).await?;
//!     println!("{} run, {} failed", run.num_tests_run, run.num_failures);
//!
//!     Ok(())
//! }
//! ```

mod client;
mod error;
mod types;

pub use client::ToolingClient;
pub use error::{Error, ErrorKind, Result};
pub use types::*;

// Re-export transport types that users might need
pub use ferroforce_client::{ClientConfig, ClientConfigBuilder, ForceClient, QueryResult};
