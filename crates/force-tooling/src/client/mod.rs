//! Salesforce Tooling API client.
//!
//! A thin façade over [`ForceClient`]: each method builds one request,
//! hands it to the transport, and returns the decoded result verbatim.

use ferroforce_client::{ClientConfig, ForceClient};

use crate::error::Result;

mod describe;
mod execute;
mod query;
mod search;
mod test_execution;

/// Salesforce Tooling API client.
///
/// One method per Tooling REST endpoint:
/// - Describe available Tooling SObjects
/// - Execute anonymous Apex
/// - SOQL query / SOSL search with a caller-chosen result shape
/// - Synchronous and asynchronous test runs
///
/// The client holds no mutable state of its own, only an immutable handle
/// to the shared transport; concurrent use follows the transport's
/// concurrency contract.
///
/// # Example
///
/// ```rust,ignore
/// use ferroforce_tooling::ToolingClient;
///
/// let client = ToolingClient::new(
///     "https://myorg.my.salesforce.com",
///     "access_token_here",
/// )?;
///
/// let result = client.execute_anonymous("System.debug('Hello');").await?;
/// if !result.success {
///     eprintln!("failed: {:?}", result.exception_message);
/// }
/// ```
#[derive(Debug, Clone)]
pub struct ToolingClient {
    client: ForceClient,
}

impl ToolingClient {
    /// Create a new Tooling API client with the given instance URL and access token.
    pub fn new(instance_url: impl Into<String>, access_token: impl Into<String>) -> Result<Self> {
        let client = ForceClient::new(instance_url, access_token)?;
        Ok(Self { client })
    }

    /// Create a new Tooling API client with custom HTTP configuration.
    pub fn with_config(
        instance_url: impl Into<String>,
        access_token: impl Into<String>,
        config: ClientConfig,
    ) -> Result<Self> {
        let client = ForceClient::with_config(instance_url, access_token, config)?;
        Ok(Self { client })
    }

    /// Create a Tooling client from an existing ForceClient.
    pub fn from_client(client: ForceClient) -> Self {
        Self { client }
    }

    /// Get the underlying ForceClient.
    pub fn inner(&self) -> &ForceClient {
        &self.client
    }

    /// Get the instance URL.
    pub fn instance_url(&self) -> &str {
        self.client.instance_url()
    }

    /// Get the API version.
    pub fn api_version(&self) -> &str {
        self.client.api_version()
    }

    /// Set the API version.
    pub fn with_api_version(mut self, version: impl Into<String>) -> Self {
        self.client = self.client.with_api_version(version);
        self
    }
}
