//! High-level Salesforce client with typed HTTP methods.
//!
//! `ForceClient` combines credentials with the HTTP transport and provides
//! the two primitives higher-level API crates build on: construct a request
//! ([`ForceClient::request`]) and execute it into a typed destination
//! ([`ForceClient::get_json`] / [`ForceClient::post_json`]).
//!
//! The access token is redacted in Debug output.

use serde::{de::DeserializeOwned, Serialize};
use tracing::instrument;

use crate::config::ClientConfig;
use crate::error::{Error, ErrorKind, Result};
use crate::request::{RequestBuilder, RequestMethod};
use crate::response::Response;
use crate::transport::HttpTransport;
use crate::DEFAULT_API_VERSION;

/// High-level Salesforce API client.
///
/// Holds no mutable state: an instance URL, an access token, an API
/// version, and a shared connection-pooled transport. Cloning is cheap and
/// concurrent use is safe.
///
/// # Example
///
/// ```rust,ignore
/// use ferroforce_client::ForceClient;
///
/// let client = ForceClient::new(
///     "https://myorg.my.salesforce.com",
///     "access_token_here",
/// )?;
///
/// // GET with typed response
/// let info: serde_json::Value = client.get_json("/services/data/").await?;
/// ```
#[derive(Clone)]
pub struct ForceClient {
    http: HttpTransport,
    instance_url: String,
    access_token: String,
    api_version: String,
}

impl std::fmt::Debug for ForceClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ForceClient")
            .field("instance_url", &self.instance_url)
            .field("access_token", &"[REDACTED]")
            .field("api_version", &self.api_version)
            .finish_non_exhaustive()
    }
}

impl ForceClient {
    /// Create a new client with the given instance URL and access token.
    pub fn new(instance_url: impl Into<String>, access_token: impl Into<String>) -> Result<Self> {
        Self::with_config(instance_url, access_token, ClientConfig::default())
    }

    /// Create a new client with custom HTTP configuration.
    pub fn with_config(
        instance_url: impl Into<String>,
        access_token: impl Into<String>,
        config: ClientConfig,
    ) -> Result<Self> {
        let http = HttpTransport::new(config)?;
        Ok(Self {
            http,
            instance_url: instance_url.into().trim_end_matches('/').to_string(),
            access_token: access_token.into(),
            api_version: DEFAULT_API_VERSION.to_string(),
        })
    }

    /// Set the API version (e.g., "62.0").
    pub fn with_api_version(mut self, version: impl Into<String>) -> Self {
        self.api_version = version.into();
        self
    }

    /// Get the instance URL.
    pub fn instance_url(&self) -> &str {
        &self.instance_url
    }

    /// Get the access token.
    pub fn access_token(&self) -> &str {
        &self.access_token
    }

    /// Get the API version.
    pub fn api_version(&self) -> &str {
        &self.api_version
    }

    /// Build the full URL for a path.
    ///
    /// If the path starts with `/`, it's appended to the instance URL.
    /// Full URLs pass through unchanged.
    pub fn url(&self, path: &str) -> String {
        if path.starts_with("http://") || path.starts_with("https://") {
            path.to_string()
        } else if path.starts_with('/') {
            format!("{}{}", self.instance_url, path)
        } else {
            format!("{}/{}", self.instance_url, path)
        }
    }

    /// Build the Tooling API URL for a path.
    ///
    /// Example: `tooling_url("sobjects/")` ->
    /// `{instance}/services/data/v62.0/tooling/sobjects/`
    pub fn tooling_url(&self, path: &str) -> String {
        let path = path.trim_start_matches('/');
        format!(
            "{}/services/data/v{}/tooling/{}",
            self.instance_url, self.api_version, path
        )
    }

    // =========================================================================
    // Request construction and execution
    // =========================================================================

    /// Construct an authenticated request for the given path or full URL.
    ///
    /// Fails with [`ErrorKind::InvalidUrl`] before any network I/O when the
    /// resolved URL does not parse.
    pub fn request(&self, method: RequestMethod, path: &str) -> Result<RequestBuilder> {
        let full_url = self.url(path);
        url::Url::parse(&full_url)
            .map_err(|e| Error::with_source(ErrorKind::InvalidUrl(full_url.clone()), e))?;
        Ok(RequestBuilder::new(method, full_url).bearer_auth(&self.access_token))
    }

    /// Execute a request and return the raw response.
    pub async fn execute(&self, request: RequestBuilder) -> Result<Response> {
        self.http.execute(request).await
    }

    /// GET request with JSON response deserialization.
    #[instrument(skip(self), fields(url = %path))]
    pub async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let request = self.request(RequestMethod::Get, path)?;
        self.http.execute_json(request).await
    }

    /// POST request with JSON body and response.
    #[instrument(skip(self, body), fields(url = %path))]
    pub async fn post_json<T: DeserializeOwned, B: Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T> {
        let request = self.request(RequestMethod::Post, path)?.json(body)?;
        self.http.execute_json(request).await
    }
}

/// Result of a SOQL query.
///
/// The transport owns pagination: `next_records_url` points at the next
/// page, fetchable with [`ForceClient::get_json`].
#[derive(Debug, Clone, serde::Deserialize, serde::Serialize)]
pub struct QueryResult<T> {
    /// Total number of records matching the query.
    #[serde(rename = "totalSize")]
    pub total_size: u64,

    /// Whether all records are returned (no more pages).
    pub done: bool,

    /// URL to fetch the next batch of results.
    #[serde(rename = "nextRecordsUrl")]
    pub next_records_url: Option<String>,

    /// The records.
    pub records: Vec<T>,
}
