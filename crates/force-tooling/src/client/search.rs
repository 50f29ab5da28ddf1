use serde::de::DeserializeOwned;
use tracing::instrument;

use crate::error::Result;
use crate::types::SearchResult;

impl super::ToolingClient {
    /// Execute a SOSL search against the Tooling API, decoding the response
    /// into a caller-chosen shape.
    #[instrument(skip(self))]
    pub async fn search<T: DeserializeOwned>(&self, sosl: &str) -> Result<T> {
        let url = format!(
            "{}?q={}",
            self.client.tooling_url("search/"),
            urlencoding::encode(sosl)
        );
        self.client.get_json(&url).await.map_err(Into::into)
    }

    /// Execute a SOSL search and return the matched records.
    #[instrument(skip(self))]
    pub async fn search_records<T: DeserializeOwned>(&self, sosl: &str) -> Result<Vec<T>> {
        let result: SearchResult<T> = self.search(sosl).await?;
        Ok(result.search_records)
    }
}
