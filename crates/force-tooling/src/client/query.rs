use serde::de::DeserializeOwned;
use tracing::instrument;

use ferroforce_client::QueryResult;

use crate::error::Result;

impl super::ToolingClient {
    /// Execute a SOQL query against the Tooling API, decoding the response
    /// into a caller-chosen shape.
    ///
    /// The result shape is entirely up to the caller; use
    /// [`query_records`](Self::query_records) for the standard
    /// `QueryResult` envelope.
    #[instrument(skip(self))]
    pub async fn query<T: DeserializeOwned>(&self, soql: &str) -> Result<T> {
        let url = format!(
            "{}?q={}",
            self.client.tooling_url("query/"),
            urlencoding::encode(soql)
        );
        self.client.get_json(&url).await.map_err(Into::into)
    }

    /// Execute a SOQL query and return the first page of records.
    #[instrument(skip(self))]
    pub async fn query_records<T: DeserializeOwned>(&self, soql: &str) -> Result<QueryResult<T>> {
        self.query(soql).await
    }

    /// Execute a SOQL query and return all records, following
    /// `nextRecordsUrl` pagination through the transport.
    #[instrument(skip(self))]
    pub async fn query_all<T: DeserializeOwned>(&self, soql: &str) -> Result<Vec<T>> {
        let mut page: QueryResult<T> = self.query(soql).await?;
        let mut records = std::mem::take(&mut page.records);

        while let Some(next) = page.next_records_url.take() {
            page = self.client.get_json(&next).await?;
            records.append(&mut page.records);
        }

        Ok(records)
    }
}
