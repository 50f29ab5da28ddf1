use tracing::instrument;

use crate::error::Result;
use crate::types::DescribeGlobalResult;

impl super::ToolingClient {
    /// List the available Tooling API objects and their metadata.
    #[instrument(skip(self))]
    pub async fn describe_global(&self) -> Result<DescribeGlobalResult> {
        let url = self.client.tooling_url("sobjects/");
        self.client.get_json(&url).await.map_err(Into::into)
    }
}
