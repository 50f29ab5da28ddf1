use tracing::instrument;

use crate::error::Result;
use crate::types::{RunTestsAsyncRequest, RunTestsResult};

impl super::ToolingClient {
    /// Run the tests in the given classes synchronously.
    ///
    /// Blocks until the run completes and returns the full results,
    /// including coverage, successes, and failures. Failed tests are part
    /// of the result, not an error.
    #[instrument(skip(self))]
    pub async fn run_tests(&self, classnames: &[&str]) -> Result<RunTestsResult> {
        let url = format!(
            "{}?classnames={}",
            self.client.tooling_url("runTestsSynchronous/"),
            urlencoding::encode(&classnames.join(","))
        );
        self.client.get_json(&url).await.map_err(Into::into)
    }

    /// Queue an asynchronous test run.
    ///
    /// Returns the AsyncApexJob Id as a plain string; Salesforce reports it
    /// as a bare quoted JSON string, not an object.
    #[instrument(skip(self, request))]
    pub async fn run_tests_async(&self, request: &RunTestsAsyncRequest) -> Result<String> {
        let url = self.client.tooling_url("runTestsAsynchronous/");
        self.client.post_json(&url, request).await.map_err(Into::into)
    }
}
