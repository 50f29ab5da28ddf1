use tracing::instrument;

use crate::error::Result;
use crate::types::ExecuteAnonymousResult;

impl super::ToolingClient {
    /// Compile and execute a block of Apex anonymously.
    ///
    /// A compile or runtime failure is reported through the result's
    /// `compiled`/`success` flags, not as an error; errors are reserved for
    /// transport failures.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let result = client.execute_anonymous("System.debug('Hello');").await?;
    /// if !result.compiled {
    ///     println!("compile error: {:?}", result.compile_problem);
    /// } else if !result.success {
    ///     println!("runtime error: {:?}", result.exception_message);
    /// }
    /// ```
    #[instrument(skip(self, apex))]
    pub async fn execute_anonymous(&self, apex: &str) -> Result<ExecuteAnonymousResult> {
        let url = format!(
            "{}?anonymousBody={}",
            self.client.tooling_url("executeAnonymous/"),
            urlencoding::encode(apex)
        );
        self.client.get_json(&url).await.map_err(Into::into)
    }
}
