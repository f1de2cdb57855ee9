//! Job-related API endpoints

use crate::WorkspaceClient;
use crate::error::Result;
use runfinder_core::dto::job::JobsListResponse;

impl WorkspaceClient {
    // =============================================================================
    // Job Listing
    // =============================================================================

    /// List all jobs visible to the token
    ///
    /// Only the first page returned by the service is fetched; check
    /// `has_more` on the result to detect truncation.
    ///
    /// # Returns
    /// The listing envelope, jobs in service order
    ///
    /// # Example
    /// ```no_run
    /// # use runfinder_client::{WorkspaceClient, WorkspaceConfig};
    /// # async fn example() -> anyhow::Result<()> {
    /// let config = WorkspaceConfig::new("https://my-workspace.example.com", "dapi-token");
    /// let client = WorkspaceClient::new(config)?;
    /// let listing = client.list_jobs().await?;
    /// for job in &listing.jobs {
    ///     println!("{} {}", job.job_id, job.name());
    /// }
    /// # Ok(())
    /// # }
    /// ```
    pub async fn list_jobs(&self) -> Result<JobsListResponse> {
        self.get_json("/api/2.0/jobs/list", &[]).await
    }
}
