//! Run-related API endpoints

use crate::WorkspaceClient;
use crate::error::Result;
use runfinder_core::dto::run::RunsListResponse;

impl WorkspaceClient {
    // =============================================================================
    // Run Listing
    // =============================================================================

    /// List the runs of a job, newest first
    ///
    /// # Arguments
    /// * `job_id` - The job identifier
    ///
    /// # Returns
    /// The listing envelope; an empty `runs` if the job never ran
    pub async fn list_runs(&self, job_id: &str) -> Result<RunsListResponse> {
        self.get_json("/api/2.0/jobs/runs/list", &[("job_id", job_id)])
            .await
    }
}
