//! Job catalog abstraction
//!
//! The resolver only needs two listing calls. Keeping them behind a trait lets
//! the resolution logic run against any source of jobs and runs.

use async_trait::async_trait;
use runfinder_core::dto::job::JobsListResponse;
use runfinder_core::dto::run::RunsListResponse;

use crate::WorkspaceClient;
use crate::error::Result;

/// Read-only source of jobs and their runs
#[async_trait]
pub trait JobCatalog: Send + Sync {
    /// Lists every job visible to the caller, in service order
    async fn list_jobs(&self) -> Result<JobsListResponse>;

    /// Lists the runs of a job, newest first
    ///
    /// # Arguments
    /// * `job_id` - The job identifier
    async fn list_runs(&self, job_id: &str) -> Result<RunsListResponse>;
}

#[async_trait]
impl JobCatalog for WorkspaceClient {
    async fn list_jobs(&self) -> Result<JobsListResponse> {
        WorkspaceClient::list_jobs(self).await
    }

    async fn list_runs(&self, job_id: &str) -> Result<RunsListResponse> {
        WorkspaceClient::list_runs(self, job_id).await
    }
}
