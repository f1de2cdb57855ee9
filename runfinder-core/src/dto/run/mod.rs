//! Run listing DTOs

use serde::{Deserialize, Serialize};

use crate::domain::run::Run;

/// Body of `GET /api/2.0/jobs/runs/list`
///
/// Runs are ordered newest first. As with jobs, an absent `runs` key means
/// the job has no runs.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RunsListResponse {
    #[serde(default)]
    pub runs: Vec<Run>,
    #[serde(default)]
    pub has_more: bool,
}

impl RunsListResponse {
    /// Run at a zero-based position, if the listing is long enough
    pub fn at(&self, position: usize) -> Option<&Run> {
        self.runs.get(position)
    }
}
