//! Job listing DTOs

use serde::{Deserialize, Serialize};

use crate::domain::job::Job;

/// Body of `GET /api/2.0/jobs/list`
///
/// The service leaves out `jobs` entirely when nothing is visible to the
/// credential, so a missing key is an empty listing.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct JobsListResponse {
    #[serde(default)]
    pub jobs: Vec<Job>,
    #[serde(default)]
    pub has_more: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_jobs_key_is_empty() {
        let listing: JobsListResponse = serde_json::from_str(r#"{"has_more": false}"#).unwrap();
        assert!(listing.jobs.is_empty());
        assert!(!listing.has_more);
    }

    #[test]
    fn test_listing_preserves_order() {
        let listing: JobsListResponse = serde_json::from_str(
            r#"{"jobs": [
                {"job_id": "1", "settings": {"name": "etl-main"}},
                {"job_id": "2", "settings": {"name": "etl-main staging"}}
            ], "has_more": true}"#,
        )
        .unwrap();

        let ids: Vec<&str> = listing.jobs.iter().map(|j| j.job_id.as_str()).collect();
        assert_eq!(ids, ["1", "2"]);
        assert!(listing.has_more);
    }
}
