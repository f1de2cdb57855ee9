//! Job and run resolver
//!
//! Resolves a keyword to a job id, then picks a run of that job by position.
//!
//! Two layers are exposed:
//! - `matching_jobs`, `lookup_job` and `lookup_run` work against any
//!   `JobCatalog` and return a `Lookup` that tells found, not found and failed
//!   apart.
//! - `resolve_job`, `locate_run`, `run_details` and `resolve_current_run`
//!   take a `WorkspaceConfig` and never fail: every problem is logged and
//!   turned into an absent or empty value.
//!
//! Both layers log the same way: info when something is found, warn when
//! nothing matched, error when the lookup failed.

use runfinder_core::domain::job::Job;
use runfinder_core::domain::run::{Run, RunDetails};
use tracing::{debug, error, info, warn};

use crate::WorkspaceClient;
use crate::catalog::JobCatalog;
use crate::config::WorkspaceConfig;
use crate::error::{ClientError, Result};
use crate::lookup::Lookup;

// =============================================================================
// Job Resolution
// =============================================================================

/// Find every job whose name contains `keyword`
///
/// Matching is a case-sensitive substring test, not anchored or tokenized.
/// Matches keep the service's listing order, so callers can reject ambiguous
/// keywords instead of silently taking the first match.
///
/// # Arguments
/// * `catalog` - Source of jobs
/// * `keyword` - Non-empty substring to look for in job names
///
/// # Returns
/// `Found` with at least one job, `NotFound` when nothing matched, `Failed`
/// on an empty keyword or an unsuccessful listing
pub async fn matching_jobs<C>(catalog: &C, keyword: &str) -> Lookup<Vec<Job>>
where
    C: JobCatalog + ?Sized,
{
    match search_jobs(catalog, keyword).await {
        Ok(matches) if matches.is_empty() => {
            warn!("No job found with a name containing '{}'", keyword);
            Lookup::NotFound
        }
        Ok(matches) => {
            info!(
                "Found {} job(s) with a name containing '{}'",
                matches.len(),
                keyword
            );
            Lookup::Found(matches)
        }
        Err(e) => {
            error!("Job lookup for '{}' failed: {}", keyword, e);
            Lookup::Failed(e)
        }
    }
}

/// Resolve `keyword` to the id of the first job whose name contains it
///
/// When several jobs match, the first in listing order wins and a warning
/// names the number of candidates. Use `matching_jobs` to see all of them.
///
/// # Arguments
/// * `catalog` - Source of jobs
/// * `keyword` - Non-empty substring to look for in job names
pub async fn lookup_job<C>(catalog: &C, keyword: &str) -> Lookup<String>
where
    C: JobCatalog + ?Sized,
{
    let matches = match search_jobs(catalog, keyword).await {
        Ok(matches) => matches,
        Err(e) => {
            error!("Job lookup for '{}' failed: {}", keyword, e);
            return Lookup::Failed(e);
        }
    };

    let count = matches.len();
    let Some(job) = matches.into_iter().next() else {
        warn!("No job found with a name containing '{}'", keyword);
        return Lookup::NotFound;
    };

    if count > 1 {
        warn!(
            "Keyword '{}' matches {} jobs, using the first one ({})",
            keyword, count, job.job_id
        );
    }

    info!(
        "Resolved '{}' to job {} ({})",
        keyword,
        job.job_id,
        job.name()
    );
    Lookup::Found(job.job_id)
}

/// List jobs and keep those whose name contains `keyword`
async fn search_jobs<C>(catalog: &C, keyword: &str) -> Result<Vec<Job>>
where
    C: JobCatalog + ?Sized,
{
    if keyword.is_empty() {
        return Err(ClientError::invalid_argument("keyword cannot be empty"));
    }

    let listing = catalog.list_jobs().await?;
    if listing.has_more {
        debug!("Job listing is paginated; only the first page is searched");
    }

    Ok(listing
        .jobs
        .into_iter()
        .filter(|job| job.name_contains(keyword))
        .collect())
}

// =============================================================================
// Run Location
// =============================================================================

/// Pick the run of a job at a zero-based position in the listing
///
/// Position 0 is the most recent run at the time of the call. Positions are
/// relative to each listing, so two calls may see different runs at the same
/// position if a run started in between.
///
/// # Arguments
/// * `catalog` - Source of runs
/// * `job_id` - Non-empty job identifier
/// * `position` - Index into the newest-first run listing
///
/// # Returns
/// `Found` with the run, `NotFound` when the listing is shorter than
/// `position + 1`, `Failed` on an empty job id or an unsuccessful listing
pub async fn lookup_run<C>(catalog: &C, job_id: &str, position: usize) -> Lookup<Run>
where
    C: JobCatalog + ?Sized,
{
    if job_id.is_empty() {
        let e = ClientError::invalid_argument("job_id cannot be empty");
        error!("Run lookup failed: {}", e);
        return Lookup::Failed(e);
    }

    let listing = match catalog.list_runs(job_id).await {
        Ok(listing) => listing,
        Err(e) => {
            error!("Run lookup for job {} failed: {}", job_id, e);
            return Lookup::Failed(e);
        }
    };

    if listing.has_more {
        debug!("Run listing for job {} is paginated; only the first page is used", job_id);
    }

    match listing.at(position).cloned() {
        Some(run) => {
            info!(
                "Located run {} at position {} of job {}",
                run.run_id.as_deref().unwrap_or("<none>"),
                position,
                job_id
            );
            Lookup::Found(run)
        }
        None => {
            warn!(
                "No runs, or invalid position {} for job {} ({} run(s) listed)",
                position,
                job_id,
                listing.runs.len()
            );
            Lookup::NotFound
        }
    }
}

// =============================================================================
// Boundary Operations
// =============================================================================

/// Resolve a keyword to a job id, or `None`
///
/// # Arguments
/// * `config` - Workspace connection settings
/// * `keyword` - Non-empty substring to look for in job names
pub async fn resolve_job(config: &WorkspaceConfig, keyword: &str) -> Option<String> {
    let client = connect(config)?;
    lookup_job(&client, keyword).await.found()
}

/// Locate the run of a job at a position, or `None`
///
/// # Arguments
/// * `config` - Workspace connection settings
/// * `job_id` - Non-empty job identifier
/// * `position` - Index into the newest-first run listing (0 = most recent)
pub async fn locate_run(config: &WorkspaceConfig, job_id: &str, position: usize) -> Option<Run> {
    let client = connect(config)?;
    lookup_run(&client, job_id, position).await.found()
}

/// Identifying attributes of the run at a position
///
/// Both fields are empty when no run was located, for whatever reason.
pub async fn run_details(config: &WorkspaceConfig, job_id: &str, position: usize) -> RunDetails {
    RunDetails::from(locate_run(config, job_id, position).await)
}

/// Resolve a keyword to a job, then project the run at a position
///
/// This chains both steps over one client. Both fields are empty when either
/// step came back empty.
pub async fn resolve_current_run(
    config: &WorkspaceConfig,
    keyword: &str,
    position: usize,
) -> RunDetails {
    let Some(client) = connect(config) else {
        return RunDetails::default();
    };

    let Some(job_id) = lookup_job(&client, keyword).await.found() else {
        return RunDetails::default();
    };

    RunDetails::from(lookup_run(&client, &job_id, position).await.found())
}

/// Build a client, logging a rejected configuration
fn connect(config: &WorkspaceConfig) -> Option<WorkspaceClient> {
    match WorkspaceClient::new(config.clone()) {
        Ok(client) => Some(client),
        Err(e) => {
            error!("Cannot connect to workspace: {}", e);
            None
        }
    }
}
