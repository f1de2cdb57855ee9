//! Job command handlers
//!
//! Resolves job ids from keywords.

use anyhow::{Context, Result};
use colored::*;
use runfinder_client::resolver::{lookup_job, matching_jobs};
use runfinder_client::{Job, WorkspaceClient};

use super::require;
use crate::config::Config;

/// Handle the `job` command
///
/// Prints the id of the first matching job, or every match with `all`.
pub async fn handle_job_command(config: &Config, keyword: &str, all: bool) -> Result<()> {
    let client = WorkspaceClient::new(config.workspace.clone())
        .context("Failed to create workspace client")?;

    if all {
        let jobs = require(matching_jobs(&client, keyword).await, || {
            format!("No job found with a name containing '{}'", keyword)
        })?;

        println!("{}", format!("Found {} job(s):", jobs.len()).bold());
        println!();
        for job in &jobs {
            print_job_summary(job);
        }
    } else {
        let job_id = require(lookup_job(&client, keyword).await, || {
            format!("No job found with a name containing '{}'", keyword)
        })?;

        println!("{}", job_id);
    }

    Ok(())
}

/// Print one matching job
fn print_job_summary(job: &Job) {
    println!("  {} Job {}", "▸".cyan(), job.job_id);
    println!("    Name: {}", job.name().dimmed());
}
