//! Run command handlers
//!
//! Locates a run of a job and prints its identifiers, the full run object, or
//! a human-readable summary.

use anyhow::{Context, Result};
use clap::Args;
use colored::*;
use runfinder_client::WorkspaceClient;
use runfinder_client::resolver::{lookup_job, lookup_run};
use runfinder_core::domain::run::Run;

use super::require;
use crate::config::Config;

/// Run selection and output options
#[derive(Args, Debug, Clone)]
pub struct RunOutput {
    /// Position in the newest-first run listing (0 = most recent)
    #[arg(short, long, default_value_t = 0)]
    pub position: usize,

    /// Print the full run object as JSON
    #[arg(long, conflicts_with = "details")]
    pub json: bool,

    /// Print a human-readable summary of the run
    #[arg(long)]
    pub details: bool,
}

/// Show the run of a known job
pub async fn show_run(config: &Config, job_id: &str, output: &RunOutput) -> Result<()> {
    let client = WorkspaceClient::new(config.workspace.clone())
        .context("Failed to create workspace client")?;

    let run = find_run(&client, job_id, output.position).await?;
    print_run(&run, output)
}

/// Resolve a job by keyword, then show one of its runs
pub async fn show_current_run(config: &Config, keyword: &str, output: &RunOutput) -> Result<()> {
    let client = WorkspaceClient::new(config.workspace.clone())
        .context("Failed to create workspace client")?;

    let job_id = require(lookup_job(&client, keyword).await, || {
        format!("No job found with a name containing '{}'", keyword)
    })?;

    let run = find_run(&client, &job_id, output.position).await?;
    print_run(&run, output)
}

async fn find_run(client: &WorkspaceClient, job_id: &str, position: usize) -> Result<Run> {
    require(lookup_run(client, job_id, position).await, || {
        format!("No run at position {} for job {}", position, job_id)
    })
}

fn print_run(run: &Run, output: &RunOutput) -> Result<()> {
    if output.json {
        let pretty = serde_json::to_string_pretty(run).context("Failed to serialize run")?;
        println!("{}", pretty);
    } else if output.details {
        print_run_details(run);
    } else {
        println!("{}", render_plain(run));
    }

    Ok(())
}

/// `key=value` lines for shell consumption; missing fields are empty
fn render_plain(run: &Run) -> String {
    let details = run.details();
    format!("run_id={}\nrun_name={}", details.run_id, details.run_name)
}

/// Print detailed run information
fn print_run_details(run: &Run) {
    let details = run.details();

    println!("{}", "Run Details:".bold());
    println!("  Run ID:   {}", details.run_id.cyan());
    println!("  Name:     {}", details.run_name);

    if let Some(job_id) = &run.job_id {
        println!("  Job ID:   {}", job_id.dimmed());
    }

    if let Some(started) = run.started_at() {
        println!("  Started:  {}", started.format("%Y-%m-%d %H:%M:%S"));
    }

    if let Some(state) = &run.state {
        if let Some(lifecycle) = &state.life_cycle_state {
            println!("  State:    {}", lifecycle);
        }
        if let Some(result) = &state.result_state {
            println!("  Result:   {}", colorize_result(result));
        }
    }

    if let Some(url) = &run.run_page_url {
        println!("  URL:      {}", url.dimmed());
    }
}

/// Colorize a run result state for display
fn colorize_result(result: &str) -> ColoredString {
    match result {
        "SUCCESS" => result.green(),
        "FAILED" | "TIMEDOUT" | "INTERNAL_ERROR" => result.red(),
        "CANCELED" | "SKIPPED" => result.dimmed(),
        _ => result.yellow(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_plain() {
        let run = Run {
            run_id: Some("r8".to_string()),
            run_name: Some("nightly".to_string()),
            ..Default::default()
        };
        assert_eq!(render_plain(&run), "run_id=r8\nrun_name=nightly");
    }

    #[test]
    fn test_render_plain_missing_fields() {
        assert_eq!(render_plain(&Run::default()), "run_id=\nrun_name=");
    }
}
