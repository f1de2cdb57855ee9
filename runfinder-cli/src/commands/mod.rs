//! Commands module
//!
//! Defines all CLI commands and their handlers.

mod job;
mod run;

use anyhow::{Result, anyhow};
use clap::Subcommand;
use runfinder_client::Lookup;

use crate::config::Config;

/// Top-level CLI commands
#[derive(Subcommand)]
pub enum Commands {
    /// Resolve a job id from a keyword in the job name
    Job {
        /// Substring of the job name (case-sensitive)
        keyword: String,

        /// List every matching job instead of the first one
        #[arg(long)]
        all: bool,
    },
    /// Show a run of a job given its id
    Run {
        /// Job id
        job_id: String,

        #[command(flatten)]
        output: run::RunOutput,
    },
    /// Resolve a job by keyword and show one of its runs
    Current {
        /// Substring of the job name (case-sensitive)
        keyword: String,

        #[command(flatten)]
        output: run::RunOutput,
    },
}

/// Handle a CLI command
///
/// Routes the command to the appropriate handler module.
///
/// # Arguments
/// * `command` - The command to execute
/// * `config` - The CLI configuration
///
/// # Returns
/// An error when the lookup found nothing or failed
pub async fn handle_command(command: Commands, config: &Config) -> Result<()> {
    match command {
        Commands::Job { keyword, all } => job::handle_job_command(config, &keyword, all).await,
        Commands::Run { job_id, output } => run::show_run(config, &job_id, &output).await,
        Commands::Current { keyword, output } => {
            run::show_current_run(config, &keyword, &output).await
        }
    }
}

/// Turn a lookup into a value, or an error describing why there is none
fn require<T>(lookup: Lookup<T>, missing: impl FnOnce() -> String) -> Result<T> {
    match lookup {
        Lookup::Found(value) => Ok(value),
        Lookup::NotFound => Err(anyhow!(missing())),
        Lookup::Failed(e) => Err(e.into()),
    }
}
