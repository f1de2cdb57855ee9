//! Runfinder CLI
//!
//! Resolves a workspace job by keyword and prints the identifiers of one of
//! its runs, for use from deployment pipelines.

mod commands;
mod config;

use anyhow::Result;
use clap::Parser;
use commands::{Commands, handle_command};
use config::Config;
use tracing::debug;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "runfinder")]
#[command(about = "Find the current run of a scheduled workspace job", long_about = None)]
struct Cli {
    /// Workspace URL
    #[arg(long, env = "DATABRICKS_HOST")]
    workspace_url: String,

    /// Personal access token
    #[arg(long, env = "DATABRICKS_TOKEN", hide_env_values = true)]
    token: String,

    /// Request timeout in seconds
    #[arg(long, env = "RUNFINDER_TIMEOUT", default_value_t = 30)]
    timeout: u64,

    /// Retries after a connection failure or timeout
    #[arg(long, env = "RUNFINDER_RETRIES", default_value_t = 0)]
    retries: u32,

    #[command(subcommand)]
    command: Commands,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Diagnostics go to stderr so stdout stays machine-readable
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "runfinder=info,runfinder_client=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let config = Config::new(cli.workspace_url, cli.token, cli.timeout, cli.retries)?;
    debug!(
        "Using workspace {} (timeout {:?}, retries {})",
        config.workspace.workspace_url, config.workspace.timeout, config.workspace.max_retries
    );

    handle_command(cli.command, &config).await
}
