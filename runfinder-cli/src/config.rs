//! Configuration module
//!
//! Turns command-line and environment values into workspace settings.

use std::time::Duration;

use anyhow::{Context, Result};
use runfinder_client::WorkspaceConfig;

/// Delay before the first retry when retries are enabled
const RETRY_DELAY: Duration = Duration::from_millis(500);

/// CLI configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Settings of the workspace to query
    pub workspace: WorkspaceConfig,
}

impl Config {
    /// Builds and validates the configuration
    ///
    /// # Arguments
    /// * `workspace_url` - Base URL of the workspace
    /// * `token` - Bearer token
    /// * `timeout_secs` - Request timeout in seconds
    /// * `retries` - Retries after a transient transport failure
    pub fn new(workspace_url: String, token: String, timeout_secs: u64, retries: u32) -> Result<Self> {
        let workspace = WorkspaceConfig::new(workspace_url, token)
            .with_timeout(Duration::from_secs(timeout_secs))
            .with_retries(retries, RETRY_DELAY);

        workspace
            .validate()
            .context("Invalid workspace configuration")?;

        Ok(Self { workspace })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_from_values() {
        let config = Config::new(
            "https://workspace.example.com".to_string(),
            "dapi-token".to_string(),
            10,
            2,
        )
        .unwrap();

        assert_eq!(config.workspace.timeout, Duration::from_secs(10));
        assert_eq!(config.workspace.max_retries, 2);
        assert_eq!(config.workspace.retry_delay, RETRY_DELAY);
    }

    #[test]
    fn test_config_rejects_bad_values() {
        assert!(Config::new(String::new(), "dapi-token".to_string(), 10, 0).is_err());
        assert!(Config::new("https://workspace.example.com".to_string(), String::new(), 10, 0).is_err());
        assert!(Config::new("https://workspace.example.com".to_string(), "t".to_string(), 0, 0).is_err());
    }
}
