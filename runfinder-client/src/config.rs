//! Workspace configuration
//!
//! Connection settings for a single workspace. The record is passed
//! explicitly into the client and resolver; nothing is read from the
//! environment here.

use std::fmt;
use std::time::Duration;

use crate::error::{ClientError, Result};

/// Default request timeout
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Default delay before the first retry
pub const DEFAULT_RETRY_DELAY: Duration = Duration::from_millis(500);

/// Connection settings for a workspace
#[derive(Clone)]
pub struct WorkspaceConfig {
    /// Base URL of the workspace (e.g., "https://my-workspace.cloud.example.com")
    pub workspace_url: String,

    /// Bearer token sent with every request
    pub token: String,

    /// Upper bound for a single request, connect through body
    pub timeout: Duration,

    /// Extra attempts after a transient transport failure (0 = single attempt)
    pub max_retries: u32,

    /// Delay before the first retry; doubles on each subsequent one
    pub retry_delay: Duration,
}

impl WorkspaceConfig {
    /// Creates a configuration with default timeout and no retries
    pub fn new(workspace_url: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            workspace_url: workspace_url.into(),
            token: token.into(),
            timeout: DEFAULT_TIMEOUT,
            max_retries: 0,
            retry_delay: DEFAULT_RETRY_DELAY,
        }
    }

    /// Sets the request timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Enables bounded retries for transient transport failures
    pub fn with_retries(mut self, max_retries: u32, retry_delay: Duration) -> Self {
        self.max_retries = max_retries;
        self.retry_delay = retry_delay;
        self
    }

    /// Validates the configuration
    pub fn validate(&self) -> Result<()> {
        if self.workspace_url.is_empty() {
            return Err(ClientError::invalid_argument("workspace_url cannot be empty"));
        }

        if !self.workspace_url.starts_with("http://") && !self.workspace_url.starts_with("https://")
        {
            return Err(ClientError::invalid_argument(
                "workspace_url must start with http:// or https://",
            ));
        }

        if self.token.is_empty() {
            return Err(ClientError::invalid_argument("token cannot be empty"));
        }

        if self.timeout.is_zero() {
            return Err(ClientError::invalid_argument(
                "timeout must be greater than 0",
            ));
        }

        Ok(())
    }
}

impl fmt::Debug for WorkspaceConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WorkspaceConfig")
            .field("workspace_url", &self.workspace_url)
            .field("token", &"<redacted>")
            .field("timeout", &self.timeout)
            .field("max_retries", &self.max_retries)
            .field("retry_delay", &self.retry_delay)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = WorkspaceConfig::new("https://workspace.example.com", "dapi-token");
        assert_eq!(config.timeout, DEFAULT_TIMEOUT);
        assert_eq!(config.max_retries, 0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_validation() {
        let mut config = WorkspaceConfig::new("https://workspace.example.com", "dapi-token");

        config.workspace_url = String::new();
        assert!(matches!(
            config.validate(),
            Err(ClientError::InvalidArgument(_))
        ));

        config.workspace_url = "workspace.example.com".to_string();
        assert!(config.validate().is_err());

        config.workspace_url = "http://localhost:8080".to_string();
        config.token = String::new();
        assert!(config.validate().is_err());

        config.token = "dapi-token".to_string();
        config = config.with_timeout(Duration::ZERO);
        assert!(config.validate().is_err());

        config = config.with_timeout(Duration::from_secs(5));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_with_retries() {
        let config = WorkspaceConfig::new("https://workspace.example.com", "dapi-token")
            .with_retries(3, Duration::from_millis(50));

        assert_eq!(config.max_retries, 3);
        assert_eq!(config.retry_delay, Duration::from_millis(50));
    }

    #[test]
    fn test_debug_redacts_token() {
        let config = WorkspaceConfig::new("https://workspace.example.com", "dapi-secret");
        let debug = format!("{:?}", config);
        assert!(!debug.contains("dapi-secret"));
        assert!(debug.contains("<redacted>"));
    }
}
