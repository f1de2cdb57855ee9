//! Runfinder Client
//!
//! HTTP client and resolver for the jobs API of a job-orchestration workspace.
//!
//! The crate answers one question for deployment automation: "what is the
//! current run of job X?". It does so in two steps, each a single listing
//! request:
//! - Job resolution: find the job whose name contains a keyword
//! - Run location: pick a run of that job by position (0 = most recent)
//!
//! # Example
//!
//! ```no_run
//! use runfinder_client::{WorkspaceConfig, resolver};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = WorkspaceConfig::new("https://my-workspace.example.com", "dapi-token");
//!
//!     let details = resolver::resolve_current_run(&config, "etl-main", 0).await;
//!     println!("run_id={} run_name={}", details.run_id, details.run_name);
//!     Ok(())
//! }
//! ```

pub mod catalog;
pub mod config;
pub mod error;
mod jobs;
pub mod lookup;
pub mod resolver;
mod runs;

// Re-export commonly used types
pub use catalog::JobCatalog;
pub use config::WorkspaceConfig;
pub use error::{ClientError, Result};
pub use lookup::Lookup;
pub use runfinder_core::domain::job::Job;
pub use runfinder_core::domain::run::{Run, RunDetails};

use std::time::Duration;

use reqwest::header::CONTENT_TYPE;
use reqwest::Client;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

/// Upper bound for the delay between two retries
const MAX_RETRY_DELAY: Duration = Duration::from_secs(30);

/// HTTP client for the jobs API of one workspace
///
/// Every request carries the configured bearer token and is bounded by the
/// configured timeout. The client holds no state besides its connection pool.
#[derive(Debug, Clone)]
pub struct WorkspaceClient {
    /// Base URL of the workspace without trailing slash
    base_url: String,
    /// Validated connection settings
    config: WorkspaceConfig,
    /// HTTP client instance
    client: Client,
}

impl WorkspaceClient {
    /// Create a new workspace client
    ///
    /// # Arguments
    /// * `config` - Connection settings; validated before anything is built
    ///
    /// # Errors
    /// `ClientError::InvalidArgument` if the configuration is incomplete.
    ///
    /// # Example
    /// ```
    /// use runfinder_client::{WorkspaceClient, WorkspaceConfig};
    ///
    /// let config = WorkspaceConfig::new("https://my-workspace.example.com/", "dapi-token");
    /// let client = WorkspaceClient::new(config).unwrap();
    /// assert_eq!(client.base_url(), "https://my-workspace.example.com");
    /// ```
    pub fn new(config: WorkspaceConfig) -> Result<Self> {
        config.validate()?;

        let client = Client::builder().timeout(config.timeout).build()?;

        Ok(Self {
            base_url: config.workspace_url.trim_end_matches('/').to_string(),
            config,
            client,
        })
    }

    /// Get the base URL of the workspace
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Get the configuration this client was built from
    pub fn config(&self) -> &WorkspaceConfig {
        &self.config
    }

    // =============================================================================
    // Request Helpers
    // =============================================================================

    /// Issue an authorized GET against an API path and decode the JSON body
    ///
    /// Each attempt covers the whole exchange, from connect through reading the
    /// body, so a timeout while the body streams in is retried like any other
    /// transient transport failure.
    async fn get_json<T: DeserializeOwned>(&self, path: &str, query: &[(&str, &str)]) -> Result<T> {
        let url = format!("{}{}", self.base_url, path);
        debug!("GET {}", url);

        let url = url.as_str();
        self.with_retry(move || async move {
            let response = self
                .client
                .get(url)
                .bearer_auth(&self.config.token)
                .header(CONTENT_TYPE, "application/json")
                .query(query)
                .send()
                .await?;

            self.handle_response(response).await
        })
        .await
    }

    /// Run an attempt, retrying transient transport failures
    ///
    /// Status and decode errors are returned at once. Backoff doubles from the
    /// configured retry delay and is capped at `MAX_RETRY_DELAY`.
    async fn with_retry<T, F, Fut>(&self, attempt_fn: F) -> Result<T>
    where
        F: Fn() -> Fut,
        Fut: Future<Output = Result<T>>,
    {
        let max_attempts = self.max_attempts();
        let mut attempt: u32 = 0;
        let mut delay = self.config.retry_delay;

        loop {
            attempt = attempt.saturating_add(1);

            match attempt_fn().await {
                Ok(value) => return Ok(value),
                Err(error) => {
                    if !error.is_transient() || attempt >= max_attempts {
                        return Err(error);
                    }

                    warn!(
                        "Request failed (attempt {}/{}): {}",
                        attempt, max_attempts, error
                    );
                    warn!("Retrying in {} ms...", delay.as_millis());

                    tokio::time::sleep(delay).await;
                    delay = delay.saturating_mul(2).min(MAX_RETRY_DELAY);
                }
            }
        }
    }

    /// Total attempts per request: the first one plus the configured retries
    fn max_attempts(&self) -> u32 {
        self.config.max_retries.saturating_add(1)
    }

    // =============================================================================
    // Response Handlers
    // =============================================================================

    /// Handle an API response and deserialize JSON
    ///
    /// Any non-success status becomes `ClientError::ApiError` carrying the
    /// response body, whatever the code. A failure while reading the body is a
    /// transport error; only a body that arrived but does not decode is a
    /// `ClientError::ParseError`.
    async fn handle_response<T: DeserializeOwned>(&self, response: reqwest::Response) -> Result<T> {
        let status = response.status();

        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(ClientError::api_error(status.as_u16(), error_text));
        }

        let body = response.bytes().await?;

        serde_json::from_slice(&body)
            .map_err(|e| ClientError::ParseError(format!("Failed to parse JSON response: {}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_creation() {
        let config = WorkspaceConfig::new("https://workspace.example.com", "dapi-token");
        let client = WorkspaceClient::new(config).unwrap();
        assert_eq!(client.base_url(), "https://workspace.example.com");
    }

    #[test]
    fn test_client_trims_trailing_slash() {
        let config = WorkspaceConfig::new("https://workspace.example.com/", "dapi-token");
        let client = WorkspaceClient::new(config).unwrap();
        assert_eq!(client.base_url(), "https://workspace.example.com");
    }

    #[test]
    fn test_client_rejects_invalid_config() {
        let config = WorkspaceConfig::new("https://workspace.example.com", "");
        assert!(matches!(
            WorkspaceClient::new(config),
            Err(ClientError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_max_attempts() {
        let config = WorkspaceConfig::new("https://workspace.example.com", "dapi-token");
        let client = WorkspaceClient::new(config.clone()).unwrap();
        assert_eq!(client.max_attempts(), 1);

        let client =
            WorkspaceClient::new(config.with_retries(u32::MAX, Duration::from_millis(5))).unwrap();
        assert_eq!(client.max_attempts(), u32::MAX);
    }

    #[test]
    fn test_client_keeps_config() {
        let config = WorkspaceConfig::new("https://workspace.example.com", "dapi-token")
            .with_timeout(Duration::from_secs(5));
        let client = WorkspaceClient::new(config).unwrap();
        assert_eq!(client.config().timeout, Duration::from_secs(5));
    }
}
