//! Job domain types

use serde::{Deserialize, Serialize};

/// A scheduled workload as listed by the service
///
/// `job_id` is stable for the lifetime of the job; the display name lives in
/// `settings` and may collide between jobs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Job {
    #[serde(deserialize_with = "crate::domain::id::deserialize")]
    pub job_id: String,
    #[serde(default)]
    pub settings: JobSettings,
}

/// Mutable job settings; only the display name is consumed
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct JobSettings {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl Job {
    /// Display name, or the empty string when the service omitted it
    pub fn name(&self) -> &str {
        self.settings.name.as_deref().unwrap_or_default()
    }

    /// Case-sensitive, unanchored substring match against the display name
    pub fn name_contains(&self, keyword: &str) -> bool {
        self.settings
            .name
            .as_deref()
            .is_some_and(|name| name.contains(keyword))
    }
}
