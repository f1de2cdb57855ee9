//! Identifier normalization
//!
//! The service emits `job_id` and `run_id` as JSON numbers, while callers
//! treat them as opaque strings. Both representations are accepted.

use serde::{Deserialize, Deserializer};

#[derive(Deserialize)]
#[serde(untagged)]
enum RawId {
    Text(String),
    Number(serde_json::Number),
}

impl RawId {
    fn into_string(self) -> String {
        match self {
            RawId::Text(text) => text,
            RawId::Number(number) => number.to_string(),
        }
    }
}

/// Deserialize a required identifier from a string or a number
pub fn deserialize<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    RawId::deserialize(deserializer).map(RawId::into_string)
}

pub mod option {
    use super::RawId;
    use serde::{Deserialize, Deserializer};

    /// Deserialize an optional identifier; `null` maps to `None`
    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
    where
        D: Deserializer<'de>,
    {
        Option::<RawId>::deserialize(deserializer).map(|id| id.map(RawId::into_string))
    }
}
