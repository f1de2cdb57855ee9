//! Run domain types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One execution of a job
///
/// Every field is optional on the wire. Fields runfinder does not model are
/// retained in `extra` so the run can be re-emitted as the service sent it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Run {
    #[serde(
        default,
        deserialize_with = "crate::domain::id::option::deserialize",
        skip_serializing_if = "Option::is_none"
    )]
    pub job_id: Option<String>,
    #[serde(
        default,
        deserialize_with = "crate::domain::id::option::deserialize",
        skip_serializing_if = "Option::is_none"
    )]
    pub run_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub run_name: Option<String>,
    /// Start time in epoch milliseconds
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_time: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<RunState>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub run_page_url: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Lifecycle and result state reported for a run
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RunState {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub life_cycle_state: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub result_state: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state_message: Option<String>,
}

/// Identifying attributes of a run
///
/// Missing fields are the empty string. An absent run yields `Default`,
/// which is indistinguishable from a run whose fields are both empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunDetails {
    pub run_id: String,
    pub run_name: String,
}

impl Run {
    /// Start time as a UTC timestamp, if reported and in range
    pub fn started_at(&self) -> Option<DateTime<Utc>> {
        self.start_time.and_then(DateTime::from_timestamp_millis)
    }

    /// Project the identifying attributes of this run
    pub fn details(&self) -> RunDetails {
        RunDetails {
            run_id: self.run_id.clone().unwrap_or_default(),
            run_name: self.run_name.clone().unwrap_or_default(),
        }
    }
}

impl From<Option<Run>> for RunDetails {
    fn from(run: Option<Run>) -> Self {
        run.map(|run| run.details()).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_deserialize_service_run() {
        let run: Run = serde_json::from_value(json!({
            "job_id": 42,
            "run_id": 9001,
            "run_name": "nightly",
            "start_time": 1700000000000i64,
            "state": {
                "life_cycle_state": "TERMINATED",
                "result_state": "SUCCESS",
                "state_message": ""
            },
            "run_page_url": "https://example.cloud/#job/42/run/9001",
            "number_in_job": 9001,
            "trigger": "PERIODIC"
        }))
        .unwrap();

        assert_eq!(run.job_id.as_deref(), Some("42"));
        assert_eq!(run.run_id.as_deref(), Some("9001"));
        assert_eq!(
            run.state.as_ref().and_then(|s| s.result_state.as_deref()),
            Some("SUCCESS")
        );
        assert_eq!(run.extra.get("trigger"), Some(&json!("PERIODIC")));
        assert_eq!(
            run.started_at().map(|t| t.timestamp()),
            Some(1_700_000_000)
        );
    }

    #[test]
    fn test_details_substitutes_empty_strings() {
        let run: Run = serde_json::from_value(json!({ "run_id": "r8" })).unwrap();
        assert_eq!(
            run.details(),
            RunDetails {
                run_id: "r8".to_string(),
                run_name: String::new(),
            }
        );

        let empty: Run = serde_json::from_value(json!({})).unwrap();
        assert_eq!(empty.details(), RunDetails::default());
    }

    #[test]
    fn test_absent_run_gives_empty_details() {
        assert_eq!(RunDetails::from(None), RunDetails::default());
    }

    #[test]
    fn test_serialize_keeps_unmodeled_fields() {
        let run: Run = serde_json::from_value(json!({
            "run_id": 5,
            "number_in_job": 5
        }))
        .unwrap();

        let value = serde_json::to_value(&run).unwrap();
        assert_eq!(value, json!({ "run_id": "5", "number_in_job": 5 }));
    }
}
