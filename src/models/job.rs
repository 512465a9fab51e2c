//! Asynchronous job execution models.

use serde::{Deserialize, Serialize};

/// Terminal job states: once reached, polling can stop.
const TERMINAL_STATUSES: &[&str] = &["COMPLETED", "FAILED", "STOPPED"];

/// Status of an asynchronous WebAPI job execution.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobExecution {
    #[serde(default)]
    pub execution_id: Option<i64>,
    pub status: String,
    #[serde(default)]
    pub start_time: Option<String>,
    #[serde(default)]
    pub end_time: Option<String>,
}

impl JobExecution {
    /// Whether the job reached a terminal state.
    pub fn is_complete(&self) -> bool {
        TERMINAL_STATUSES.contains(&self.status.as_str())
    }

    /// Whether the job finished successfully.
    pub fn is_successful(&self) -> bool {
        self.status == "COMPLETED"
    }
}
