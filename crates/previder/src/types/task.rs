//! Server-side records of long-running operations

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// An asynchronous operation, e.g. the deployment of a virtual machine.
///
/// Tasks are created by the server when a mutating call is accepted. The
/// client only reads them; see [`Tasks::wait_for`](crate::Tasks::wait_for).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    /// Task id
    pub id: String,

    /// Set once the task finished, successfully or not
    #[serde(default)]
    pub completed: bool,

    /// Completion time in epoch milliseconds
    #[serde(default)]
    pub completed_date: Option<i64>,

    /// Start time in epoch milliseconds
    #[serde(default)]
    pub started_date: Option<i64>,

    /// Creation time in epoch milliseconds
    #[serde(default)]
    pub task_date: Option<i64>,

    /// User that submitted the task
    #[serde(default)]
    pub user: Option<String>,

    /// Whether the task succeeded; only meaningful once terminal
    #[serde(default)]
    pub success: bool,

    /// Failure indicator, a flag or a message depending on the API generation
    #[serde(default)]
    pub error: Option<TaskErrorField>,

    /// Failure message accompanying the boolean flag
    #[serde(default)]
    pub error_message: Option<String>,

    /// Progress percentage
    #[serde(default)]
    pub progress: Option<u32>,

    /// Kind of operation
    #[serde(default)]
    pub task_type: Option<String>,

    /// Resource the task operates on
    #[serde(default)]
    pub configuration_item: Option<ConfigurationItem>,
}

/// The `error` field of a task.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TaskErrorField {
    /// Boolean flag; the text lives in `errorMessage`
    Flag(bool),
    /// The error text itself
    Message(String),
}

/// Resource a task belongs to.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfigurationItem {
    /// Resource id
    #[serde(default)]
    pub id: String,

    /// Resource name
    #[serde(default)]
    pub name: String,
}

/// Observed state of a task.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskState {
    /// Still running
    Pending,
    /// Finished successfully
    Succeeded,
    /// Finished with an error
    Failed,
}

impl Task {
    /// Whether the task reached a terminal state.
    pub fn is_terminal(&self) -> bool {
        self.completed || self.completed_date.is_some()
    }

    /// Classify the task.
    pub fn state(&self) -> TaskState {
        match (self.is_terminal(), self.success) {
            (false, _) => TaskState::Pending,
            (true, true) => TaskState::Succeeded,
            (true, false) => TaskState::Failed,
        }
    }

    /// Error text reported by the server, if any.
    pub fn failure_message(&self) -> Option<&str> {
        let from_field = match &self.error {
            Some(TaskErrorField::Message(message)) => Some(message.as_str()),
            _ => None,
        };
        self.error_message
            .as_deref()
            .filter(|m| !m.is_empty())
            .or(from_field.filter(|m| !m.is_empty()))
    }

    /// Completion time.
    pub fn completed_at(&self) -> Option<DateTime<Utc>> {
        self.completed_date.and_then(DateTime::from_timestamp_millis)
    }

    /// Start time.
    pub fn started_at(&self) -> Option<DateTime<Utc>> {
        self.started_date.and_then(DateTime::from_timestamp_millis)
    }
}
