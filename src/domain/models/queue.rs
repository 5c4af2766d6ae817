use serde::{Deserialize, Serialize};

/// Lifecycle status of a queued command
///
/// Only `Pending` is ever written by this crate. The consumer that drains
/// the queue owns the transitions to `Done` and `Failed`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QueueStatus {
    Pending,
    Done,
    Failed,
}

/// Record appended to the shared `task_queue` collection
///
/// Field names and the `pending` literal are the wire contract with the
/// external consumer and must not change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueueEntry {
    /// Command text as classified by the model
    pub command: String,

    /// Always [`QueueStatus::Pending`] at creation
    pub status: QueueStatus,

    /// Creation time, seconds since the Unix epoch
    pub timestamp: i64,

    /// Display name of the sender, for audit only
    pub from: String,
}

impl QueueEntry {
    /// Build a new pending entry
    pub fn pending(command: impl Into<String>, from: impl Into<String>, timestamp: i64) -> Self {
        Self {
            command: command.into(),
            status: QueueStatus::Pending,
            timestamp,
            from: from.into(),
        }
    }
}
