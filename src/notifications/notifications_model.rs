use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum NotificationKind {
    Deadline,
    Nudge,
}

/// An in-session alert. Never persisted; cleared by the user or superseded
/// by the dedup-by-id logic on the next scan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppNotification {
    /// `"deadline-<goal id>"` or `"nudge-<goal id>"`, which makes repeat
    /// scans idempotent for a still-pending goal.
    pub id: String,
    pub kind: NotificationKind,
    pub title: String,
    pub message: String,
    pub created_at: DateTime<Utc>,
}

impl AppNotification {
    pub fn deadline_id(goal_id: &str) -> String {
        format!("deadline-{}", goal_id)
    }

    pub fn nudge_id(goal_id: &str) -> String {
        format!("nudge-{}", goal_id)
    }
}
