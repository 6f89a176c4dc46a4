use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::errors::ValidationError;
use crate::goals::{GoalError, Result};

/// Difficulty rating of a goal or sub-task
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    /// Score used by the difficulty sort mode, higher sorts first
    pub fn score(&self) -> u8 {
        match self {
            Difficulty::Hard => 3,
            Difficulty::Medium => 2,
            Difficulty::Easy => 1,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        }
    }
}

/// Priority rating of a goal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Priority {
    Low,
    Medium,
    High,
}

impl Priority {
    /// Score used by the priority sort mode, higher sorts first
    pub fn score(&self) -> u8 {
        match self {
            Priority::High => 3,
            Priority::Medium => 2,
            Priority::Low => 1,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::Low => "Low",
            Priority::Medium => "Medium",
            Priority::High => "High",
        }
    }
}

/// A measurable sub-step of a goal. `target_progress` is the number of
/// check-ins required; 0 or 1 means boolean-style completion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubTask {
    pub id: String,
    pub text: String,
    pub completed: bool,
    pub current_progress: u32,
    pub target_progress: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub level: Option<Difficulty>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<Priority>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deadline: Option<DateTime<Utc>>,
    /// Soft-delete tombstone. Deleted sub-tasks are excluded from progress
    /// math and display but kept around for restore.
    #[serde(default)]
    pub deleted: bool,
}

impl SubTask {
    /// Check-ins required before this sub-task counts as done (never 0)
    pub fn required_checkins(&self) -> u32 {
        self.target_progress.max(1)
    }

    /// Re-derive `completed` from the progress counters. Flips in both
    /// directions: dropping below the target un-completes.
    pub(crate) fn sync_completed(&mut self) {
        self.completed = self.current_progress >= self.required_checkins();
    }
}

/// The central entity: a trackable objective inside a life area
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Goal {
    pub id: String,
    pub title: String,
    pub description: String,
    pub level: Difficulty,
    pub priority: Priority,
    /// Life area label. May be stale when the area was archived later;
    /// such goals stay out of the grouped view but keep their tag.
    pub area: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deadline: Option<DateTime<Utc>>,
    pub estimated_cost: f64,
    pub pinned: bool,
    /// Manual ordering index. Unique in intent only; ties fall back to
    /// insertion order.
    pub order: i64,
    pub completed: bool,
    pub archived: bool,
    pub created_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<DateTime<Utc>>,
    pub last_interaction_at: DateTime<Utc>,
    #[serde(default)]
    pub subtasks: Vec<SubTask>,
}

impl Goal {
    pub fn is_active(&self) -> bool {
        !self.archived
    }

    /// Sub-tasks that still count: soft-deleted ones are invisible
    pub fn live_subtasks(&self) -> impl Iterator<Item = &SubTask> {
        self.subtasks.iter().filter(|s| !s.deleted)
    }

    /// Set the completed flag while keeping the invariants intact:
    /// completing always archives and stamps `completed_at`; un-completing
    /// clears the stamp and returns the goal to the active set.
    pub(crate) fn set_completed(&mut self, done: bool, now: DateTime<Utc>) {
        self.completed = done;
        if done {
            self.archived = true;
            self.completed_at = Some(now);
        } else {
            self.archived = false;
            self.completed_at = None;
        }
    }

    pub(crate) fn subtask_mut(&mut self, subtask_id: &str) -> Result<&mut SubTask> {
        self.subtasks
            .iter_mut()
            .find(|s| s.id == subtask_id)
            .ok_or_else(|| GoalError::SubTaskNotFound(subtask_id.to_string()))
    }
}

/// Input model for creating a new goal
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewGoal {
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub level: Difficulty,
    pub priority: Priority,
    pub area: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deadline: Option<DateTime<Utc>>,
    #[serde(default)]
    pub estimated_cost: f64,
}

impl NewGoal {
    /// Validates the new goal data
    pub fn validate(&self) -> Result<()> {
        if self.title.trim().is_empty() {
            return Err(GoalError::Validation(ValidationError::InvalidInput(
                "Goal title cannot be empty".to_string(),
            )));
        }
        if self.area.trim().is_empty() {
            return Err(GoalError::Validation(ValidationError::InvalidInput(
                "Life area cannot be empty".to_string(),
            )));
        }
        if self.estimated_cost < 0.0 {
            return Err(GoalError::Validation(ValidationError::InvalidInput(
                "Estimated cost cannot be negative".to_string(),
            )));
        }
        Ok(())
    }
}

/// Input model for editing the user-facing fields of a goal.
/// Flags, timestamps, and sub-tasks have their own operations.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GoalUpdate {
    pub id: String,
    pub title: String,
    pub description: String,
    pub level: Difficulty,
    pub priority: Priority,
    pub area: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deadline: Option<DateTime<Utc>>,
    pub estimated_cost: f64,
}

impl GoalUpdate {
    /// Validates the goal update data
    pub fn validate(&self) -> Result<()> {
        if self.id.trim().is_empty() {
            return Err(GoalError::Validation(ValidationError::MissingField(
                "id".to_string(),
            )));
        }
        if self.title.trim().is_empty() {
            return Err(GoalError::Validation(ValidationError::InvalidInput(
                "Goal title cannot be empty".to_string(),
            )));
        }
        if self.estimated_cost < 0.0 {
            return Err(GoalError::Validation(ValidationError::InvalidInput(
                "Estimated cost cannot be negative".to_string(),
            )));
        }
        Ok(())
    }
}

/// Input model for creating a sub-task
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewSubTask {
    pub text: String,
    #[serde(default)]
    pub target_progress: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub level: Option<Difficulty>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<Priority>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deadline: Option<DateTime<Utc>>,
}

impl NewSubTask {
    pub fn validate(&self) -> Result<()> {
        if self.text.trim().is_empty() {
            return Err(GoalError::Validation(ValidationError::InvalidInput(
                "Sub-task text cannot be empty".to_string(),
            )));
        }
        Ok(())
    }
}
