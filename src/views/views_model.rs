use serde::{Deserialize, Serialize};

use crate::goals::{Difficulty, Goal, Priority};

/// Sort modes for the grouped goal view. `Manual` is the "Reset" default:
/// completed last, pinned first, then the manual ordering index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SortMode {
    Newest,
    Priority,
    Difficulty,
    Deadline,
    #[default]
    Manual,
}

/// Completion-status value of the status filter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StatusFilter {
    Completed,
    Active,
}

/// The active single-dimension filter. Matching goals float to the front
/// of their area bucket as a block; the rest keep their relative order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "camelCase")]
pub enum GoalFilter {
    Difficulty(Difficulty),
    Priority(Priority),
    Status(StatusFilter),
    Area(String),
}

impl GoalFilter {
    pub fn matches(&self, goal: &Goal) -> bool {
        match self {
            GoalFilter::Difficulty(level) => goal.level == *level,
            GoalFilter::Priority(priority) => goal.priority == *priority,
            GoalFilter::Status(status) => {
                goal.completed == matches!(status, StatusFilter::Completed)
            }
            GoalFilter::Area(area) => goal.area == *area,
        }
    }
}

/// One bucket of the grouped view: a life area and its ordered goals
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AreaGroup {
    pub area: String,
    pub goals: Vec<Goal>,
}

/// Progress of a single goal. `raw` may exceed 100 when the goal is ahead
/// of its deadline schedule; `display` is capped for the progress bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressReport {
    pub raw: i64,
    pub display: u8,
}

impl ProgressReport {
    pub fn ahead_of_schedule(&self) -> bool {
        self.raw > 100
    }
}

/// One labelled tally for the analytics charts
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CountBucket {
    pub label: String,
    pub count: usize,
}

/// Aggregate statistics for the analytics summary
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GoalStats {
    pub total: usize,
    pub completed: usize,
    pub active: usize,
    /// Rounded percentage, 0 when there are no goals
    pub completion_rate: u8,
    /// Zero-count areas are omitted from the area chart
    pub by_area: Vec<CountBucket>,
    pub by_difficulty: Vec<CountBucket>,
    pub by_priority: Vec<CountBucket>,
    pub by_status: Vec<CountBucket>,
}
