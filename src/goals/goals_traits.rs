use crate::goals::goals_model::{Goal, GoalUpdate, NewGoal, NewSubTask};
use crate::goals::Result;

/// Trait for the goal collection owner. Every mutation stamps
/// `last_interaction_at`, re-establishes the completion invariants and
/// writes the whole collection back through the persistence gateway.
pub trait GoalRepositoryTrait: Send + Sync {
    fn list(&self) -> Vec<Goal>;
    fn get(&self, goal_id: &str) -> Result<Goal>;

    fn add_goal(&self, new_goal: NewGoal) -> Result<Goal>;
    fn update_goal(&self, update: GoalUpdate) -> Result<Goal>;
    fn delete_goal(&self, goal_id: &str) -> Result<()>;

    fn toggle_complete(&self, goal_id: &str) -> Result<Goal>;
    fn toggle_pin(&self, goal_id: &str) -> Result<Goal>;
    fn set_archived(&self, goal_id: &str, archived: bool) -> Result<Goal>;
    fn set_order(&self, goal_id: &str, order: i64) -> Result<Goal>;

    fn add_subtask(&self, goal_id: &str, new_subtask: NewSubTask) -> Result<Goal>;
    fn add_subtasks(&self, goal_id: &str, new_subtasks: Vec<NewSubTask>) -> Result<Goal>;
    fn update_subtask_text(&self, goal_id: &str, subtask_id: &str, text: &str) -> Result<Goal>;
    fn set_subtask_progress(&self, goal_id: &str, subtask_id: &str, progress: u32) -> Result<Goal>;
    fn toggle_subtask(&self, goal_id: &str, subtask_id: &str) -> Result<Goal>;
    fn remove_subtask(&self, goal_id: &str, subtask_id: &str) -> Result<Goal>;
    fn restore_subtask(&self, goal_id: &str, subtask_id: &str) -> Result<Goal>;
}

/// Trait for goal service operations
pub trait GoalServiceTrait: Send + Sync {
    fn get_goals(&self) -> Vec<Goal>;
    fn get_goal(&self, goal_id: &str) -> Result<Goal>;
    fn create_goal(&self, new_goal: NewGoal) -> Result<Goal>;
    fn update_goal(&self, update: GoalUpdate) -> Result<Goal>;
    fn delete_goal(&self, goal_id: &str) -> Result<()>;
    fn toggle_complete(&self, goal_id: &str) -> Result<Goal>;
    fn toggle_pin(&self, goal_id: &str) -> Result<Goal>;
    fn set_archived(&self, goal_id: &str, archived: bool) -> Result<Goal>;
    fn set_order(&self, goal_id: &str, order: i64) -> Result<Goal>;
    fn add_subtask(&self, goal_id: &str, new_subtask: NewSubTask) -> Result<Goal>;
    fn add_subtasks(&self, goal_id: &str, new_subtasks: Vec<NewSubTask>) -> Result<Goal>;
    fn update_subtask_text(&self, goal_id: &str, subtask_id: &str, text: &str) -> Result<Goal>;
    fn set_subtask_progress(&self, goal_id: &str, subtask_id: &str, progress: u32) -> Result<Goal>;
    fn toggle_subtask(&self, goal_id: &str, subtask_id: &str) -> Result<Goal>;
    fn remove_subtask(&self, goal_id: &str, subtask_id: &str) -> Result<Goal>;
    fn restore_subtask(&self, goal_id: &str, subtask_id: &str) -> Result<Goal>;
}
