use log::debug;
use std::sync::Arc;

use crate::goals::goals_model::{Goal, GoalUpdate, NewGoal, NewSubTask};
use crate::goals::goals_traits::{GoalRepositoryTrait, GoalServiceTrait};
use crate::goals::Result;

pub struct GoalService<T: GoalRepositoryTrait> {
    goal_repo: Arc<T>,
}

impl<T: GoalRepositoryTrait> GoalService<T> {
    pub fn new(goal_repo: Arc<T>) -> Self {
        GoalService { goal_repo }
    }
}

impl<T: GoalRepositoryTrait> GoalServiceTrait for GoalService<T> {
    fn get_goals(&self) -> Vec<Goal> {
        self.goal_repo.list()
    }

    fn get_goal(&self, goal_id: &str) -> Result<Goal> {
        self.goal_repo.get(goal_id)
    }

    fn create_goal(&self, new_goal: NewGoal) -> Result<Goal> {
        debug!("Creating goal '{}' in area '{}'", new_goal.title, new_goal.area);
        self.goal_repo.add_goal(new_goal)
    }

    fn update_goal(&self, update: GoalUpdate) -> Result<Goal> {
        self.goal_repo.update_goal(update)
    }

    fn delete_goal(&self, goal_id: &str) -> Result<()> {
        debug!("Deleting goal {}", goal_id);
        self.goal_repo.delete_goal(goal_id)
    }

    fn toggle_complete(&self, goal_id: &str) -> Result<Goal> {
        self.goal_repo.toggle_complete(goal_id)
    }

    fn toggle_pin(&self, goal_id: &str) -> Result<Goal> {
        self.goal_repo.toggle_pin(goal_id)
    }

    fn set_archived(&self, goal_id: &str, archived: bool) -> Result<Goal> {
        self.goal_repo.set_archived(goal_id, archived)
    }

    fn set_order(&self, goal_id: &str, order: i64) -> Result<Goal> {
        self.goal_repo.set_order(goal_id, order)
    }

    fn add_subtask(&self, goal_id: &str, new_subtask: NewSubTask) -> Result<Goal> {
        self.goal_repo.add_subtask(goal_id, new_subtask)
    }

    fn add_subtasks(&self, goal_id: &str, new_subtasks: Vec<NewSubTask>) -> Result<Goal> {
        self.goal_repo.add_subtasks(goal_id, new_subtasks)
    }

    fn update_subtask_text(&self, goal_id: &str, subtask_id: &str, text: &str) -> Result<Goal> {
        self.goal_repo.update_subtask_text(goal_id, subtask_id, text)
    }

    fn set_subtask_progress(&self, goal_id: &str, subtask_id: &str, progress: u32) -> Result<Goal> {
        self.goal_repo.set_subtask_progress(goal_id, subtask_id, progress)
    }

    fn toggle_subtask(&self, goal_id: &str, subtask_id: &str) -> Result<Goal> {
        self.goal_repo.toggle_subtask(goal_id, subtask_id)
    }

    fn remove_subtask(&self, goal_id: &str, subtask_id: &str) -> Result<Goal> {
        self.goal_repo.remove_subtask(goal_id, subtask_id)
    }

    fn restore_subtask(&self, goal_id: &str, subtask_id: &str) -> Result<Goal> {
        self.goal_repo.restore_subtask(goal_id, subtask_id)
    }
}
