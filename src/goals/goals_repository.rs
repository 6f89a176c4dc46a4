use chrono::Utc;
use log::warn;
use std::sync::{Arc, RwLock};
use uuid::Uuid;

use crate::goals::goals_model::{Goal, GoalUpdate, NewGoal, NewSubTask, SubTask};
use crate::goals::goals_traits::GoalRepositoryTrait;
use crate::goals::{GoalError, Result};
use crate::store::{keys, StoreRepositoryTrait};

/// Sole owner of the goal collection. Holds the goals in memory and writes
/// the whole collection back through the persistence gateway on every
/// mutation (single writer, replace-then-persist).
pub struct GoalRepository {
    store: Arc<dyn StoreRepositoryTrait>,
    goals: RwLock<Vec<Goal>>,
}

impl GoalRepository {
    /// Loads the persisted collection. A missing or malformed blob yields
    /// an empty collection, never an error.
    pub fn new(store: Arc<dyn StoreRepositoryTrait>) -> Self {
        let goals = match store.get(keys::GOALS) {
            Ok(Some(raw)) => match serde_json::from_str::<Vec<Goal>>(&raw) {
                Ok(goals) => goals,
                Err(e) => {
                    warn!("Ignoring malformed goals blob: {}", e);
                    Vec::new()
                }
            },
            Ok(None) => Vec::new(),
            Err(e) => {
                warn!("Failed to read goals from store: {}", e);
                Vec::new()
            }
        };

        GoalRepository {
            store,
            goals: RwLock::new(goals),
        }
    }

    fn persist(&self, goals: &[Goal]) -> Result<()> {
        let raw = serde_json::to_string(goals)
            .map_err(|e| GoalError::Persist(e.to_string()))?;
        self.store
            .set(keys::GOALS, &raw)
            .map_err(|e| GoalError::Persist(e.to_string()))
    }

    /// Runs a mutation against one goal, stamps `last_interaction_at`,
    /// persists, and returns the updated goal. The change is applied to a
    /// copy first and only committed once the write succeeds, so a failed
    /// write leaves the in-memory collection matching what is on disk.
    fn mutate<F>(&self, goal_id: &str, f: F) -> Result<Goal>
    where
        F: FnOnce(&mut Goal) -> Result<()>,
    {
        let mut goals = self.goals.write().unwrap();
        let index = goals
            .iter()
            .position(|g| g.id == goal_id)
            .ok_or_else(|| GoalError::NotFound(goal_id.to_string()))?;

        let mut updated = goals[index].clone();
        f(&mut updated)?;
        updated.last_interaction_at = Utc::now();

        let previous = std::mem::replace(&mut goals[index], updated.clone());
        if let Err(e) = self.persist(&goals) {
            goals[index] = previous;
            return Err(e);
        }
        Ok(updated)
    }

    fn build_subtask(new_subtask: NewSubTask) -> SubTask {
        SubTask {
            id: Uuid::new_v4().to_string(),
            text: new_subtask.text,
            completed: false,
            current_progress: 0,
            target_progress: new_subtask.target_progress,
            level: new_subtask.level,
            priority: new_subtask.priority,
            deadline: new_subtask.deadline,
            deleted: false,
        }
    }
}

impl GoalRepositoryTrait for GoalRepository {
    fn list(&self) -> Vec<Goal> {
        self.goals.read().unwrap().clone()
    }

    fn get(&self, goal_id: &str) -> Result<Goal> {
        self.goals
            .read()
            .unwrap()
            .iter()
            .find(|g| g.id == goal_id)
            .cloned()
            .ok_or_else(|| GoalError::NotFound(goal_id.to_string()))
    }

    fn add_goal(&self, new_goal: NewGoal) -> Result<Goal> {
        new_goal.validate()?;

        let mut goals = self.goals.write().unwrap();
        let now = Utc::now();
        let next_order = goals.iter().map(|g| g.order).max().map_or(0, |o| o + 1);

        let goal = Goal {
            id: Uuid::new_v4().to_string(),
            title: new_goal.title,
            description: new_goal.description,
            level: new_goal.level,
            priority: new_goal.priority,
            area: new_goal.area,
            deadline: new_goal.deadline,
            estimated_cost: new_goal.estimated_cost,
            pinned: false,
            order: next_order,
            completed: false,
            archived: false,
            created_at: now,
            completed_at: None,
            last_interaction_at: now,
            subtasks: Vec::new(),
        };

        goals.push(goal.clone());
        if let Err(e) = self.persist(&goals) {
            goals.pop();
            return Err(e);
        }
        Ok(goal)
    }

    fn update_goal(&self, update: GoalUpdate) -> Result<Goal> {
        update.validate()?;
        let goal_id = update.id.clone();
        self.mutate(&goal_id, |goal| {
            goal.title = update.title;
            goal.description = update.description;
            goal.level = update.level;
            goal.priority = update.priority;
            goal.area = update.area;
            goal.deadline = update.deadline;
            goal.estimated_cost = update.estimated_cost;
            Ok(())
        })
    }

    fn delete_goal(&self, goal_id: &str) -> Result<()> {
        let mut goals = self.goals.write().unwrap();
        let index = goals
            .iter()
            .position(|g| g.id == goal_id)
            .ok_or_else(|| GoalError::NotFound(goal_id.to_string()))?;

        let removed = goals.remove(index);
        if let Err(e) = self.persist(&goals) {
            goals.insert(index, removed);
            return Err(e);
        }
        Ok(())
    }

    fn toggle_complete(&self, goal_id: &str) -> Result<Goal> {
        let now = Utc::now();
        self.mutate(goal_id, |goal| {
            let done = !goal.completed;
            goal.set_completed(done, now);
            Ok(())
        })
    }

    fn toggle_pin(&self, goal_id: &str) -> Result<Goal> {
        self.mutate(goal_id, |goal| {
            goal.pinned = !goal.pinned;
            Ok(())
        })
    }

    fn set_archived(&self, goal_id: &str, archived: bool) -> Result<Goal> {
        let now = Utc::now();
        self.mutate(goal_id, |goal| {
            goal.archived = archived;
            // Pulling a completed goal back to the active set un-completes
            // it, completion always implies archival.
            if !archived && goal.completed {
                goal.set_completed(false, now);
            }
            Ok(())
        })
    }

    fn set_order(&self, goal_id: &str, order: i64) -> Result<Goal> {
        self.mutate(goal_id, |goal| {
            goal.order = order;
            Ok(())
        })
    }

    fn add_subtask(&self, goal_id: &str, new_subtask: NewSubTask) -> Result<Goal> {
        new_subtask.validate()?;
        self.mutate(goal_id, |goal| {
            goal.subtasks.push(Self::build_subtask(new_subtask));
            Ok(())
        })
    }

    fn add_subtasks(&self, goal_id: &str, new_subtasks: Vec<NewSubTask>) -> Result<Goal> {
        for new_subtask in &new_subtasks {
            new_subtask.validate()?;
        }
        self.mutate(goal_id, |goal| {
            goal.subtasks
                .extend(new_subtasks.into_iter().map(Self::build_subtask));
            Ok(())
        })
    }

    fn update_subtask_text(&self, goal_id: &str, subtask_id: &str, text: &str) -> Result<Goal> {
        if text.trim().is_empty() {
            return Err(GoalError::Validation(
                crate::errors::ValidationError::InvalidInput(
                    "Sub-task text cannot be empty".to_string(),
                ),
            ));
        }
        self.mutate(goal_id, |goal| {
            let subtask = goal.subtask_mut(subtask_id)?;
            subtask.text = text.to_string();
            Ok(())
        })
    }

    fn set_subtask_progress(&self, goal_id: &str, subtask_id: &str, progress: u32) -> Result<Goal> {
        self.mutate(goal_id, |goal| {
            let subtask = goal.subtask_mut(subtask_id)?;
            subtask.current_progress = progress;
            subtask.sync_completed();
            Ok(())
        })
    }

    fn toggle_subtask(&self, goal_id: &str, subtask_id: &str) -> Result<Goal> {
        self.mutate(goal_id, |goal| {
            let subtask = goal.subtask_mut(subtask_id)?;
            if subtask.completed {
                subtask.current_progress = 0;
            } else {
                subtask.current_progress = subtask.required_checkins();
            }
            subtask.sync_completed();
            Ok(())
        })
    }

    fn remove_subtask(&self, goal_id: &str, subtask_id: &str) -> Result<Goal> {
        self.mutate(goal_id, |goal| {
            let subtask = goal.subtask_mut(subtask_id)?;
            subtask.deleted = true;
            Ok(())
        })
    }

    fn restore_subtask(&self, goal_id: &str, subtask_id: &str) -> Result<Goal> {
        self.mutate(goal_id, |goal| {
            let subtask = goal.subtask_mut(subtask_id)?;
            subtask.deleted = false;
            Ok(())
        })
    }
}
