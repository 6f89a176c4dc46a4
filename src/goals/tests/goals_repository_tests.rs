use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crate::goals::{
    Difficulty, GoalError, GoalRepository, GoalRepositoryTrait, NewGoal, NewSubTask, Priority,
};
use crate::store::{keys, MemoryStore, StoreRepositoryTrait};

/// Delegates to a [`MemoryStore`] but can be told to reject writes.
struct FlakyStore {
    inner: MemoryStore,
    rejecting: AtomicBool,
}

impl FlakyStore {
    fn new() -> Self {
        FlakyStore {
            inner: MemoryStore::new(),
            rejecting: AtomicBool::new(false),
        }
    }

    fn reject_writes(&self, rejecting: bool) {
        self.rejecting.store(rejecting, Ordering::SeqCst);
    }
}

impl StoreRepositoryTrait for FlakyStore {
    fn get(&self, key: &str) -> crate::errors::Result<Option<String>> {
        self.inner.get(key)
    }

    fn set(&self, key: &str, value: &str) -> crate::errors::Result<()> {
        if self.rejecting.load(Ordering::SeqCst) {
            return Err(std::io::Error::new(std::io::ErrorKind::Other, "store offline").into());
        }
        self.inner.set(key, value)
    }

    fn remove(&self, key: &str) -> crate::errors::Result<()> {
        self.inner.remove(key)
    }
}

fn new_goal(title: &str) -> NewGoal {
    NewGoal {
        title: title.to_string(),
        description: String::new(),
        level: Difficulty::Medium,
        priority: Priority::Medium,
        area: "Health".to_string(),
        deadline: None,
        estimated_cost: 0.0,
    }
}

fn new_subtask(text: &str, target: u32) -> NewSubTask {
    NewSubTask {
        text: text.to_string(),
        target_progress: target,
        level: None,
        priority: None,
        deadline: None,
    }
}

fn repo() -> GoalRepository {
    GoalRepository::new(Arc::new(MemoryStore::new()))
}

#[test]
fn add_goal_sets_defaults_and_increments_order() {
    let repo = repo();
    let first = repo.add_goal(new_goal("Run")).unwrap();
    let second = repo.add_goal(new_goal("Read")).unwrap();

    assert!(!first.completed);
    assert!(!first.archived);
    assert!(first.completed_at.is_none());
    assert!(first.subtasks.is_empty());
    assert_eq!(first.order, 0);
    assert_eq!(second.order, 1);
    assert_ne!(first.id, second.id);
}

#[test]
fn add_goal_rejects_blank_title_and_negative_cost() {
    let repo = repo();
    assert!(matches!(
        repo.add_goal(new_goal("   ")),
        Err(GoalError::Validation(_))
    ));

    let mut priced = new_goal("Trip");
    priced.estimated_cost = -1.0;
    assert!(matches!(
        repo.add_goal(priced),
        Err(GoalError::Validation(_))
    ));
}

#[test]
fn completing_archives_and_stamps_completed_at() {
    let repo = repo();
    let goal = repo.add_goal(new_goal("Run")).unwrap();

    let done = repo.toggle_complete(&goal.id).unwrap();
    assert!(done.completed);
    assert!(done.archived);
    assert!(done.completed_at.is_some());

    let undone = repo.toggle_complete(&goal.id).unwrap();
    assert!(!undone.completed);
    assert!(!undone.archived);
    assert!(undone.completed_at.is_none());
}

#[test]
fn unarchiving_a_completed_goal_uncompletes_it() {
    let repo = repo();
    let goal = repo.add_goal(new_goal("Run")).unwrap();
    repo.toggle_complete(&goal.id).unwrap();

    let restored = repo.set_archived(&goal.id, false).unwrap();
    assert!(!restored.archived);
    assert!(!restored.completed);
    assert!(restored.completed_at.is_none());
}

#[test]
fn subtask_progress_flips_completion_both_ways() {
    let repo = repo();
    let goal = repo.add_goal(new_goal("Run")).unwrap();
    let goal = repo.add_subtask(&goal.id, new_subtask("Laps", 4)).unwrap();
    let subtask_id = goal.subtasks[0].id.clone();

    let goal = repo.set_subtask_progress(&goal.id, &subtask_id, 4).unwrap();
    assert!(goal.subtasks[0].completed);

    let goal = repo.set_subtask_progress(&goal.id, &subtask_id, 3).unwrap();
    assert!(!goal.subtasks[0].completed);
}

#[test]
fn toggle_subtask_jumps_between_zero_and_target() {
    let repo = repo();
    let goal = repo.add_goal(new_goal("Run")).unwrap();
    let goal = repo.add_subtask(&goal.id, new_subtask("Stretch", 0)).unwrap();
    let subtask_id = goal.subtasks[0].id.clone();

    let goal = repo.toggle_subtask(&goal.id, &subtask_id).unwrap();
    assert!(goal.subtasks[0].completed);
    assert_eq!(goal.subtasks[0].current_progress, 1); // target 0 counts as 1

    let goal = repo.toggle_subtask(&goal.id, &subtask_id).unwrap();
    assert!(!goal.subtasks[0].completed);
    assert_eq!(goal.subtasks[0].current_progress, 0);
}

#[test]
fn removed_subtask_is_a_tombstone_until_restored() {
    let repo = repo();
    let goal = repo.add_goal(new_goal("Run")).unwrap();
    let goal = repo.add_subtask(&goal.id, new_subtask("Laps", 2)).unwrap();
    let subtask_id = goal.subtasks[0].id.clone();

    let goal = repo.remove_subtask(&goal.id, &subtask_id).unwrap();
    assert!(goal.subtasks[0].deleted);
    assert_eq!(goal.live_subtasks().count(), 0);

    let goal = repo.restore_subtask(&goal.id, &subtask_id).unwrap();
    assert_eq!(goal.live_subtasks().count(), 1);
}

#[test]
fn mutations_bump_last_interaction() {
    let repo = repo();
    let goal = repo.add_goal(new_goal("Run")).unwrap();
    let before = goal.last_interaction_at;

    std::thread::sleep(std::time::Duration::from_millis(5));
    let pinned = repo.toggle_pin(&goal.id).unwrap();
    assert!(pinned.last_interaction_at > before);
}

#[test]
fn collection_round_trips_through_the_store() {
    let store: Arc<MemoryStore> = Arc::new(MemoryStore::new());

    let repo = GoalRepository::new(store.clone());
    let goal = repo.add_goal(new_goal("Run")).unwrap();
    repo.add_subtask(&goal.id, new_subtask("Laps", 3)).unwrap();

    // A fresh repository over the same store sees the same collection.
    let reloaded = GoalRepository::new(store);
    let goals = reloaded.list();
    assert_eq!(goals.len(), 1);
    assert_eq!(goals[0].title, "Run");
    assert_eq!(goals[0].subtasks.len(), 1);
}

#[test]
fn malformed_goals_blob_defaults_to_empty() {
    let store: Arc<MemoryStore> = Arc::new(MemoryStore::new());
    store.set(keys::GOALS, "{not json").unwrap();

    let repo = GoalRepository::new(store);
    assert!(repo.list().is_empty());
}

#[test]
fn failed_write_rolls_back_the_in_memory_collection() {
    let store = Arc::new(FlakyStore::new());
    let repo = GoalRepository::new(store.clone());
    let goal = repo.add_goal(new_goal("Run")).unwrap();

    store.reject_writes(true);
    assert!(matches!(
        repo.toggle_pin(&goal.id),
        Err(GoalError::Persist(_))
    ));
    assert!(!repo.get(&goal.id).unwrap().pinned);
    assert!(repo.add_goal(new_goal("Read")).is_err());
    assert!(repo.delete_goal(&goal.id).is_err());
    assert_eq!(repo.list().len(), 1);

    store.reject_writes(false);
    assert!(repo.toggle_pin(&goal.id).unwrap().pinned);
}

#[test]
fn delete_is_permanent_and_checked() {
    let repo = repo();
    let goal = repo.add_goal(new_goal("Run")).unwrap();

    repo.delete_goal(&goal.id).unwrap();
    assert!(repo.list().is_empty());
    assert!(matches!(
        repo.delete_goal(&goal.id),
        Err(GoalError::NotFound(_))
    ));
}
