use chrono::{DateTime, Utc};
use log::warn;
use std::sync::Arc;

use crate::advisory::{fallbacks, AdvisoryClientTrait};
use crate::db;
use crate::errors::Result;
use crate::goals::{self, Goal, GoalRepository, GoalService, GoalServiceTrait, NewSubTask};
use crate::notifications::{AppNotification, NotificationService};
use crate::profile::ProfileService;
use crate::settings::SettingsService;
use crate::store::{StoreRepository, StoreRepositoryTrait};
use crate::views::{
    self, AreaGroup, GoalFilter, GoalStats, ProgressReport, SortMode,
};

/// The application context: built once at startup and handed to whatever
/// embeds the core. All seams are trait objects, so tests swap in
/// `MemoryStore` and `FakeAdvisoryClient`.
pub struct AppContext {
    pub store: Arc<dyn StoreRepositoryTrait>,
    pub goals: Arc<dyn GoalServiceTrait>,
    pub profile: Arc<ProfileService>,
    pub settings: Arc<SettingsService>,
    pub advisory: Arc<dyn AdvisoryClientTrait>,
    pub notifications: Arc<NotificationService>,
}

impl AppContext {
    pub fn new(
        store: Arc<dyn StoreRepositoryTrait>,
        advisory: Arc<dyn AdvisoryClientTrait>,
    ) -> Self {
        let goal_repo = Arc::new(GoalRepository::new(store.clone()));
        AppContext {
            goals: Arc::new(GoalService::new(goal_repo)),
            profile: Arc::new(ProfileService::new(store.clone())),
            settings: Arc::new(SettingsService::new(store.clone())),
            notifications: Arc::new(NotificationService::new(advisory.clone())),
            advisory,
            store,
        }
    }

    /// Opens (or creates) the SQLite-backed store under `app_data_dir` and
    /// wires the context around it.
    pub fn open(app_data_dir: &str, advisory: Arc<dyn AdvisoryClientTrait>) -> Result<Self> {
        let db_path = db::init(app_data_dir)?;
        let pool = db::create_pool(&db_path)?;
        db::run_migrations(&pool)?;

        let store: Arc<dyn StoreRepositoryTrait> = Arc::new(StoreRepository::new(pool));
        Ok(Self::new(store, advisory))
    }

    /// The grouped dashboard view: active goals bucketed by life area in
    /// the user's area order, filtered and sorted.
    pub fn grouped_goals(
        &self,
        query: &str,
        filter: Option<&GoalFilter>,
        sort_mode: SortMode,
    ) -> Vec<AreaGroup> {
        let area_order = self.profile.area_order();
        views::group_active_goals(
            &self.goals.get_goals(),
            &area_order,
            query,
            filter,
            sort_mode,
        )
    }

    pub fn archived_goals(&self) -> Vec<Goal> {
        views::archived_goals(&self.goals.get_goals())
    }

    /// Analytics over the full collection, archived goals included
    pub fn stats(&self) -> GoalStats {
        views::compute_stats(&self.goals.get_goals())
    }

    pub fn goal_progress(&self, goal_id: &str, now: DateTime<Utc>) -> goals::Result<ProgressReport> {
        let goal = self.goals.get_goal(goal_id)?;
        Ok(views::compute_progress(&goal, now))
    }

    pub async fn scan_notifications(&self, now: DateTime<Utc>) -> Vec<AppNotification> {
        self.notifications
            .scan(&self.goals.get_goals(), now)
            .await
    }

    /// Greeting for the dashboard header; advisory failures fall back to
    /// the canned copy.
    pub async fn daily_greeting(&self) -> String {
        let name = self.profile.load().name;
        match self.advisory.daily_greeting(&name).await {
            Ok(text) => text,
            Err(e) => {
                warn!("Falling back to static greeting: {}", e);
                fallbacks::greeting(&name)
            }
        }
    }

    /// Description suggestion for the goal form, with static fallback
    pub async fn suggest_description(&self, title: &str, current: Option<&str>) -> String {
        match self.advisory.suggest_description(title, current).await {
            Ok(text) => text,
            Err(e) => {
                warn!("Falling back to static description: {}", e);
                fallbacks::description(title)
            }
        }
    }

    /// Asks the advisory client to break a goal into sub-steps and attaches
    /// them as sub-tasks. A failed call attaches nothing and returns the
    /// goal unchanged.
    pub async fn breakdown_goal(&self, goal_id: &str) -> goals::Result<Goal> {
        let goal = self.goals.get_goal(goal_id)?;

        let items = match self
            .advisory
            .breakdown_task(&goal.title, &goal.description)
            .await
        {
            Ok(items) => items,
            Err(e) => {
                warn!("Breakdown unavailable for '{}': {}", goal.title, e);
                return Ok(goal);
            }
        };

        if items.is_empty() {
            return Ok(goal);
        }

        let subtasks = items
            .into_iter()
            .map(|item| NewSubTask {
                text: match item.tip {
                    Some(tip) if !tip.trim().is_empty() => format!("{} ({})", item.text, tip),
                    _ => item.text,
                },
                target_progress: 1,
                level: item.level,
                priority: None,
                deadline: None,
            })
            .collect();

        self.goals.add_subtasks(goal_id, subtasks)
    }
}
