pub mod progress_calculator;
pub mod stats_service;
pub mod views_model;
pub mod views_service;

pub use progress_calculator::compute_progress;
pub use stats_service::compute_stats;
pub use views_model::{
    AreaGroup, CountBucket, GoalFilter, GoalStats, ProgressReport, SortMode, StatusFilter,
};
pub use views_service::{archived_goals, group_active_goals};

#[cfg(test)]
pub(crate) mod tests;
