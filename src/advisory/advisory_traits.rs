use async_trait::async_trait;

use crate::advisory::advisory_model::BreakdownItem;
use crate::advisory::Result;

/// Seam to the hosted language-model API. Every call is fallible and
/// network-bound; callers keep a static fallback on hand (see
/// [`crate::advisory::fallbacks`]) so a failure is never a hard error.
#[async_trait]
pub trait AdvisoryClientTrait: Send + Sync {
    /// Break a goal into at most eight concrete sub-steps.
    async fn breakdown_task(&self, title: &str, description: &str)
        -> Result<Vec<BreakdownItem>>;

    /// Suggest or refine a goal description.
    async fn suggest_description(&self, title: &str, current: Option<&str>) -> Result<String>;

    /// Short greeting for the dashboard header.
    async fn daily_greeting(&self, name: &str) -> Result<String>;

    /// Encouragement for the single most neglected goal.
    async fn friendly_nudge(&self, goal_title: &str, area: &str) -> Result<String>;
}
