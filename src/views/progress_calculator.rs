use chrono::{DateTime, Utc};

use crate::goals::Goal;
use crate::views::views_model::ProgressReport;

/// Floor of the time ratio, keeps brand-new goals from dividing by ~zero
const MIN_TIME_RATIO: f64 = 0.0001;

/// Progress percentage of a goal at `now`.
///
/// A completed goal is always 100. Otherwise the completion ratio over the
/// live sub-tasks is taken as-is when there is no deadline, or divided by
/// the elapsed-time ratio when there is one: being ahead of schedule pushes
/// the raw value above 100, falling behind pulls it down. `display` caps
/// at 100 for the bar; the raw value stays available for the
/// ahead-of-schedule signal.
pub fn compute_progress(goal: &Goal, now: DateTime<Utc>) -> ProgressReport {
    if goal.completed {
        return ProgressReport {
            raw: 100,
            display: 100,
        };
    }

    let total_target: u64 = goal
        .live_subtasks()
        .map(|s| s.required_checkins() as u64)
        .sum();
    let total_current: u64 = goal.live_subtasks().map(|s| s.current_progress as u64).sum();

    if total_target == 0 {
        return ProgressReport { raw: 0, display: 0 };
    }

    let completion_ratio = total_current as f64 / total_target as f64;

    let raw = match goal.deadline {
        None => (completion_ratio * 100.0).round() as i64,
        Some(deadline) => {
            let elapsed = (now - goal.created_at).num_seconds().max(1) as f64;
            let total_duration = (deadline - goal.created_at).num_seconds().max(1) as f64;
            let time_ratio = (elapsed / total_duration).clamp(MIN_TIME_RATIO, 1.0);
            ((completion_ratio / time_ratio) * 100.0).round() as i64
        }
    };

    let raw = raw.max(0);
    ProgressReport {
        raw,
        display: raw.min(100) as u8,
    }
}
