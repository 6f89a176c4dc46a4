use chrono::Duration;

use crate::views::compute_progress;
use crate::views::tests::fixtures::{base_time, goal, subtask};

#[test]
fn completed_goal_is_always_100() {
    let mut g = goal("a", "Health");
    g.completed = true;
    g.archived = true;
    g.completed_at = Some(base_time());
    g.subtasks.push(subtask("s1", 0, 4));

    let report = compute_progress(&g, base_time());
    assert_eq!(report.raw, 100);
    assert_eq!(report.display, 100);
}

#[test]
fn no_subtasks_means_zero() {
    let g = goal("a", "Health");
    let report = compute_progress(&g, base_time());
    assert_eq!(report.raw, 0);
    assert_eq!(report.display, 0);
}

#[test]
fn deleted_subtasks_are_ignored() {
    let mut g = goal("a", "Health");
    let mut gone = subtask("s1", 3, 4);
    gone.deleted = true;
    g.subtasks.push(gone);

    let report = compute_progress(&g, base_time());
    assert_eq!(report.raw, 0);
}

#[test]
fn no_deadline_uses_plain_completion_ratio() {
    let mut g = goal("a", "Health");
    g.subtasks.push(subtask("s1", 2, 4));

    let report = compute_progress(&g, base_time() + Duration::days(30));
    assert_eq!(report.raw, 50);
    assert_eq!(report.display, 50);
}

#[test]
fn zero_target_counts_as_one_checkin() {
    let mut g = goal("a", "Health");
    g.subtasks.push(subtask("s1", 1, 0)); // boolean-style, done
    g.subtasks.push(subtask("s2", 0, 1));

    let report = compute_progress(&g, base_time());
    assert_eq!(report.raw, 50);
}

#[test]
fn on_schedule_goal_reads_about_100() {
    // Half the sub-task work done at exactly half the timeline.
    let mut g = goal("a", "Health");
    g.deadline = Some(base_time() + Duration::days(10));
    g.subtasks.push(subtask("s1", 2, 4));

    let report = compute_progress(&g, base_time() + Duration::days(5));
    assert_eq!(report.raw, 100);
    assert_eq!(report.display, 100);
    assert!(!report.ahead_of_schedule());
}

#[test]
fn ahead_of_schedule_exceeds_100_raw_but_caps_display() {
    // Same goal evaluated one day in: time ratio 0.1, completion 0.5.
    let mut g = goal("a", "Health");
    g.deadline = Some(base_time() + Duration::days(10));
    g.subtasks.push(subtask("s1", 2, 4));

    let report = compute_progress(&g, base_time() + Duration::days(1));
    assert_eq!(report.raw, 500);
    assert_eq!(report.display, 100);
    assert!(report.ahead_of_schedule());
}

#[test]
fn behind_schedule_pulls_progress_down() {
    let mut g = goal("a", "Health");
    g.deadline = Some(base_time() + Duration::days(10));
    g.subtasks.push(subtask("s1", 1, 4));

    // At the deadline the time ratio is clamped to 1, so 25% work shows 25.
    let report = compute_progress(&g, base_time() + Duration::days(10));
    assert_eq!(report.raw, 25);
    assert_eq!(report.display, 25);
}

#[test]
fn progress_is_monotone_in_current_progress() {
    let now = base_time() + Duration::days(3);
    let mut previous = -1;
    for current in 0..=6 {
        let mut g = goal("a", "Health");
        g.deadline = Some(base_time() + Duration::days(10));
        g.subtasks.push(subtask("s1", current, 4));

        let report = compute_progress(&g, now);
        assert!(report.raw >= previous);
        previous = report.raw;
    }
}

#[test]
fn time_ratio_is_floored_for_brand_new_goals() {
    // Evaluating at the creation instant must not divide by zero.
    let mut g = goal("a", "Health");
    g.deadline = Some(base_time() + Duration::days(10));
    g.subtasks.push(subtask("s1", 4, 4));

    let report = compute_progress(&g, base_time());
    assert!(report.raw >= 100);
    assert_eq!(report.display, 100);
}
