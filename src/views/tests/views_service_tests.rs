use chrono::Duration;

use crate::goals::{Difficulty, Priority};
use crate::views::tests::fixtures::{areas, base_time, goal};
use crate::views::{archived_goals, group_active_goals, GoalFilter, SortMode, StatusFilter};

#[test]
fn manual_sort_groups_by_area_and_drops_unknown_areas() {
    let mut a = goal("a", "Health");
    a.pinned = true;
    a.order = 0;
    a.created_at = base_time() - Duration::days(30);

    let mut b = goal("b", "Health");
    b.order = 1;

    let c = goal("c", "Travel");

    let mut stray = goal("d", "Fitness"); // not in the area order
    stray.order = 2;

    let groups = group_active_goals(
        &[b.clone(), a.clone(), c.clone(), stray],
        &areas(&["Health", "Travel"]),
        "",
        None,
        SortMode::Manual,
    );

    assert_eq!(groups.len(), 2);
    assert_eq!(groups[0].area, "Health");
    assert_eq!(
        groups[0].goals.iter().map(|g| g.id.as_str()).collect::<Vec<_>>(),
        vec!["a", "b"], // pinned before unpinned, then order ascending
    );
    assert_eq!(groups[1].area, "Travel");
    assert_eq!(groups[1].goals.len(), 1);
    assert_eq!(groups[1].goals[0].id, "c");
}

#[test]
fn empty_buckets_are_omitted() {
    let groups = group_active_goals(
        &[goal("a", "Health")],
        &areas(&["Health", "Travel"]),
        "",
        None,
        SortMode::Manual,
    );
    assert_eq!(groups.len(), 1);
    assert_eq!(groups[0].area, "Health");
}

#[test]
fn archived_goals_are_excluded_from_grouping() {
    let mut done = goal("a", "Health");
    done.archived = true;

    let groups = group_active_goals(
        &[done, goal("b", "Health")],
        &areas(&["Health"]),
        "",
        None,
        SortMode::Manual,
    );
    assert_eq!(groups[0].goals.len(), 1);
    assert_eq!(groups[0].goals[0].id, "b");
}

#[test]
fn query_matches_title_and_description_case_insensitively() {
    let mut a = goal("a", "Health");
    a.title = "Run a marathon".to_string();
    let mut b = goal("b", "Health");
    b.title = "Sleep more".to_string();
    b.description = "marathon recovery matters".to_string();
    let mut c = goal("c", "Health");
    c.title = "Eat better".to_string();

    let groups = group_active_goals(
        &[a, b, c],
        &areas(&["Health"]),
        "MARATHON",
        None,
        SortMode::Manual,
    );
    assert_eq!(
        groups[0].goals.iter().map(|g| g.id.as_str()).collect::<Vec<_>>(),
        vec!["a", "b"],
    );
}

#[test]
fn blank_query_keeps_everything() {
    let groups = group_active_goals(
        &[goal("a", "Health"), goal("b", "Health")],
        &areas(&["Health"]),
        "   ",
        None,
        SortMode::Manual,
    );
    assert_eq!(groups[0].goals.len(), 2);
}

#[test]
fn priority_filter_floats_matches_to_the_front_as_a_block() {
    let t = base_time();

    let mut high_old = goal("high-old", "Health");
    high_old.priority = Priority::High;
    high_old.created_at = t - Duration::days(10);

    let mut high_new = goal("high-new", "Health");
    high_new.priority = Priority::High;
    high_new.created_at = t - Duration::days(1);

    let mut low_new = goal("low-new", "Health");
    low_new.priority = Priority::Low;
    low_new.created_at = t;

    let mut low_old = goal("low-old", "Health");
    low_old.priority = Priority::Low;
    low_old.created_at = t - Duration::days(20);

    let groups = group_active_goals(
        &[low_new.clone(), high_old, low_old, high_new],
        &areas(&["Health"]),
        "",
        Some(&GoalFilter::Priority(Priority::High)),
        SortMode::Newest,
    );

    // Every High goal strictly before every non-High goal, Newest inside
    // each block.
    assert_eq!(
        groups[0].goals.iter().map(|g| g.id.as_str()).collect::<Vec<_>>(),
        vec!["high-new", "high-old", "low-new", "low-old"],
    );
}

#[test]
fn status_filter_matches_on_the_completed_flag() {
    let active = goal("a", "Health");
    let filter = GoalFilter::Status(StatusFilter::Active);
    assert!(filter.matches(&active));
    assert!(!GoalFilter::Status(StatusFilter::Completed).matches(&active));
}

#[test]
fn deadline_sort_puts_undated_goals_last() {
    let t = base_time();
    let mut soon = goal("soon", "Health");
    soon.deadline = Some(t + Duration::days(2));
    let mut later = goal("later", "Health");
    later.deadline = Some(t + Duration::days(9));
    let undated = goal("undated", "Health");

    let groups = group_active_goals(
        &[undated, later, soon],
        &areas(&["Health"]),
        "",
        None,
        SortMode::Deadline,
    );
    assert_eq!(
        groups[0].goals.iter().map(|g| g.id.as_str()).collect::<Vec<_>>(),
        vec!["soon", "later", "undated"],
    );
}

#[test]
fn newest_sort_orders_by_creation_descending() {
    let t = base_time();
    let mut old = goal("old", "Health");
    old.created_at = t - Duration::days(5);
    let mut new = goal("new", "Health");
    new.created_at = t;

    let groups = group_active_goals(
        &[old, new],
        &areas(&["Health"]),
        "",
        None,
        SortMode::Newest,
    );
    assert_eq!(groups[0].goals[0].id, "new");
}

#[test]
fn priority_sort_is_descending_with_stable_ties() {
    let mut low = goal("low", "Health");
    low.priority = Priority::Low;
    let mut medium_a = goal("medium-a", "Health");
    medium_a.priority = Priority::Medium;
    let mut high = goal("high", "Health");
    high.priority = Priority::High;
    let mut medium_b = goal("medium-b", "Health");
    medium_b.priority = Priority::Medium;

    let groups = group_active_goals(
        &[low, medium_a, high, medium_b],
        &areas(&["Health"]),
        "",
        None,
        SortMode::Priority,
    );
    assert_eq!(
        groups[0].goals.iter().map(|g| g.id.as_str()).collect::<Vec<_>>(),
        vec!["high", "medium-a", "medium-b", "low"], // ties keep input order
    );
}

#[test]
fn difficulty_sort_is_descending_with_stable_ties() {
    let mut easy = goal("easy", "Health");
    easy.level = Difficulty::Easy;
    let mut medium_a = goal("medium-a", "Health");
    medium_a.level = Difficulty::Medium;
    let mut hard = goal("hard", "Health");
    hard.level = Difficulty::Hard;
    let mut medium_b = goal("medium-b", "Health");
    medium_b.level = Difficulty::Medium;

    let groups = group_active_goals(
        &[easy, medium_a, hard, medium_b],
        &areas(&["Health"]),
        "",
        None,
        SortMode::Difficulty,
    );
    assert_eq!(
        groups[0].goals.iter().map(|g| g.id.as_str()).collect::<Vec<_>>(),
        vec!["hard", "medium-a", "medium-b", "easy"],
    );
}

#[test]
fn archived_view_sorts_by_completion_time_descending() {
    let t = base_time();

    let mut first_done = goal("first", "Health");
    first_done.archived = true;
    first_done.completed = true;
    first_done.completed_at = Some(t - Duration::days(5));

    let mut last_done = goal("last", "Health");
    last_done.archived = true;
    last_done.completed = true;
    last_done.completed_at = Some(t - Duration::days(1));

    let mut shelved = goal("shelved", "Health"); // archived without completing
    shelved.archived = true;

    let active = goal("active", "Health");

    let archived = archived_goals(&[shelved, first_done, active, last_done]);
    assert_eq!(
        archived.iter().map(|g| g.id.as_str()).collect::<Vec<_>>(),
        vec!["last", "first", "shelved"],
    );
}
