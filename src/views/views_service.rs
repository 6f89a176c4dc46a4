use std::cmp::Ordering;
use std::collections::HashMap;

use crate::goals::Goal;
use crate::views::views_model::{AreaGroup, GoalFilter, SortMode};

/// Groups the active (non-archived) goals by life area and orders each
/// bucket with the two-phase comparator: an active filter partitions
/// matching goals to the front as a block, then the sort mode breaks ties
/// within each block.
///
/// Buckets follow `area_order`; areas with no matching goals are omitted,
/// and goals tagged with an area that is not in `area_order` are dropped
/// from this view (they still count in the scanner and the statistics).
pub fn group_active_goals(
    goals: &[Goal],
    area_order: &[String],
    query: &str,
    filter: Option<&GoalFilter>,
    sort_mode: SortMode,
) -> Vec<AreaGroup> {
    let query = query.trim().to_lowercase();

    let mut buckets: HashMap<&str, Vec<Goal>> = HashMap::new();
    for goal in goals {
        if goal.archived {
            continue;
        }
        if !query.is_empty() && !matches_query(goal, &query) {
            continue;
        }
        buckets.entry(goal.area.as_str()).or_default().push(goal.clone());
    }

    area_order
        .iter()
        .filter_map(|area| {
            let mut bucket = buckets.remove(area.as_str())?;
            sort_bucket(&mut bucket, filter, sort_mode);
            Some(AreaGroup {
                area: area.clone(),
                goals: bucket,
            })
        })
        .collect()
}

/// The archived view: every archived goal, most recently completed first.
/// Goals archived without completion sort after the completed ones, by
/// recency of interaction.
pub fn archived_goals(goals: &[Goal]) -> Vec<Goal> {
    let mut archived: Vec<Goal> = goals.iter().filter(|g| g.archived).cloned().collect();
    archived.sort_by(|a, b| match (a.completed_at, b.completed_at) {
        (Some(a_done), Some(b_done)) => b_done.cmp(&a_done),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => b.last_interaction_at.cmp(&a.last_interaction_at),
    });
    archived
}

fn matches_query(goal: &Goal, query: &str) -> bool {
    goal.title.to_lowercase().contains(query) || goal.description.to_lowercase().contains(query)
}

fn sort_bucket(bucket: &mut [Goal], filter: Option<&GoalFilter>, sort_mode: SortMode) {
    // Stable sort: full ties keep insertion order, and the filter partition
    // keeps the relative order of non-matching goals.
    bucket.sort_by(|a, b| {
        filter_rank(a, filter)
            .cmp(&filter_rank(b, filter))
            .then_with(|| compare_by_mode(a, b, sort_mode))
    });
}

fn filter_rank(goal: &Goal, filter: Option<&GoalFilter>) -> u8 {
    match filter {
        Some(f) if !f.matches(goal) => 1,
        _ => 0,
    }
}

fn compare_by_mode(a: &Goal, b: &Goal, sort_mode: SortMode) -> Ordering {
    match sort_mode {
        SortMode::Newest => b.created_at.cmp(&a.created_at),
        SortMode::Priority => b.priority.score().cmp(&a.priority.score()),
        SortMode::Difficulty => b.level.score().cmp(&a.level.score()),
        SortMode::Deadline => match (a.deadline, b.deadline) {
            (Some(a_due), Some(b_due)) => a_due.cmp(&b_due),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        },
        SortMode::Manual => a
            .completed
            .cmp(&b.completed)
            .then_with(|| b.pinned.cmp(&a.pinned))
            .then_with(|| a.order.cmp(&b.order)),
    }
}
