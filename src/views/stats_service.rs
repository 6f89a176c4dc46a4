use crate::goals::{Difficulty, Goal, Priority};
use crate::views::views_model::{CountBucket, GoalStats};

/// Straight tallies over whatever goal slice the caller passes. The
/// analytics summary feeds the full collection so completed goals (always
/// archived) show up in the completion rate.
pub fn compute_stats(goals: &[Goal]) -> GoalStats {
    let total = goals.len();
    let completed = goals.iter().filter(|g| g.completed).count();
    let active = total - completed;

    let completion_rate = if total == 0 {
        0
    } else {
        (completed as f64 / total as f64 * 100.0).round() as u8
    };

    // Area buckets keep first-appearance order; zero-count areas never
    // show up since only tagged goals are counted.
    let mut by_area: Vec<CountBucket> = Vec::new();
    for goal in goals {
        match by_area.iter_mut().find(|b| b.label == goal.area) {
            Some(bucket) => bucket.count += 1,
            None => by_area.push(CountBucket {
                label: goal.area.clone(),
                count: 1,
            }),
        }
    }

    let by_difficulty = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard]
        .iter()
        .map(|level| CountBucket {
            label: level.as_str().to_string(),
            count: goals.iter().filter(|g| g.level == *level).count(),
        })
        .collect();

    let by_priority = [Priority::Low, Priority::Medium, Priority::High]
        .iter()
        .map(|priority| CountBucket {
            label: priority.as_str().to_string(),
            count: goals.iter().filter(|g| g.priority == *priority).count(),
        })
        .collect();

    let by_status = vec![
        CountBucket {
            label: "Completed".to_string(),
            count: completed,
        },
        CountBucket {
            label: "Active".to_string(),
            count: active,
        },
    ];

    GoalStats {
        total,
        completed,
        active,
        completion_rate,
        by_area,
        by_difficulty,
        by_priority,
        by_status,
    }
}
