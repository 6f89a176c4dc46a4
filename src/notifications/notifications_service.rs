use chrono::{DateTime, Duration, Utc};
use log::warn;
use std::sync::{Arc, RwLock};

use crate::advisory::AdvisoryClientTrait;
use crate::goals::Goal;
use crate::notifications::notifications_model::{AppNotification, NotificationKind};

/// Deadlines this close (in fractional days) raise an alert
const DEADLINE_WINDOW_DAYS: f64 = 3.0;

/// A goal untouched for longer than this gets the neglect nudge
const NEGLECT_THRESHOLD_DAYS: i64 = 4;

/// Scans the goal collection for near deadlines and neglected goals.
/// Holds the current (ephemeral) notification list; scheduling of scans is
/// the embedding application's concern.
pub struct NotificationService {
    advisory: Arc<dyn AdvisoryClientTrait>,
    notifications: RwLock<Vec<AppNotification>>,
}

impl NotificationService {
    pub fn new(advisory: Arc<dyn AdvisoryClientTrait>) -> Self {
        NotificationService {
            advisory,
            notifications: RwLock::new(Vec::new()),
        }
    }

    /// Runs one scan over the active, non-completed goals at `now`.
    ///
    /// Returns only the genuinely new notifications (the toast-worthy set):
    /// candidates whose id already exists in the current list are dropped,
    /// so a second scan with the same pending goals is a no-op. At most one
    /// neglect nudge is emitted per scan, for the single most long-untouched
    /// goal; an advisory failure silently skips that nudge.
    pub async fn scan(&self, goals: &[Goal], now: DateTime<Utc>) -> Vec<AppNotification> {
        let qualifying: Vec<&Goal> = goals
            .iter()
            .filter(|g| !g.archived && !g.completed)
            .collect();

        let known_ids: Vec<String> = {
            let notifications = self.notifications.read().unwrap();
            notifications.iter().map(|n| n.id.clone()).collect()
        };

        let mut candidates: Vec<AppNotification> = Vec::new();

        for goal in &qualifying {
            if let Some(deadline) = goal.deadline {
                let days_left = (deadline - now).num_seconds() as f64 / 86_400.0;
                if days_left > 0.0 && days_left <= DEADLINE_WINDOW_DAYS {
                    candidates.push(AppNotification {
                        id: AppNotification::deadline_id(&goal.id),
                        kind: NotificationKind::Deadline,
                        title: "Deadline approaching".to_string(),
                        message: format!(
                            "\"{}\" is due in {} day(s)",
                            goal.title,
                            days_left.ceil() as i64
                        ),
                        created_at: now,
                    });
                }
            }
        }

        if let Some(neglected) = qualifying.iter().min_by_key(|g| g.last_interaction_at) {
            let nudge_id = AppNotification::nudge_id(&neglected.id);
            // Do not pay for nudge text the dedup pass would drop anyway
            if now - neglected.last_interaction_at > Duration::days(NEGLECT_THRESHOLD_DAYS)
                && !known_ids.contains(&nudge_id)
            {
                match self
                    .advisory
                    .friendly_nudge(&neglected.title, &neglected.area)
                    .await
                {
                    Ok(message) => candidates.push(AppNotification {
                        id: nudge_id,
                        kind: NotificationKind::Nudge,
                        title: "Time to check in".to_string(),
                        message,
                        created_at: now,
                    }),
                    Err(e) => {
                        // No retry within the scan; the next scan tries again.
                        warn!(
                            "Skipping nudge for '{}', advisory call failed: {}",
                            neglected.title, e
                        );
                    }
                }
            }
        }

        let mut notifications = self.notifications.write().unwrap();
        let fresh: Vec<AppNotification> = candidates
            .into_iter()
            .filter(|c| !notifications.iter().any(|n| n.id == c.id))
            .collect();
        notifications.extend(fresh.iter().cloned());
        fresh
    }

    pub fn current(&self) -> Vec<AppNotification> {
        self.notifications.read().unwrap().clone()
    }

    pub fn dismiss(&self, notification_id: &str) {
        self.notifications
            .write()
            .unwrap()
            .retain(|n| n.id != notification_id);
    }

    pub fn clear(&self) {
        self.notifications.write().unwrap().clear();
    }
}
