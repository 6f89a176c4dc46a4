//! Pre-written copy used whenever the advisory service is unreachable or
//! returns something unusable. Worst case is always "show a generic
//! message and continue".

pub fn greeting(name: &str) -> String {
    if name.trim().is_empty() {
        "Welcome back! Pick one goal and give it five minutes today.".to_string()
    } else {
        format!(
            "Welcome back, {}! Pick one goal and give it five minutes today.",
            name
        )
    }
}

pub fn nudge(goal_title: &str) -> String {
    format!(
        "\"{}\" has been waiting for you. Even a small step counts.",
        goal_title
    )
}

pub fn description(title: &str) -> String {
    format!("Work steadily toward \"{}\" and track each step here.", title)
}
