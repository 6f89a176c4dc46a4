use serde::{Deserialize, Serialize};

/// Built-in life areas offered at onboarding
pub const BUILT_IN_AREAS: [&str; 6] = [
    "Health",
    "Career",
    "Finance",
    "Relationships",
    "Learning",
    "Recreation",
];

/// The single user of the app. Created once at onboarding; life areas are
/// appended or archived afterwards, never purged, so goals tagged with an
/// archived area keep their label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub name: String,
    /// Active life areas, in display order
    pub areas: Vec<String>,
    /// Areas removed from the active set
    #[serde(default)]
    pub archived_areas: Vec<String>,
    #[serde(default)]
    pub onboarded: bool,
}

impl Default for UserProfile {
    fn default() -> Self {
        UserProfile {
            name: String::new(),
            areas: BUILT_IN_AREAS.iter().map(|a| a.to_string()).collect(),
            archived_areas: Vec::new(),
            onboarded: false,
        }
    }
}
