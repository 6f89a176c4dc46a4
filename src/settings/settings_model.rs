use serde::{Deserialize, Serialize};

/// Cosmetic UI state. Not part of the core contract; kept best-effort.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UiPreferences {
    pub view_mode: String,
    pub collapsed: bool,
    #[serde(default)]
    pub pinned_widgets: Vec<String>,
    #[serde(default)]
    pub widget_order: Vec<String>,
}

impl Default for UiPreferences {
    fn default() -> Self {
        UiPreferences {
            view_mode: "grid".to_string(),
            collapsed: false,
            pinned_widgets: Vec::new(),
            widget_order: Vec::new(),
        }
    }
}
