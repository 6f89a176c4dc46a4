use log::warn;
use std::sync::Arc;

use crate::errors::Result;
use crate::settings::settings_model::UiPreferences;
use crate::store::{keys, StoreRepositoryTrait};

pub struct SettingsService {
    store: Arc<dyn StoreRepositoryTrait>,
}

impl SettingsService {
    pub fn new(store: Arc<dyn StoreRepositoryTrait>) -> Self {
        SettingsService { store }
    }

    pub fn get_preferences(&self) -> UiPreferences {
        match self.store.get(keys::UI_PREFERENCES) {
            Ok(Some(raw)) => serde_json::from_str(&raw).unwrap_or_else(|e| {
                warn!("Ignoring malformed UI preferences blob: {}", e);
                UiPreferences::default()
            }),
            Ok(None) => UiPreferences::default(),
            Err(e) => {
                warn!("Failed to read UI preferences from store: {}", e);
                UiPreferences::default()
            }
        }
    }

    pub fn update_preferences(&self, preferences: &UiPreferences) -> Result<()> {
        let raw = serde_json::to_string(preferences)?;
        self.store.set(keys::UI_PREFERENCES, &raw)
    }
}
