use log::warn;
use std::sync::Arc;

use crate::errors::{Result, ValidationError};
use crate::profile::profile_model::UserProfile;
use crate::store::{keys, StoreRepositoryTrait};

/// Owns the user profile and the life-area ordering blob
pub struct ProfileService {
    store: Arc<dyn StoreRepositoryTrait>,
}

impl ProfileService {
    pub fn new(store: Arc<dyn StoreRepositoryTrait>) -> Self {
        ProfileService { store }
    }

    /// Loads the profile; a missing or malformed blob yields the default
    /// profile rather than an error.
    pub fn load(&self) -> UserProfile {
        match self.store.get(keys::PROFILE) {
            Ok(Some(raw)) => serde_json::from_str(&raw).unwrap_or_else(|e| {
                warn!("Ignoring malformed profile blob: {}", e);
                UserProfile::default()
            }),
            Ok(None) => UserProfile::default(),
            Err(e) => {
                warn!("Failed to read profile from store: {}", e);
                UserProfile::default()
            }
        }
    }

    pub fn save(&self, profile: &UserProfile) -> Result<()> {
        let raw = serde_json::to_string(profile)?;
        self.store.set(keys::PROFILE, &raw)
    }

    pub fn complete_onboarding(&self, name: &str, areas: Vec<String>) -> Result<UserProfile> {
        if name.trim().is_empty() {
            return Err(ValidationError::MissingField("name".to_string()).into());
        }

        let mut profile = self.load();
        profile.name = name.trim().to_string();
        if !areas.is_empty() {
            profile.areas = areas;
        }
        profile.onboarded = true;

        self.save(&profile)?;
        self.set_area_order(profile.areas.clone())?;
        Ok(profile)
    }

    pub fn add_area(&self, label: &str) -> Result<UserProfile> {
        let label = label.trim();
        if label.is_empty() {
            return Err(ValidationError::InvalidInput(
                "Life area cannot be empty".to_string(),
            )
            .into());
        }

        let mut profile = self.load();
        if profile.areas.iter().any(|a| a == label) {
            return Err(ValidationError::InvalidInput(format!(
                "Life area '{}' already exists",
                label
            ))
            .into());
        }

        profile.areas.push(label.to_string());
        profile.archived_areas.retain(|a| a != label);
        self.save(&profile)?;

        let mut order = self.area_order();
        if !order.iter().any(|a| a == label) {
            order.push(label.to_string());
            self.set_area_order(order)?;
        }
        Ok(profile)
    }

    /// Removes an area from the active set. Goals tagged with it keep the
    /// stale label and drop out of the grouped view.
    pub fn archive_area(&self, label: &str) -> Result<UserProfile> {
        let mut profile = self.load();
        let before = profile.areas.len();
        profile.areas.retain(|a| a != label);
        if profile.areas.len() == before {
            return Err(ValidationError::InvalidInput(format!(
                "Life area '{}' is not active",
                label
            ))
            .into());
        }

        if !profile.archived_areas.iter().any(|a| a == label) {
            profile.archived_areas.push(label.to_string());
        }
        self.save(&profile)?;

        let mut order = self.area_order();
        order.retain(|a| a != label);
        self.set_area_order(order)?;
        Ok(profile)
    }

    /// Display order of the active areas. Falls back to the profile's own
    /// area list when the ordering blob is missing or malformed.
    pub fn area_order(&self) -> Vec<String> {
        match self.store.get(keys::AREA_ORDER) {
            Ok(Some(raw)) => serde_json::from_str(&raw).unwrap_or_else(|e| {
                warn!("Ignoring malformed area order blob: {}", e);
                self.load().areas
            }),
            Ok(None) => self.load().areas,
            Err(e) => {
                warn!("Failed to read area order from store: {}", e);
                self.load().areas
            }
        }
    }

    pub fn set_area_order(&self, order: Vec<String>) -> Result<()> {
        let raw = serde_json::to_string(&order)?;
        self.store.set(keys::AREA_ORDER, &raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;

    fn service() -> ProfileService {
        ProfileService::new(Arc::new(MemoryStore::new()))
    }

    #[test]
    fn missing_profile_defaults_to_built_in_areas() {
        let service = service();
        let profile = service.load();
        assert!(!profile.onboarded);
        assert!(profile.areas.contains(&"Health".to_string()));
    }

    #[test]
    fn malformed_profile_blob_is_ignored() {
        let store = Arc::new(MemoryStore::new());
        store.set(keys::PROFILE, "][").unwrap();

        let service = ProfileService::new(store);
        assert_eq!(service.load(), UserProfile::default());
    }

    #[test]
    fn onboarding_sets_name_areas_and_order() {
        let service = service();
        let profile = service
            .complete_onboarding("Ada", vec!["Health".to_string(), "Travel".to_string()])
            .unwrap();

        assert!(profile.onboarded);
        assert_eq!(profile.name, "Ada");
        assert_eq!(service.area_order(), vec!["Health", "Travel"]);
    }

    #[test]
    fn add_area_rejects_duplicates_and_blanks() {
        let service = service();
        service
            .complete_onboarding("Ada", vec!["Health".to_string()])
            .unwrap();

        assert!(service.add_area("Health").is_err());
        assert!(service.add_area("  ").is_err());

        let profile = service.add_area("Music").unwrap();
        assert!(profile.areas.contains(&"Music".to_string()));
        assert!(service.area_order().contains(&"Music".to_string()));
    }

    #[test]
    fn archived_area_leaves_the_active_set_but_is_remembered() {
        let service = service();
        service
            .complete_onboarding("Ada", vec!["Health".to_string(), "Travel".to_string()])
            .unwrap();

        let profile = service.archive_area("Travel").unwrap();
        assert_eq!(profile.areas, vec!["Health"]);
        assert_eq!(profile.archived_areas, vec!["Travel"]);
        assert_eq!(service.area_order(), vec!["Health"]);

        assert!(service.archive_area("Travel").is_err());
    }

    #[test]
    fn re_adding_an_archived_area_reactivates_it() {
        let service = service();
        service
            .complete_onboarding("Ada", vec!["Health".to_string(), "Travel".to_string()])
            .unwrap();
        service.archive_area("Travel").unwrap();

        let profile = service.add_area("Travel").unwrap();
        assert!(profile.areas.contains(&"Travel".to_string()));
        assert!(profile.archived_areas.is_empty());
    }
}
