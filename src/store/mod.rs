pub mod store_model;
pub mod store_repository;

pub use store_model::StoreEntry;
pub use store_repository::{MemoryStore, StoreRepository, StoreRepositoryTrait};

/// Well-known store keys. Callers own the serialization of each blob.
pub mod keys {
    pub const GOALS: &str = "goals";
    pub const PROFILE: &str = "profile";
    pub const AREA_ORDER: &str = "area_order";
    pub const UI_PREFERENCES: &str = "ui_preferences";
}
