pub mod settings_model;
pub mod settings_service;

pub use settings_model::UiPreferences;
pub use settings_service::SettingsService;
