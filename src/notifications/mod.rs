pub mod notifications_model;
pub mod notifications_service;

pub use notifications_model::{AppNotification, NotificationKind};
pub use notifications_service::NotificationService;
