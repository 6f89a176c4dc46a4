pub mod profile_model;
pub mod profile_service;

pub use profile_model::{UserProfile, BUILT_IN_AREAS};
pub use profile_service::ProfileService;
