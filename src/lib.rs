pub mod db;

pub mod advisory;
pub mod context;
pub mod errors;
pub mod goals;
pub mod notifications;
pub mod profile;
pub mod schema;
pub mod settings;
pub mod store;
pub mod views;

pub use context::AppContext;
pub use errors::{Error, Result};
