pub mod advisory_client;
pub mod advisory_errors;
pub mod advisory_model;
pub mod advisory_traits;
pub mod fallbacks;

pub use advisory_client::{FakeAdvisoryClient, HttpAdvisoryClient};
pub use advisory_errors::{AdvisoryError, Result};
pub use advisory_model::{AdvisoryConfig, BreakdownItem};
pub use advisory_traits::AdvisoryClientTrait;
