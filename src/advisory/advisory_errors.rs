use thiserror::Error;

/// Advisory failures are recoverable by design: callers fall back to a
/// pre-written message and never surface these as hard errors.
#[derive(Error, Debug)]
pub enum AdvisoryError {
    #[error("Advisory request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Advisory response could not be parsed: {0}")]
    Parse(String),

    #[error("Advisory client is not configured: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, AdvisoryError>;
