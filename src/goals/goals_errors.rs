use thiserror::Error;

use crate::errors::ValidationError;

#[derive(Error, Debug)]
pub enum GoalError {
    #[error("Goal not found: {0}")]
    NotFound(String),

    #[error("Sub-task not found: {0}")]
    SubTaskNotFound(String),

    #[error("Validation failed: {0}")]
    Validation(#[from] ValidationError),

    #[error("Failed to persist goals: {0}")]
    Persist(String),
}

pub type Result<T> = std::result::Result<T, GoalError>;
