pub mod goals_errors;
pub mod goals_model;
pub mod goals_repository;
pub mod goals_service;
pub mod goals_traits;

pub use goals_errors::{GoalError, Result};
pub use goals_model::{Difficulty, Goal, GoalUpdate, NewGoal, NewSubTask, Priority, SubTask};
pub use goals_repository::GoalRepository;
pub use goals_service::GoalService;
pub use goals_traits::{GoalRepositoryTrait, GoalServiceTrait};

#[cfg(test)]
pub(crate) mod tests;
