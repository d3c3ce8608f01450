//! Actions module
//!
//! Actions are tagged by the slice of state they target:
//! - `Todo` / `Goal`: list-specific changes
//! - `ReceiveData`: replaces both lists with what the service returned

pub mod goal;
pub mod todo;

pub use goal::GoalAction;
pub use todo::TodoAction;

use goals_todos_api::{Goal, Todo};

/// Root action enum - tagged by slice
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Todo list actions
    Todo(TodoAction),
    /// Goal list actions
    Goal(GoalAction),
    /// Initial data arrived from the service
    ReceiveData { todos: Vec<Todo>, goals: Vec<Goal> },
}

impl Action {
    /// Short type tag, used when logging
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Todo(TodoAction::Add(_)) => "ADD_TODO",
            Self::Todo(TodoAction::Remove(_)) => "REMOVE_TODO",
            Self::Todo(TodoAction::Toggle(_)) => "TOGGLE_TODO",
            Self::Goal(GoalAction::Add(_)) => "ADD_GOAL",
            Self::Goal(GoalAction::Remove(_)) => "REMOVE_GOAL",
            Self::ReceiveData { .. } => "RECEIVE_DATA",
        }
    }
}
