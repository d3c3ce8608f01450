use goals_todos_api::{Goal, Todo};

/// Application state
///
/// Each field is owned by exactly one slice reducer, see
/// [`app_reducer`](crate::reducers::app_reducer::app_reducer).
#[derive(Debug, Clone, PartialEq)]
pub struct AppState {
    pub todos: Vec<Todo>,
    pub goals: Vec<Goal>,
    /// True until the first `ReceiveData`
    pub loading: bool,
}

impl AppState {
    /// Todo at a 1-based position, as shown in the view
    pub fn todo_at(&self, position: usize) -> Option<&Todo> {
        position.checked_sub(1).and_then(|idx| self.todos.get(idx))
    }

    /// Goal at a 1-based position, as shown in the view
    pub fn goal_at(&self, position: usize) -> Option<&Goal> {
        position.checked_sub(1).and_then(|idx| self.goals.get(idx))
    }
}
