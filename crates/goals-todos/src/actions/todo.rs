use goals_todos_api::Todo;

/// Todo list actions
#[derive(Debug, Clone, PartialEq)]
pub enum TodoAction {
    /// Append a todo
    Add(Todo),
    /// Remove the todo with this id
    Remove(String),
    /// Flip completion of the todo with this id
    Toggle(String),
}
