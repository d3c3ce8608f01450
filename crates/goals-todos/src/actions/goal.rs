use goals_todos_api::Goal;

/// Goal list actions
#[derive(Debug, Clone, PartialEq)]
pub enum GoalAction {
    /// Append a goal
    Add(Goal),
    /// Remove the goal with this id
    Remove(String),
}
