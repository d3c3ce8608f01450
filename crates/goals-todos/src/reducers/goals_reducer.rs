//! Goals Reducer

use crate::actions::{Action, GoalAction};
use goals_todos_api::Goal;
use mini_redux::{pure, Reducer};

/// Slice reducer for the goal list, starting empty
pub fn reducer() -> impl Reducer<Vec<Goal>, Action> {
    pure(Vec::new, |goals: &Vec<Goal>, action: &Action| {
        reduce_goals(goals, action)
    })
}

pub fn reduce_goals(goals: &[Goal], action: &Action) -> Vec<Goal> {
    match action {
        Action::Goal(GoalAction::Add(goal)) => {
            let mut next = goals.to_vec();
            next.push(goal.clone());
            next
        }
        Action::Goal(GoalAction::Remove(id)) => goals
            .iter()
            .filter(|goal| &goal.id != id)
            .cloned()
            .collect(),
        Action::ReceiveData { goals: received, .. } => received.clone(),
        _ => goals.to_vec(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actions::TodoAction;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_add_and_remove() {
        let redux = Goal::new("g1", "Learn Redux");
        let books = Goal::new("g2", "Read 50 books this year");

        let goals = reduce_goals(&[redux.clone()], &Action::Goal(GoalAction::Add(books.clone())));
        assert_eq!(goals, vec![redux.clone(), books.clone()]);

        let goals = reduce_goals(&goals, &Action::Goal(GoalAction::Remove("g1".to_string())));
        assert_eq!(goals, vec![books]);
    }

    #[test]
    fn test_todo_actions_pass_through() {
        let redux = Goal::new("g1", "Learn Redux");
        let goals = reduce_goals(
            &[redux.clone()],
            &Action::Todo(TodoAction::Remove("g1".to_string())),
        );
        assert_eq!(goals, vec![redux]);
    }
}
