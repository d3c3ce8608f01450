//! Todos Reducer

use crate::actions::{Action, TodoAction};
use goals_todos_api::Todo;
use mini_redux::{pure, Reducer};

/// Slice reducer for the todo list, starting empty
pub fn reducer() -> impl Reducer<Vec<Todo>, Action> {
    pure(Vec::new, |todos: &Vec<Todo>, action: &Action| {
        reduce_todos(todos, action)
    })
}

pub fn reduce_todos(todos: &[Todo], action: &Action) -> Vec<Todo> {
    match action {
        Action::Todo(TodoAction::Add(todo)) => {
            let mut next = todos.to_vec();
            next.push(todo.clone());
            next
        }
        Action::Todo(TodoAction::Remove(id)) => todos
            .iter()
            .filter(|todo| &todo.id != id)
            .cloned()
            .collect(),
        Action::Todo(TodoAction::Toggle(id)) => todos
            .iter()
            .map(|todo| {
                if &todo.id == id {
                    todo.toggled()
                } else {
                    todo.clone()
                }
            })
            .collect(),
        Action::ReceiveData { todos: received, .. } => received.clone(),
        _ => todos.to_vec(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actions::GoalAction;
    use goals_todos_api::Goal;
    use pretty_assertions::assert_eq;

    fn milk() -> Todo {
        Todo::new("1", "milk")
    }

    #[test]
    fn test_add_appends() {
        let todos = reduce_todos(&[], &Action::Todo(TodoAction::Add(milk())));
        assert_eq!(todos, vec![milk()]);
    }

    #[test]
    fn test_remove_drops_matching_id_only() {
        let eggs = Todo::new("2", "eggs");
        let todos = reduce_todos(
            &[milk(), eggs.clone()],
            &Action::Todo(TodoAction::Remove("1".to_string())),
        );
        assert_eq!(todos, vec![eggs]);
    }

    #[test]
    fn test_toggle_flips_matching_todo() {
        let todos = reduce_todos(&[milk()], &Action::Todo(TodoAction::Toggle("1".to_string())));
        assert_eq!(
            todos,
            vec![Todo {
                complete: true,
                ..milk()
            }]
        );
    }

    #[test]
    fn test_toggle_unknown_id_is_noop() {
        let todos = reduce_todos(&[milk()], &Action::Todo(TodoAction::Toggle("9".to_string())));
        assert_eq!(todos, vec![milk()]);
    }

    #[test]
    fn test_receive_data_replaces_list() {
        let fresh = vec![Todo::new("a", "Walk the dog")];
        let todos = reduce_todos(
            &[milk()],
            &Action::ReceiveData {
                todos: fresh.clone(),
                goals: vec![],
            },
        );
        assert_eq!(todos, fresh);
    }

    #[test]
    fn test_goal_actions_pass_through() {
        let todos = reduce_todos(
            &[milk()],
            &Action::Goal(GoalAction::Add(Goal::new("g", "Learn Redux"))),
        );
        assert_eq!(todos, vec![milk()]);
    }
}
