//! Logging Middleware
//!
//! Logs every plain action that reaches it together with the state that
//! resulted from it. The most recent entries are also kept in memory for the
//! `history` command.

use crate::actions::Action;
use crate::state::AppState;
use mini_redux::{DispatchResult, Dispatchable, Middleware, Next, Store};
use parking_lot::Mutex;
use std::collections::VecDeque;

/// Number of entries kept for `history`
const HISTORY_CAPACITY: usize = 100;

/// One logged dispatch
#[derive(Debug, Clone, PartialEq)]
pub struct LogEntry {
    pub kind: &'static str,
    pub action: String,
    pub state: String,
}

/// LoggingMiddleware - logs all actions passing through
pub struct LoggingMiddleware {
    history: Mutex<VecDeque<LogEntry>>,
}

impl LoggingMiddleware {
    pub fn new() -> Self {
        Self {
            history: Mutex::new(VecDeque::with_capacity(HISTORY_CAPACITY)),
        }
    }

    /// Logged entries, oldest first
    pub fn history(&self) -> Vec<LogEntry> {
        self.history.lock().iter().cloned().collect()
    }

    fn record(&self, entry: LogEntry) {
        let mut history = self.history.lock();
        if history.len() == HISTORY_CAPACITY {
            history.pop_front();
        }
        history.push_back(entry);
    }
}

impl Default for LoggingMiddleware {
    fn default() -> Self {
        Self::new()
    }
}

impl Middleware<AppState, Action> for LoggingMiddleware {
    fn handle(
        &self,
        store: &Store<AppState, Action>,
        next: Next<'_, AppState, Action>,
        action: Dispatchable<AppState, Action>,
    ) -> DispatchResult<Action> {
        let Some(plain) = action.as_action() else {
            return next.run(action);
        };
        let kind = plain.kind();
        let described = format!("{:?}", plain);
        log::debug!("{} - the action: {}", kind, described);

        // Read the state under the commit gate so a continuation committing
        // on another worker can't be attributed to this action
        let (result, state) = store.atomically(|| {
            let result = next.run(action);
            let state = result.is_ok().then(|| format!("{:?}", store.state()));
            (result, state)
        });

        if let Some(state) = state {
            log::debug!("{} - the new state: {}", kind, state);
            self.record(LogEntry {
                kind,
                action: described,
                state,
            });
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actions::TodoAction;
    use crate::reducers::app_reducer::app_reducer;
    use goals_todos_api::Todo;
    use pretty_assertions::assert_eq;
    use std::sync::Arc;

    #[test]
    fn test_records_action_and_resulting_state() {
        let logging = Arc::new(LoggingMiddleware::new());
        let store = Store::builder(app_reducer())
            .add_middleware(Arc::clone(&logging))
            .build();

        let outcome = store
            .dispatch(Action::Todo(TodoAction::Add(Todo::new("1", "milk"))))
            .unwrap();
        assert!(outcome.is_reduced());

        let history = logging.history();
        assert_eq!(history.len(), 1);
        assert_eq!(history[0].kind, "ADD_TODO");
        assert!(history[0].action.contains("milk"));
        assert_eq!(history[0].state, format!("{:?}", store.state()));
    }

    #[test]
    fn test_returns_downstream_result_unchanged() {
        let logging = Arc::new(LoggingMiddleware::new());
        let store = Store::builder(app_reducer())
            .add_middleware(Arc::clone(&logging))
            .build();

        match store
            .dispatch(Action::Todo(TodoAction::Toggle("9".to_string())))
            .unwrap()
        {
            mini_redux::Outcome::Reduced(action) => {
                assert_eq!(action, Action::Todo(TodoAction::Toggle("9".to_string())))
            }
            other => panic!("unexpected outcome: {:?}", other),
        }
    }

    #[test]
    fn test_history_is_bounded() {
        let logging = Arc::new(LoggingMiddleware::new());
        let store = Store::builder(app_reducer())
            .add_middleware(Arc::clone(&logging))
            .build();

        for n in 0..(HISTORY_CAPACITY + 5) {
            store
                .dispatch(Action::Todo(TodoAction::Remove(n.to_string())))
                .unwrap();
        }

        let history = logging.history();
        assert_eq!(history.len(), HISTORY_CAPACITY);
        assert!(history[0].action.contains("\"5\""));
    }

    #[test]
    fn test_concurrent_dispatches_log_their_own_state() {
        let logging = Arc::new(LoggingMiddleware::new());
        let store = Store::builder(app_reducer())
            .add_middleware(Arc::clone(&logging))
            .build();

        let workers: Vec<_> = (0..2)
            .map(|worker| {
                let store = store.clone();
                std::thread::spawn(move || {
                    for n in 0..40 {
                        let id = format!("{}-{}", worker, n);
                        store
                            .dispatch(Action::Todo(TodoAction::Add(Todo::new(id, "milk"))))
                            .unwrap();
                    }
                })
            })
            .collect();
        for worker in workers {
            worker.join().unwrap();
        }

        // Every add grows the list by one, so each entry's state is unique
        // and ends with the todo its own action added
        let history = logging.history();
        assert_eq!(history.len(), 80);
        let states: std::collections::HashSet<_> =
            history.iter().map(|entry| entry.state.as_str()).collect();
        assert_eq!(states.len(), 80);
        for entry in &history {
            let id = entry
                .action
                .split('"')
                .nth(1)
                .unwrap()
                .to_string();
            let last = entry.state.rfind("id: \"").unwrap();
            assert!(entry.state[last..].starts_with(&format!("id: \"{}\"", id)));
        }
    }
}
