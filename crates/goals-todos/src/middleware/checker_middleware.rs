//! Checker Middleware
//!
//! Rejects todos and goals whose name contains the forbidden term
//! (case-insensitive). A rejected action never reaches the middleware after
//! this one or the reducer; the user gets a notice instead.

use crate::actions::{Action, GoalAction, TodoAction};
use crate::notifier::Notifier;
use crate::state::AppState;
use goals_todos_config::AppConfig;
use mini_redux::{reject, DispatchResult, Dispatchable, Middleware, Next, Store};
use std::sync::Arc;

/// Middleware that vetoes items with forbidden names
pub struct CheckerMiddleware {
    /// Stored lowercased
    forbidden_term: String,
    message: String,
    notifier: Arc<dyn Notifier>,
}

impl CheckerMiddleware {
    pub fn new(
        forbidden_term: impl Into<String>,
        message: impl Into<String>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        Self {
            forbidden_term: forbidden_term.into().to_lowercase(),
            message: message.into(),
            notifier,
        }
    }

    pub fn from_config(config: &AppConfig, notifier: Arc<dyn Notifier>) -> Self {
        Self::new(&config.forbidden_term, &config.rejection_message, notifier)
    }

    fn is_forbidden(&self, name: &str) -> bool {
        !self.forbidden_term.is_empty() && name.to_lowercase().contains(&self.forbidden_term)
    }

    /// Name of the item an action proposes to add, if any
    fn proposed_name(action: &Action) -> Option<&str> {
        match action {
            Action::Todo(TodoAction::Add(todo)) => Some(&todo.name),
            Action::Goal(GoalAction::Add(goal)) => Some(&goal.name),
            _ => None,
        }
    }
}

impl Middleware<AppState, Action> for CheckerMiddleware {
    fn handle(
        &self,
        _store: &Store<AppState, Action>,
        next: Next<'_, AppState, Action>,
        action: Dispatchable<AppState, Action>,
    ) -> DispatchResult<Action> {
        if let Some(name) = action.as_action().and_then(Self::proposed_name) {
            if self.is_forbidden(name) {
                log::info!("CheckerMiddleware: rejecting {:?}", name);
                self.notifier.alert(&self.message);
                return reject(self.message.clone());
            }
        }

        next.run(action)
    }
}
