//! Asynchronous action creators
//!
//! Every `handle_*` creator returns a thunk that applies its change
//! optimistically, then confirms it with the service in a spawned task:
//!
//! ```text
//! dispatch(optimistic) ──► service call ──┬─ ok  ──► reconcile (if needed)
//!                                         └─ err ──► notice + compensate
//! ```
//!
//! The thunk's outcome is [`Outcome::Spawned`](mini_redux::Outcome::Spawned),
//! so callers can await settlement. Service errors never escape the task.

pub mod goals;
pub mod shared;
pub mod todos;

pub use goals::{handle_add_goal, handle_remove_goal};
pub use shared::handle_receive_data;
pub use todos::{handle_add_todo, handle_remove_todo, handle_toggle_todo};

use crate::actions::Action;
use crate::notifier::Notifier;
use crate::store::AppStore;
use goals_todos_api::GoalsTodosApi;
use std::sync::Arc;

/// Collaborators shared by all action creators
#[derive(Clone)]
pub struct ThunkContext {
    pub api: Arc<dyn GoalsTodosApi>,
    pub notifier: Arc<dyn Notifier>,
    pub failure_message: String,
}

impl ThunkContext {
    pub fn new(
        api: Arc<dyn GoalsTodosApi>,
        notifier: Arc<dyn Notifier>,
        failure_message: impl Into<String>,
    ) -> Self {
        Self {
            api,
            notifier,
            failure_message: failure_message.into(),
        }
    }

    fn notify_failure(&self) {
        self.notifier.alert(&self.failure_message);
    }
}

/// Dispatch from a spawned continuation, where there is no caller to return errors to
fn dispatch_from_task(store: &AppStore, action: Action) {
    let kind = action.kind();
    if let Err(e) = store.dispatch(action) {
        log::error!("Follow-up {} dispatch failed: {}", kind, e);
    }
}
