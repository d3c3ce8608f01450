use crate::actions::Action;
use crate::middleware::{CheckerMiddleware, LoggingMiddleware};
use crate::notifier::Notifier;
use crate::reducers::app_reducer::app_reducer;
use crate::state::AppState;
use goals_todos_config::AppConfig;
use mini_redux::{Dispatchable, Store, ThunkMiddleware};
use std::sync::Arc;

/// The application store
pub type AppStore = Store<AppState, Action>;

/// Anything the application store accepts: a plain action or a thunk
pub type AppDispatchable = Dispatchable<AppState, Action>;

/// Build the application store
///
/// Middleware order matters: thunks are unwrapped first so the checker and
/// the logger only ever see plain actions, and the checker runs before the
/// logger so rejected actions are never logged.
pub fn build_store(
    config: &AppConfig,
    notifier: Arc<dyn Notifier>,
    logging: Arc<LoggingMiddleware>,
) -> AppStore {
    Store::builder(app_reducer())
        .add_middleware(ThunkMiddleware)
        .add_middleware(CheckerMiddleware::from_config(config, notifier))
        .add_middleware(logging)
        .build()
}
