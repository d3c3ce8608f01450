use crate::actions::Action;
use crate::reducers::{goals_reducer, loading_reducer, todos_reducer};
use crate::state::AppState;
use mini_redux::{combine_reducers, Reducer};

/// Root reducer - each slice of [`AppState`] is reduced by its own reducer
pub fn app_reducer() -> impl Reducer<AppState, Action> {
    combine_reducers!(AppState: Action {
        todos: todos_reducer::reducer(),
        goals: goals_reducer::reducer(),
        loading: loading_reducer::reducer(),
    })
}
