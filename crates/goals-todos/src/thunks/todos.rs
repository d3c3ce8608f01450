use super::{dispatch_from_task, ThunkContext};
use crate::actions::{Action, TodoAction};
use crate::store::{AppDispatchable, AppStore};
use goals_todos_api::{generate_id, Todo};
use mini_redux::{Dispatchable, Outcome};

/// Optimistically add a todo, then save it with the service
///
/// `on_optimistic` runs once the provisional todo is in the store (clear the
/// input). `on_revert` runs if the service fails (restore the input). If the
/// checker rejects the name, neither runs and the service is not called.
///
/// # Panics
///
/// Running the returned thunk outside a Tokio runtime panics, as the service
/// call is spawned onto the current runtime.
pub fn handle_add_todo<F, R>(
    ctx: &ThunkContext,
    name: impl Into<String>,
    on_optimistic: F,
    on_revert: R,
) -> AppDispatchable
where
    F: FnOnce() + Send + 'static,
    R: FnOnce() + Send + 'static,
{
    let ctx = ctx.clone();
    let name = name.into();
    Dispatchable::thunk(move |store: AppStore| {
        let optimistic = Todo::new(generate_id(), name.clone());
        let outcome = store.dispatch(Action::Todo(TodoAction::Add(optimistic.clone())))?;
        if outcome.is_rejected() {
            return Ok(outcome);
        }
        on_optimistic();

        let handle = tokio::spawn(async move {
            match ctx.api.save_todo(&name).await {
                Ok(todo) => {
                    // Swap the placeholder for the service's copy
                    dispatch_from_task(&store, Action::Todo(TodoAction::Remove(optimistic.id)));
                    dispatch_from_task(&store, Action::Todo(TodoAction::Add(todo)));
                }
                Err(e) => {
                    log::error!("Failed to save todo {:?}: {:#}", name, e);
                    ctx.notify_failure();
                    dispatch_from_task(&store, Action::Todo(TodoAction::Remove(optimistic.id)));
                    on_revert();
                }
            }
        });
        Ok(Outcome::Spawned(handle))
    })
}

/// Optimistically remove a todo, then delete it on the service
///
/// On failure the todo is added back.
///
/// # Panics
///
/// Panics outside a Tokio runtime, like every creator in this module.
pub fn handle_remove_todo(ctx: &ThunkContext, todo: Todo) -> AppDispatchable {
    let ctx = ctx.clone();
    Dispatchable::thunk(move |store: AppStore| {
        store.dispatch(Action::Todo(TodoAction::Remove(todo.id.clone())))?;

        let handle = tokio::spawn(async move {
            if let Err(e) = ctx.api.delete_todo(&todo.id).await {
                log::error!("Failed to delete todo {}: {:#}", todo.id, e);
                ctx.notify_failure();
                dispatch_from_task(&store, Action::Todo(TodoAction::Add(todo)));
            }
        });
        Ok(Outcome::Spawned(handle))
    })
}

/// Optimistically toggle a todo, then save the toggle on the service
///
/// On failure the todo is toggled back.
///
/// # Panics
///
/// Panics outside a Tokio runtime, like every creator in this module.
pub fn handle_toggle_todo(ctx: &ThunkContext, id: impl Into<String>) -> AppDispatchable {
    let ctx = ctx.clone();
    let id = id.into();
    Dispatchable::thunk(move |store: AppStore| {
        store.dispatch(Action::Todo(TodoAction::Toggle(id.clone())))?;

        let handle = tokio::spawn(async move {
            if let Err(e) = ctx.api.save_todo_toggle(&id).await {
                log::error!("Failed to toggle todo {}: {:#}", id, e);
                ctx.notify_failure();
                dispatch_from_task(&store, Action::Todo(TodoAction::Toggle(id)));
            }
        });
        Ok(Outcome::Spawned(handle))
    })
}
