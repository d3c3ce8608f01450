use super::{dispatch_from_task, ThunkContext};
use crate::actions::{Action, GoalAction};
use crate::store::{AppDispatchable, AppStore};
use goals_todos_api::{generate_id, Goal};
use mini_redux::{Dispatchable, Outcome};

/// Optimistically add a goal, then save it with the service
///
/// Same contract as [`handle_add_todo`](super::handle_add_todo).
///
/// # Panics
///
/// Running the returned thunk outside a Tokio runtime panics, as the service
/// call is spawned onto the current runtime.
pub fn handle_add_goal<F, R>(
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
        let optimistic = Goal::new(generate_id(), name.clone());
        let outcome = store.dispatch(Action::Goal(GoalAction::Add(optimistic.clone())))?;
        if outcome.is_rejected() {
            return Ok(outcome);
        }
        on_optimistic();

        let handle = tokio::spawn(async move {
            match ctx.api.save_goal(&name).await {
                Ok(goal) => {
                    dispatch_from_task(&store, Action::Goal(GoalAction::Remove(optimistic.id)));
                    dispatch_from_task(&store, Action::Goal(GoalAction::Add(goal)));
                }
                Err(e) => {
                    log::error!("Failed to save goal {:?}: {:#}", name, e);
                    ctx.notify_failure();
                    dispatch_from_task(&store, Action::Goal(GoalAction::Remove(optimistic.id)));
                    on_revert();
                }
            }
        });
        Ok(Outcome::Spawned(handle))
    })
}

/// Optimistically remove a goal, then delete it on the service
///
/// On failure the goal is added back.
///
/// # Panics
///
/// Panics outside a Tokio runtime, like [`handle_add_goal`].
pub fn handle_remove_goal(ctx: &ThunkContext, goal: Goal) -> AppDispatchable {
    let ctx = ctx.clone();
    Dispatchable::thunk(move |store: AppStore| {
        store.dispatch(Action::Goal(GoalAction::Remove(goal.id.clone())))?;

        let handle = tokio::spawn(async move {
            if let Err(e) = ctx.api.delete_goal(&goal.id).await {
                log::error!("Failed to delete goal {}: {:#}", goal.id, e);
                ctx.notify_failure();
                dispatch_from_task(&store, Action::Goal(GoalAction::Add(goal)));
            }
        });
        Ok(Outcome::Spawned(handle))
    })
}
