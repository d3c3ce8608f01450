use super::{dispatch_from_task, ThunkContext};
use crate::actions::Action;
use crate::store::{AppDispatchable, AppStore};
use mini_redux::{Dispatchable, Outcome};

/// Fetch todos and goals concurrently and hand both to the store at once
///
/// There is nothing to compensate on failure; the user gets a notice and
/// the lists stay as they are.
///
/// # Panics
///
/// Running the returned thunk outside a Tokio runtime panics, as the fetch
/// is spawned onto the current runtime.
pub fn handle_receive_data(ctx: &ThunkContext) -> AppDispatchable {
    let ctx = ctx.clone();
    Dispatchable::thunk(move |store: AppStore| {
        let handle = tokio::spawn(async move {
            match tokio::try_join!(ctx.api.fetch_todos(), ctx.api.fetch_goals()) {
                Ok((todos, goals)) => {
                    log::info!("Received {} todos and {} goals", todos.len(), goals.len());
                    dispatch_from_task(&store, Action::ReceiveData { todos, goals });
                }
                Err(e) => {
                    log::error!("Failed to fetch data: {:#}", e);
                    ctx.notify_failure();
                }
            }
        });
        Ok(Outcome::Spawned(handle))
    })
}
