//! Errors surfaced by [`Store::dispatch`](crate::Store::dispatch)

use thiserror::Error;

/// Errors that can occur while dispatching through a store
#[derive(Debug, Error)]
pub enum StoreError {
    /// The root reducer failed; state was left untouched and no listener ran.
    #[error("reducer failed: {0}")]
    Reducer(#[source] anyhow::Error),

    /// A thunk fell through the middleware chain and reached the reducer.
    #[error("thunks must be handled by middleware; add ThunkMiddleware to the store")]
    UnhandledThunk,

    /// A spawned thunk continuation panicked or was aborted.
    #[error("thunk task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}

/// Result of a dispatch through the store
pub type DispatchResult<A> = Result<crate::Outcome<A>, StoreError>;
