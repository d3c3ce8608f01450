//! What flows through the dispatch pipeline, and what comes back out

use crate::error::{DispatchResult, StoreError};
use crate::store::Store;
use std::fmt;
use tokio::task::JoinHandle;

/// A value that can be handed to [`Store::dispatch`]
///
/// Plain actions and thunks are told apart by their tag, never by
/// inspecting the value itself.
pub enum Dispatchable<S, A> {
    /// A plain action, destined for the reducer
    Action(A),
    /// A deferred action creator, run by [`ThunkMiddleware`](crate::ThunkMiddleware)
    Thunk(Thunk<S, A>),
}

impl<S, A> Dispatchable<S, A> {
    /// Wrap a closure as a thunk
    pub fn thunk<F>(f: F) -> Self
    where
        F: FnOnce(Store<S, A>) -> DispatchResult<A> + Send + 'static,
    {
        Self::Thunk(Thunk(Box::new(f)))
    }

    /// The plain action, if this is one
    pub fn as_action(&self) -> Option<&A> {
        match self {
            Self::Action(action) => Some(action),
            Self::Thunk(_) => None,
        }
    }
}

impl<S, A> From<A> for Dispatchable<S, A> {
    fn from(action: A) -> Self {
        Self::Action(action)
    }
}

impl<S, A: fmt::Debug> fmt::Debug for Dispatchable<S, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Action(action) => f.debug_tuple("Action").field(action).finish(),
            Self::Thunk(_) => f.write_str("Thunk"),
        }
    }
}

/// A function of the store, run in place of forwarding to the reducer
///
/// The thunk receives a handle to the store so it can read state and
/// dispatch follow-up actions through the full middleware chain, both
/// immediately and from any task it spawns.
pub struct Thunk<S, A>(Box<dyn FnOnce(Store<S, A>) -> DispatchResult<A> + Send>);

impl<S, A> Thunk<S, A> {
    /// Run the thunk against the given store
    pub fn run(self, store: Store<S, A>) -> DispatchResult<A> {
        (self.0)(store)
    }
}

/// What a dispatch produced
///
/// The bare store returns the reduced action. Middleware may replace it
/// with its own value, e.g. a rejection or a handle to background work.
#[derive(Debug)]
pub enum Outcome<A> {
    /// The action reached the reducer and the new state was committed
    Reduced(A),
    /// A middleware stopped the action before it reached the reducer
    Rejected(String),
    /// A thunk started background work that settles later
    Spawned(JoinHandle<()>),
    /// A thunk finished without producing anything else
    Done,
}

impl<A> Outcome<A> {
    /// Whether the action made it to the reducer
    pub fn is_reduced(&self) -> bool {
        matches!(self, Self::Reduced(_))
    }

    /// Whether a middleware short-circuited the action
    pub fn is_rejected(&self) -> bool {
        matches!(self, Self::Rejected(_))
    }

    /// Wait for any background work started by a thunk to finish
    ///
    /// Resolves immediately for every outcome other than [`Outcome::Spawned`].
    pub async fn settled(self) -> Result<(), StoreError> {
        if let Self::Spawned(handle) = self {
            handle.await?;
        }
        Ok(())
    }
}
