//! Middleware system for Redux architecture
//!
//! Middleware sits between action dispatch and reducer execution, allowing
//! side effects, async operations, logging, and other cross-cutting concerns
//! to be handled in a composable way.
//!
//! ## Design
//!
//! ```text
//! dispatch → m1 → m2 → ... → mn → reducer → listeners
//! ```
//!
//! Each middleware gets three things: the store (to read state or re-enter
//! the full chain), the `next` handler (the rest of the chain), and the
//! dispatched value. It either forwards to `next`, possibly with a different
//! value, or short-circuits by returning its own [`Outcome`].

use crate::dispatch::{Dispatchable, Outcome};
use crate::error::DispatchResult;
use crate::store::Store;
use std::sync::Arc;

/// Middleware trait - intercepts dispatches before they reach the reducer
pub trait Middleware<S, A>: Send + Sync {
    /// Handle a dispatched value
    ///
    /// - `store`: the store; `store.dispatch` re-enters the chain from the top
    /// - `next`: the remaining chain, ending in the reducer
    /// - `action`: the dispatched plain action or thunk
    fn handle(
        &self,
        store: &Store<S, A>,
        next: Next<'_, S, A>,
        action: Dispatchable<S, A>,
    ) -> DispatchResult<A>;
}

impl<S, A, M> Middleware<S, A> for Arc<M>
where
    M: Middleware<S, A> + ?Sized,
{
    fn handle(
        &self,
        store: &Store<S, A>,
        next: Next<'_, S, A>,
        action: Dispatchable<S, A>,
    ) -> DispatchResult<A> {
        (**self).handle(store, next, action)
    }
}

/// The remainder of the middleware chain
///
/// Calling [`run`](Next::run) hands the value to the next middleware, or to
/// the reducer once the chain is exhausted.
pub struct Next<'a, S, A> {
    store: &'a Store<S, A>,
    rest: &'a [Box<dyn Middleware<S, A>>],
}

impl<S, A> Clone for Next<'_, S, A> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<S, A> Copy for Next<'_, S, A> {}

impl<'a, S, A> Next<'a, S, A>
where
    S: Send + Sync + 'static,
    A: Send + Sync + 'static,
{
    pub(crate) fn new(store: &'a Store<S, A>, chain: &'a [Box<dyn Middleware<S, A>>]) -> Self {
        Self { store, rest: chain }
    }

    /// Forward to the rest of the chain
    pub fn run(self, action: Dispatchable<S, A>) -> DispatchResult<A> {
        match self.rest.split_first() {
            Some((head, tail)) => head.handle(
                self.store,
                Next {
                    store: self.store,
                    rest: tail,
                },
                action,
            ),
            None => self.store.commit(action),
        }
    }
}

/// Middleware backed by a closure, see [`middleware_fn`]
pub struct FnMiddleware<F>(F);

impl<S, A, F> Middleware<S, A> for FnMiddleware<F>
where
    F: Fn(&Store<S, A>, Next<'_, S, A>, Dispatchable<S, A>) -> DispatchResult<A> + Send + Sync,
{
    fn handle(
        &self,
        store: &Store<S, A>,
        next: Next<'_, S, A>,
        action: Dispatchable<S, A>,
    ) -> DispatchResult<A> {
        (self.0)(store, next, action)
    }
}

/// Build middleware from a closure
///
/// ```rust,ignore
/// let audit = middleware_fn(|store: &Store<AppState, Action>, next, action| {
///     log::info!("before: {:?}", action);
///     next.run(action)
/// });
/// ```
pub fn middleware_fn<S, A, F>(f: F) -> FnMiddleware<F>
where
    F: Fn(&Store<S, A>, Next<'_, S, A>, Dispatchable<S, A>) -> DispatchResult<A> + Send + Sync,
{
    FnMiddleware(f)
}

/// Runs thunks instead of forwarding them
///
/// Plain actions pass straight to `next`. Register it first so the rest of
/// the chain only ever sees plain actions.
#[derive(Debug, Clone, Copy, Default)]
pub struct ThunkMiddleware;

impl<S, A> Middleware<S, A> for ThunkMiddleware
where
    S: Send + Sync + 'static,
    A: Send + Sync + 'static,
{
    fn handle(
        &self,
        store: &Store<S, A>,
        next: Next<'_, S, A>,
        action: Dispatchable<S, A>,
    ) -> DispatchResult<A> {
        match action {
            Dispatchable::Thunk(thunk) => thunk.run(store.clone()),
            action => next.run(action),
        }
    }
}

/// Outcome helper for middleware that stops an action
pub fn reject<A>(reason: impl Into<String>) -> DispatchResult<A> {
    Ok(Outcome::Rejected(reason.into()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reducer::pure;
    use crate::store::create_store;
    use crate::StoreError;
    use parking_lot::Mutex;
    use pretty_assertions::assert_eq;

    #[derive(Debug, Clone, PartialEq)]
    enum Msg {
        Add(i32),
        Forbidden,
    }

    type TestStore = Store<i32, Msg>;

    fn sum() -> impl crate::Reducer<i32, Msg> {
        pure(
            || 0,
            |state: &i32, msg: &Msg| match msg {
                Msg::Add(n) => state + n,
                Msg::Forbidden => *state,
            },
        )
    }

    /// Records when it is entered and when `next` returns
    fn tracer(
        name: &'static str,
        trace: Arc<Mutex<Vec<String>>>,
    ) -> impl Middleware<i32, Msg> {
        middleware_fn(move |_store: &TestStore, next, action| {
            trace.lock().push(format!("{} in", name));
            let result = next.run(action);
            trace.lock().push(format!("{} out", name));
            result
        })
    }

    fn gate() -> impl Middleware<i32, Msg> {
        middleware_fn(|_store: &TestStore, next, action| match action.as_action() {
            Some(Msg::Forbidden) => reject("forbidden"),
            _ => next.run(action),
        })
    }

    #[test]
    fn test_earlier_middleware_wraps_later_middleware() {
        let trace = Arc::new(Mutex::new(Vec::new()));
        let store = Store::builder(sum())
            .add_middleware(tracer("outer", Arc::clone(&trace)))
            .add_middleware(tracer("inner", Arc::clone(&trace)))
            .build();

        store.dispatch(Msg::Add(1)).unwrap();

        assert_eq!(
            *trace.lock(),
            vec!["outer in", "inner in", "inner out", "outer out"]
        );
        assert_eq!(*store.state(), 1);
    }

    #[test]
    fn test_short_circuit_hides_action_from_downstream() {
        let trace = Arc::new(Mutex::new(Vec::new()));
        let store = Store::builder(sum())
            .add_middleware(gate())
            .add_middleware(tracer("logger", Arc::clone(&trace)))
            .build();

        let outcome = store.dispatch(Msg::Forbidden).unwrap();
        assert!(outcome.is_rejected());
        assert!(trace.lock().is_empty());
        assert_eq!(*store.state(), 0);

        let outcome = store.dispatch(Msg::Add(2)).unwrap();
        assert!(outcome.is_reduced());
        assert_eq!(*trace.lock(), vec!["logger in", "logger out"]);
        assert_eq!(*store.state(), 2);
    }

    #[test]
    fn test_middleware_can_transform_action() {
        let doubler = middleware_fn(|_store: &TestStore, next, action| match action {
            Dispatchable::Action(Msg::Add(n)) => next.run(Dispatchable::Action(Msg::Add(n * 2))),
            other => next.run(other),
        });
        let store = Store::builder(sum()).add_middleware(doubler).build();

        match store.dispatch(Msg::Add(3)).unwrap() {
            Outcome::Reduced(msg) => assert_eq!(msg, Msg::Add(6)),
            other => panic!("unexpected outcome: {:?}", other),
        }
        assert_eq!(*store.state(), 6);
    }

    #[test]
    fn test_store_dispatch_reenters_the_whole_chain() {
        let trace = Arc::new(Mutex::new(Vec::new()));
        // Expands Add(10) into two Add(5), each going through the chain again
        let splitter = middleware_fn(|store: &TestStore, next, action| match action {
            Dispatchable::Action(Msg::Add(10)) => {
                store.dispatch(Msg::Add(5))?;
                store.dispatch(Msg::Add(5))
            }
            other => next.run(other),
        });
        let store = Store::builder(sum())
            .add_middleware(tracer("outer", Arc::clone(&trace)))
            .add_middleware(splitter)
            .build();

        store.dispatch(Msg::Add(10)).unwrap();
        assert_eq!(*store.state(), 10);
        // outer sees the original plus the two re-dispatched actions
        assert_eq!(trace.lock().iter().filter(|t| *t == "outer in").count(), 3);
    }

    #[test]
    fn test_thunk_middleware_runs_thunks() {
        let store = Store::builder(sum()).add_middleware(ThunkMiddleware).build();

        let outcome = store
            .dispatch(Dispatchable::thunk(|store: TestStore| {
                store.dispatch(Msg::Add(1))?;
                store.dispatch(Msg::Add(2))?;
                Ok(Outcome::Done)
            }))
            .unwrap();

        assert!(matches!(outcome, Outcome::Done));
        assert_eq!(*store.state(), 3);
    }

    #[test]
    fn test_thunk_middleware_forwards_plain_actions() {
        let store = Store::builder(sum()).add_middleware(ThunkMiddleware).build();
        assert!(store.dispatch(Msg::Add(4)).unwrap().is_reduced());
        assert_eq!(*store.state(), 4);
    }

    #[test]
    fn test_downstream_middleware_never_sees_thunks() {
        let saw_thunk = Arc::new(Mutex::new(false));
        let flag = Arc::clone(&saw_thunk);
        let watcher = middleware_fn(move |_store: &TestStore, next, action| {
            if matches!(action, Dispatchable::Thunk(_)) {
                *flag.lock() = true;
            }
            next.run(action)
        });
        let store = Store::builder(sum())
            .add_middleware(ThunkMiddleware)
            .add_middleware(watcher)
            .build();

        store
            .dispatch(Dispatchable::thunk(|store: TestStore| store.dispatch(Msg::Add(1))))
            .unwrap();

        assert!(!*saw_thunk.lock());
        assert_eq!(*store.state(), 1);
    }

    #[tokio::test]
    async fn test_async_thunk_dispatches_after_await() {
        let store = Store::builder(sum()).add_middleware(ThunkMiddleware).build();

        let outcome = store
            .dispatch(Dispatchable::thunk(|store: TestStore| {
                store.dispatch(Msg::Add(1))?;
                let handle = tokio::spawn(async move {
                    tokio::task::yield_now().await;
                    if let Err(e) = store.dispatch(Msg::Add(10)) {
                        log::error!("follow-up dispatch failed: {}", e);
                    }
                });
                Ok(Outcome::Spawned(handle))
            }))
            .unwrap();

        assert_eq!(*store.state(), 1);
        outcome.settled().await.unwrap();
        assert_eq!(*store.state(), 11);
    }

    #[test]
    fn test_shared_middleware_via_arc() {
        let trace = Arc::new(Mutex::new(Vec::new()));
        let shared = Arc::new(tracer("shared", Arc::clone(&trace)));
        let store = Store::builder(sum())
            .add_middleware(Arc::clone(&shared))
            .build();

        store.dispatch(Msg::Add(1)).unwrap();
        assert_eq!(trace.lock().len(), 2);
        assert_eq!(Arc::strong_count(&shared), 2);
    }

    #[test]
    fn test_unhandled_thunk_reports_error_through_chain() {
        let store = create_store(sum());
        let result = store.dispatch(Dispatchable::thunk(|_store: TestStore| Ok(Outcome::Done)));
        assert!(matches!(result, Err(StoreError::UnhandledThunk)));
    }
}
