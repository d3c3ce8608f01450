use crate::dispatch::{Dispatchable, Outcome};
use crate::error::{DispatchResult, StoreError};
use crate::middleware::{Middleware, Next};
use crate::reducer::Reducer;
use parking_lot::{Mutex, ReentrantMutex, RwLock};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Weak};

type Listener = Arc<dyn Fn() + Send + Sync>;
type ListenerList = Mutex<Vec<(u64, Listener)>>;

struct Inner<S, A> {
    reducer: Box<dyn Reducer<S, A>>,
    state: RwLock<Arc<S>>,
    listeners: Arc<ListenerList>,
    next_listener_id: AtomicU64,
    middleware: Vec<Box<dyn Middleware<S, A>>>,
    /// Held while a new state is committed and listeners are notified.
    /// Re-entrant so a listener may dispatch on the same thread.
    commit: ReentrantMutex<()>,
}

/// Redux-style Store that holds application state and dispatches actions
///
/// The Store follows the Redux pattern:
/// - Centralized state management
/// - Actions are dispatched to modify state
/// - Pure reducers handle state transitions
/// - State is immutable (replaced on each action)
///
/// A `Store` is a cheap handle; clones share the same state, listeners and
/// middleware chain. Create one per application (or per test) and pass it
/// to whoever needs it.
///
/// ```rust,ignore
/// let store = Store::builder(app_reducer())
///     .add_middleware(ThunkMiddleware)
///     .add_middleware(LoggingMiddleware::new())
///     .build();
///
/// let unsubscribe = store.subscribe(|| println!("state changed"));
/// store.dispatch(Action::Quit)?;
/// unsubscribe.unsubscribe();
/// ```
pub struct Store<S, A> {
    inner: Arc<Inner<S, A>>,
}

impl<S, A> Clone for Store<S, A> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

/// Create a bare store without middleware
pub fn create_store<S, A, R>(reducer: R) -> Store<S, A>
where
    S: Send + Sync + 'static,
    A: Send + Sync + 'static,
    R: Reducer<S, A> + 'static,
{
    StoreBuilder::new(reducer).build()
}

/// Assembles a store together with its middleware chain
pub struct StoreBuilder<S, A> {
    reducer: Box<dyn Reducer<S, A>>,
    middleware: Vec<Box<dyn Middleware<S, A>>>,
}

impl<S, A> StoreBuilder<S, A>
where
    S: Send + Sync + 'static,
    A: Send + Sync + 'static,
{
    pub fn new<R: Reducer<S, A> + 'static>(reducer: R) -> Self {
        Self {
            reducer: Box::new(reducer),
            middleware: Vec::new(),
        }
    }

    /// Add middleware to the chain
    ///
    /// Middleware added first runs outermost: it sees every dispatch before
    /// the ones added after it, and can stop them from ever seeing it.
    pub fn add_middleware<M: Middleware<S, A> + 'static>(mut self, middleware: M) -> Self {
        self.middleware.push(Box::new(middleware));
        self
    }

    pub fn build(self) -> Store<S, A> {
        let initial = self.reducer.initial_state();
        log::debug!(
            "Store created with {} middleware",
            self.middleware.len()
        );
        Store {
            inner: Arc::new(Inner {
                reducer: self.reducer,
                state: RwLock::new(Arc::new(initial)),
                listeners: Arc::new(Mutex::new(Vec::new())),
                next_listener_id: AtomicU64::new(0),
                middleware: self.middleware,
                commit: ReentrantMutex::new(()),
            }),
        }
    }
}

impl<S, A> Store<S, A>
where
    S: Send + Sync + 'static,
    A: Send + Sync + 'static,
{
    /// Start building a store around the root reducer
    pub fn builder<R: Reducer<S, A> + 'static>(reducer: R) -> StoreBuilder<S, A> {
        StoreBuilder::new(reducer)
    }

    /// Get the current state snapshot
    pub fn state(&self) -> Arc<S> {
        Arc::clone(&self.inner.state.read())
    }

    /// Register a listener invoked after every completed dispatch
    ///
    /// Listeners run synchronously, in subscription order. Dropping the
    /// returned handle does not unsubscribe.
    pub fn subscribe<F>(&self, listener: F) -> Unsubscribe
    where
        F: Fn() + Send + Sync + 'static,
    {
        let id = self.inner.next_listener_id.fetch_add(1, Ordering::Relaxed);
        self.inner.listeners.lock().push((id, Arc::new(listener)));
        Unsubscribe {
            listeners: Arc::downgrade(&self.inner.listeners),
            id,
        }
    }

    /// Number of currently registered listeners
    pub fn listener_count(&self) -> usize {
        self.inner.listeners.lock().len()
    }

    /// Dispatch through the middleware chain, then the reducer
    ///
    /// Returns whatever the outermost middleware returns; without middleware
    /// that is [`Outcome::Reduced`] carrying the action back.
    pub fn dispatch(&self, action: impl Into<Dispatchable<S, A>>) -> DispatchResult<A> {
        Next::new(self, &self.inner.middleware).run(action.into())
    }

    /// Run `f` while no other thread can commit
    ///
    /// Dispatches made by `f` on the calling thread still go through, so
    /// middleware can forward an action and read the state it produced
    /// without another thread's commit landing in between.
    pub fn atomically<R>(&self, f: impl FnOnce() -> R) -> R {
        let _commit = self.inner.commit.lock();
        f()
    }

    /// The innermost handler: reduce, commit, notify
    pub(crate) fn commit(&self, dispatchable: Dispatchable<S, A>) -> DispatchResult<A> {
        let action = match dispatchable {
            Dispatchable::Action(action) => action,
            Dispatchable::Thunk(_) => return Err(StoreError::UnhandledThunk),
        };

        let _commit = self.inner.commit.lock();

        let current = self.state();
        let next = self
            .inner
            .reducer
            .reduce(&current, &action)
            .map_err(StoreError::Reducer)?;
        *self.inner.state.write() = Arc::new(next);

        // Notify a snapshot so listeners may (un)subscribe while being notified
        let listeners: Vec<Listener> = self
            .inner
            .listeners
            .lock()
            .iter()
            .map(|(_, listener)| Arc::clone(listener))
            .collect();
        for listener in listeners {
            listener();
        }

        Ok(Outcome::Reduced(action))
    }
}

/// Handle returned by [`Store::subscribe`]
///
/// Calling [`unsubscribe`](Unsubscribe::unsubscribe) more than once is a no-op.
#[derive(Clone)]
pub struct Unsubscribe {
    listeners: Weak<ListenerList>,
    id: u64,
}

impl Unsubscribe {
    /// Remove exactly the listener this handle was created for
    pub fn unsubscribe(&self) {
        if let Some(listeners) = self.listeners.upgrade() {
            listeners.lock().retain(|(id, _)| *id != self.id);
        }
    }
}
