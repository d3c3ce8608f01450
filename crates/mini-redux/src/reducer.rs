//! Reducers - pure functions producing new state from current state + action
//!
//! A reducer never mutates its input: it borrows the current state and
//! returns a fresh value which the store swaps in wholesale.
//!
//! ```text
//! (state, action) -> state
//! ```
//!
//! Slices of a composite state are reduced independently and glued together
//! with [`combine_reducers!`](crate::combine_reducers).

/// Result returned by a reducer
pub type ReduceResult<S> = anyhow::Result<S>;

/// Reducer trait - computes the next state for an action
///
/// Implementations must be total over the action type: actions they don't
/// recognise return the state unchanged.
pub trait Reducer<S, A>: Send + Sync {
    /// State used when the store is created, before any action
    fn initial_state(&self) -> S;

    /// Compute the next state. An `Err` aborts the dispatch.
    fn reduce(&self, state: &S, action: &A) -> ReduceResult<S>;
}

/// Reducer built from an initializer and a (fallible) reduce function
pub struct FnReducer<I, R> {
    init: I,
    reduce: R,
}

impl<S, A, I, R> Reducer<S, A> for FnReducer<I, R>
where
    I: Fn() -> S + Send + Sync,
    R: Fn(&S, &A) -> ReduceResult<S> + Send + Sync,
{
    fn initial_state(&self) -> S {
        (self.init)()
    }

    fn reduce(&self, state: &S, action: &A) -> ReduceResult<S> {
        (self.reduce)(state, action)
    }
}

/// Build a reducer from an initializer and a fallible reduce function
pub fn from_fn<S, A, I, R>(init: I, reduce: R) -> FnReducer<I, R>
where
    I: Fn() -> S + Send + Sync,
    R: Fn(&S, &A) -> ReduceResult<S> + Send + Sync,
{
    FnReducer { init, reduce }
}

/// Build a reducer from an initializer and an infallible reduce function
///
/// This is the common case: most reducers are plain `match` statements
/// that cannot fail.
pub fn pure<S, A, I, F>(init: I, reduce: F) -> impl Reducer<S, A>
where
    I: Fn() -> S + Send + Sync,
    F: Fn(&S, &A) -> S + Send + Sync,
{
    from_fn(init, move |state: &S, action: &A| Ok(reduce(state, action)))
}

/// Combine per-slice reducers into a reducer over a composite state struct
///
/// Every field of the state struct must be named exactly once; the struct
/// literal generated here fails to compile otherwise. Each slice is
/// initialised from its own reducer's initial state and reduced with only its
/// own slice plus the incoming action.
///
/// ```rust,ignore
/// let root = combine_reducers!(AppState: Action {
///     todos: todos_reducer::reducer(),
///     goals: goals_reducer::reducer(),
///     loading: loading_reducer::reducer(),
/// });
/// ```
#[macro_export]
macro_rules! combine_reducers {
    ($state:ident : $action:ty { $($key:ident : $reducer:expr),+ $(,)? }) => {{
        $( let $key = ::std::sync::Arc::new($reducer); )+
        $crate::reducer::from_fn(
            {
                $( let $key = ::std::sync::Arc::clone(&$key); )+
                move || $state {
                    $( $key: $crate::Reducer::<_, $action>::initial_state(&*$key), )+
                }
            },
            move |state: &$state, action: &$action| -> $crate::ReduceResult<$state> {
                ::std::result::Result::Ok($state {
                    $( $key: $crate::Reducer::reduce(&*$key, &state.$key, action)?, )+
                })
            },
        )
    }};
}
