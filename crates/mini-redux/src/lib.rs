//! A small Redux-style state container
//!
//! This crate provides a store holding a single immutable state value, pure
//! reducers computing the next state from dispatched actions, listeners
//! notified after every transition, and a middleware chain wrapped around
//! dispatch.
//!
//! # Architecture
//!
//! ```text
//!                 ┌──────────────────────────────────────────┐
//! dispatch(x) ──► │ ThunkMiddleware → ... → Middleware n     │
//!                 └─────────────────────┬────────────────────┘
//!                                       ▼
//!                 ┌──────────────────────────────────────────┐
//!                 │ reducer(state, action) → new state       │
//!                 └─────────────────────┬────────────────────┘
//!                                       ▼
//!                         listeners (subscription order)
//! ```
//!
//! # Example
//!
//! ```rust
//! use mini_redux::{pure, Store, ThunkMiddleware};
//!
//! #[derive(Debug)]
//! enum Counter {
//!     Increment,
//! }
//!
//! let store = Store::builder(pure(|| 0u32, |n: &u32, action: &Counter| match action {
//!     Counter::Increment => n + 1,
//! }))
//! .add_middleware(ThunkMiddleware)
//! .build();
//!
//! store.dispatch(Counter::Increment).unwrap();
//! assert_eq!(*store.state(), 1);
//! ```

pub mod dispatch;
pub mod error;
pub mod middleware;
pub mod reducer;
pub mod store;

pub use dispatch::{Dispatchable, Outcome, Thunk};
pub use error::{DispatchResult, StoreError};
pub use middleware::{middleware_fn, reject, FnMiddleware, Middleware, Next, ThunkMiddleware};
pub use reducer::{from_fn, pure, FnReducer, ReduceResult, Reducer};
pub use store::{create_store, Store, StoreBuilder, Unsubscribe};
