//! Application middleware
//!
//! The store runs them in this order (see [`build_store`](crate::store::build_store)):
//!
//! ```text
//! ThunkMiddleware → CheckerMiddleware → LoggingMiddleware → reducer
//! ```

pub mod checker_middleware;
pub mod logging_middleware;

pub use checker_middleware::CheckerMiddleware;
pub use logging_middleware::LoggingMiddleware;
