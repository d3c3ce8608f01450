//! Todo/goal service client
//!
//! This crate provides a trait-based client for the todo/goal service and an
//! in-memory backend that simulates latency and failures.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────┐
//! │         GoalsTodosApi trait          │
//! │  - fetch_todos() / fetch_goals()     │
//! │  - save_todo() / save_goal()         │
//! │  - delete_todo() / delete_goal()     │
//! │  - save_todo_toggle()                │
//! └─────────────────────────────────────┘
//!                   │
//!                   ▼
//!         ┌───────────────────┐
//!         │   InMemoryApi     │
//!         │ (latency, faults) │
//!         └───────────────────┘
//! ```

pub mod client;
pub mod error;
pub mod ids;
pub mod in_memory;
pub mod types;

pub use client::GoalsTodosApi;
pub use error::ApiError;
pub use ids::generate_id;
pub use in_memory::{FailurePolicy, InMemoryApi};
pub use types::{Goal, Todo};
