//! Service client trait
//!
//! This module defines the `GoalsTodosApi` trait that every backend must
//! satisfy. Each operation is asynchronous and fallible; callers treat the
//! error as opaque.

use crate::types::{Goal, Todo};
use async_trait::async_trait;

/// Todo/goal service API
///
/// # Thread Safety
///
/// Implementations must be `Send + Sync` so a single client can be shared
/// by every in-flight action creator.
///
/// # Example
///
/// ```rust,ignore
/// use goals_todos_api::{GoalsTodosApi, Todo};
///
/// async fn add(api: &dyn GoalsTodosApi) -> anyhow::Result<Todo> {
///     api.save_todo("Walk the dog").await
/// }
/// ```
#[async_trait]
pub trait GoalsTodosApi: Send + Sync {
    /// Fetch every todo
    async fn fetch_todos(&self) -> anyhow::Result<Vec<Todo>>;

    /// Fetch every goal
    async fn fetch_goals(&self) -> anyhow::Result<Vec<Goal>>;

    /// Persist a new todo; the service assigns its id
    async fn save_todo(&self, name: &str) -> anyhow::Result<Todo>;

    /// Persist a new goal; the service assigns its id
    async fn save_goal(&self, name: &str) -> anyhow::Result<Goal>;

    /// Delete the todo with the given id
    async fn delete_todo(&self, id: &str) -> anyhow::Result<()>;

    /// Delete the goal with the given id
    async fn delete_goal(&self, id: &str) -> anyhow::Result<()>;

    /// Flip the completion flag of the todo with the given id
    async fn save_todo_toggle(&self, id: &str) -> anyhow::Result<()>;
}
