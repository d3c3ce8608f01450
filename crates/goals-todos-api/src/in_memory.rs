//! In-memory service backend
//!
//! Simulates a remote service: every call waits for the configured latency
//! and mutations fail according to a [`FailurePolicy`]. Fetches only wait,
//! unless the backend is built with [`InMemoryApi::with_failing_fetches`].

use crate::client::GoalsTodosApi;
use crate::error::ApiError;
use crate::ids::generate_id;
use crate::types::{Goal, Todo};
use async_trait::async_trait;
use parking_lot::Mutex;
use std::time::Duration;

/// When simulated mutations fail
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum FailurePolicy {
    /// Every call succeeds
    #[default]
    Never,
    /// Every mutation fails
    Always,
    /// Each mutation fails with the given probability (0.0..=1.0)
    Random(f64),
}

impl FailurePolicy {
    /// Policy for a configured failure rate
    pub fn from_rate(rate: f64) -> Self {
        if rate <= 0.0 {
            Self::Never
        } else if rate >= 1.0 {
            Self::Always
        } else {
            Self::Random(rate)
        }
    }

    fn should_fail(&self) -> bool {
        match self {
            Self::Never => false,
            Self::Always => true,
            Self::Random(rate) => fastrand::f64() < *rate,
        }
    }
}

/// Service backend keeping todos and goals in memory
pub struct InMemoryApi {
    todos: Mutex<Vec<Todo>>,
    goals: Mutex<Vec<Goal>>,
    latency: Duration,
    failure: FailurePolicy,
    failing_fetches: bool,
}

impl InMemoryApi {
    /// Empty backend without latency that never fails
    pub fn new() -> Self {
        Self {
            todos: Mutex::new(Vec::new()),
            goals: Mutex::new(Vec::new()),
            latency: Duration::ZERO,
            failure: FailurePolicy::Never,
            failing_fetches: false,
        }
    }

    /// Backend pre-filled with a few todos and goals
    pub fn seeded() -> Self {
        let todos = vec![
            Todo::new(generate_id(), "Walk the dog"),
            Todo {
                complete: true,
                ..Todo::new(generate_id(), "Wash the car")
            },
            Todo::new(generate_id(), "Go to the gym"),
        ];
        let goals = vec![
            Goal::new(generate_id(), "Learn Redux"),
            Goal::new(generate_id(), "Read 50 books this year"),
        ];
        Self::new().with_todos(todos).with_goals(goals)
    }

    pub fn with_todos(self, todos: Vec<Todo>) -> Self {
        *self.todos.lock() = todos;
        self
    }

    pub fn with_goals(self, goals: Vec<Goal>) -> Self {
        *self.goals.lock() = goals;
        self
    }

    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }

    pub fn with_failure_policy(mut self, failure: FailurePolicy) -> Self {
        self.failure = failure;
        self
    }

    /// Make every fetch fail, independent of the failure policy
    pub fn with_failing_fetches(mut self) -> Self {
        self.failing_fetches = true;
        self
    }

    /// Wait, then fail if fetches are switched off
    async fn fetched(&self, operation: &'static str) -> Result<(), ApiError> {
        self.delay().await;
        if self.failing_fetches {
            log::warn!("InMemoryApi: simulated failure in {}", operation);
            return Err(ApiError::Unavailable(operation));
        }
        Ok(())
    }

    async fn delay(&self) {
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }
    }

    /// Wait, then decide whether this mutation fails
    async fn settle(&self, operation: &'static str) -> Result<(), ApiError> {
        self.delay().await;
        if self.failure.should_fail() {
            log::warn!("InMemoryApi: simulated failure in {}", operation);
            return Err(ApiError::Unavailable(operation));
        }
        Ok(())
    }
}

impl Default for InMemoryApi {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl GoalsTodosApi for InMemoryApi {
    async fn fetch_todos(&self) -> anyhow::Result<Vec<Todo>> {
        self.fetched("fetch todos").await?;
        Ok(self.todos.lock().clone())
    }

    async fn fetch_goals(&self) -> anyhow::Result<Vec<Goal>> {
        self.fetched("fetch goals").await?;
        Ok(self.goals.lock().clone())
    }

    async fn save_todo(&self, name: &str) -> anyhow::Result<Todo> {
        self.settle("save todo").await?;
        let todo = Todo::new(generate_id(), name);
        self.todos.lock().push(todo.clone());
        log::debug!("InMemoryApi: saved todo {}", todo.id);
        Ok(todo)
    }

    async fn save_goal(&self, name: &str) -> anyhow::Result<Goal> {
        self.settle("save goal").await?;
        let goal = Goal::new(generate_id(), name);
        self.goals.lock().push(goal.clone());
        log::debug!("InMemoryApi: saved goal {}", goal.id);
        Ok(goal)
    }

    async fn delete_todo(&self, id: &str) -> anyhow::Result<()> {
        self.settle("delete todo").await?;
        self.todos.lock().retain(|todo| todo.id != id);
        Ok(())
    }

    async fn delete_goal(&self, id: &str) -> anyhow::Result<()> {
        self.settle("delete goal").await?;
        self.goals.lock().retain(|goal| goal.id != id);
        Ok(())
    }

    async fn save_todo_toggle(&self, id: &str) -> anyhow::Result<()> {
        self.settle("toggle todo").await?;
        let mut todos = self.todos.lock();
        let todo = todos
            .iter_mut()
            .find(|todo| todo.id == id)
            .ok_or_else(|| ApiError::NotFound {
                kind: "todo",
                id: id.to_string(),
            })?;
        todo.complete = !todo.complete;
        Ok(())
    }
}
