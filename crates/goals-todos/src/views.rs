//! Plain-text rendering of the application state

use crate::state::AppState;
use parking_lot::Mutex;
use std::fmt::Write;
use std::sync::Arc;

/// Render the two lists, or a loading notice before the first data arrives
pub fn render(state: &AppState) -> String {
    if state.loading {
        return "Loading...\n".to_string();
    }

    let mut out = String::new();
    let _ = writeln!(out, "Todo List");
    if state.todos.is_empty() {
        let _ = writeln!(out, "  (empty)");
    }
    for (idx, todo) in state.todos.iter().enumerate() {
        let mark = if todo.complete { "x" } else { " " };
        let _ = writeln!(out, "  {}. [{}] {}", idx + 1, mark, todo.name);
    }

    let _ = writeln!(out);
    let _ = writeln!(out, "Goals");
    if state.goals.is_empty() {
        let _ = writeln!(out, "  (empty)");
    }
    for (idx, goal) in state.goals.iter().enumerate() {
        let _ = writeln!(out, "  {}. {}", idx + 1, goal.name);
    }
    out
}

/// Renders only when the state actually changed since the last frame
///
/// Dispatches that reduce to an equal state (removing an unknown id, for
/// instance) would otherwise reprint the same lists.
#[derive(Default)]
pub struct Renderer {
    last: Mutex<Option<Arc<AppState>>>,
}

impl Renderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// The frame for `state`, or `None` if it matches the previous one
    pub fn frame(&self, state: Arc<AppState>) -> Option<String> {
        let mut last = self.last.lock();
        if last.as_deref() == Some(&*state) {
            return None;
        }
        let frame = render(&state);
        *last = Some(state);
        Some(frame)
    }
}
