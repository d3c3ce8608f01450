//! Types exchanged with the todo/goal service

use serde::{Deserialize, Serialize};

/// A todo item
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Todo {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub complete: bool,
}

impl Todo {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            complete: false,
        }
    }

    /// Copy of this todo with the completion flag flipped
    pub fn toggled(&self) -> Self {
        Self {
            complete: !self.complete,
            ..self.clone()
        }
    }
}

/// A goal
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Goal {
    pub id: String,
    pub name: String,
}

impl Goal {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}
