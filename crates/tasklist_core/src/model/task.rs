//! Task domain model.
//!
//! # Responsibility
//! - Define the persisted task record (`title` + `done`).
//! - Provide lifecycle helpers for completion state.
//!
//! # Invariants
//! - `title` is non-empty after trimming; `validate()` is the single gate.
//! - Insertion order is identity: there is no stable ID field.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Validation failure for a task record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskValidationError {
    /// Title is empty (or whitespace-only), which the list never allows.
    EmptyTitle,
}

impl Display for TaskValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyTitle => write!(f, "task title cannot be empty"),
        }
    }
}

impl Error for TaskValidationError {}

/// One to-do item: a short title plus a completion flag.
///
/// Serialized field names match the persisted JSON schema exactly
/// (`title`, `done`); there is no version field in the store file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Human-entered task text, trimmed at the input boundary.
    pub title: String,
    /// Completion flag; new tasks always start not-done.
    pub done: bool,
}

impl Task {
    /// Creates a new open task.
    ///
    /// # Invariants
    /// - `done` starts as `false`.
    /// - Callers are expected to pass a trimmed, non-empty title; the store
    ///   enforces this again via `validate()` before any write.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            done: false,
        }
    }

    /// Marks this task as completed.
    pub fn mark_done(&mut self) {
        self.done = true;
    }

    /// Returns whether this task still needs doing.
    pub fn is_open(&self) -> bool {
        !self.done
    }

    /// Checks the record invariants.
    ///
    /// # Errors
    /// - `TaskValidationError::EmptyTitle` when the title trims to nothing.
    pub fn validate(&self) -> Result<(), TaskValidationError> {
        if self.title.trim().is_empty() {
            return Err(TaskValidationError::EmptyTitle);
        }
        Ok(())
    }
}
