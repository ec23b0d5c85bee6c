//! Task list use-case service.
//!
//! # Responsibility
//! - Own the in-memory task collection for the lifetime of a session.
//! - Enforce input validation and index bounds for every operation.
//! - Delegate durability to the store after each successful mutation.
//!
//! # Invariants
//! - Every mutation that changes the collection is followed by a store save
//!   before the operation returns success.
//! - Read paths (`view`, rejected inputs, already-done marks) never write.
//! - Indices are 1-based and only meaningful between mutations.

use crate::model::task::Task;
use crate::store::task_store::{StoreError, TaskStore};
use log::info;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type ServiceResult<T> = Result<T, ServiceError>;

/// Operation-level error for the task list service.
#[derive(Debug)]
pub enum ServiceError {
    /// `add` input was empty (or whitespace-only) after trimming.
    EmptyInput,
    /// The store failed while persisting a mutation.
    Store(StoreError),
}

impl Display for ServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyInput => write!(f, "task title cannot be empty"),
            Self::Store(err) => write!(f, "{err}"),
        }
    }
}

impl Error for ServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::EmptyInput => None,
            Self::Store(err) => Some(err),
        }
    }
}

impl From<StoreError> for ServiceError {
    fn from(value: StoreError) -> Self {
        Self::Store(value)
    }
}

/// One row of the enumerated task listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskLine {
    /// 1-based display position.
    pub position: usize,
    pub title: String,
    pub done: bool,
}

impl Display for TaskLine {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let status = if self.done { "Done" } else { "Not Done" };
        write!(f, "{}. {} - {}", self.position, self.title, status)
    }
}

/// Outcome of a mark-done request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MarkDoneOutcome {
    /// User entered the cancel sentinel (`0`, `c`, `C`).
    Cancelled,
    /// Prompt text was not a number.
    InvalidInput,
    /// Number was outside `[1, len]`.
    InvalidIndex,
    /// Task was already completed; nothing changed.
    AlreadyDone,
    /// Task is now marked done and the change is persisted.
    Marked,
}

/// Outcome of a delete request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeleteOutcome {
    /// User entered the cancel sentinel (`0`, `c`, `C`).
    Cancelled,
    /// Prompt text was not a number.
    InvalidInput,
    /// Number was outside `[1, len]`.
    InvalidIndex,
    /// Task removed and the change persisted; carries the removed title.
    Deleted { title: String },
}

/// How a raw prompt answer resolved against the current list length.
enum Selection {
    Cancelled,
    InvalidInput,
    InvalidIndex,
    /// 0-based index into the task vector.
    Index(usize),
}

/// Use-case service over an ordered in-memory task collection.
///
/// Constructed once per session via [`TaskListService::load`]; the store
/// stays the single durability boundary for every mutation.
pub struct TaskListService<S: TaskStore> {
    store: S,
    tasks: Vec<Task>,
}

impl<S: TaskStore> TaskListService<S> {
    /// Loads the persisted collection and wraps it with the store.
    ///
    /// # Errors
    /// - Propagates `StoreError::CorruptData` unchanged so callers can
    ///   surface it instead of silently starting empty.
    pub fn load(store: S) -> ServiceResult<Self> {
        let tasks = store.load()?;
        info!(
            "event=service_init module=service status=ok count={}",
            tasks.len()
        );
        Ok(Self { store, tasks })
    }

    /// Number of tasks currently in the list.
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    /// Whether the list has no tasks.
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Adds one task per non-empty comma-separated segment of `raw_input`.
    ///
    /// # Contract
    /// - Segments are trimmed; empty segments are discarded.
    /// - Appended in left-to-right input order, all with `done = false`.
    /// - Persists only when at least one task was appended.
    /// - Returns the number of tasks appended.
    ///
    /// # Errors
    /// - `ServiceError::EmptyInput` when `raw_input` trims to nothing; the
    ///   list is untouched and nothing is written.
    /// - `ServiceError::Store` when persisting the appended tasks fails.
    pub fn add(&mut self, raw_input: &str) -> ServiceResult<usize> {
        if raw_input.trim().is_empty() {
            return Err(ServiceError::EmptyInput);
        }

        let titles: Vec<&str> = raw_input
            .split(',')
            .map(str::trim)
            .filter(|title| !title.is_empty())
            .collect();

        let added = titles.len();
        if added == 0 {
            // Input like ", ," passes the empty check but yields nothing;
            // the list did not change, so there is nothing to persist.
            return Ok(0);
        }

        for title in titles {
            self.tasks.push(Task::new(title));
        }
        self.store.save(&self.tasks)?;

        info!(
            "event=task_add module=service status=ok added={} total={}",
            added,
            self.tasks.len()
        );
        Ok(added)
    }

    /// Returns the 1-based enumerated listing of all tasks.
    ///
    /// Pure read: no mutation, no persistence call.
    pub fn view(&self) -> Vec<TaskLine> {
        self.tasks
            .iter()
            .enumerate()
            .map(|(index, task)| TaskLine {
                position: index + 1,
                title: task.title.clone(),
                done: task.done,
            })
            .collect()
    }

    /// Marks the task selected by `raw_choice` as done and persists.
    ///
    /// # Contract
    /// - `0`, `c`, `C` (after trim) cancel without touching the list.
    /// - Non-numeric input is `InvalidInput`; out-of-bounds numbers are
    ///   `InvalidIndex`; neither mutates nor writes.
    /// - An already-done task yields `AlreadyDone` with no extra write.
    ///
    /// # Errors
    /// - `ServiceError::Store` when persisting the completed task fails.
    pub fn mark_done(&mut self, raw_choice: &str) -> ServiceResult<MarkDoneOutcome> {
        let index = match self.select(raw_choice) {
            Selection::Cancelled => return Ok(MarkDoneOutcome::Cancelled),
            Selection::InvalidInput => return Ok(MarkDoneOutcome::InvalidInput),
            Selection::InvalidIndex => return Ok(MarkDoneOutcome::InvalidIndex),
            Selection::Index(index) => index,
        };

        if self.tasks[index].done {
            return Ok(MarkDoneOutcome::AlreadyDone);
        }

        self.tasks[index].mark_done();
        self.store.save(&self.tasks)?;

        info!(
            "event=task_mark_done module=service status=ok position={}",
            index + 1
        );
        Ok(MarkDoneOutcome::Marked)
    }

    /// Deletes the task selected by `raw_choice` and persists.
    ///
    /// # Contract
    /// - Same cancel / parse / bounds rules as [`Self::mark_done`].
    /// - On success later tasks shift down one position and the removed
    ///   task's title is returned in the outcome.
    ///
    /// # Errors
    /// - `ServiceError::Store` when persisting the shrunken list fails; the
    ///   in-memory removal has already happened at that point.
    pub fn delete(&mut self, raw_choice: &str) -> ServiceResult<DeleteOutcome> {
        let index = match self.select(raw_choice) {
            Selection::Cancelled => return Ok(DeleteOutcome::Cancelled),
            Selection::InvalidInput => return Ok(DeleteOutcome::InvalidInput),
            Selection::InvalidIndex => return Ok(DeleteOutcome::InvalidIndex),
            Selection::Index(index) => index,
        };

        let removed = self.tasks.remove(index);
        self.store.save(&self.tasks)?;

        info!(
            "event=task_delete module=service status=ok position={} remaining={}",
            index + 1,
            self.tasks.len()
        );
        Ok(DeleteOutcome::Deleted {
            title: removed.title,
        })
    }

    /// Resolves a raw prompt answer into a cancel / invalid / index outcome.
    fn select(&self, raw_choice: &str) -> Selection {
        let choice = raw_choice.trim();
        if matches!(choice, "0" | "c" | "C") {
            return Selection::Cancelled;
        }

        if choice.is_empty() || !choice.chars().all(|c| c.is_ascii_digit()) {
            return Selection::InvalidInput;
        }

        // Digit strings too large for usize are out of any list's bounds.
        match choice.parse::<usize>() {
            Ok(number) if (1..=self.tasks.len()).contains(&number) => {
                Selection::Index(number - 1)
            }
            _ => Selection::InvalidIndex,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{MarkDoneOutcome, TaskLine, TaskListService};
    use crate::store::task_store::MemoryStore;

    #[test]
    fn task_line_display_matches_listing_format() {
        let open = TaskLine {
            position: 1,
            title: "Buy milk".to_string(),
            done: false,
        };
        let done = TaskLine {
            position: 2,
            title: "Walk dog".to_string(),
            done: true,
        };
        assert_eq!(open.to_string(), "1. Buy milk - Not Done");
        assert_eq!(done.to_string(), "2. Walk dog - Done");
    }

    #[test]
    fn select_requires_plain_digit_input() {
        let mut service = TaskListService::load(MemoryStore::new()).unwrap();
        service.add("only task").unwrap();

        // Signed or decorated numbers are not accepted at the prompt.
        assert_eq!(
            service.mark_done("+1").unwrap(),
            MarkDoneOutcome::InvalidInput
        );
        assert_eq!(
            service.mark_done("-1").unwrap(),
            MarkDoneOutcome::InvalidInput
        );
        // "00" is digits but resolves to index zero, which no list has.
        assert_eq!(
            service.mark_done("00").unwrap(),
            MarkDoneOutcome::InvalidIndex
        );
    }
}
