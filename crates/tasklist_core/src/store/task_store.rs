//! Task store contracts and implementations.
//!
//! # Responsibility
//! - Provide the stable load/save API over the persisted task collection.
//! - Keep JSON and filesystem details inside the persistence boundary.
//!
//! # Invariants
//! - `save` must call `Task::validate()` on every task before writing.
//! - `load` must surface unparsable or invalid persisted data as
//!   `StoreError::CorruptData`, never silently reset to an empty list.
//! - `save` writes a sibling temporary file and renames it over the target,
//!   so a crash mid-write leaves the previous file intact.

use crate::model::task::{Task, TaskValidationError};
use log::{error, info};
use std::cell::{Cell, RefCell};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// Default store file, relative to the working directory.
pub const DEFAULT_STORE_FILE: &str = "tasks.json";

pub type StoreResult<T> = Result<T, StoreError>;

/// Persistence error for the task store.
#[derive(Debug)]
pub enum StoreError {
    /// Filesystem-level failure while reading or writing the store file.
    Io(std::io::Error),
    /// Persisted data exists but is not a valid task collection.
    CorruptData { path: PathBuf, detail: String },
    /// A task violated model invariants before a write.
    Validation(TaskValidationError),
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(err) => write!(f, "{err}"),
            Self::CorruptData { path, detail } => {
                write!(f, "corrupt task data in `{}`: {detail}", path.display())
            }
            Self::Validation(err) => write!(f, "{err}"),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::CorruptData { .. } => None,
            Self::Validation(err) => Some(err),
        }
    }
}

impl From<std::io::Error> for StoreError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<TaskValidationError> for StoreError {
    fn from(value: TaskValidationError) -> Self {
        Self::Validation(value)
    }
}

/// Store interface for the full task collection.
///
/// Implementations load the whole collection into memory and rewrite it
/// whole on every save; there is no partial-update surface.
pub trait TaskStore {
    /// Returns the persisted collection, or an empty one when no persisted
    /// data exists yet.
    fn load(&self) -> StoreResult<Vec<Task>>;

    /// Replaces the persisted collection with exactly `tasks`.
    fn save(&self, tasks: &[Task]) -> StoreResult<()>;
}

impl<S: TaskStore + ?Sized> TaskStore for &S {
    fn load(&self) -> StoreResult<Vec<Task>> {
        (**self).load()
    }

    fn save(&self, tasks: &[Task]) -> StoreResult<()> {
        (**self).save(tasks)
    }
}

/// JSON-file-backed task store.
///
/// The file holds one JSON array of `{ "title": ..., "done": ... }` objects
/// in display order. A missing file means "no tasks yet", not an error.
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    /// Creates a store over the given file path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Creates a store over `tasks.json` in the working directory.
    pub fn with_default_path() -> Self {
        Self::new(DEFAULT_STORE_FILE)
    }

    /// Returns the store file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn corrupt(&self, detail: impl Into<String>) -> StoreError {
        StoreError::CorruptData {
            path: self.path.clone(),
            detail: detail.into(),
        }
    }
}

impl TaskStore for JsonFileStore {
    fn load(&self) -> StoreResult<Vec<Task>> {
        if !self.path.exists() {
            info!(
                "event=store_load module=store status=ok source=missing_file count=0 path={}",
                self.path.display()
            );
            return Ok(Vec::new());
        }

        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(err) => {
                error!(
                    "event=store_load module=store status=error error_code=io path={} error={}",
                    self.path.display(),
                    err
                );
                return Err(err.into());
            }
        };

        let tasks: Vec<Task> = match serde_json::from_str(&raw) {
            Ok(tasks) => tasks,
            Err(err) => {
                error!(
                    "event=store_load module=store status=error error_code=corrupt_data path={} error={}",
                    self.path.display(),
                    err
                );
                return Err(self.corrupt(err.to_string()));
            }
        };

        for (position, task) in tasks.iter().enumerate() {
            if let Err(err) = task.validate() {
                error!(
                    "event=store_load module=store status=error error_code=corrupt_data path={} entry={} error={}",
                    self.path.display(),
                    position + 1,
                    err
                );
                return Err(self.corrupt(format!("entry {}: {err}", position + 1)));
            }
        }

        info!(
            "event=store_load module=store status=ok source=file count={} path={}",
            tasks.len(),
            self.path.display()
        );
        Ok(tasks)
    }

    fn save(&self, tasks: &[Task]) -> StoreResult<()> {
        for task in tasks {
            task.validate()?;
        }

        let body = serde_json::to_string_pretty(tasks).map_err(io::Error::from)?;

        // Temp-then-rename keeps the previous file readable if the process
        // dies mid-write.
        let tmp = self.path.with_extension("json.tmp");
        if let Some(parent) = tmp.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let result = (|| -> StoreResult<()> {
            let mut file = fs::File::create(&tmp)?;
            file.write_all(body.as_bytes())?;
            file.sync_all()?;
            fs::rename(&tmp, &self.path)?;
            Ok(())
        })();

        match result {
            Ok(()) => {
                info!(
                    "event=store_save module=store status=ok count={} path={}",
                    tasks.len(),
                    self.path.display()
                );
                Ok(())
            }
            Err(err) => {
                let _ = fs::remove_file(&tmp);
                error!(
                    "event=store_save module=store status=error path={} error={}",
                    self.path.display(),
                    err
                );
                Err(err)
            }
        }
    }
}

/// In-process task store for isolated tests.
///
/// Counts saves so tests can assert that an operation performed (or skipped)
/// a persistence write.
#[derive(Default)]
pub struct MemoryStore {
    tasks: RefCell<Vec<Task>>,
    save_count: Cell<usize>,
}

impl MemoryStore {
    /// Creates an empty in-memory store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store pre-seeded with `tasks`.
    pub fn with_tasks(tasks: Vec<Task>) -> Self {
        Self {
            tasks: RefCell::new(tasks),
            save_count: Cell::new(0),
        }
    }

    /// Number of `save` calls observed since construction.
    pub fn save_count(&self) -> usize {
        self.save_count.get()
    }
}

impl TaskStore for MemoryStore {
    fn load(&self) -> StoreResult<Vec<Task>> {
        Ok(self.tasks.borrow().clone())
    }

    fn save(&self, tasks: &[Task]) -> StoreResult<()> {
        for task in tasks {
            task.validate()?;
        }
        *self.tasks.borrow_mut() = tasks.to_vec();
        self.save_count.set(self.save_count.get() + 1);
        Ok(())
    }
}
