//! Core domain logic for the task list manager.
//! This crate is the single source of truth for business invariants.

pub mod logging;
pub mod model;
pub mod service;
pub mod store;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::task::{Task, TaskValidationError};
pub use service::task_list_service::{
    DeleteOutcome, MarkDoneOutcome, ServiceError, ServiceResult, TaskLine, TaskListService,
};
pub use store::task_store::{
    JsonFileStore, MemoryStore, StoreError, StoreResult, TaskStore, DEFAULT_STORE_FILE,
};
