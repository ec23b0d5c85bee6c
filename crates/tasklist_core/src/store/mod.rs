//! Persistence boundary for the task list.
//!
//! # Responsibility
//! - Define the load/save contract for the full task collection.
//! - Isolate file-format and filesystem details from service orchestration.
//!
//! # Invariants
//! - Store writes validate every task before touching the filesystem.
//! - Store reads reject corrupt persisted state instead of masking it.
//! - A save is all-or-nothing: partial writes are never observable on a
//!   subsequent load.

pub mod task_store;
