//! Domain model for the task list.
//!
//! # Responsibility
//! - Define the canonical task record used by core business logic.
//! - Keep one shape shared by the store, the service, and the CLI view.
//!
//! # Invariants
//! - A task is identified by its position in the ordered list, nothing else.
//! - A task title is never empty after trimming.

pub mod task;
