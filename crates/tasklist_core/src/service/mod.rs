//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate store calls into the add/view/mark-done/delete use cases.
//! - Keep the CLI layer decoupled from storage details.

pub mod task_list_service;
