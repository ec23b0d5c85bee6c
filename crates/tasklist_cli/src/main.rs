//! Interactive menu loop for the task list manager.
//!
//! # Responsibility
//! - Wire an explicit store/service pair and drive it from stdin prompts.
//! - Keep all menu wording and status lines out of the core crate.

use log::error;
use std::io::{self, BufRead, Write};
use std::process::ExitCode;
use tasklist_core::{
    DeleteOutcome, JsonFileStore, MarkDoneOutcome, ServiceError, TaskListService,
};

const LOG_SUBDIR: &str = ".tasklist/logs";

fn main() -> ExitCode {
    init_logging_best_effort();

    let store = JsonFileStore::with_default_path();
    let mut service = match TaskListService::load(store) {
        Ok(service) => service,
        Err(err) => {
            // Corrupt or unreadable store data is surfaced, never reset.
            eprintln!("Failed to load tasks: {err}");
            return ExitCode::FAILURE;
        }
    };

    let stdin = io::stdin();
    let mut input = stdin.lock();

    loop {
        show_menu();
        let choice = match prompt(&mut input, "Enter choice (1-5): ") {
            Some(choice) => choice,
            None => break,
        };

        match choice.as_str() {
            "1" => add_tasks(&mut service, &mut input),
            "2" => view_tasks(&service),
            "3" => mark_task_done(&mut service, &mut input),
            "4" => delete_task(&mut service, &mut input),
            "5" => {
                println!("Exiting program. Goodbye!");
                break;
            }
            _ => println!("Invalid choice. Please enter a number from 1 to 5."),
        }
    }

    ExitCode::SUCCESS
}

fn show_menu() {
    println!("\n--- Simple To-Do List Manager ---");
    println!("1. Add Task");
    println!("2. View Tasks");
    println!("3. Mark Task as Done");
    println!("4. Delete Task");
    println!("5. Exit");
}

fn add_tasks(service: &mut TaskListService<JsonFileStore>, input: &mut impl BufRead) {
    let raw = match prompt(
        input,
        "Enter task(s) (separate multiple tasks with commas): ",
    ) {
        Some(raw) => raw,
        None => return,
    };

    match service.add(&raw) {
        Ok(added) => println!("{added} task(s) added!"),
        Err(ServiceError::EmptyInput) => println!("Task title cannot be empty!"),
        Err(err) => report_store_failure("add", &err),
    }
}

fn view_tasks(service: &TaskListService<JsonFileStore>) {
    let lines = service.view();
    if lines.is_empty() {
        println!("No tasks available.");
        return;
    }

    println!("\nYou have {} task(s):", lines.len());
    for line in lines {
        let status = if line.done { "✅ Done" } else { "❌ Not Done" };
        println!("{}. {} - {}", line.position, line.title, status);
    }
}

fn mark_task_done(service: &mut TaskListService<JsonFileStore>, input: &mut impl BufRead) {
    if service.is_empty() {
        println!("No tasks to mark as done.");
        return;
    }

    view_tasks(service);
    let choice = match prompt(input, "Enter task number to mark as done (0 or c to cancel): ") {
        Some(choice) => choice,
        None => return,
    };

    match service.mark_done(&choice) {
        Ok(MarkDoneOutcome::Cancelled) => println!("Cancelled."),
        Ok(MarkDoneOutcome::InvalidInput) => println!("Please enter a valid number."),
        Ok(MarkDoneOutcome::InvalidIndex) => {
            println!("Invalid task number. Please try again.")
        }
        Ok(MarkDoneOutcome::AlreadyDone) => println!("Task already marked as done!"),
        Ok(MarkDoneOutcome::Marked) => println!("Task marked as done!"),
        Err(err) => report_store_failure("mark_done", &err),
    }
}

fn delete_task(service: &mut TaskListService<JsonFileStore>, input: &mut impl BufRead) {
    if service.is_empty() {
        println!("No tasks to delete.");
        return;
    }

    view_tasks(service);
    let choice = match prompt(input, "Enter task number to delete (0 or c to cancel): ") {
        Some(choice) => choice,
        None => return,
    };

    match service.delete(&choice) {
        Ok(DeleteOutcome::Cancelled) => println!("Cancelled."),
        Ok(DeleteOutcome::InvalidInput) => println!("Please enter a valid number."),
        Ok(DeleteOutcome::InvalidIndex) => {
            println!("Invalid task number. Please try again.")
        }
        Ok(DeleteOutcome::Deleted { title }) => println!("Task '{title}' deleted."),
        Err(err) => report_store_failure("delete", &err),
    }
}

/// Prints `text` without a trailing newline and reads one trimmed line.
///
/// Returns `None` on EOF or a broken stdin, which ends the session.
fn prompt(input: &mut impl BufRead, text: &str) -> Option<String> {
    print!("{text}");
    let _ = io::stdout().flush();

    let mut line = String::new();
    match input.read_line(&mut line) {
        Ok(0) | Err(_) => None,
        Ok(_) => Some(line.trim().to_string()),
    }
}

fn report_store_failure(operation: &str, err: &ServiceError) {
    // The in-memory list stays authoritative for the session; the user can
    // retry once the underlying problem (disk full, permissions) is fixed.
    error!("event=store_failure module=cli operation={operation} error={err}");
    eprintln!("Failed to save tasks: {err}");
}

fn init_logging_best_effort() {
    let log_dir = match std::env::current_dir() {
        Ok(cwd) => cwd.join(LOG_SUBDIR),
        Err(_) => return,
    };
    let Some(log_dir) = log_dir.to_str() else {
        return;
    };

    if let Err(err) = tasklist_core::init_logging(tasklist_core::default_log_level(), log_dir) {
        eprintln!("Warning: logging disabled: {err}");
    }
}
