//! Scripted console session tests.
//!
//! Each test feeds a scripted sequence of menu choices and field values to
//! the console loop with the plain palette, then asserts on the captured
//! output.

use std::sync::Arc;

use tally::console::{ConsoleSession, Palette};
use tally::task::adapters::memory::InMemoryTaskStore;
use tally::task::services::TaskOperations;

fn run_session(script: &str) -> String {
    let operations = TaskOperations::new(Arc::new(InMemoryTaskStore::new()));
    let mut output = Vec::new();
    ConsoleSession::new(
        operations,
        script.as_bytes(),
        &mut output,
        Palette::plain(),
    )
    .run()
    .expect("session should run to completion");
    String::from_utf8(output).expect("console output should be UTF-8")
}

#[test]
fn session_opens_and_closes_with_banners() {
    let output = run_session("7\n");
    assert!(output.contains("WELCOME TO TALLY"));
    assert!(output.contains("Thank you for using Tally!"));
}

#[test]
fn end_of_input_ends_the_session_cleanly() {
    let output = run_session("");
    assert!(output.contains("Thank you for using Tally!"));
}

#[test]
fn adding_then_viewing_shows_the_task() {
    let output = run_session("1\nBuy milk\nsemi-skimmed\n2\n\n7\n");
    assert!(output.contains("Task added successfully! (ID: 1)"));
    assert!(output.contains("TOTAL TASKS: 1"));
    assert!(output.contains("Title: Buy milk"));
    assert!(output.contains("Description: semi-skimmed"));
    assert!(output.contains("○ Incomplete"));
}

#[test]
fn viewing_an_empty_list_reports_it() {
    let output = run_session("2\n\n7\n");
    assert!(output.contains("No tasks found. Your task list is empty!"));
}

#[test]
fn blank_title_is_rejected_with_an_error_line() {
    let output = run_session("1\n   \n\n7\n");
    assert!(output.contains("Error: title must not be empty"));
}

#[test]
fn updating_with_no_fields_reports_the_validation_error() {
    let output = run_session("1\nA\n\n3\n1\n\n\n7\n");
    assert!(output.contains("Error: provide at least one field to update"));
}

#[test]
fn updating_a_title_shows_the_new_card() {
    let output = run_session("1\nA\n\n3\n1\nRenamed\n\n7\n");
    assert!(output.contains("Task (ID: 1) updated successfully!"));
    assert!(output.contains("Title: Renamed"));
}

#[test]
fn deleting_a_task_names_it() {
    let output = run_session("1\nLaundry\n\n4\n1\n7\n");
    assert!(output.contains("Task 'Laundry' (ID: 1) deleted successfully!"));
}

#[test]
fn deleting_a_missing_task_reports_not_found() {
    let output = run_session("4\n5\n7\n");
    assert!(output.contains("Error: task with id 5 not found"));
}

#[test]
fn non_numeric_id_input_reports_a_parse_error() {
    let output = run_session("4\nabc\n7\n");
    assert!(output.contains("Error: please enter a valid number"));
}

#[test]
fn toggling_reports_the_new_status_and_filtering_finds_it() {
    let output = run_session("1\nA\n\n5\n1\n2\ncomplete\n7\n");
    assert!(output.contains("Task 'A' (ID: 1) marked as complete!"));
    assert!(output.contains("✓ Complete"));
}

#[test]
fn unrecognized_filter_text_lists_all_tasks() {
    let output = run_session("1\nA\n\n2\nfinished\n7\n");
    assert!(output.contains("TOTAL TASKS: 1"));
}

#[test]
fn summary_shows_counts() {
    let output = run_session("1\nA\n\n1\nB\n\n5\n1\n6\n7\n");
    assert!(output.contains("TASK SUMMARY"));
    assert!(output.contains("Total Tasks:"));
    assert!(output.contains("Completed:"));
    assert!(output.contains("Incomplete:"));
}

#[test]
fn invalid_menu_choice_reports_an_error() {
    let output = run_session("9\n7\n");
    assert!(output.contains("Error: invalid choice, enter a number between 1 and 7"));
}
