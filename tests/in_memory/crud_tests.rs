//! End-to-end create/update/delete/toggle flows through the public API.

use rstest::rstest;
use tally::task::adapters::memory::InMemoryTaskStore;
use tally::task::services::{
    AddTaskRequest, TaskOperationError, TaskOperations, UpdateTaskRequest,
};

use super::helpers::{add_titled, operations};

type TestOperations = TaskOperations<InMemoryTaskStore>;

#[rstest]
fn full_task_lifecycle(operations: TestOperations) {
    let created = operations
        .add(AddTaskRequest::new("Plan sprint").with_description("draft the board"))
        .expect("add should succeed");
    assert_eq!(created.id().value(), 1);
    assert!(!created.completed());

    let renamed = operations
        .update(UpdateTaskRequest::new(1).with_title("Plan sprint 42"))
        .expect("update should succeed");
    assert_eq!(renamed.title().as_str(), "Plan sprint 42");
    assert_eq!(renamed.description().as_str(), "draft the board");

    let completed = operations.toggle(1, None).expect("toggle should succeed");
    assert!(completed.completed());

    let deleted = operations.delete(1).expect("delete should succeed");
    assert_eq!(deleted, completed);
    assert!(operations.list(None).expect("list should succeed").is_empty());
}

#[rstest]
fn fetched_tasks_are_values_not_aliases(operations: TestOperations) {
    add_titled(&operations, "Immutable until written back");

    let mut local_copy = operations
        .list(None)
        .expect("list should succeed")
        .into_iter()
        .next()
        .expect("one task should be stored");
    local_copy.toggle_completed();

    // Mutating the fetched copy must not change store state.
    let stored = operations
        .list(None)
        .expect("list should succeed")
        .into_iter()
        .next()
        .expect("one task should be stored");
    assert!(!stored.completed());
}

#[rstest]
fn failed_operations_leave_state_untouched(operations: TestOperations) {
    add_titled(&operations, "Only task");

    let blank_add = operations.add(AddTaskRequest::new("   "));
    assert!(matches!(blank_add, Err(TaskOperationError::InvalidInput(_))));

    let missing_delete = operations.delete(99);
    assert!(matches!(missing_delete, Err(TaskOperationError::NotFound(_))));

    let empty_update = operations.update(UpdateTaskRequest::new(1));
    assert!(matches!(empty_update, Err(TaskOperationError::InvalidInput(_))));

    let tasks = operations.list(None).expect("list should succeed");
    assert_eq!(tasks.len(), 1);
    assert_eq!(
        tasks.first().map(|task| task.title().as_str()),
        Some("Only task")
    );

    // The rejected add consumed no identifier.
    assert_eq!(add_titled(&operations, "Second").id().value(), 2);
}

#[rstest]
fn ids_remain_unique_across_deletions(operations: TestOperations) {
    for title in ["A", "B", "C"] {
        add_titled(&operations, title);
    }
    operations.delete(3).expect("delete should succeed");
    operations.delete(1).expect("delete should succeed");

    let latest = add_titled(&operations, "D");
    assert_eq!(latest.id().value(), 4);

    let ids: Vec<u64> = operations
        .list(None)
        .expect("list should succeed")
        .iter()
        .map(|task| task.id().value())
        .collect();
    assert_eq!(ids, [2, 4]);
}
