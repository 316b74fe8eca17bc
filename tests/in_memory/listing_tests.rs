//! Listing, summary, and serialized-representation integration tests.

use rstest::rstest;
use tally::task::adapters::memory::InMemoryTaskStore;
use tally::task::services::{AddTaskRequest, StatusFilter, TaskOperations, TaskSummary};

use super::helpers::{add_titled, operations};

type TestOperations = TaskOperations<InMemoryTaskStore>;

#[rstest]
fn filtered_listing_preserves_insertion_order(operations: TestOperations) {
    for title in ["A", "B", "C", "D"] {
        add_titled(&operations, title);
    }
    operations.toggle(4, Some(true)).expect("mark complete");
    operations.toggle(1, Some(true)).expect("mark complete");

    let complete: Vec<u64> = operations
        .list(Some(StatusFilter::Complete))
        .expect("list should succeed")
        .iter()
        .map(|task| task.id().value())
        .collect();
    assert_eq!(complete, [1, 4]);
}

#[rstest]
fn unrecognized_filter_text_lists_everything(operations: TestOperations) {
    add_titled(&operations, "A");
    add_titled(&operations, "B");

    let filter = StatusFilter::parse("finished");
    assert_eq!(filter, None);

    let tasks = operations.list(filter).expect("list should succeed");
    assert_eq!(tasks.len(), 2);
}

#[rstest]
fn summary_tracks_toggles_and_deletions(operations: TestOperations) {
    for title in ["A", "B", "C"] {
        add_titled(&operations, title);
    }
    operations.toggle(1, Some(true)).expect("mark complete");
    assert_eq!(
        operations.summary().expect("summary should succeed"),
        TaskSummary {
            total: 3,
            complete: 1,
            incomplete: 2,
        }
    );

    operations.delete(1).expect("delete should succeed");
    assert_eq!(
        operations.summary().expect("summary should succeed"),
        TaskSummary {
            total: 2,
            complete: 0,
            incomplete: 2,
        }
    );
}

#[rstest]
fn tasks_serialize_with_the_stable_four_field_shape(operations: TestOperations) {
    operations
        .add(AddTaskRequest::new("Ship release").with_description("tag and publish"))
        .expect("add should succeed");
    operations.toggle(1, Some(true)).expect("mark complete");

    let tasks = operations.list(None).expect("list should succeed");
    let json = serde_json::to_value(&tasks).expect("tasks should serialize");

    assert_eq!(
        json,
        serde_json::json!([{
            "id": 1,
            "title": "Ship release",
            "description": "tag and publish",
            "completed": true,
        }])
    );

    let rendered = serde_json::to_string(&tasks).expect("tasks should serialize");
    assert_eq!(
        rendered,
        r#"[{"id":1,"title":"Ship release","description":"tag and publish","completed":true}]"#
    );
}
