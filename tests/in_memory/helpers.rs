//! Shared fixtures for in-memory integration tests.

use rstest::fixture;
use std::sync::Arc;
use tally::task::adapters::memory::InMemoryTaskStore;
use tally::task::domain::Task;
use tally::task::services::{AddTaskRequest, TaskOperations};

/// Operation set over a fresh, empty in-memory store.
#[fixture]
pub fn operations() -> TaskOperations<InMemoryTaskStore> {
    TaskOperations::new(Arc::new(InMemoryTaskStore::new()))
}

/// Adds a task with the given title and an empty description.
pub fn add_titled(operations: &TaskOperations<InMemoryTaskStore>, title: &str) -> Task {
    operations
        .add(AddTaskRequest::new(title))
        .expect("add should succeed")
}
