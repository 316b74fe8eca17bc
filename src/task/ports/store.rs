//! Store port for task persistence, lookup, and identifier assignment.

use crate::task::domain::{Task, TaskId};
use std::sync::Arc;
use thiserror::Error;

/// Result type for task store operations.
pub type TaskStoreResult<T> = Result<T, TaskStoreError>;

/// Task storage contract.
///
/// A store owns the ordered task collection and the identifier counter.
/// Lookups are linear; the expected scale is a single user's in-memory list,
/// so no index structure is required. Reads hand out owned clones: mutating
/// a returned task does not touch store state until it is written back with
/// [`TaskStore::update`].
pub trait TaskStore: Send + Sync {
    /// Appends a task to the collection, preserving insertion order.
    ///
    /// The caller guarantees identifier uniqueness by sourcing the id from
    /// [`TaskStore::next_id`]; no duplicate check is performed. Returns the
    /// stored task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskStoreError::Storage`] when the backing state is
    /// unavailable.
    fn add(&self, task: Task) -> TaskStoreResult<Task>;

    /// Removes the task with the matching id, preserving the relative order
    /// of the remaining tasks.
    ///
    /// Returns the removed task, or `None` when no task matches.
    ///
    /// # Errors
    ///
    /// Returns [`TaskStoreError::Storage`] when the backing state is
    /// unavailable.
    fn remove(&self, id: TaskId) -> TaskStoreResult<Option<Task>>;

    /// Finds a task by identifier.
    ///
    /// Returns `None` when the task does not exist.
    ///
    /// # Errors
    ///
    /// Returns [`TaskStoreError::Storage`] when the backing state is
    /// unavailable.
    fn get(&self, id: TaskId) -> TaskStoreResult<Option<Task>>;

    /// Returns a defensive copy of all tasks in insertion order.
    ///
    /// # Errors
    ///
    /// Returns [`TaskStoreError::Storage`] when the backing state is
    /// unavailable.
    fn get_all(&self) -> TaskStoreResult<Vec<Task>>;

    /// Writes back a modified task over the stored record with the same id.
    ///
    /// # Errors
    ///
    /// Returns [`TaskStoreError::NotFound`] when the task no longer exists
    /// (for example, deleted between fetch and write-back).
    fn update(&self, task: &Task) -> TaskStoreResult<()>;

    /// Returns the current counter value and increments it.
    ///
    /// Identifiers start at [`TaskId::FIRST`], increase monotonically, and
    /// are never reused within a store's lifetime.
    ///
    /// # Errors
    ///
    /// Returns [`TaskStoreError::Storage`] when the backing state is
    /// unavailable.
    fn next_id(&self) -> TaskStoreResult<TaskId>;

    /// Returns the number of tasks currently stored.
    ///
    /// # Errors
    ///
    /// Returns [`TaskStoreError::Storage`] when the backing state is
    /// unavailable.
    fn count(&self) -> TaskStoreResult<usize>;

    /// Empties the collection and resets the counter to [`TaskId::FIRST`].
    ///
    /// Intended for full-reset scenarios such as test setup.
    ///
    /// # Errors
    ///
    /// Returns [`TaskStoreError::Storage`] when the backing state is
    /// unavailable.
    fn clear(&self) -> TaskStoreResult<()>;
}

/// Errors returned by task store implementations.
#[derive(Debug, Clone, Error)]
pub enum TaskStoreError {
    /// The task was not found.
    #[error("task with id {0} not found")]
    NotFound(TaskId),

    /// Storage-layer failure.
    #[error("storage error: {0}")]
    Storage(Arc<dyn std::error::Error + Send + Sync>),
}

impl TaskStoreError {
    /// Wraps a storage-layer error.
    pub fn storage(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Storage(Arc::new(err))
    }
}
