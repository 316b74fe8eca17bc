//! Service layer for the five task operations.
//!
//! Every operation validates its raw caller arguments in full before
//! touching the store, so a failed call leaves store state exactly as it
//! was, including the identifier counter: a rejected add never consumes an
//! id.

use crate::task::{
    domain::{Task, TaskDescription, TaskDomainError, TaskId, TaskTitle},
    ports::{TaskStore, TaskStoreError},
};
use serde::Serialize;
use std::sync::Arc;
use thiserror::Error;

/// Request payload for creating a task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddTaskRequest {
    title: String,
    description: String,
}

impl AddTaskRequest {
    /// Creates a request with the required title and an empty description.
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: String::new(),
        }
    }

    /// Sets the task description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }
}

/// Request payload for updating a task's title and/or description.
///
/// At least one of the two optional fields must be provided; a request with
/// neither is rejected before any store access.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateTaskRequest {
    id: u64,
    title: Option<String>,
    description: Option<String>,
}

impl UpdateTaskRequest {
    /// Creates a request targeting the given raw task id.
    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self {
            id,
            title: None,
            description: None,
        }
    }

    /// Sets a replacement title.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Sets a replacement description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// Status filter for listing tasks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusFilter {
    /// Only tasks marked complete.
    Complete,
    /// Only tasks not yet complete.
    Incomplete,
}

impl StatusFilter {
    /// Parses filter text supplied by an input collaborator.
    ///
    /// Returns `None` for anything other than `complete` or `incomplete`
    /// (case-insensitive, trimmed); unrecognized filter text means "no
    /// filter applied", never an error.
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "complete" => Some(Self::Complete),
            "incomplete" => Some(Self::Incomplete),
            _ => None,
        }
    }

    /// Returns `true` when the task's completion flag matches the filter.
    #[must_use]
    pub const fn matches(self, task: &Task) -> bool {
        match self {
            Self::Complete => task.completed(),
            Self::Incomplete => !task.completed(),
        }
    }
}

/// Derived task counts, computed in a single pass over the store.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct TaskSummary {
    /// Number of tasks currently stored.
    pub total: usize,
    /// Number of tasks marked complete.
    pub complete: usize,
    /// Number of tasks not yet complete.
    pub incomplete: usize,
}

/// Service-level errors for task operations.
///
/// The `Display` rendering of each variant is the human-readable failure
/// message handed to output collaborators.
#[derive(Debug, Clone, Error)]
pub enum TaskOperationError {
    /// Caller arguments were malformed or out of range; detected before any
    /// store access.
    #[error(transparent)]
    InvalidInput(#[from] TaskDomainError),

    /// A well-formed id matched no stored task.
    #[error("task with id {0} not found")]
    NotFound(TaskId),

    /// Storage-layer failure surfaced by the store adapter.
    #[error(transparent)]
    Store(TaskStoreError),
}

impl From<TaskStoreError> for TaskOperationError {
    fn from(err: TaskStoreError) -> Self {
        match err {
            TaskStoreError::NotFound(id) => Self::NotFound(id),
            other => Self::Store(other),
        }
    }
}

/// Result type for task operation services.
pub type TaskOperationResult<T> = Result<T, TaskOperationError>;

/// The task operation set: add, delete, update, list, and toggle-complete.
///
/// Stateless per call; all task state lives in the store.
#[derive(Debug, Clone)]
pub struct TaskOperations<S: TaskStore> {
    store: Arc<S>,
}

impl<S: TaskStore> TaskOperations<S> {
    /// Creates the operation set over the given store.
    #[must_use]
    pub const fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    /// Creates a new incomplete task from the request.
    ///
    /// The identifier is drawn from the store's counter only after the
    /// title and description pass validation.
    ///
    /// # Errors
    ///
    /// Returns [`TaskOperationError::InvalidInput`] when the title is empty
    /// after trimming or either field exceeds its length limit.
    pub fn add(&self, request: AddTaskRequest) -> TaskOperationResult<Task> {
        let title = TaskTitle::new(request.title)?;
        let description = TaskDescription::new(request.description)?;
        let id = self.store.next_id()?;
        Ok(self.store.add(Task::new(id, title, description))?)
    }

    /// Deletes the task with the given raw id and returns it.
    ///
    /// # Errors
    ///
    /// Returns [`TaskOperationError::InvalidInput`] when the id is not a
    /// positive integer, or [`TaskOperationError::NotFound`] when no task
    /// matches; neither leaves any state change behind.
    pub fn delete(&self, id: u64) -> TaskOperationResult<Task> {
        let task_id = TaskId::new(id)?;
        self.store
            .remove(task_id)?
            .ok_or(TaskOperationError::NotFound(task_id))
    }

    /// Applies the provided fields of the request to the matching task and
    /// returns the updated value.
    ///
    /// Omitted fields are left unchanged; provided fields are trimmed on
    /// write. A blank replacement title is rejected outright rather than
    /// silently keeping the old one.
    ///
    /// # Errors
    ///
    /// Returns [`TaskOperationError::InvalidInput`] when the id is invalid,
    /// both fields are omitted, or a provided field fails validation (all
    /// checked before the store fetch), and [`TaskOperationError::NotFound`]
    /// when no task matches the id.
    pub fn update(&self, request: UpdateTaskRequest) -> TaskOperationResult<Task> {
        let task_id = TaskId::new(request.id)?;
        if request.title.is_none() && request.description.is_none() {
            return Err(TaskDomainError::NoFieldsToUpdate.into());
        }
        let new_title = request.title.map(TaskTitle::new).transpose()?;
        let new_description = request.description.map(TaskDescription::new).transpose()?;

        let mut task = self
            .store
            .get(task_id)?
            .ok_or(TaskOperationError::NotFound(task_id))?;
        if let Some(title) = new_title {
            task.rename(title);
        }
        if let Some(description) = new_description {
            task.set_description(description);
        }
        self.store.update(&task)?;
        Ok(task)
    }

    /// Lists tasks in insertion order, optionally filtered by completion
    /// status.
    ///
    /// # Errors
    ///
    /// Returns [`TaskOperationError::Store`] when the store is unavailable;
    /// the operation itself always succeeds, possibly with an empty list.
    pub fn list(&self, filter: Option<StatusFilter>) -> TaskOperationResult<Vec<Task>> {
        let mut tasks = self.store.get_all()?;
        if let Some(status) = filter {
            tasks.retain(|task| status.matches(task));
        }
        Ok(tasks)
    }

    /// Computes total, complete, and incomplete counts in one pass.
    ///
    /// # Errors
    ///
    /// Returns [`TaskOperationError::Store`] when the store is unavailable.
    pub fn summary(&self) -> TaskOperationResult<TaskSummary> {
        let tasks = self.store.get_all()?;
        let summary = tasks
            .iter()
            .fold(TaskSummary::default(), |mut summary, task| {
                summary.total += 1;
                if task.completed() {
                    summary.complete += 1;
                } else {
                    summary.incomplete += 1;
                }
                summary
            });
        Ok(summary)
    }

    /// Sets or flips the completion flag of the matching task and returns
    /// the updated value.
    ///
    /// With `mark_as` given, the flag is set to that state (setting an
    /// already-complete task complete again succeeds); with `None`, the
    /// current value is flipped.
    ///
    /// # Errors
    ///
    /// Returns [`TaskOperationError::InvalidInput`] when the id is not a
    /// positive integer, or [`TaskOperationError::NotFound`] when no task
    /// matches.
    pub fn toggle(&self, id: u64, mark_as: Option<bool>) -> TaskOperationResult<Task> {
        let task_id = TaskId::new(id)?;
        let mut task = self
            .store
            .get(task_id)?
            .ok_or(TaskOperationError::NotFound(task_id))?;
        match mark_as {
            Some(state) => task.set_completed(state),
            None => task.toggle_completed(),
        }
        self.store.update(&task)?;
        Ok(task)
    }
}
