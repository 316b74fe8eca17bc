//! Application services for task operations.

mod operations;

pub use operations::{
    AddTaskRequest, StatusFilter, TaskOperationError, TaskOperationResult, TaskOperations,
    TaskSummary, UpdateTaskRequest,
};
