//! Error types for task domain validation.

use thiserror::Error;

/// Errors returned while constructing domain task values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TaskDomainError {
    /// The task identifier is zero.
    #[error("invalid task id {0}, expected a positive integer")]
    InvalidTaskId(u64),

    /// The title is empty after trimming.
    #[error("title must not be empty")]
    EmptyTitle,

    /// The trimmed title exceeds the maximum length.
    #[error("title exceeds maximum length of {max} characters (got {actual})")]
    TitleTooLong {
        /// Maximum permitted character count.
        max: usize,
        /// Character count of the rejected value.
        actual: usize,
    },

    /// The trimmed description exceeds the maximum length.
    #[error("description exceeds maximum length of {max} characters (got {actual})")]
    DescriptionTooLong {
        /// Maximum permitted character count.
        max: usize,
        /// Character count of the rejected value.
        actual: usize,
    },

    /// An update was requested without any field to change.
    #[error("provide at least one field to update (title or description)")]
    NoFieldsToUpdate,
}
