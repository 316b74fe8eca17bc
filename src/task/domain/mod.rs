//! Domain model for the task list.
//!
//! The task domain models validated task records: positive integer
//! identifiers, bounded title and description text, and a completion flag,
//! while keeping all storage and presentation concerns outside of the
//! domain boundary.

mod error;
mod fields;
mod ids;
mod task;

pub use error::TaskDomainError;
pub use fields::{TaskDescription, TaskTitle};
pub use ids::TaskId;
pub use task::Task;
