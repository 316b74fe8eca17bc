//! Task record and its mutation surface.

use super::{TaskDescription, TaskId, TaskTitle};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A unit of work: identifier, title, description, completion flag.
///
/// Fields are private; callers receive owned clones from a store and apply
/// changes through the explicit mutators here, then write the new value back
/// through the store. The serialized form is the stable four-field
/// representation consumed by output collaborators, in exactly this order:
/// `id`, `title`, `description`, `completed`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    id: TaskId,
    title: TaskTitle,
    description: TaskDescription,
    completed: bool,
}

impl Task {
    /// Creates a new incomplete task.
    #[must_use]
    pub const fn new(id: TaskId, title: TaskTitle, description: TaskDescription) -> Self {
        Self {
            id,
            title,
            description,
            completed: false,
        }
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> TaskId {
        self.id
    }

    /// Returns the task title.
    #[must_use]
    pub const fn title(&self) -> &TaskTitle {
        &self.title
    }

    /// Returns the task description.
    #[must_use]
    pub const fn description(&self) -> &TaskDescription {
        &self.description
    }

    /// Returns `true` when the task is marked complete.
    #[must_use]
    pub const fn completed(&self) -> bool {
        self.completed
    }

    /// Replaces the title.
    pub fn rename(&mut self, title: TaskTitle) {
        self.title = title;
    }

    /// Replaces the description.
    pub fn set_description(&mut self, description: TaskDescription) {
        self.description = description;
    }

    /// Sets the completion flag to an explicit state.
    pub const fn set_completed(&mut self, completed: bool) {
        self.completed = completed;
    }

    /// Flips the completion flag.
    pub const fn toggle_completed(&mut self) {
        self.completed = !self.completed;
    }
}

impl fmt::Display for Task {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let status = if self.completed {
            "Complete"
        } else {
            "Incomplete"
        };
        write!(
            f,
            "ID: {}\nTitle: {}\nDescription: {}\nStatus: {status}",
            self.id, self.title, self.description
        )
    }
}
