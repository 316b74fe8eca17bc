//! In-memory task store with sequential identifier assignment.

use std::sync::{Arc, RwLock};

use crate::task::{
    domain::{Task, TaskId},
    ports::{TaskStore, TaskStoreError, TaskStoreResult},
};

/// Thread-safe in-memory task store.
///
/// Tasks live in an ordered `Vec` guarded by a single coarse lock: none of
/// the store operations tolerates interleaved partial execution, so the
/// whole state is read or written in one critical section. `next_id`
/// read-then-increment is atomic under the write lock, and an update racing
/// a delete of the same id resolves to [`TaskStoreError::NotFound`].
#[derive(Debug, Clone, Default)]
pub struct InMemoryTaskStore {
    state: Arc<RwLock<InMemoryTaskState>>,
}

#[derive(Debug)]
struct InMemoryTaskState {
    tasks: Vec<Task>,
    next_id: TaskId,
}

impl Default for InMemoryTaskState {
    fn default() -> Self {
        Self {
            tasks: Vec::new(),
            next_id: TaskId::FIRST,
        }
    }
}

impl InMemoryTaskStore {
    /// Creates an empty store with the identifier counter at
    /// [`TaskId::FIRST`].
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn read_state(&self) -> TaskStoreResult<std::sync::RwLockReadGuard<'_, InMemoryTaskState>> {
        self.state
            .read()
            .map_err(|err| TaskStoreError::storage(std::io::Error::other(err.to_string())))
    }

    fn write_state(&self) -> TaskStoreResult<std::sync::RwLockWriteGuard<'_, InMemoryTaskState>> {
        self.state
            .write()
            .map_err(|err| TaskStoreError::storage(std::io::Error::other(err.to_string())))
    }
}

impl TaskStore for InMemoryTaskStore {
    fn add(&self, task: Task) -> TaskStoreResult<Task> {
        let mut state = self.write_state()?;
        state.tasks.push(task.clone());
        Ok(task)
    }

    fn remove(&self, id: TaskId) -> TaskStoreResult<Option<Task>> {
        let mut state = self.write_state()?;
        let position = state.tasks.iter().position(|task| task.id() == id);
        Ok(position.map(|index| state.tasks.remove(index)))
    }

    fn get(&self, id: TaskId) -> TaskStoreResult<Option<Task>> {
        let state = self.read_state()?;
        Ok(state.tasks.iter().find(|task| task.id() == id).cloned())
    }

    fn get_all(&self) -> TaskStoreResult<Vec<Task>> {
        let state = self.read_state()?;
        Ok(state.tasks.clone())
    }

    fn update(&self, task: &Task) -> TaskStoreResult<()> {
        let mut state = self.write_state()?;
        let slot = state
            .tasks
            .iter_mut()
            .find(|stored| stored.id() == task.id())
            .ok_or(TaskStoreError::NotFound(task.id()))?;
        *slot = task.clone();
        Ok(())
    }

    fn next_id(&self) -> TaskStoreResult<TaskId> {
        let mut state = self.write_state()?;
        let id = state.next_id;
        state.next_id = id.successor();
        Ok(id)
    }

    fn count(&self) -> TaskStoreResult<usize> {
        let state = self.read_state()?;
        Ok(state.tasks.len())
    }

    fn clear(&self) -> TaskStoreResult<()> {
        let mut state = self.write_state()?;
        state.tasks.clear();
        state.next_id = TaskId::FIRST;
        Ok(())
    }
}
