//! In-memory adapter for task storage.

mod store;

pub use store::InMemoryTaskStore;
