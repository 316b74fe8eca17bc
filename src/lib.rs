//! Tally: in-memory task list manager with a console menu.
//!
//! This crate provides the storage and operation layer for a single-user
//! task list, together with a colored text-menu front-end. All state lives
//! in memory for the duration of a session.
//!
//! # Architecture
//!
//! Tally follows hexagonal architecture principles:
//!
//! - **Domain**: Validated task values with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for task storage
//! - **Adapters**: Concrete implementations of ports (in-memory store)
//!
//! # Modules
//!
//! - [`task`]: Task records, storage contract, and the operation set
//! - [`console`]: Menu loop and rendering for the terminal front-end

pub mod console;
pub mod task;
