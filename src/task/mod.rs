//! Task storage and operations for Tally.
//!
//! This module implements the task list core: creating, updating, deleting,
//! listing, and toggling tasks against an in-memory store that assigns
//! monotonically increasing identifiers. The module follows hexagonal
//! architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
