//! Interactive console entry point for the Tally task list.
//!
//! All task state is held in memory and discarded when the session ends.

use std::io;
use std::sync::Arc;

use tally::console::{ConsoleSession, Palette};
use tally::task::adapters::memory::InMemoryTaskStore;
use tally::task::services::TaskOperations;

fn main() -> io::Result<()> {
    let operations = TaskOperations::new(Arc::new(InMemoryTaskStore::new()));
    let stdin = io::stdin();
    let stdout = io::stdout();
    ConsoleSession::new(operations, stdin.lock(), stdout.lock(), Palette::ansi()).run()
}
