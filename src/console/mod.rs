//! Console front-end for the task list.
//!
//! The console layer is a presentation collaborator over the task core: it
//! parses raw text read from an input source into operation arguments,
//! invokes the operation set, and renders results. Rendering is split into
//! pure string builders ([`render`]) so the interactive loop ([`menu`]) can
//! run against any `BufRead`/`Write` pair, terminal or test buffer alike.

pub mod menu;
pub mod render;

pub use menu::ConsoleSession;
pub use render::Palette;
