//! Shared infrastructure for the TUI.

mod task;
mod text_field;

pub use task::{TaskCompleted, TaskId, TaskKind, TaskSeq, TaskStarted, TaskState, Tasks};
pub use text_field::TextField;
