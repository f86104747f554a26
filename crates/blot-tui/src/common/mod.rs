//! Shared building blocks for the TUI features.

pub mod task;
pub mod text;

pub use task::{TaskCompleted, TaskId, TaskKind, TaskSeq, TaskStarted, Tasks};
pub use text::TextField;
