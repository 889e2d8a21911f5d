//! Shared helpers for the TUI.

pub mod clipboard;
pub mod field;
pub mod fx;
pub mod task;

pub use clipboard::Clipboard;
pub use field::FieldBuffer;
pub use fx::{Entrance, Pulse, Shake, SubmitState};
pub use task::{TaskCompleted, TaskId, TaskKind, TaskSeq, TaskStarted, TaskState, Tasks};
