// Recoverable outcomes of store operations

use crate::models::TaskId;

/// Error type for task store operations
///
/// None of these are fatal. Callers translate them into user-visible
/// notices.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    #[error("title cannot be empty")]
    EmptyTitle,
    #[error("task not found: {0}")]
    NotFound(TaskId),
    #[error("no changes made to task {0}")]
    NoChange(TaskId),
    #[error("unknown filter: {0} (expected all, incomplete or completed)")]
    InvalidFilter(String),
    #[error("motivational message list cannot be empty")]
    NoMessages,
}
