//! Error types for todo validation.

use thiserror::Error;

/// Validation errors produced while building or patching a todo.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TodoError {
    /// A todo must have a non-empty title.
    #[error("Title is required")]
    TitleRequired,
}
