//! Store abstraction for the todo collection.
//!
//! The store exclusively owns the authoritative collection of records; every
//! read and write goes through its interface. The trait is the seam between
//! the service layer and a concrete backend:
//!
//! - [`InMemoryTodoStore`]: process-local vector, used here in production and
//!   in tests
//! - a persistence-backed implementation can be swapped in without touching
//!   the service or HTTP layers

pub mod memory;

pub use memory::InMemoryTodoStore;

use async_trait::async_trait;
use thiserror::Error;
use todo_core::{NewTodo, Todo, TodoId, TodoPatch};

/// Errors surfaced by store backends.
///
/// The in-memory store never fails; the variant exists for backends that can
/// (database connections, I/O).
#[derive(Debug, Error)]
pub enum StoreError {
    /// Backend failure while reading or writing records.
    #[error("store backend error: {0}")]
    Backend(String),
}

/// Data access for the todo collection.
///
/// All operations are async so a persistence-backed implementation can
/// suspend on I/O; the in-memory implementation resolves immediately.
#[async_trait]
pub trait TodoStore: Send + Sync {
    /// All todos, in insertion order.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] when the backend fails.
    async fn get_all(&self) -> Result<Vec<Todo>, StoreError>;

    /// The todo with the given id, or `None`.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] when the backend fails.
    async fn get_by_id(&self, id: TodoId) -> Result<Option<Todo>, StoreError>;

    /// Stores a new record under a freshly assigned id and returns it.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] when the backend fails.
    async fn create(&self, new: NewTodo) -> Result<Todo, StoreError>;

    /// Merges the supplied fields into an existing record.
    ///
    /// `id` and `dateCreated` never change, and a `completed` transition
    /// syncs `dateCompleted`. Returns `None` (mutating nothing) when the id
    /// is unknown. The caller is expected to have validated the patch.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] when the backend fails.
    async fn update(&self, id: TodoId, patch: TodoPatch) -> Result<Option<Todo>, StoreError>;

    /// Flips `completed`: `dateCompleted` becomes today when the todo is now
    /// complete, `None` when it is not. Returns `None` when the id is
    /// unknown.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] when the backend fails.
    async fn toggle_completed(&self, id: TodoId) -> Result<Option<Todo>, StoreError>;

    /// Removes the record. Returns whether a record was found and removed.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] when the backend fails.
    async fn delete(&self, id: TodoId) -> Result<bool, StoreError>;
}
