//! Service layer between transport and store.
//!
//! Validates and normalizes input through the `todo-core` factory types
//! before delegating to the store; read and delete operations pass through.

use crate::store::{StoreError, TodoStore};
use std::sync::Arc;
use thiserror::Error;
use todo_core::{Clock, Todo, TodoDraft, TodoError, TodoId, TodoPatch};

/// Errors surfaced by service operations.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// Input failed validation.
    #[error(transparent)]
    Validation(#[from] TodoError),
    /// The store backend failed.
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Validation and orchestration over an injected [`TodoStore`].
///
/// Holds the store and clock behind trait objects so tests and a future
/// persistent backend wire in without code changes.
pub struct TodoService {
    store: Arc<dyn TodoStore>,
    clock: Arc<dyn Clock>,
}

impl TodoService {
    /// Creates a service over the given store and clock.
    #[must_use]
    pub fn new(store: Arc<dyn TodoStore>, clock: Arc<dyn Clock>) -> Self {
        Self { store, clock }
    }

    /// All todos, in insertion order.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError::Store`] when the store fails.
    pub async fn get_all(&self) -> Result<Vec<Todo>, ServiceError> {
        Ok(self.store.get_all().await?)
    }

    /// The todo with the given id, or `None`.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError::Store`] when the store fails.
    pub async fn get_by_id(&self, id: TodoId) -> Result<Option<Todo>, ServiceError> {
        Ok(self.store.get_by_id(id).await?)
    }

    /// Validates the draft and stores the new todo.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError::Validation`] when the title is missing or
    /// blank, [`ServiceError::Store`] when the store fails.
    pub async fn create(&self, draft: TodoDraft) -> Result<Todo, ServiceError> {
        let new = draft.build(self.clock.today())?;
        Ok(self.store.create(new).await?)
    }

    /// Validates the supplied fields and merges them into an existing todo.
    ///
    /// Returns `None` when the id is unknown.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError::Validation`] when a supplied title is blank,
    /// [`ServiceError::Store`] when the store fails.
    pub async fn update(
        &self,
        id: TodoId,
        patch: TodoPatch,
    ) -> Result<Option<Todo>, ServiceError> {
        let patch = patch.validated()?;
        Ok(self.store.update(id, patch).await?)
    }

    /// Flips the completed flag, syncing the completion date.
    ///
    /// Returns `None` when the id is unknown.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError::Store`] when the store fails.
    pub async fn toggle_completed(&self, id: TodoId) -> Result<Option<Todo>, ServiceError> {
        Ok(self.store.toggle_completed(id).await?)
    }

    /// Removes the todo. Returns whether a record was found and removed.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError::Store`] when the store fails.
    pub async fn delete(&self, id: TodoId) -> Result<bool, ServiceError> {
        Ok(self.store.delete(id).await?)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::store::InMemoryTodoStore;
    use chrono::NaiveDate;
    use todo_core::FixedClock;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 7, 8).unwrap()
    }

    fn service() -> TodoService {
        let clock = Arc::new(FixedClock(today()));
        let store = Arc::new(InMemoryTodoStore::new(clock.clone()));
        TodoService::new(store, clock)
    }

    #[tokio::test]
    async fn create_stamps_creation_date_and_assigns_id() {
        let service = service();
        let draft = TodoDraft {
            title: Some("New todo".to_string()),
            due_date: NaiveDate::from_ymd_opt(2025, 7, 20),
            ..TodoDraft::default()
        };

        let todo = service.create(draft).await.unwrap();
        assert_eq!(todo.title, "New todo");
        assert_eq!(todo.date_created, today());
        assert!(!todo.completed);
        assert_eq!(todo.date_completed, None);

        let fetched = service.get_by_id(todo.id).await.unwrap();
        assert_eq!(fetched, Some(todo));
    }

    #[tokio::test]
    async fn create_rejects_missing_title() {
        let service = service();
        let result = service.create(TodoDraft::default()).await;
        assert!(matches!(
            result,
            Err(ServiceError::Validation(TodoError::TitleRequired))
        ));
    }

    #[tokio::test]
    async fn update_without_title_succeeds() {
        let service = service();
        let todo = service
            .create(TodoDraft {
                title: Some("Water plants".to_string()),
                ..TodoDraft::default()
            })
            .await
            .unwrap();

        let patch = TodoPatch {
            content: Some("Indoor and balcony plants".to_string()),
            ..TodoPatch::default()
        };
        let updated = service.update(todo.id, patch).await.unwrap().unwrap();
        assert_eq!(updated.content, "Indoor and balcony plants");
        assert_eq!(updated.title, "Water plants");
    }

    #[tokio::test]
    async fn update_rejects_blank_title() {
        let service = service();
        let todo = service
            .create(TodoDraft {
                title: Some("Water plants".to_string()),
                ..TodoDraft::default()
            })
            .await
            .unwrap();

        let patch = TodoPatch {
            title: Some("  ".to_string()),
            ..TodoPatch::default()
        };
        let result = service.update(todo.id, patch).await;
        assert!(matches!(
            result,
            Err(ServiceError::Validation(TodoError::TitleRequired))
        ));
    }

    #[tokio::test]
    async fn update_unknown_id_returns_none() {
        let service = service();
        let patch = TodoPatch {
            content: Some("x".to_string()),
            ..TodoPatch::default()
        };
        assert!(service.update(TodoId::new(), patch).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn toggle_round_trip() {
        let service = service();
        let todo = service
            .create(TodoDraft {
                title: Some("Buy groceries".to_string()),
                ..TodoDraft::default()
            })
            .await
            .unwrap();

        let done = service.toggle_completed(todo.id).await.unwrap().unwrap();
        assert!(done.completed);
        assert_eq!(done.date_completed, Some(today()));

        let back = service.toggle_completed(todo.id).await.unwrap().unwrap();
        assert!(!back.completed);
        assert_eq!(back.date_completed, None);
    }

    #[tokio::test]
    async fn delete_is_reported_once() {
        let service = service();
        let todo = service
            .create(TodoDraft {
                title: Some("Clean workspace".to_string()),
                ..TodoDraft::default()
            })
            .await
            .unwrap();

        assert!(service.delete(todo.id).await.unwrap());
        assert!(!service.delete(todo.id).await.unwrap());
        assert_eq!(service.get_by_id(todo.id).await.unwrap(), None);
    }
}
