//! In-memory todo store.

use super::{StoreError, TodoStore};
use async_trait::async_trait;
use std::sync::Arc;
use todo_core::{Clock, NewTodo, Todo, TodoId, TodoPatch};
use tokio::sync::RwLock;

/// Store backed by a process-local vector, insertion-ordered.
///
/// The async `RwLock` makes each operation atomic under the multi-threaded
/// runtime. The collection lives only as long as the process; nothing is
/// persisted.
pub struct InMemoryTodoStore {
    todos: RwLock<Vec<Todo>>,
    clock: Arc<dyn Clock>,
}

impl InMemoryTodoStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self {
            todos: RwLock::new(Vec::new()),
            clock,
        }
    }

    /// Creates a store seeded with existing records.
    #[must_use]
    pub fn with_todos(clock: Arc<dyn Clock>, todos: Vec<Todo>) -> Self {
        Self {
            todos: RwLock::new(todos),
            clock,
        }
    }
}

#[async_trait]
impl TodoStore for InMemoryTodoStore {
    async fn get_all(&self) -> Result<Vec<Todo>, StoreError> {
        Ok(self.todos.read().await.clone())
    }

    async fn get_by_id(&self, id: TodoId) -> Result<Option<Todo>, StoreError> {
        Ok(self.todos.read().await.iter().find(|t| t.id == id).cloned())
    }

    async fn create(&self, new: NewTodo) -> Result<Todo, StoreError> {
        let todo = new.into_todo(TodoId::new());
        self.todos.write().await.push(todo.clone());
        Ok(todo)
    }

    async fn update(&self, id: TodoId, patch: TodoPatch) -> Result<Option<Todo>, StoreError> {
        let mut todos = self.todos.write().await;
        let Some(todo) = todos.iter_mut().find(|t| t.id == id) else {
            return Ok(None);
        };

        if let Some(title) = patch.title {
            todo.title = title;
        }
        if let Some(content) = patch.content {
            todo.content = content;
        }
        if let Some(due_date) = patch.due_date {
            todo.due_date = due_date;
        }
        if let Some(completed) = patch.completed {
            if completed != todo.completed {
                todo.completed = completed;
                todo.date_completed = completed.then(|| self.clock.today());
            }
        }

        Ok(Some(todo.clone()))
    }

    async fn toggle_completed(&self, id: TodoId) -> Result<Option<Todo>, StoreError> {
        let mut todos = self.todos.write().await;
        let Some(todo) = todos.iter_mut().find(|t| t.id == id) else {
            return Ok(None);
        };

        todo.completed = !todo.completed;
        todo.date_completed = todo.completed.then(|| self.clock.today());

        Ok(Some(todo.clone()))
    }

    async fn delete(&self, id: TodoId) -> Result<bool, StoreError> {
        let mut todos = self.todos.write().await;
        let before = todos.len();
        todos.retain(|t| t.id != id);
        Ok(todos.len() < before)
    }
}
