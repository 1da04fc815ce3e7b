//! Todo CRUD endpoints.
//!
//! - GET /api/todo - List all todos
//! - GET /api/todo/:id - Get a todo by id
//! - POST /api/todo - Create a new todo
//! - PATCH /api/todo/:id - Partially update a todo
//! - PATCH /api/todo/:id/completed - Toggle completion status
//! - DELETE /api/todo/:id - Delete a todo
//!
//! Each handler does exactly one service call and writes one response;
//! error mapping lives in [`AppError`].

use crate::error::AppError;
use crate::state::AppState;
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use todo_core::{Todo, TodoDraft, TodoId, TodoPatch};

/// List all todos.
///
/// # Example
///
/// ```bash
/// curl http://localhost:9091/api/todo
/// ```
pub async fn list_todos(State(state): State<AppState>) -> Result<Json<Vec<Todo>>, AppError> {
    let todos = state.service.get_all().await?;
    Ok(Json(todos))
}

/// Get a todo by id.
///
/// # Example
///
/// ```bash
/// curl http://localhost:9091/api/todo/550e8400-e29b-41d4-a716-446655440000
/// ```
pub async fn get_todo(
    Path(id): Path<TodoId>,
    State(state): State<AppState>,
) -> Result<Json<Todo>, AppError> {
    let todo = state
        .service
        .get_by_id(id)
        .await?
        .ok_or_else(|| AppError::not_found("Todo", id))?;
    Ok(Json(todo))
}

/// Create a new todo.
///
/// Responds 201 with the stored record, including its assigned id and
/// creation date. A missing or blank title is a 400.
///
/// # Example
///
/// ```bash
/// curl -X POST http://localhost:9091/api/todo \
///   -H "Content-Type: application/json" \
///   -d '{"title": "Buy milk", "content": "Two bottles", "dueDate": "2025-07-12"}'
/// ```
pub async fn create_todo(
    State(state): State<AppState>,
    Json(draft): Json<TodoDraft>,
) -> Result<(StatusCode, Json<Todo>), AppError> {
    let todo = state.service.create(draft).await?;
    Ok((StatusCode::CREATED, Json(todo)))
}

/// Partially update a todo.
///
/// Only the supplied fields change; `id` and `dateCreated` never do. A blank
/// title is a 400, an unknown id a 404.
///
/// # Example
///
/// ```bash
/// curl -X PATCH http://localhost:9091/api/todo/550e8400-e29b-41d4-a716-446655440000 \
///   -H "Content-Type: application/json" \
///   -d '{"content": "Updated details"}'
/// ```
pub async fn update_todo(
    Path(id): Path<TodoId>,
    State(state): State<AppState>,
    Json(patch): Json<TodoPatch>,
) -> Result<Json<Todo>, AppError> {
    let todo = state
        .service
        .update(id, patch)
        .await?
        .ok_or_else(|| AppError::not_found("Todo", id))?;
    Ok(Json(todo))
}

/// Toggle the completed status of a todo.
///
/// Completing stamps `dateCompleted` with today's date; reopening clears it.
///
/// # Example
///
/// ```bash
/// curl -X PATCH http://localhost:9091/api/todo/550e8400-e29b-41d4-a716-446655440000/completed
/// ```
pub async fn toggle_completed(
    Path(id): Path<TodoId>,
    State(state): State<AppState>,
) -> Result<Json<Todo>, AppError> {
    let todo = state
        .service
        .toggle_completed(id)
        .await?
        .ok_or_else(|| AppError::not_found("Todo", id))?;
    Ok(Json(todo))
}

/// Delete a todo.
///
/// Responds 204 whether or not the id existed, so repeated deletes are
/// harmless.
///
/// # Example
///
/// ```bash
/// curl -X DELETE http://localhost:9091/api/todo/550e8400-e29b-41d4-a716-446655440000
/// ```
pub async fn delete_todo(
    Path(id): Path<TodoId>,
    State(state): State<AppState>,
) -> Result<StatusCode, AppError> {
    state.service.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
