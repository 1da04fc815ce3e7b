//! Record types for todo items.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a todo item
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TodoId(Uuid);

impl TodoId {
    /// Creates a new random `TodoId`
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Creates a `TodoId` from a UUID
    #[must_use]
    pub const fn from_uuid(id: Uuid) -> Self {
        Self(id)
    }

    /// Returns the inner UUID
    #[must_use]
    pub const fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for TodoId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for TodoId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A single todo item as stored and served over the wire.
///
/// Field names serialize in camelCase to match the JSON API. All dates are
/// calendar dates (`YYYY-MM-DD`); the API never carries a time of day.
///
/// Invariants held by every stored record:
///
/// - `title` is non-empty
/// - `date_completed` is `Some` exactly when `completed` is true
/// - `id` and `date_created` never change after creation
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Todo {
    /// Unique identifier, assigned by the store on creation
    pub id: TodoId,
    /// Title of the todo
    pub title: String,
    /// Free-form details, empty string when not provided
    pub content: String,
    /// Whether the todo is completed
    pub completed: bool,
    /// Date the todo was completed
    pub date_completed: Option<NaiveDate>,
    /// Optional due date
    pub due_date: Option<NaiveDate>,
    /// Date the todo was created
    pub date_created: NaiveDate,
}

/// The validated field set of a todo that has not been stored yet.
///
/// Produced by [`crate::TodoDraft::build`]; the store assigns the id.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NewTodo {
    /// Title, validated non-empty
    pub title: String,
    /// Free-form details
    pub content: String,
    /// Whether the todo starts out completed
    pub completed: bool,
    /// Completion date, consistent with `completed`
    pub date_completed: Option<NaiveDate>,
    /// Optional due date
    pub due_date: Option<NaiveDate>,
    /// Creation date stamped by the factory
    pub date_created: NaiveDate,
}

impl NewTodo {
    /// Attaches an id, producing the stored record.
    #[must_use]
    pub fn into_todo(self, id: TodoId) -> Todo {
        Todo {
            id,
            title: self.title,
            content: self.content,
            completed: self.completed,
            date_completed: self.date_completed,
            due_date: self.due_date,
            date_created: self.date_created,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn todo_id_display() {
        let id = TodoId::new();
        let display = format!("{id}");
        assert!(!display.is_empty());
    }

    #[test]
    fn todo_id_round_trips_through_uuid() {
        let id = TodoId::new();
        assert_eq!(TodoId::from_uuid(*id.as_uuid()), id);
    }

    #[test]
    fn new_todo_into_todo() {
        let id = TodoId::new();
        let new = NewTodo {
            title: "Buy milk".to_string(),
            content: String::new(),
            completed: false,
            date_completed: None,
            due_date: Some(date(2025, 7, 12)),
            date_created: date(2025, 7, 8),
        };

        let todo = new.into_todo(id);
        assert_eq!(todo.id, id);
        assert_eq!(todo.title, "Buy milk");
        assert!(!todo.completed);
        assert_eq!(todo.date_created, date(2025, 7, 8));
    }

    #[test]
    fn todo_serializes_in_camel_case_with_plain_dates() {
        let todo = Todo {
            id: TodoId::new(),
            title: "Call the bank".to_string(),
            content: "Follow up on missing transaction".to_string(),
            completed: true,
            date_completed: Some(date(2025, 7, 7)),
            due_date: None,
            date_created: date(2025, 7, 6),
        };

        let json = serde_json::to_value(&todo).unwrap();
        assert_eq!(json["dateCompleted"], "2025-07-07");
        assert_eq!(json["dateCreated"], "2025-07-06");
        assert_eq!(json["dueDate"], serde_json::Value::Null);
        assert!(json.get("date_created").is_none());

        let back: Todo = serde_json::from_value(json).unwrap();
        assert_eq!(back, todo);
    }
}
