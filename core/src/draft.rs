//! Input validation for creating and patching todos.
//!
//! [`TodoDraft`] is the creation factory's input: the raw optional fields a
//! client submits, turned into a fully-populated [`NewTodo`] by
//! [`TodoDraft::build`]. [`TodoPatch`] carries a partial update for an
//! existing record; only supplied fields change.

use crate::error::TodoError;
use crate::todo::NewTodo;
use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};

/// Raw input fields for a new todo.
///
/// Every field is optional on the wire; [`build`](Self::build) applies the
/// defaults and rejects a missing or blank title.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TodoDraft {
    /// Required title
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Optional details
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    /// Completion status, defaults to false
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completed: Option<bool>,
    /// Completion date; only honored when `completed` is true
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_completed: Option<NaiveDate>,
    /// Optional due date
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_date: Option<NaiveDate>,
}

impl TodoDraft {
    /// Builds the validated field set of a new todo.
    ///
    /// Applies defaults (`content: ""`, `completed: false`), stamps
    /// `date_created` with `today`, and keeps the completion pair consistent:
    /// an incomplete todo never carries a completion date, a completed one
    /// always does (defaulting to `today` when none was supplied).
    ///
    /// # Errors
    ///
    /// Returns [`TodoError::TitleRequired`] when `title` is missing or blank.
    pub fn build(self, today: NaiveDate) -> Result<NewTodo, TodoError> {
        let title = normalize_title(self.title)?;
        let completed = self.completed.unwrap_or(false);
        let date_completed = if completed {
            self.date_completed.or(Some(today))
        } else {
            None
        };

        Ok(NewTodo {
            title,
            content: self.content.unwrap_or_default(),
            completed,
            date_completed,
            due_date: self.due_date,
            date_created: today,
        })
    }
}

/// Partial update for an existing todo.
///
/// Absent fields leave the record unchanged. `due_date` distinguishes a field
/// that was omitted from one explicitly set to `null` (clear the date); the
/// other fields have no meaningful `null`. `id`, `date_created`, and
/// `date_completed` are not patchable: the first two are immutable, the last
/// is derived from `completed` transitions.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TodoPatch {
    /// New title; must be non-empty when present
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// New details
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    /// New completion status; the store syncs `dateCompleted` on change
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed: Option<bool>,
    /// New due date; an explicit `null` clears it
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "double_option"
    )]
    pub due_date: Option<Option<NaiveDate>>,
}

impl TodoPatch {
    /// Validates and normalizes the supplied fields.
    ///
    /// # Errors
    ///
    /// Returns [`TodoError::TitleRequired`] when a supplied title is blank.
    pub fn validated(mut self) -> Result<Self, TodoError> {
        if let Some(title) = self.title.take() {
            self.title = Some(normalize_title(Some(title))?);
        }
        Ok(self)
    }
}

fn normalize_title(title: Option<String>) -> Result<String, TodoError> {
    let title = title.map(|t| t.trim().to_owned()).unwrap_or_default();
    if title.is_empty() {
        return Err(TodoError::TitleRequired);
    }
    Ok(title)
}

// Keeps an explicit JSON `null` visible as `Some(None)` instead of collapsing
// it into the "field absent" case.
fn double_option<'de, D>(deserializer: D) -> Result<Option<Option<NaiveDate>>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<NaiveDate>::deserialize(deserializer).map(Some)
}
