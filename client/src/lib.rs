//! Browser client for the todo application.
//!
//! Client-side-rendered Leptos app. The full list is fetched once on mount
//! into a single signal; the three tab views partition it client-side.
//! Toggling and adding each issue one request and merge the server's
//! response back into local state (replace by id, or append).

#![forbid(unsafe_code)]
#![warn(missing_docs, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod api;
pub mod components;

use crate::api::Api;
use crate::components::{AddTodo, TodoList};
use leptos::prelude::*;
use leptos::task::spawn_local;
use todo_core::{Todo, TodoDraft, TodoId};

/// The three tab views.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Todos not yet completed
    #[default]
    Active,
    /// Completed todos
    Completed,
    /// Creation form
    New,
}

/// Todos not yet completed, in server order.
#[must_use]
pub fn active_todos(todos: &[Todo]) -> Vec<Todo> {
    todos.iter().filter(|t| !t.completed).cloned().collect()
}

/// Completed todos, in server order.
#[must_use]
pub fn completed_todos(todos: &[Todo]) -> Vec<Todo> {
    todos.iter().filter(|t| t.completed).cloned().collect()
}

/// Replaces the record with the same id, leaving order untouched.
///
/// No-op when the id is not present (the record was deleted elsewhere).
pub fn merge_by_id(todos: &mut [Todo], updated: Todo) {
    if let Some(slot) = todos.iter_mut().find(|t| t.id == updated.id) {
        *slot = updated;
    }
}

/// Root component: error line, tab bar, and the active view.
#[component]
pub fn App() -> impl IntoView {
    let api = Api::new(api::API_URL);
    let todos = RwSignal::new(Vec::<Todo>::new());
    let mode = RwSignal::new(Mode::Active);
    let error = RwSignal::new(None::<String>);

    // Initial fetch
    spawn_local(async move {
        match api.list().await {
            Ok(list) => todos.set(list),
            Err(e) => error.set(Some(e.to_string())),
        }
    });

    let toggle_completed = Callback::new(move |id: TodoId| {
        spawn_local(async move {
            match api.toggle_completed(id).await {
                Ok(updated) => todos.update(|t| merge_by_id(t, updated)),
                Err(e) => error.set(Some(e.to_string())),
            }
        });
    });

    let add_todo = Callback::new(move |draft: TodoDraft| {
        spawn_local(async move {
            match api.create(&draft).await {
                Ok(created) => {
                    todos.update(|t| t.push(created));
                    // Switch back to the todo list after adding
                    mode.set(Mode::Active);
                }
                Err(e) => error.set(Some(e.to_string())),
            }
        });
    });

    let tab_button = move |label: &'static str, target: Mode| {
        view! {
            <button
                class:active=move || mode.get() == target
                on:click=move |_| mode.set(target)
            >
                {label}
            </button>
        }
    };

    view! {
        <div class="todo-app">
            <h1>"Todo"</h1>

            {move || {
                error.get().map(|message| {
                    view! {
                        <p class="error" on:click=move |_| error.set(None)>
                            {message}
                        </p>
                    }
                })
            }}

            <div class="tab-bar">
                {tab_button("To Do", Mode::Active)}
                {tab_button("Completed", Mode::Completed)}
                {tab_button("New", Mode::New)}
            </div>

            {move || match mode.get() {
                Mode::Active => {
                    view! {
                        <h2>"To Do"</h2>
                        <TodoList
                            todos=Signal::derive(move || active_todos(&todos.get()))
                            toggle_completed
                        />
                    }
                        .into_any()
                }
                Mode::Completed => {
                    view! {
                        <h2>"Completed"</h2>
                        <TodoList
                            todos=Signal::derive(move || completed_todos(&todos.get()))
                            toggle_completed
                        />
                    }
                        .into_any()
                }
                Mode::New => {
                    view! {
                        <h2>"New Item"</h2>
                        <AddTodo on_add=add_todo />
                    }
                        .into_any()
                }
            }}
        </div>
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn todo(title: &str, completed: bool) -> Todo {
        Todo {
            id: TodoId::new(),
            title: title.to_string(),
            content: String::new(),
            completed,
            date_completed: completed.then(|| NaiveDate::from_ymd_opt(2025, 7, 7).unwrap()),
            due_date: None,
            date_created: NaiveDate::from_ymd_opt(2025, 7, 6).unwrap(),
        }
    }

    #[test]
    fn partition_splits_by_completion() {
        let todos = vec![todo("a", false), todo("b", true), todo("c", false)];

        let active = active_todos(&todos);
        let titles: Vec<&str> = active.iter().map(|t| t.title.as_str()).collect();
        assert_eq!(titles, ["a", "c"]);

        let done = completed_todos(&todos);
        let titles: Vec<&str> = done.iter().map(|t| t.title.as_str()).collect();
        assert_eq!(titles, ["b"]);
    }

    #[test]
    fn merge_replaces_matching_record_in_place() {
        let mut todos = vec![todo("a", false), todo("b", false)];
        let mut updated = todos[1].clone();
        updated.completed = true;

        merge_by_id(&mut todos, updated.clone());
        assert_eq!(todos[1], updated);
        assert_eq!(todos[0].title, "a");
    }

    #[test]
    fn merge_ignores_unknown_id() {
        let mut todos = vec![todo("a", false)];
        let before = todos.clone();

        merge_by_id(&mut todos, todo("stranger", true));
        assert_eq!(todos, before);
    }
}
