//! List view over a filtered set of todos.

use super::TodoItem;
use leptos::prelude::*;
use todo_core::{Todo, TodoId};

/// Renders the given todos as a list, or an empty-state line.
#[component]
pub fn TodoList(
    /// Todos to render (already filtered by the active tab).
    #[prop(into)]
    todos: Signal<Vec<Todo>>,
    /// Called with the id of a todo whose checkbox was toggled.
    toggle_completed: Callback<TodoId>,
) -> impl IntoView {
    view! {
        <Show
            when=move || !todos.get().is_empty()
            fallback=|| view! { <p>"No todos"</p> }
        >
            <ul class="todo-list">
                <For
                    each=move || todos.get()
                    key=|todo| todo.id
                    children=move |todo| view! { <TodoItem todo toggle_completed /> }
                />
            </ul>
        </Show>
    }
}
