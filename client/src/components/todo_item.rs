//! A single todo row.

use leptos::prelude::*;
use todo_core::{Todo, TodoId};

/// Renders one todo: title + checkbox, optional details, and date footer.
#[component]
pub fn TodoItem(
    /// The record to render.
    todo: Todo,
    /// Called with this todo's id when the checkbox is toggled.
    toggle_completed: Callback<TodoId>,
) -> impl IntoView {
    let Todo {
        id,
        title,
        content,
        completed,
        date_completed,
        due_date,
        ..
    } = todo;

    view! {
        <li class="todo-item" class:completed=completed>
            <div class="todo-item__header">
                <span class="todo-item__title">{title}</span>
                <input
                    type="checkbox"
                    prop:checked=completed
                    on:input=move |_| toggle_completed.run(id)
                />
            </div>

            {(!content.is_empty())
                .then(|| view! { <div class="todo-item__content">{content}</div> })}

            <div class="todo-item__footer">
                {due_date.map(|d| view! { <div>{format!("Due: {d}")}</div> })}
                {date_completed.map(|d| view! { <div>{format!("Completed: {d}")}</div> })}
            </div>
        </li>
    }
}
