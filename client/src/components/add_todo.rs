//! Creation form for new todos.

use chrono::NaiveDate;
use leptos::prelude::*;
use todo_core::TodoDraft;

/// Form with title, details, and due date; submits a draft and clears itself.
///
/// An empty title is ignored locally; the server re-validates regardless.
#[component]
pub fn AddTodo(
    /// Called with the draft when the form is submitted.
    on_add: Callback<TodoDraft>,
) -> impl IntoView {
    let title = RwSignal::new(String::new());
    let content = RwSignal::new(String::new());
    let due_date = RwSignal::new(String::new());

    let submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let t = title.get();
        if t.trim().is_empty() {
            return;
        }

        on_add.run(TodoDraft {
            title: Some(t.trim().to_string()),
            content: Some(content.get()),
            due_date: due_date.get().parse::<NaiveDate>().ok(),
            ..TodoDraft::default()
        });

        title.set(String::new());
        content.set(String::new());
        due_date.set(String::new());
    };

    view! {
        <form class="add-todo-form" on:submit=submit>
            <input
                type="text"
                placeholder="Title (required)"
                prop:value=move || title.get()
                on:input=move |ev| title.set(event_target_value(&ev))
            />
            <input
                type="text"
                placeholder="Details"
                prop:value=move || content.get()
                on:input=move |ev| content.set(event_target_value(&ev))
            />
            <input
                type="date"
                prop:value=move || due_date.get()
                on:input=move |ev| due_date.set(event_target_value(&ev))
            />
            <button type="submit">"Add Todo"</button>
        </form>
    }
}
