//! Todo Row Component

use leptos::prelude::*;
use todo_core::Item;

use crate::context::AppContext;

/// One item: checkbox, text, edit and delete triggers
#[component]
pub fn TodoRow(item: Item) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let Item { id, text, completed } = item;
    let row_id = id.clone();
    let toggle_id = id.clone();
    let edit_id = id.clone();
    let remove_id = id;

    let text_class = if completed { "todo-text line-through" } else { "todo-text" };
    let row_class = move || {
        if ctx.editing_target().as_ref() == Some(&row_id) {
            "todo-row editing"
        } else {
            "todo-row"
        }
    };

    view! {
        <div class=row_class>
            <input
                type="checkbox"
                prop:checked=completed
                on:change=move |_| ctx.toggle(&toggle_id)
            />

            <span class=text_class>{text}</span>

            <div class="buttons">
                <button class="edit-btn" on:click=move |_| ctx.begin_edit(&edit_id)>"Edit"</button>
                <button class="delete-btn" on:click=move |_| ctx.remove(&remove_id)>"Delete"</button>
            </div>
        </div>
    }
}
