//! Todo Form Component
//!
//! Single input shared by adding and editing. The button reads `Add` while
//! idle and `Save` while an item is being edited.

use leptos::prelude::*;

use crate::context::AppContext;

#[component]
pub fn TodoForm() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        ctx.submit();
    };

    view! {
        <form class="add-todo" on:submit=on_submit>
            <h2>{move || if ctx.is_editing() { "Edit Todo" } else { "Add a Todo" }}</h2>
            <div class="add-todo-row">
                <input
                    type="text"
                    placeholder="What needs doing?"
                    prop:value=move || ctx.buffer()
                    on:input=move |ev| ctx.set_buffer(event_target_value(&ev))
                    on:keydown=move |ev: web_sys::KeyboardEvent| {
                        if ev.key() == "Escape" {
                            ctx.cancel_edit();
                        }
                    }
                />
                <button type="submit">{move || ctx.primary_label()}</button>
                <Show when=move || ctx.is_editing()>
                    <button type="button" class="cancel-btn" on:click=move |_| ctx.cancel_edit()>
                        "Cancel"
                    </button>
                </Show>
            </div>
        </form>
    }
}
