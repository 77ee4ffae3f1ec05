//! Todo List Component
//!
//! Renders items in stored order.

use leptos::prelude::*;

use crate::components::TodoRow;
use crate::context::AppContext;

#[component]
pub fn TodoListView() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    view! {
        <div class="todos">
            <For
                each=move || ctx.items()
                // Text and flag are part of the key so edits re-render the row
                key=|item| (item.id.clone(), item.text.clone(), item.completed)
                children=|item| view! { <TodoRow item=item /> }
            />
        </div>
    }
}
