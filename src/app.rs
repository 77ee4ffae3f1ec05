//! Todo Frontend App
//!
//! Loads the list from `localStorage` once and lays out the form and list.

use leptos::prelude::*;
use todo_core::{StoreConfig, TodoBoard, TodoRepository};
use tracing::info;

use crate::components::{SyncBanner, TodoForm, TodoListView};
use crate::context::AppContext;
use crate::storage::BrowserStorage;

#[component]
pub fn App() -> impl IntoView {
    let repository = TodoRepository::new(BrowserStorage, StoreConfig::default());
    let board = TodoBoard::open(repository);
    info!(count = board.items().len(), "todo list ready");

    // Provide context to all children
    let ctx = AppContext::new(board);
    provide_context(ctx);

    view! {
        <main class="todo-app">
            <SyncBanner />

            <TodoForm />

            <h1>"My Todos"</h1>
            <TodoListView />

            <p class="item-count">
                {move || format!("{} items, {} left", ctx.item_count(), ctx.remaining())}
            </p>
        </main>
    }
}
