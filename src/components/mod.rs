//! UI Components
//!
//! Leptos components for the todo page.

mod sync_banner;
mod todo_form;
mod todo_list;
mod todo_row;

pub use sync_banner::SyncBanner;
pub use todo_form::TodoForm;
pub use todo_list::TodoListView;
pub use todo_row::TodoRow;
