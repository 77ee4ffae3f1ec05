//! Application Context
//!
//! The board lives in one signal provided via the Leptos Context API.
//! Components read through the getters and mutate only through the action
//! methods, so every change goes through the list and gets persisted.

use leptos::prelude::*;
use todo_core::{Item, ItemId, SubmitOutcome, TodoBoard};
use tracing::debug;

use crate::storage::BrowserStorage;

pub type Board = TodoBoard<BrowserStorage>;

/// App-wide board signal
#[derive(Clone, Copy)]
pub struct AppContext {
    board: RwSignal<Board>,
}

impl AppContext {
    pub fn new(board: Board) -> Self {
        Self {
            board: RwSignal::new(board),
        }
    }

    // ========================
    // Reads
    // ========================

    pub fn items(&self) -> Vec<Item> {
        self.board.with(|board| board.items().to_vec())
    }

    pub fn item_count(&self) -> usize {
        self.board.with(|board| board.items().len())
    }

    pub fn remaining(&self) -> usize {
        self.board.with(|board| board.list().remaining())
    }

    /// Text currently in the input field
    pub fn buffer(&self) -> String {
        self.board.with(|board| board.session().buffer().to_string())
    }

    pub fn is_editing(&self) -> bool {
        self.board.with(|board| board.session().is_editing())
    }

    pub fn editing_target(&self) -> Option<ItemId> {
        self.board.with(|board| board.session().target().cloned())
    }

    /// `Add` or `Save`
    pub fn primary_label(&self) -> &'static str {
        self.board.with(|board| board.session().primary_action().label())
    }

    /// Message to show while storage is behind the in-memory list
    pub fn sync_warning(&self) -> Option<String> {
        self.board
            .with(|board| board.sync_status().error().map(ToString::to_string))
    }

    // ========================
    // Actions
    // ========================

    pub fn set_buffer(&self, text: String) {
        self.board.update(|board| board.set_buffer(text));
    }

    /// Primary button / Enter
    pub fn submit(&self) {
        self.board.update(|board| match board.submit() {
            SubmitOutcome::Created(id) => debug!(%id, "[UI] created"),
            SubmitOutcome::Saved(id) => debug!(%id, "[UI] saved"),
            SubmitOutcome::Rejected => debug!("[UI] blank text ignored"),
        });
    }

    pub fn begin_edit(&self, id: &ItemId) {
        self.board.update(|board| {
            board.begin_edit(id);
        });
    }

    pub fn cancel_edit(&self) {
        self.board.update(|board| board.cancel_edit());
    }

    pub fn toggle(&self, id: &ItemId) {
        self.board.update(|board| {
            board.toggle_completed(id);
        });
    }

    pub fn remove(&self, id: &ItemId) {
        self.board.update(|board| {
            board.remove(id);
        });
    }
}
