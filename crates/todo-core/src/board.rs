//! Todo Board
//!
//! The list and the edit session side by side. UI actions go through here
//! so a removed item can never stay the edit target.

use crate::domain::{Item, ItemId};
use crate::list::{SyncStatus, TodoList};
use crate::session::{EditSession, SubmitOutcome};
use crate::storage::{KeyValueStore, TodoRepository};

#[derive(Debug)]
pub struct TodoBoard<S> {
    list: TodoList<S>,
    session: EditSession,
}

impl<S: KeyValueStore> TodoBoard<S> {
    /// Load the persisted list with an idle session
    pub fn open(repository: TodoRepository<S>) -> Self {
        Self {
            list: TodoList::open(repository),
            session: EditSession::new(),
        }
    }

    pub fn items(&self) -> &[Item] {
        self.list.items()
    }

    pub fn list(&self) -> &TodoList<S> {
        &self.list
    }

    pub fn session(&self) -> &EditSession {
        &self.session
    }

    pub fn sync_status(&self) -> &SyncStatus {
        self.list.sync_status()
    }

    pub fn set_buffer(&mut self, text: impl Into<String>) {
        self.session.set_buffer(text);
    }

    /// Load an item's text into the input field for editing
    ///
    /// Returns false for an unknown id.
    pub fn begin_edit(&mut self, id: &ItemId) -> bool {
        let Some(item) = self.list.get(id) else {
            return false;
        };
        let text = item.text.clone();
        self.session.begin_edit(id.clone(), text);
        true
    }

    pub fn cancel_edit(&mut self) {
        self.session.cancel();
    }

    /// Primary button
    pub fn submit(&mut self) -> SubmitOutcome {
        self.session.submit(&mut self.list)
    }

    pub fn toggle_completed(&mut self, id: &ItemId) -> Option<bool> {
        self.list.toggle_completed(id)
    }

    pub fn remove(&mut self, id: &ItemId) -> Option<Item> {
        let removed = self.list.remove(id)?;
        self.session.handle_removal(id);
        Some(removed)
    }
}
