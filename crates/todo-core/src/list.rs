//! Item Store
//!
//! Owns the ordered item list. Every mutation is written through to the
//! durable store; a failed write is logged and reported through
//! [`SyncStatus`] but never rolls the list back.

use tracing::{debug, info, warn};

use crate::domain::{validate_text, Item, ItemId};
use crate::error::PersistenceError;
use crate::storage::{KeyValueStore, TodoRepository};

/// Whether the durable store matches the in-memory list
#[derive(Debug, Default)]
pub enum SyncStatus {
    #[default]
    Synced,
    /// Last write failed; the in-memory list is ahead of storage
    Diverged(PersistenceError),
}

impl SyncStatus {
    pub fn is_synced(&self) -> bool {
        matches!(self, SyncStatus::Synced)
    }

    pub fn error(&self) -> Option<&PersistenceError> {
        match self {
            SyncStatus::Synced => None,
            SyncStatus::Diverged(err) => Some(err),
        }
    }
}

/// Ordered todo list backed by a durable store
#[derive(Debug)]
pub struct TodoList<S> {
    items: Vec<Item>,
    repository: TodoRepository<S>,
    sync: SyncStatus,
}

impl<S: KeyValueStore> TodoList<S> {
    /// Load the persisted list
    ///
    /// An unreadable stored value is dropped in favour of an empty list.
    pub fn open(repository: TodoRepository<S>) -> Self {
        let items = match repository.load() {
            Ok(items) => items,
            Err(err) => {
                warn!(error = %err, "starting with an empty list");
                Vec::new()
            }
        };
        Self {
            items,
            repository,
            sync: SyncStatus::Synced,
        }
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn get(&self, id: &ItemId) -> Option<&Item> {
        self.items.iter().find(|item| &item.id == id)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of items not yet completed
    pub fn remaining(&self) -> usize {
        self.items.iter().filter(|item| !item.completed).count()
    }

    pub fn sync_status(&self) -> &SyncStatus {
        &self.sync
    }

    pub fn repository(&self) -> &TodoRepository<S> {
        &self.repository
    }

    /// Append a new item, returning its id
    ///
    /// Blank text is rejected and nothing is written.
    pub fn add(&mut self, text: impl Into<String>) -> Option<ItemId> {
        let text = text.into();
        if let Err(err) = validate_text(&text) {
            debug!(%err, "add rejected");
            return None;
        }
        let id = self.fresh_id();
        self.items.push(Item::new(id.clone(), text));
        debug!(%id, "item added");
        self.persist();
        Some(id)
    }

    /// Replace an item's text, keeping its id, position and completion
    ///
    /// Returns false (and writes nothing) for an unknown id or blank text.
    pub fn update(&mut self, id: &ItemId, text: impl Into<String>) -> bool {
        let text = text.into();
        if let Err(err) = validate_text(&text) {
            debug!(%id, %err, "update rejected");
            return false;
        }
        let Some(item) = self.items.iter_mut().find(|item| &item.id == id) else {
            return false;
        };
        item.text = text;
        debug!(%id, "item updated");
        self.persist();
        true
    }

    /// Flip the completion flag, returning the new value
    pub fn toggle_completed(&mut self, id: &ItemId) -> Option<bool> {
        let item = self.items.iter_mut().find(|item| &item.id == id)?;
        item.completed = !item.completed;
        let completed = item.completed;
        debug!(%id, completed, "item toggled");
        self.persist();
        Some(completed)
    }

    /// Remove an item, returning it if it was present
    pub fn remove(&mut self, id: &ItemId) -> Option<Item> {
        let index = self.items.iter().position(|item| &item.id == id)?;
        let removed = self.items.remove(index);
        debug!(%id, "item removed");
        self.persist();
        Some(removed)
    }

    fn fresh_id(&self) -> ItemId {
        loop {
            let id = ItemId::generate();
            if self.get(&id).is_none() {
                return id;
            }
        }
    }

    fn persist(&mut self) {
        match self.repository.save(&self.items) {
            Ok(()) => {
                if !self.sync.is_synced() {
                    info!("storage back in sync");
                }
                self.sync = SyncStatus::Synced;
            }
            Err(err) => {
                warn!(error = %err, "list not saved, keeping in-memory state");
                self.sync = SyncStatus::Diverged(err);
            }
        }
    }
}
