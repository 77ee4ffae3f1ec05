//! Edit Session
//!
//! Tracks the text buffer behind the input field and, at most, one item
//! being edited. The state decides what the primary button does: `Add` a
//! new item while idle, `Save` the edited item otherwise.

use tracing::debug;

use crate::domain::ItemId;
use crate::list::TodoList;
use crate::storage::KeyValueStore;

/// Which item, if any, the input field is editing
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SessionState {
    #[default]
    Idle,
    Editing(ItemId),
}

/// Effect of the primary button
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrimaryAction {
    Add,
    Save,
}

impl PrimaryAction {
    pub fn label(&self) -> &'static str {
        match self {
            PrimaryAction::Add => "Add",
            PrimaryAction::Save => "Save",
        }
    }
}

/// Result of pressing the primary button
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    Created(ItemId),
    Saved(ItemId),
    /// Blank buffer, nothing written
    Rejected,
}

/// Input buffer plus the edit state machine
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EditSession {
    state: SessionState,
    buffer: String,
}

impl EditSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn buffer(&self) -> &str {
        &self.buffer
    }

    /// Id of the item being edited
    pub fn target(&self) -> Option<&ItemId> {
        match &self.state {
            SessionState::Idle => None,
            SessionState::Editing(id) => Some(id),
        }
    }

    pub fn is_editing(&self) -> bool {
        self.target().is_some()
    }

    pub fn primary_action(&self) -> PrimaryAction {
        if self.is_editing() {
            PrimaryAction::Save
        } else {
            PrimaryAction::Add
        }
    }

    /// Input field changed
    pub fn set_buffer(&mut self, text: impl Into<String>) {
        self.buffer = text.into();
    }

    /// Start editing `id`, loading its text into the buffer
    ///
    /// An edit already in progress is replaced and its unsaved text lost.
    pub fn begin_edit(&mut self, id: ItemId, current_text: impl Into<String>) {
        if let Some(previous) = self.target().filter(|previous| **previous != id) {
            debug!(%previous, next = %id, "switching edit target, unsaved text dropped");
        }
        self.state = SessionState::Editing(id);
        self.buffer = current_text.into();
    }

    /// Leave editing without saving
    pub fn cancel(&mut self) {
        if self.is_editing() {
            self.reset();
        }
    }

    /// Save the buffer into the edited item and go idle
    ///
    /// Does nothing while idle. A blank buffer is rejected and the edit
    /// stays open. If the target has vanished from the list the session
    /// resets without writing.
    pub fn commit<S: KeyValueStore>(&mut self, list: &mut TodoList<S>) -> Option<ItemId> {
        let target = self.target()?.clone();
        if list.get(&target).is_none() {
            debug!(%target, "edit target gone, dropping edit");
            self.reset();
            return None;
        }
        if !list.update(&target, self.buffer.as_str()) {
            return None;
        }
        self.reset();
        Some(target)
    }

    /// Create a new item from the buffer and clear it
    ///
    /// Only available while idle. A blank buffer is left untouched.
    pub fn create_from_buffer<S: KeyValueStore>(&mut self, list: &mut TodoList<S>) -> Option<ItemId> {
        if self.is_editing() {
            return None;
        }
        let id = list.add(self.buffer.as_str())?;
        self.buffer.clear();
        Some(id)
    }

    /// Primary button: create while idle, commit while editing
    pub fn submit<S: KeyValueStore>(&mut self, list: &mut TodoList<S>) -> SubmitOutcome {
        let outcome = if self.is_editing() {
            self.commit(list).map(SubmitOutcome::Saved)
        } else {
            self.create_from_buffer(list).map(SubmitOutcome::Created)
        };
        outcome.unwrap_or(SubmitOutcome::Rejected)
    }

    /// An item was removed elsewhere; drop the edit if it was the target
    pub fn handle_removal(&mut self, removed: &ItemId) {
        if self.target() == Some(removed) {
            debug!(%removed, "edit target removed");
            self.reset();
        }
    }

    fn reset(&mut self) {
        self.state = SessionState::Idle;
        self.buffer.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::StoreConfig;
    use crate::storage::{MemoryStore, TodoRepository};

    fn list() -> TodoList<MemoryStore> {
        TodoList::open(TodoRepository::new(MemoryStore::new(), StoreConfig::default()))
    }

    #[test]
    fn test_initial_state() {
        let session = EditSession::new();
        assert_eq!(session.state(), &SessionState::Idle);
        assert_eq!(session.buffer(), "");
        assert_eq!(session.primary_action(), PrimaryAction::Add);
        assert_eq!(session.primary_action().label(), "Add");
    }

    #[test]
    fn test_begin_edit_loads_buffer() {
        let mut session = EditSession::new();
        session.begin_edit(ItemId::from("x"), "buy milk");
        assert_eq!(session.state(), &SessionState::Editing(ItemId::from("x")));
        assert_eq!(session.buffer(), "buy milk");
        assert_eq!(session.primary_action().label(), "Save");
    }

    #[test]
    fn test_switching_target_replaces_buffer() {
        let mut session = EditSession::new();
        session.begin_edit(ItemId::from("a"), "first");
        session.set_buffer("first, changed");
        session.begin_edit(ItemId::from("b"), "second");
        assert_eq!(session.target(), Some(&ItemId::from("b")));
        assert_eq!(session.buffer(), "second");
    }

    #[test]
    fn test_create_clears_buffer() {
        let mut list = list();
        let mut session = EditSession::new();
        session.set_buffer("buy milk");
        let outcome = session.submit(&mut list);
        assert!(matches!(outcome, SubmitOutcome::Created(_)));
        assert_eq!(session.buffer(), "");
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn test_blank_create_keeps_buffer() {
        let mut list = list();
        let mut session = EditSession::new();
        session.set_buffer("   ");
        assert_eq!(session.submit(&mut list), SubmitOutcome::Rejected);
        assert_eq!(session.buffer(), "   ");
        assert!(list.is_empty());
    }

    #[test]
    fn test_commit_saves_and_goes_idle() {
        let mut list = list();
        let id = list.add("buy milk").unwrap();
        let mut session = EditSession::new();
        session.begin_edit(id.clone(), "buy milk");
        session.set_buffer("buy oat milk");

        assert_eq!(session.submit(&mut list), SubmitOutcome::Saved(id.clone()));
        assert_eq!(session.state(), &SessionState::Idle);
        assert_eq!(session.buffer(), "");
        assert_eq!(list.get(&id).unwrap().text, "buy oat milk");
    }

    #[test]
    fn test_blank_commit_stays_editing() {
        let mut list = list();
        let id = list.add("buy milk").unwrap();
        let mut session = EditSession::new();
        session.begin_edit(id.clone(), "buy milk");
        session.set_buffer("  ");

        assert_eq!(session.submit(&mut list), SubmitOutcome::Rejected);
        assert_eq!(session.target(), Some(&id));
        assert_eq!(list.get(&id).unwrap().text, "buy milk");
    }

    #[test]
    fn test_commit_while_idle_is_noop() {
        let mut list = list();
        let id = list.add("keep").unwrap();
        let mut session = EditSession::new();
        session.set_buffer("overwrite");
        assert_eq!(session.commit(&mut list), None);
        assert_eq!(list.get(&id).unwrap().text, "keep");
        assert_eq!(session.buffer(), "overwrite");
    }

    #[test]
    fn test_create_while_editing_is_noop() {
        let mut list = list();
        let id = list.add("one").unwrap();
        let mut session = EditSession::new();
        session.begin_edit(id, "one");
        assert_eq!(session.create_from_buffer(&mut list), None);
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn test_removal_of_other_item_keeps_edit() {
        let mut session = EditSession::new();
        session.begin_edit(ItemId::from("a"), "text");
        session.handle_removal(&ItemId::from("b"));
        assert!(session.is_editing());
        assert_eq!(session.buffer(), "text");
    }

    #[test]
    fn test_commit_on_vanished_target_resets() {
        let mut list = list();
        let mut session = EditSession::new();
        session.begin_edit(ItemId::from("ghost"), "boo");
        assert_eq!(session.commit(&mut list), None);
        assert_eq!(session.state(), &SessionState::Idle);
        assert!(list.is_empty());
    }

    #[test]
    fn test_cancel() {
        let mut session = EditSession::new();
        session.set_buffer("draft");
        session.cancel();
        assert_eq!(session.buffer(), "draft");

        session.begin_edit(ItemId::from("a"), "text");
        session.cancel();
        assert_eq!(session.state(), &SessionState::Idle);
        assert_eq!(session.buffer(), "");
    }
}
