//! Todo Core
//!
//! Layered list state for the todo frontend:
//! - domain: items, ids and text validation
//! - storage: key-value persistence of the whole list
//! - list / session / board: the item store, the edit session, and the
//!   board that routes UI actions through both

mod board;
mod config;
mod domain;
mod error;
mod list;
mod session;
mod storage;


pub use board::TodoBoard;
pub use config::{StoreConfig, DEFAULT_STORAGE_KEY};
pub use domain::{validate_text, Item, ItemId};
pub use error::{PersistenceError, PersistenceResult, ValidationError};
pub use list::{SyncStatus, TodoList};
pub use session::{EditSession, PrimaryAction, SessionState, SubmitOutcome};
pub use storage::{KeyValueStore, MemoryStore, TodoRepository};
