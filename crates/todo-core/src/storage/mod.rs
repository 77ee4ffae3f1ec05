//! Storage Layer
//!
//! The host provides a durable string key-value store (`localStorage` in the
//! browser). [`TodoRepository`] keeps the whole list under one key of it.

mod memory;
mod repository;

#[cfg(test)]
pub(crate) use memory::fixtures;
pub use memory::MemoryStore;
pub use repository::TodoRepository;

use crate::error::PersistenceResult;

/// Durable string key-value store
///
/// Writes replace the whole value atomically.
pub trait KeyValueStore {
    /// Read the value under `key`, `None` if never written
    fn get(&self, key: &str) -> PersistenceResult<Option<String>>;

    /// Replace the value under `key`
    fn set(&mut self, key: &str, value: &str) -> PersistenceResult<()>;
}
