use std::collections::HashMap;

use super::KeyValueStore;
use crate::error::PersistenceResult;

/// In-memory key-value store for tests and native callers.
/// Does NOT persist data.
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-seeded with one raw value
    pub fn with_entry(key: impl Into<String>, value: impl Into<String>) -> Self {
        let mut entries = HashMap::new();
        entries.insert(key.into(), value.into());
        Self { entries }
    }

    /// Raw value under `key`
    pub fn raw(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> PersistenceResult<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> PersistenceResult<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

// --- Test Fixtures ---

#[cfg(test)]
pub mod fixtures {
    use std::cell::Cell;
    use std::rc::Rc;

    use super::*;
    use crate::error::PersistenceError;

    /// Memory store whose writes can be switched off from outside
    #[derive(Debug, Default)]
    pub struct RejectingStore {
        pub inner: MemoryStore,
        pub reject_writes: Rc<Cell<bool>>,
    }

    impl RejectingStore {
        pub fn new() -> (Self, Rc<Cell<bool>>) {
            let store = Self::default();
            let switch = Rc::clone(&store.reject_writes);
            (store, switch)
        }
    }

    impl KeyValueStore for RejectingStore {
        fn get(&self, key: &str) -> PersistenceResult<Option<String>> {
            self.inner.get(key)
        }

        fn set(&mut self, key: &str, value: &str) -> PersistenceResult<()> {
            if self.reject_writes.get() {
                return Err(PersistenceError::Write("quota exceeded".to_string()));
            }
            self.inner.set(key, value)
        }
    }

    /// Store that fails every read, like a disabled `localStorage`
    #[derive(Debug, Default)]
    pub struct UnavailableStore;

    impl KeyValueStore for UnavailableStore {
        fn get(&self, _key: &str) -> PersistenceResult<Option<String>> {
            Err(PersistenceError::Unavailable("storage disabled".to_string()))
        }

        fn set(&mut self, _key: &str, _value: &str) -> PersistenceResult<()> {
            Err(PersistenceError::Unavailable("storage disabled".to_string()))
        }
    }
}
