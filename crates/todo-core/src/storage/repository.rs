//! Durable Store Adapter
//!
//! Serializes the whole item list to one key and reads it back.

use tracing::debug;

use super::KeyValueStore;
use crate::config::StoreConfig;
use crate::domain::Item;
use crate::error::{PersistenceError, PersistenceResult};

/// Item list persistence over a [`KeyValueStore`]
#[derive(Debug)]
pub struct TodoRepository<S> {
    store: S,
    config: StoreConfig,
}

impl<S: KeyValueStore> TodoRepository<S> {
    pub fn new(store: S, config: StoreConfig) -> Self {
        Self { store, config }
    }

    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Read the stored list
    ///
    /// A missing key or an empty value is an empty list.
    pub fn load(&self) -> PersistenceResult<Vec<Item>> {
        let raw = self.store.get(&self.config.storage_key)?;
        match raw.as_deref() {
            None | Some("") => Ok(Vec::new()),
            Some(json) => {
                let items: Vec<Item> = serde_json::from_str(json).map_err(PersistenceError::Read)?;
                debug!(key = %self.config.storage_key, count = items.len(), "loaded list");
                Ok(items)
            }
        }
    }

    /// Replace the stored list with `items`
    pub fn save(&mut self, items: &[Item]) -> PersistenceResult<()> {
        let json = serde_json::to_string(items).map_err(PersistenceError::Encode)?;
        self.store.set(&self.config.storage_key, &json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ItemId;
    use crate::storage::MemoryStore;

    fn repo_with(raw: &str) -> TodoRepository<MemoryStore> {
        TodoRepository::new(MemoryStore::with_entry("todos", raw), StoreConfig::default())
    }

    #[test]
    fn test_missing_key_is_empty() {
        let repo = TodoRepository::new(MemoryStore::new(), StoreConfig::default());
        assert!(repo.load().unwrap().is_empty());
    }

    #[test]
    fn test_empty_value_is_empty() {
        assert!(repo_with("").load().unwrap().is_empty());
    }

    #[test]
    fn test_malformed_value_is_read_error() {
        let err = repo_with("{not json").load().unwrap_err();
        assert!(matches!(err, PersistenceError::Read(_)));

        let err = repo_with("null").load().unwrap_err();
        assert!(matches!(err, PersistenceError::Read(_)));
    }

    #[test]
    fn test_save_replaces_whole_value() {
        let mut repo = TodoRepository::new(MemoryStore::new(), StoreConfig::with_key("list"));
        let first = vec![
            Item::new(ItemId::from("1"), "one"),
            Item::new(ItemId::from("2"), "two"),
        ];
        repo.save(&first).unwrap();
        repo.save(&first[1..]).unwrap();

        assert_eq!(repo.load().unwrap(), first[1..].to_vec());
        assert!(repo.store().raw("todos").is_none());
        assert_eq!(
            repo.store().raw("list"),
            Some(r#"[{"id":"2","todo":"two","iscompleted":false}]"#)
        );
    }

    #[test]
    fn test_loads_browser_written_list() {
        let raw = r#"[
            {"id":"8c1f","todo":"buy milk","iscompleted":true},
            {"id":"9d2e","todo":"call mom","iscompleted":false}
        ]"#;
        let items = repo_with(raw).load().unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].id.as_str(), "8c1f");
        assert!(items[0].completed);
        assert_eq!(items[1].text, "call mom");
    }
}
