//! Store Configuration

/// Key the list is stored under unless configured otherwise
pub const DEFAULT_STORAGE_KEY: &str = "todos";

/// Where the durable store adapter keeps the list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    pub storage_key: String,
}

impl StoreConfig {
    pub fn with_key(storage_key: impl Into<String>) -> Self {
        Self {
            storage_key: storage_key.into(),
        }
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self::with_key(DEFAULT_STORAGE_KEY)
    }
}
