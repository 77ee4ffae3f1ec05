//! Browser Storage
//!
//! `window.localStorage` as the durable key-value store.

use todo_core::{KeyValueStore, PersistenceError, PersistenceResult};
use wasm_bindgen::JsValue;

/// `localStorage` handle, looked up on every access
#[derive(Debug, Default, Clone, Copy)]
pub struct BrowserStorage;

impl BrowserStorage {
    fn local_storage() -> PersistenceResult<web_sys::Storage> {
        let window = web_sys::window()
            .ok_or_else(|| PersistenceError::Unavailable("no window".to_string()))?;
        window
            .local_storage()
            .map_err(|err| PersistenceError::Unavailable(describe(&err)))?
            .ok_or_else(|| PersistenceError::Unavailable("localStorage is disabled".to_string()))
    }
}

impl KeyValueStore for BrowserStorage {
    fn get(&self, key: &str) -> PersistenceResult<Option<String>> {
        Self::local_storage()?
            .get_item(key)
            .map_err(|err| PersistenceError::Unavailable(describe(&err)))
    }

    fn set(&mut self, key: &str, value: &str) -> PersistenceResult<()> {
        Self::local_storage()?
            .set_item(key, value)
            .map_err(|err| PersistenceError::Write(describe(&err)))
    }
}

fn describe(err: &JsValue) -> String {
    err.as_string().unwrap_or_else(|| format!("{:?}", err))
}
