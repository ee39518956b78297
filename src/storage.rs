//! Browser Local Storage
//!
//! `KeyValueStore` over `window.localStorage`.

use event_page_core::{GlueError, GlueResult, KeyValueStore};
use web_sys::Storage;

pub struct LocalStore {
    storage: Storage,
}

impl LocalStore {
    pub fn open() -> GlueResult<Self> {
        let window = web_sys::window().ok_or_else(|| GlueError::Storage("no window".into()))?;
        let storage = window
            .local_storage()
            .map_err(|e| GlueError::Storage(format!("{:?}", e)))?
            .ok_or_else(|| GlueError::Storage("local storage unavailable".into()))?;
        Ok(Self { storage })
    }
}

impl KeyValueStore for LocalStore {
    fn get(&self, key: &str) -> GlueResult<Option<String>> {
        self.storage
            .get_item(key)
            .map_err(|e| GlueError::Storage(format!("{:?}", e)))
    }

    fn set(&mut self, key: &str, value: &str) -> GlueResult<()> {
        self.storage
            .set_item(key, value)
            .map_err(|e| GlueError::Storage(format!("{:?}", e)))
    }
}
