//! Key-Value Store
//!
//! Abstract interface over the browser's local storage.
//! The UI implements it over `window.localStorage`; tests use `MemoryStore`.

use std::collections::HashMap;

use crate::error::GlueResult;

/// Persistent string store keyed by string
pub trait KeyValueStore {
    /// Read a value; a missing key reads as `None`
    fn get(&self, key: &str) -> GlueResult<Option<String>>;

    /// Write a value, replacing any previous one
    fn set(&mut self, key: &str, value: &str) -> GlueResult<()>;
}

/// In-memory store
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
    writes: usize,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_entry(key: &str, value: &str) -> Self {
        let mut entries = HashMap::new();
        entries.insert(key.to_string(), value.to_string());
        Self { entries, writes: 0 }
    }

    /// Number of `set` calls since creation
    pub fn writes(&self) -> usize {
        self.writes
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> GlueResult<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> GlueResult<()> {
        self.writes += 1;
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
