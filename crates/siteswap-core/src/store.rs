//! User-scoped key-value persistence interface
//!
//! The engine itself persists nothing: progress and record storage is an
//! external collaborator reached through this trait. Blobs are JSON
//! values namespaced by an opaque user id. [`MemoryStore`] is the
//! in-process implementation used by tests and embedders without a
//! backend.

use serde_json::Value;
use std::collections::HashMap;

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("storage backend error: {0}")]
    Backend(String),

    #[error("failed to encode value: {0}")]
    Encode(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, StoreError>;

/// Get/set/delete JSON blobs by (user id, key).
pub trait ProgressStore {
    fn get(&self, user_id: &str, key: &str) -> Result<Option<Value>>;
    fn set(&mut self, user_id: &str, key: &str, value: Value) -> Result<()>;
    fn delete(&mut self, user_id: &str, key: &str) -> Result<()>;
}

/// HashMap-backed store with no persistence across processes.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: HashMap<(String, String), Value>,
}

impl MemoryStore {
    pub fn new() -> MemoryStore {
        MemoryStore::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl ProgressStore for MemoryStore {
    fn get(&self, user_id: &str, key: &str) -> Result<Option<Value>> {
        Ok(self
            .entries
            .get(&(user_id.to_string(), key.to_string()))
            .cloned())
    }

    fn set(&mut self, user_id: &str, key: &str, value: Value) -> Result<()> {
        self.entries
            .insert((user_id.to_string(), key.to_string()), value);
        Ok(())
    }

    fn delete(&mut self, user_id: &str, key: &str) -> Result<()> {
        self.entries
            .remove(&(user_id.to_string(), key.to_string()));
        Ok(())
    }
}
