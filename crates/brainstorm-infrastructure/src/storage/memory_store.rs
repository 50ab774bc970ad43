//! In-memory key-value store.

use brainstorm_core::error::Result;
use brainstorm_core::storage::KeyValueStore;
use std::collections::HashMap;
use std::sync::Mutex;

/// A storage call as recorded by [`MemoryKeyValueStore`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StorageOp {
    Get(String),
    Set(String, String),
    Remove(String),
}

impl StorageOp {
    pub fn is_write(&self) -> bool {
        !matches!(self, StorageOp::Get(_))
    }
}

/// Process-local storage that also keeps a log of every call.
///
/// Used for ephemeral runs (`--no-persist`) and as the fake in tests.
#[derive(Debug, Default)]
pub struct MemoryKeyValueStore {
    entries: Mutex<HashMap<String, String>>,
    log: Mutex<Vec<StorageOp>>,
}

impl MemoryKeyValueStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds the store without recording the writes.
    pub fn with_entries<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let map = entries
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();
        Self {
            entries: Mutex::new(map),
            log: Mutex::new(Vec::new()),
        }
    }

    /// Every call made so far, in order.
    pub fn operations(&self) -> Vec<StorageOp> {
        self.log.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }

    /// Number of `set` and `remove` calls made so far.
    pub fn write_count(&self) -> usize {
        self.operations().iter().filter(|op| op.is_write()).count()
    }

    /// Reads a value without recording the call.
    pub fn peek(&self, key: &str) -> Option<String> {
        self.entries
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .get(key)
            .cloned()
    }

    fn record(&self, op: StorageOp) {
        self.log.lock().unwrap_or_else(|e| e.into_inner()).push(op);
    }
}

impl KeyValueStore for MemoryKeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        self.record(StorageOp::Get(key.to_string()));
        Ok(self.peek(key))
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.record(StorageOp::Set(key.to_string(), value.to_string()));
        self.entries
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        self.record(StorageOp::Remove(key.to_string()));
        self.entries
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .remove(key);
        Ok(())
    }
}
