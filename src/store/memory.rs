use crate::store::KeyValueStore;
use anyhow::Result;
use std::collections::HashMap;
use std::sync::RwLock;
use tracing::debug;

/// In-memory store implementation using HashMap and RwLock
#[derive(Default)]
pub struct MemoryStore {
    inner: RwLock<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        let map = self.inner.read().unwrap();
        let value = map.get(key).cloned();
        if value.is_some() {
            debug!("Store HIT for key: {key}");
        } else {
            debug!("Store MISS for key: {key}");
        }
        value
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut map = self.inner.write().unwrap();
        debug!("Store SET for key: {key}");
        map.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
