use crate::store::KeyValueStore;
use anyhow::{Context, Result};
use fjall::{Keyspace, PartitionCreateOptions, PartitionHandle, PersistMode};
use std::path::Path;
use tracing::debug;

const SETTINGS_PARTITION: &str = "settings";

/// Durable key-value store backed by a fjall keyspace. Reads and writes
/// are synchronous blocking calls.
pub struct DiskStore {
    keyspace: Keyspace,
    partition: PartitionHandle,
}

impl DiskStore {
    pub fn open(data_dir: &Path) -> Result<Self> {
        std::fs::create_dir_all(data_dir)
            .with_context(|| format!("Failed to create data directory: {}", data_dir.display()))?;

        let keyspace = fjall::Config::new(data_dir.join("store"))
            .open()
            .with_context(|| format!("Failed to open store at {}", data_dir.display()))?;
        let partition = keyspace
            .open_partition(SETTINGS_PARTITION, PartitionCreateOptions::default())
            .context("Failed to open settings partition")?;

        Ok(Self { keyspace, partition })
    }
}

impl KeyValueStore for DiskStore {
    fn get(&self, key: &str) -> Option<String> {
        match self.partition.get(key) {
            Ok(Some(value)) => {
                debug!("Store HIT for key: {key}");
                String::from_utf8(value.to_vec()).ok()
            }
            Ok(None) => {
                debug!("Store MISS for key: {key}");
                None
            }
            Err(e) => {
                debug!("Store read error for key {key}: {e}");
                None
            }
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.partition
            .insert(key, value)
            .with_context(|| format!("Failed to write key: {key}"))?;
        self.keyspace
            .persist(PersistMode::SyncAll)
            .context("Failed to persist settings store")?;
        debug!("Store SET for key: {key}");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_disk_store_get_set() {
        let dir = tempdir().unwrap();
        let store = DiskStore::open(dir.path()).unwrap();

        assert!(store.get("key1").is_none());

        store.set("key1", "value1").unwrap();
        assert_eq!(store.get("key1").as_deref(), Some("value1"));

        assert!(store.get("key2").is_none());
    }

    #[test]
    fn test_disk_store_survives_reopen() {
        let dir = tempdir().unwrap();
        {
            let store = DiskStore::open(dir.path()).unwrap();
            store.set("key1", "value1").unwrap();
        }

        let store = DiskStore::open(dir.path()).unwrap();
        assert_eq!(store.get("key1").as_deref(), Some("value1"));
    }
}
