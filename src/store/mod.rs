pub mod disk;
pub mod memory;

use disk::DiskStore;
use memory::MemoryStore;
use std::path::Path;
use std::sync::Arc;
use tracing::warn;

/// Injected key-value abstraction behind the settings subsystem.
/// Values are opaque strings; encoding is the caller's concern.
pub trait KeyValueStore: Send + Sync {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str) -> anyhow::Result<()>;
}

/// Opens the persistent store under `data_dir`, degrading to a fresh
/// in-memory store when the disk store cannot be opened. In the degraded
/// environment reads find nothing, so callers see their defaults.
pub fn open_store(data_dir: &Path) -> Arc<dyn KeyValueStore> {
    match DiskStore::open(data_dir) {
        Ok(store) => Arc::new(store),
        Err(e) => {
            warn!(
                "Could not open settings store at {}, falling back to in-memory: {e}",
                data_dir.display()
            );
            Arc::new(MemoryStore::new())
        }
    }
}
