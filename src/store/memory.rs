//! In-memory partitioned store (default, thread-safe, async).
//!
//! Uses DashMap for lock-free concurrent access with per-key sharding.
//! Serves as the deterministic test double and as the store for hosts whose
//! runtime persists the process image itself; hosts with real persistent
//! storage implement [`Store`] over it.

use super::Store;
use crate::error::Result;
use crate::request::StoredEntry;
use async_trait::async_trait;
use dashmap::DashMap;
use std::sync::Arc;

/// Thread-safe async in-memory partitioned store.
///
/// Partition creation is implicit on `put` and explicit via `open`.
/// Entries are overwritten wholesale; there is no per-entry TTL, and
/// eviction happens only at partition granularity.
///
/// # Example
///
/// ```no_run
/// use offline_kit::store::{MemoryStore, Store};
/// use offline_kit::{Response, StoredEntry};
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let store = MemoryStore::new();
///
///     let entry = StoredEntry::snapshot(&Response::html("<h1>hi</h1>"));
///     store.put("static-v1.0.0", "GET https://app.local/", entry).await?;
///
///     let hit = store.lookup("GET https://app.local/", None).await?;
///     assert!(hit.is_some());
///
///     Ok(())
/// }
/// ```
#[derive(Clone)]
pub struct MemoryStore {
    partitions: Arc<DashMap<String, DashMap<String, StoredEntry>>>,
}

impl MemoryStore {
    /// Create a new in-memory store with no partitions.
    pub fn new() -> Self {
        MemoryStore {
            partitions: Arc::new(DashMap::new()),
        }
    }

    /// Total number of entries across all partitions.
    pub fn len(&self) -> usize {
        self.partitions.iter().map(|p| p.len()).sum()
    }

    /// Check if the store holds no entries.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of entries in one partition, if it exists.
    pub fn partition_len(&self, partition: &str) -> Option<usize> {
        self.partitions.get(partition).map(|p| p.len())
    }

    /// Storage statistics.
    pub fn stats(&self) -> StoreStats {
        let total_bytes: usize = self
            .partitions
            .iter()
            .map(|p| p.iter().map(|e| e.body.len()).sum::<usize>())
            .sum();

        StoreStats {
            partitions: self.partitions.len(),
            entries: self.len(),
            total_bytes,
        }
    }

    /// Print store statistics to debug log.
    pub fn log_stats(&self) {
        let stats = self.stats();
        debug!(
            "Store stats: {} partitions, {} entries, {} bytes",
            stats.partitions, stats.entries, stats.total_bytes
        );
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Store for MemoryStore {
    async fn open(&self, partition: &str) -> Result<()> {
        self.partitions
            .entry(partition.to_string())
            .or_insert_with(DashMap::new);
        debug!("✓ MemStore OPEN {}", partition);
        Ok(())
    }

    async fn lookup(&self, key: &str, partition: Option<&str>) -> Result<Option<StoredEntry>> {
        match partition {
            Some(name) => {
                let hit = self
                    .partitions
                    .get(name)
                    .and_then(|p| p.get(key).map(|e| e.clone()));
                debug!(
                    "✓ MemStore LOOKUP {} in {} -> {}",
                    key,
                    name,
                    if hit.is_some() { "HIT" } else { "MISS" }
                );
                Ok(hit)
            }
            None => {
                for p in self.partitions.iter() {
                    if let Some(entry) = p.get(key) {
                        debug!("✓ MemStore LOOKUP {} -> HIT in {}", key, p.key());
                        return Ok(Some(entry.clone()));
                    }
                }
                debug!("✓ MemStore LOOKUP {} -> MISS", key);
                Ok(None)
            }
        }
    }

    async fn put(&self, partition: &str, key: &str, entry: StoredEntry) -> Result<()> {
        self.partitions
            .entry(partition.to_string())
            .or_insert_with(DashMap::new)
            .insert(key.to_string(), entry);
        debug!("✓ MemStore PUT {} into {}", key, partition);
        Ok(())
    }

    async fn delete_partition(&self, partition: &str) -> Result<bool> {
        let existed = self.partitions.remove(partition).is_some();
        debug!(
            "✓ MemStore DELETE partition {} ({})",
            partition,
            if existed { "existed" } else { "absent" }
        );
        Ok(existed)
    }

    async fn partition_names(&self) -> Result<Vec<String>> {
        Ok(self.partitions.iter().map(|p| p.key().clone()).collect())
    }
}

/// Store statistics.
#[derive(Clone, Debug)]
pub struct StoreStats {
    pub partitions: usize,
    pub entries: usize,
    pub total_bytes: usize,
}
