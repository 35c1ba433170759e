//! Partitioned store implementations.

use crate::error::Result;
use crate::request::StoredEntry;
use async_trait::async_trait;

pub mod memory;

pub use memory::{MemoryStore, StoreStats};

/// Trait for partitioned cache store implementations.
///
/// A store holds named, versioned partitions of request-keyed response
/// snapshots. Partitions are the unit of eviction: no entry expires by
/// itself, and the lifecycle controller sweeps whole partitions after
/// activation.
///
/// The store is injected explicitly into every component rather than
/// reached through ambient host state, so tests can drive the engine
/// against an in-memory fake deterministically.
///
/// **IMPORTANT:** All methods use `&self` to allow concurrent access.
/// Implementations should use interior mutability. The store is an
/// append/overwrite store with no transactions; callers must tolerate
/// read-after-write races, and last-write-wins on concurrent same-key
/// population is accepted behavior.
#[async_trait]
pub trait Store: Send + Sync + Clone + 'static {
    /// Ensure a partition exists. Idempotent.
    ///
    /// # Errors
    /// Returns `Err` if the backing storage is unavailable.
    async fn open(&self, partition: &str) -> Result<()>;

    /// Look up an entry by request key.
    ///
    /// With `partition` set, only that partition is searched. Unscoped
    /// lookups search all partitions in unspecified order and return the
    /// first hit.
    ///
    /// # Errors
    /// Returns `Err` if the backing storage is unavailable.
    async fn lookup(&self, key: &str, partition: Option<&str>) -> Result<Option<StoredEntry>>;

    /// Store an entry, creating the partition if absent. Overwrites any
    /// existing entry for the key wholesale.
    ///
    /// # Errors
    /// Returns `Err` if the backing storage is unavailable or full.
    async fn put(&self, partition: &str, key: &str, entry: StoredEntry) -> Result<()>;

    /// Delete a whole partition. Deleting an absent partition is a no-op.
    ///
    /// # Returns
    /// `true` if the partition existed.
    ///
    /// # Errors
    /// Returns `Err` if the backing storage is unavailable.
    async fn delete_partition(&self, partition: &str) -> Result<bool>;

    /// Names of all existing partitions. Used by the eviction sweep and
    /// the control channel's cache-clear command.
    ///
    /// # Errors
    /// Returns `Err` if the backing storage is unavailable.
    async fn partition_names(&self) -> Result<Vec<String>>;
}
