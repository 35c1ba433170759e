//! Install/activate lifecycle and versioned partition management.
//!
//! The controller walks a fixed state machine:
//!
//! ```text
//! Installing -> Installed (waiting) -> Activating -> Activated
//! ```
//!
//! Install opens the static and crisis partitions and pre-populates them
//! with the configured critical and crisis resource lists. The controller
//! does not auto-activate an update while a previous version is installed;
//! it waits for an explicit skip-waiting command. A first install (no
//! prior partitions) activates immediately.
//!
//! Activation claims control and sweeps away every partition whose name is
//! not in the current static/dynamic/crisis set. The sweep is idempotent:
//! deleting an absent partition is a no-op.

use crate::config::{EngineConfig, PartitionRole};
use crate::error::Result;
use crate::net::Network;
use crate::request::{Request, StoredEntry};
use crate::store::Store;
use futures::future::join_all;
use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tokio::sync::RwLock;

/// Lifecycle states of the engine's partition set.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LifecyclePhase {
    Installing,
    Installed,
    Activating,
    Activated,
}

impl fmt::Display for LifecyclePhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            LifecyclePhase::Installing => "installing",
            LifecyclePhase::Installed => "installed",
            LifecyclePhase::Activating => "activating",
            LifecyclePhase::Activated => "activated",
        };
        f.write_str(name)
    }
}

/// Manages install pre-population, activation, and the eviction sweep.
#[derive(Clone)]
pub struct LifecycleController<S: Store, N: Network> {
    store: S,
    net: N,
    config: Arc<EngineConfig>,
    phase: Arc<RwLock<LifecyclePhase>>,
    pending_activation: Arc<AtomicBool>,
}

impl<S: Store, N: Network> LifecycleController<S, N> {
    pub fn new(store: S, net: N, config: Arc<EngineConfig>) -> Self {
        LifecycleController {
            store,
            net,
            config,
            phase: Arc::new(RwLock::new(LifecyclePhase::Installing)),
            pending_activation: Arc::new(AtomicBool::new(false)),
        }
    }

    pub async fn phase(&self) -> LifecyclePhase {
        *self.phase.read().await
    }

    /// Version identifier of the current partition set.
    pub fn version(&self) -> &str {
        &self.config.release
    }

    /// Whether an installed update is waiting for explicit activation.
    pub fn is_pending_activation(&self) -> bool {
        self.pending_activation.load(Ordering::SeqCst)
    }

    /// Install: open the static and crisis partitions and pre-populate
    /// them. Per-resource fetch failures are logged and skipped; they do
    /// not abort installation. A first install (no pre-existing partitions)
    /// activates immediately; otherwise the controller waits for a
    /// skip-waiting command.
    ///
    /// # Errors
    /// Returns `Err` only if the backing store itself is unavailable.
    pub async fn install(&self) -> Result<()> {
        let first_install = self.store.partition_names().await?.is_empty();
        info!(
            "installing partition set {} (first install: {})",
            self.version(),
            first_install
        );

        let static_partition = self.config.partition_name(PartitionRole::Static);
        let crisis_partition = self.config.partition_name(PartitionRole::Crisis);
        self.store.open(&static_partition).await?;
        self.store.open(&crisis_partition).await?;

        let static_jobs = self
            .config
            .critical_resources
            .iter()
            .map(|path| self.prefetch(&static_partition, path));
        join_all(static_jobs).await;

        let crisis_jobs = self
            .config
            .crisis_resources
            .iter()
            .filter(|path| {
                if self.config.is_function_endpoint(path) {
                    // Backend endpoints cannot be meaningfully pre-fetched
                    // at install time.
                    debug!("skipping function endpoint at install: {}", path);
                    false
                } else {
                    true
                }
            })
            .map(|path| self.prefetch(&crisis_partition, path));
        join_all(crisis_jobs).await;

        *self.phase.write().await = LifecyclePhase::Installed;

        if first_install {
            self.activate().await?;
        } else {
            self.pending_activation.store(true, Ordering::SeqCst);
            info!("installed {}, waiting for activation", self.version());
        }
        Ok(())
    }

    /// Activate: claim control and sweep superseded partitions.
    ///
    /// Enumerates all existing partitions and deletes every one whose name
    /// is not in the current static/dynamic/crisis set. Idempotent.
    ///
    /// # Errors
    /// Returns `Err` only if the backing store cannot enumerate partitions.
    pub async fn activate(&self) -> Result<()> {
        *self.phase.write().await = LifecyclePhase::Activating;
        let keep = self.config.current_partitions();

        for name in self.store.partition_names().await? {
            if !keep.contains(&name) {
                match self.store.delete_partition(&name).await {
                    Ok(_) => info!("evicted superseded partition {}", name),
                    Err(e) => warn!("failed to evict partition {}: {}", name, e),
                }
            }
        }

        self.pending_activation.store(false, Ordering::SeqCst);
        *self.phase.write().await = LifecyclePhase::Activated;
        info!("partition set {} activated", self.version());
        Ok(())
    }

    /// Fetch one resource and store it. Failures are logged and skipped.
    async fn prefetch(&self, partition: &str, path: &str) {
        let request = match self
            .config
            .resolve_url(path)
            .and_then(|url| Request::get(url.as_str()))
        {
            Ok(request) => request,
            Err(e) => {
                warn!("install: cannot build request for {}: {}", path, e);
                return;
            }
        };

        match self.net.fetch(&request).await {
            Ok(response) if response.is_ok_status() => {
                let entry = StoredEntry::snapshot(&response);
                if let Err(e) = self.store.put(partition, &request.cache_key(), entry).await {
                    warn!("install: store put failed for {}: {}", path, e);
                }
            }
            Ok(response) => {
                warn!(
                    "install: {} returned {}, not pre-cached",
                    path, response.status
                );
            }
            Err(e) => {
                warn!("install: prefetch failed for {}: {}", path, e);
            }
        }
    }
}
