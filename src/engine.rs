//! The engine facade: classification, strategies, lifecycle, sync, and the
//! control channel behind one dispatch surface.
//!
//! A host wires its event sources to the four handlers (`on_install`,
//! `on_activate`, `on_request`, `on_control_message`) plus the sync
//! trigger (`on_sync`). No ambient host state is touched: the store and
//! network transport are injected capabilities, so the whole engine can be
//! driven deterministically in tests.

use crate::classify::Classifier;
use crate::config::{EngineConfig, PartitionRole};
use crate::control::{ControlMessage, ControlReply};
use crate::error::Result;
use crate::lifecycle::{LifecycleController, LifecyclePhase};
use crate::net::Network;
use crate::request::{Request, Response, StoredEntry};
use crate::store::Store;
use crate::strategy::{StrategyExecutor, StrategyKind};
use crate::sync::{DrainReport, SyncKind, SyncQueue};
use serde_json::Value;
use std::sync::Arc;

/// What the interception boundary should do with a request.
#[derive(Clone, Debug, PartialEq)]
pub enum FetchOutcome {
    /// Let the request proceed unmodified.
    Passthrough,
    /// Serve this substituted response (from cache, network, or the
    /// offline fallback page).
    Response(Response),
}

/// The offline cache engine.
///
/// # Example
///
/// ```ignore
/// use offline_kit::{EngineConfig, OfflineEngine, Request};
/// use offline_kit::store::MemoryStore;
///
/// let engine = OfflineEngine::new(MemoryStore::new(), transport, EngineConfig::default());
/// engine.on_install().await;
///
/// let request = Request::navigate("https://app.local/")?;
/// match engine.on_request(&request).await? {
///     FetchOutcome::Response(resp) => serve(resp),
///     FetchOutcome::Passthrough => forward(request),
/// }
/// ```
#[derive(Clone)]
pub struct OfflineEngine<S: Store, N: Network> {
    store: S,
    net: N,
    config: Arc<EngineConfig>,
    classifier: Classifier,
    executor: StrategyExecutor<S, N>,
    lifecycle: LifecycleController<S, N>,
    sync: SyncQueue,
}

impl<S: Store, N: Network> OfflineEngine<S, N> {
    pub fn new(store: S, net: N, config: EngineConfig) -> Self {
        Self::with_sync_queue(store, net, config, SyncQueue::new())
    }

    /// Build an engine around a host-provided sync queue.
    ///
    /// The queue is shared like the store and network capabilities, so a
    /// host that persists queued items can restore them into a fresh queue
    /// at startup and keep a handle for flushing on shutdown.
    pub fn with_sync_queue(store: S, net: N, config: EngineConfig, sync: SyncQueue) -> Self {
        let config = Arc::new(config);
        OfflineEngine {
            classifier: Classifier::new(config.clone()),
            executor: StrategyExecutor::new(store.clone(), net.clone(), config.clone()),
            lifecycle: LifecycleController::new(store.clone(), net.clone(), config.clone()),
            sync,
            store,
            net,
            config,
        }
    }

    /// Install handler: pre-populate the static and crisis partitions.
    /// Failures are caught and logged; install never panics the engine.
    pub async fn on_install(&self) {
        if let Err(e) = self.lifecycle.install().await {
            warn!("install failed: {}", e);
        }
    }

    /// Activate handler: run the partition eviction sweep.
    pub async fn on_activate(&self) {
        if let Err(e) = self.lifecycle.activate().await {
            warn!("activation failed: {}", e);
        }
    }

    /// Fetch handler: classify the request and run its strategy.
    ///
    /// # Errors
    /// Returns `Err` only when a strategy exhausts its fallback chain;
    /// the host should surface that as an ordinary network failure.
    pub async fn on_request(&self, request: &Request) -> Result<FetchOutcome> {
        let class = self.classifier.classify(request);
        let Some(kind) = StrategyKind::for_class(class) else {
            return Ok(FetchOutcome::Passthrough);
        };
        debug!("{} {} -> {} ({})", request.method(), request.url(), class, kind);
        self.executor
            .execute(kind, request)
            .await
            .map(FetchOutcome::Response)
    }

    /// Control handler. Returns the serialized reply for the reply port,
    /// or `None` for unrecognized input (logged and ignored, never an
    /// error).
    pub async fn on_control_message(&self, raw: &str) -> Option<String> {
        let message = ControlMessage::parse(raw)?;
        let reply = match message {
            ControlMessage::SkipWaiting => match self.lifecycle.activate().await {
                Ok(()) => ControlReply::ok(),
                Err(e) => ControlReply::err(&e.to_string()),
            },
            ControlMessage::GetVersion => ControlReply::with_version(self.lifecycle.version()),
            ControlMessage::ClearCache => self.clear_cache().await,
            ControlMessage::CacheCrisisResource { url } => self.cache_crisis_resource(&url).await,
        };
        Some(reply.to_json())
    }

    /// Sync trigger handler: replay queued items of one kind.
    pub async fn on_sync(&self, kind: SyncKind) -> DrainReport {
        self.sync.drain(kind, &self.net, &self.config).await
    }

    /// Record an action attempted while offline for later replay.
    pub fn defer_action(&self, kind: SyncKind, payload: Value) -> u64 {
        self.sync.enqueue(kind, payload)
    }

    pub fn sync_queue(&self) -> &SyncQueue {
        &self.sync
    }

    pub async fn phase(&self) -> LifecyclePhase {
        self.lifecycle.phase().await
    }

    pub fn version(&self) -> &str {
        self.lifecycle.version()
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    async fn clear_cache(&self) -> ControlReply {
        let names = match self.store.partition_names().await {
            Ok(names) => names,
            Err(e) => return ControlReply::err(&e.to_string()),
        };
        for name in names {
            if let Err(e) = self.store.delete_partition(&name).await {
                return ControlReply::err(&e.to_string());
            }
        }
        info!("all cache partitions cleared by control command");
        ControlReply::ok()
    }

    async fn cache_crisis_resource(&self, url: &str) -> ControlReply {
        let request = match self
            .config
            .resolve_url(url)
            .and_then(|url| Request::get(url.as_str()))
        {
            Ok(request) => request,
            Err(e) => return ControlReply::err(&e.to_string()),
        };

        match self.net.fetch(&request).await {
            Ok(response) if response.is_ok_status() => {
                let partition = self.config.partition_name(PartitionRole::Crisis);
                let entry = StoredEntry::snapshot(&response);
                match self.store.put(&partition, &request.cache_key(), entry).await {
                    Ok(()) => {
                        info!("crisis resource {} cached on demand", url);
                        ControlReply::ok()
                    }
                    Err(e) => ControlReply::err(&e.to_string()),
                }
            }
            Ok(response) => {
                ControlReply::err(&format!("origin answered {} for {}", response.status, url))
            }
            Err(e) => ControlReply::err(&e.to_string()),
        }
    }
}
