//! # offline-kit
//!
//! An offline-first cache strategy engine for client runtimes.
//!
//! ## Features
//!
//! - **Request classification:** pure, total routing of every outbound
//!   request to a caching policy (crisis, network-first, static, dynamic)
//! - **Four strategies:** cache-first, network-first, stale-while-revalidate,
//!   and crisis-priority with detached background refresh
//! - **Versioned partitions:** named `<role>-<version>` cache partitions
//!   with install pre-population and post-activation eviction sweeps
//! - **Sync queue:** durable replay of actions performed offline (crisis
//!   messages, mood entries, safety-plan updates)
//! - **Control channel:** JSON message protocol for version queries, forced
//!   activation, cache clearing, and on-demand crisis caching
//! - **Capability injection:** store and network transport are traits, so
//!   the whole engine runs deterministically against in-memory fakes
//!
//! ## Quick Start
//!
//! ```
//! use offline_kit::net::ScriptedNetwork;
//! use offline_kit::store::MemoryStore;
//! use offline_kit::{EngineConfig, FetchOutcome, OfflineEngine, Request, Response};
//!
//! # tokio::runtime::Builder::new_current_thread().enable_all().build().unwrap().block_on(async {
//! // In production the host implements `Store` over its persistent cache
//! // storage and `Network` over its fetch primitive.
//! let store = MemoryStore::new();
//! let net = ScriptedNetwork::new();
//! net.respond("https://app.local/assets/app.css", Response::new(200, b"body{}".to_vec()));
//!
//! let engine = OfflineEngine::new(store, net, EngineConfig::default());
//!
//! let request = Request::get("https://app.local/assets/app.css").unwrap();
//! match engine.on_request(&request).await.unwrap() {
//!     FetchOutcome::Response(resp) => assert_eq!(resp.status, 200),
//!     FetchOutcome::Passthrough => unreachable!(),
//! }
//! # });
//! ```

#[macro_use]
extern crate log;

pub mod classify;
pub mod config;
pub mod control;
pub mod engine;
pub mod error;
pub mod lifecycle;
pub mod net;
pub mod request;
pub mod store;
pub mod strategy;
pub mod sync;

// Re-exports for convenience
pub use classify::{Classifier, RouteClass};
pub use config::{EngineConfig, PartitionRole, SyncEndpoints};
pub use control::{ControlMessage, ControlReply};
pub use engine::{FetchOutcome, OfflineEngine};
pub use error::{Error, Result};
pub use lifecycle::{LifecycleController, LifecyclePhase};
pub use net::Network;
pub use request::{Method, Request, RequestMode, Response, StoredEntry};
pub use store::{MemoryStore, Store};
pub use strategy::{StrategyExecutor, StrategyKind};
pub use sync::{DrainReport, SyncItem, SyncKind, SyncQueue};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
