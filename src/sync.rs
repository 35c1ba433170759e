//! Durable queue for actions performed while offline.
//!
//! Crisis messages, mood entries, and safety-plan updates attempted without
//! connectivity are appended here and replayed against the origin when a
//! sync trigger fires for their kind. An item leaves the queue only after
//! the origin acknowledges receipt with an HTTP 2xx; a failed replay leaves
//! it queued for the next trigger.
//!
//! Items replay in insertion order within a kind; there is no cross-kind
//! ordering guarantee. One item's delivery failure never aborts the rest of
//! the drain cycle.

use crate::config::EngineConfig;
use crate::net::Network;
use crate::request::{now_millis, Request};
use dashmap::DashMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Closed set of deferred-action kinds, each with its own trigger tag and
/// origin endpoint.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SyncKind {
    CrisisMessage,
    MoodEntry,
    SafetyPlanUpdate,
}

impl SyncKind {
    /// Stable trigger tag for this kind.
    pub fn tag(&self) -> &'static str {
        match self {
            SyncKind::CrisisMessage => "crisis-message",
            SyncKind::MoodEntry => "mood-entry",
            SyncKind::SafetyPlanUpdate => "safety-plan-update",
        }
    }

    /// Parse a trigger tag.
    pub fn from_tag(tag: &str) -> Option<SyncKind> {
        match tag {
            "crisis-message" => Some(SyncKind::CrisisMessage),
            "mood-entry" => Some(SyncKind::MoodEntry),
            "safety-plan-update" => Some(SyncKind::SafetyPlanUpdate),
            _ => None,
        }
    }

    /// Origin endpoint path for this kind.
    pub fn endpoint<'a>(&self, config: &'a EngineConfig) -> &'a str {
        match self {
            SyncKind::CrisisMessage => &config.sync_endpoints.crisis_message,
            SyncKind::MoodEntry => &config.sync_endpoints.mood_entry,
            SyncKind::SafetyPlanUpdate => &config.sync_endpoints.safety_plan_update,
        }
    }
}

impl fmt::Display for SyncKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// A deferred mutation awaiting delivery.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SyncItem {
    pub id: u64,
    pub kind: SyncKind,
    /// Opaque JSON-serializable body, posted as-is during replay.
    pub payload: Value,
    /// Epoch milliseconds at enqueue time.
    pub created_at: u64,
}

/// Outcome of one drain cycle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DrainReport {
    pub delivered: usize,
    pub failed: usize,
}

/// Durable multiset of deferred actions, safe for concurrent append and
/// sequential drain.
///
/// The enqueue path (any request handler) and the drain path (trigger
/// handler) share this structure; appends never block on the network.
#[derive(Clone)]
pub struct SyncQueue {
    items: Arc<DashMap<u64, SyncItem>>,
    next_id: Arc<AtomicU64>,
}

impl SyncQueue {
    pub fn new() -> Self {
        SyncQueue {
            items: Arc::new(DashMap::new()),
            next_id: Arc::new(AtomicU64::new(1)),
        }
    }

    /// Append an item. Never blocks on the network.
    pub fn enqueue(&self, kind: SyncKind, payload: Value) -> u64 {
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        let item = SyncItem {
            id,
            kind,
            payload,
            created_at: now_millis(),
        };
        self.items.insert(id, item);
        debug!("sync enqueue #{} ({})", id, kind);
        id
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of queued items of one kind.
    pub fn pending(&self, kind: SyncKind) -> usize {
        self.items.iter().filter(|i| i.kind == kind).count()
    }

    /// Queued items of one kind in insertion order.
    pub fn items_for(&self, kind: SyncKind) -> Vec<SyncItem> {
        let mut items: Vec<SyncItem> = self
            .items
            .iter()
            .filter(|i| i.kind == kind)
            .map(|i| i.clone())
            .collect();
        items.sort_by_key(|i| i.id);
        items
    }

    /// Replay all queued items of one kind against the origin.
    ///
    /// Each item gets a single delivery attempt per cycle; retry relies on
    /// the next trigger. Items are removed only on an acknowledged 2xx.
    /// A failed item is left queued and does not abort the cycle.
    pub async fn drain<N: Network>(
        &self,
        kind: SyncKind,
        net: &N,
        config: &EngineConfig,
    ) -> DrainReport {
        let items = self.items_for(kind);
        if items.is_empty() {
            return DrainReport::default();
        }
        info!("sync drain for {}: {} item(s)", kind, items.len());

        let endpoint = kind.endpoint(config);
        let mut report = DrainReport::default();

        for item in items {
            let request = match config
                .resolve_url(endpoint)
                .and_then(|url| Request::post_json(url.as_str(), &item.payload))
            {
                Ok(request) => request,
                Err(e) => {
                    warn!("sync #{}: cannot build delivery request: {}", item.id, e);
                    report.failed += 1;
                    continue;
                }
            };

            match net.fetch(&request).await {
                Ok(response) if response.is_success() => {
                    self.items.remove(&item.id);
                    report.delivered += 1;
                    debug!("sync #{} delivered", item.id);
                }
                Ok(response) => {
                    report.failed += 1;
                    warn!(
                        "sync #{}: origin answered {}, keeping queued",
                        item.id, response.status
                    );
                }
                Err(e) => {
                    report.failed += 1;
                    warn!("sync #{}: delivery failed ({}), keeping queued", item.id, e);
                }
            }
        }

        info!(
            "sync drain for {} done: {} delivered, {} failed",
            kind, report.delivered, report.failed
        );
        report
    }
}

impl Default for SyncQueue {
    fn default() -> Self {
        Self::new()
    }
}
