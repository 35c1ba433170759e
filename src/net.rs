//! Network capability trait and a scripted fake for tests.
//!
//! The engine never reaches for an ambient fetch primitive; the transport is
//! injected as a [`Network`] capability so strategies, lifecycle
//! pre-population, and sync replay can all be driven against canned
//! outcomes in tests.

use crate::error::{Error, Result};
use crate::request::{Request, Response};
use async_trait::async_trait;
use dashmap::DashMap;
use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// Trait for the outbound network transport.
///
/// # Contract
///
/// - `Ok(response)` for any resolved HTTP exchange, **including non-2xx
///   statuses**. Strategies decide what a 404 or 500 means.
/// - `Err(Error::NetworkError)` only for a thrown transport failure
///   (offline, DNS, aborted connection). This distinction matters: only a
///   thrown error triggers offline-page substitution for navigations.
#[async_trait]
pub trait Network: Send + Sync + Clone + 'static {
    /// Perform the request against the origin.
    ///
    /// # Errors
    /// Returns `Err` only for transport-level failures.
    async fn fetch(&self, request: &Request) -> Result<Response>;
}

/// Scripted outcome for one URL.
#[derive(Clone, Debug)]
enum Outcome {
    Respond(Response),
    Fail(String),
}

/// Scripted network fake for tests and host-side simulation.
///
/// Outcomes are keyed by full URL. Every call is counted, per URL and in
/// total, so tests can assert that a cached path issued zero fetches.
/// Unscripted URLs fail like an offline transport.
///
/// # Example
///
/// ```
/// use offline_kit::net::{Network, ScriptedNetwork};
/// use offline_kit::{Request, Response};
///
/// # tokio::runtime::Builder::new_current_thread().enable_all().build().unwrap().block_on(async {
/// let net = ScriptedNetwork::new();
/// net.respond("https://app.local/a", Response::html("hi"));
///
/// let req = Request::get("https://app.local/a").unwrap();
/// let resp = net.fetch(&req).await.unwrap();
/// assert_eq!(resp.status, 200);
/// assert_eq!(net.fetch_count(), 1);
/// # });
/// ```
#[derive(Clone)]
pub struct ScriptedNetwork {
    outcomes: Arc<DashMap<String, Outcome>>,
    queued: Arc<DashMap<String, VecDeque<Outcome>>>,
    calls: Arc<DashMap<String, usize>>,
    total_calls: Arc<AtomicUsize>,
}

impl ScriptedNetwork {
    pub fn new() -> Self {
        ScriptedNetwork {
            outcomes: Arc::new(DashMap::new()),
            queued: Arc::new(DashMap::new()),
            calls: Arc::new(DashMap::new()),
            total_calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Script a resolved response for a URL.
    pub fn respond(&self, url: &str, response: Response) {
        self.outcomes
            .insert(url.to_string(), Outcome::Respond(response));
    }

    /// Script a thrown transport failure for a URL.
    pub fn fail(&self, url: &str, reason: &str) {
        self.outcomes
            .insert(url.to_string(), Outcome::Fail(reason.to_string()));
    }

    /// Queue a one-shot response for a URL. Queued outcomes are consumed
    /// in order before any standing outcome applies.
    pub fn respond_once(&self, url: &str, response: Response) {
        self.queued
            .entry(url.to_string())
            .or_default()
            .push_back(Outcome::Respond(response));
    }

    /// Queue a one-shot transport failure for a URL.
    pub fn fail_once(&self, url: &str, reason: &str) {
        self.queued
            .entry(url.to_string())
            .or_default()
            .push_back(Outcome::Fail(reason.to_string()));
    }

    /// Remove any scripted outcome for a URL (reverts to offline behavior).
    pub fn clear(&self, url: &str) {
        self.outcomes.remove(url);
    }

    /// Total fetches issued across all URLs.
    pub fn fetch_count(&self) -> usize {
        self.total_calls.load(Ordering::SeqCst)
    }

    /// Fetches issued for one URL.
    pub fn fetch_count_for(&self, url: &str) -> usize {
        self.calls.get(url).map(|c| *c).unwrap_or(0)
    }
}

impl Default for ScriptedNetwork {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Network for ScriptedNetwork {
    async fn fetch(&self, request: &Request) -> Result<Response> {
        let url = request.url().as_str().to_string();
        self.total_calls.fetch_add(1, Ordering::SeqCst);
        *self.calls.entry(url.clone()).or_insert(0) += 1;

        let queued = self
            .queued
            .get_mut(&url)
            .and_then(|mut q| q.pop_front());
        match queued.or_else(|| self.outcomes.get(&url).map(|o| o.clone())) {
            Some(Outcome::Respond(response)) => {
                debug!("ScriptedNetwork {} {} -> {}", request.method(), url, response.status);
                Ok(response)
            }
            Some(Outcome::Fail(reason)) => {
                debug!("ScriptedNetwork {} {} -> FAIL ({})", request.method(), url, reason);
                Err(Error::NetworkError(reason))
            }
            None => Err(Error::NetworkError(format!("no route to {}", url))),
        }
    }
}
