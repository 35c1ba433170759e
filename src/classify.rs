//! Request classification.
//!
//! Maps every intercepted request to a route class through a fixed
//! precedence order. The classifier is a pure, total function: anything it
//! cannot place falls through to [`RouteClass::Fallback`], which behaves
//! like network-first at execution time.
//!
//! # Precedence (first match wins)
//!
//! 1. Non-GET methods and non-network schemes → `Ignore` (passthrough)
//! 2. Crisis resources: availability during a crisis outranks freshness,
//!    so these win even when they also look like API calls
//! 3. Network-first realtime/authenticated endpoints (chat, session, auth)
//! 4. Static: critical app-shell resources or static-asset extensions
//! 5. Dynamic: backend function calls, media, content APIs
//! 6. `Fallback`

use crate::config::EngineConfig;
use crate::request::Request;
use std::fmt;
use std::sync::Arc;

/// Route class assigned to an intercepted request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RouteClass {
    /// Let the request pass through untouched.
    Ignore,
    /// Crisis resource: cached copy served first, refreshed in background.
    Crisis,
    /// Realtime/authenticated endpoint: network first, cache as fallback.
    NetworkFirst,
    /// App-shell asset: cache first, network on miss.
    StaticAsset,
    /// Content API or media: stale-while-revalidate.
    Dynamic,
    /// Unmatched: handled with network-first behavior.
    Fallback,
}

impl fmt::Display for RouteClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            RouteClass::Ignore => "ignore",
            RouteClass::Crisis => "crisis",
            RouteClass::NetworkFirst => "network-first",
            RouteClass::StaticAsset => "static",
            RouteClass::Dynamic => "dynamic",
            RouteClass::Fallback => "fallback",
        };
        f.write_str(name)
    }
}

/// Pure request classifier over the configured pattern tables.
#[derive(Clone)]
pub struct Classifier {
    config: Arc<EngineConfig>,
}

impl Classifier {
    pub fn new(config: Arc<EngineConfig>) -> Self {
        Classifier { config }
    }

    /// Classify a request. Total over its input domain; never fails.
    pub fn classify(&self, request: &Request) -> RouteClass {
        if !request.method().is_get() || !request.is_http() {
            return RouteClass::Ignore;
        }

        let url = request.url().as_str();

        if self.matches_any(url, &self.config.crisis_patterns) {
            return RouteClass::Crisis;
        }

        if self.matches_any(url, &self.config.network_first_patterns) {
            return RouteClass::NetworkFirst;
        }

        if self.is_critical_resource(request) || self.has_extension(request, &self.config.static_extensions) {
            return RouteClass::StaticAsset;
        }

        if self.matches_any(url, &self.config.dynamic_patterns)
            || self.has_extension(request, &self.config.media_extensions)
        {
            return RouteClass::Dynamic;
        }

        RouteClass::Fallback
    }

    fn matches_any(&self, url: &str, patterns: &[String]) -> bool {
        patterns.iter().any(|p| url.contains(p.as_str()))
    }

    fn has_extension(&self, request: &Request, extensions: &[String]) -> bool {
        request
            .extension()
            .map(|ext| extensions.iter().any(|e| e.eq_ignore_ascii_case(ext)))
            .unwrap_or(false)
    }

    /// Critical resources match exactly or by path prefix. The root path
    /// `/` matches only when there is no query string, so deep links with
    /// query parameters stay on the network-first fallback path.
    fn is_critical_resource(&self, request: &Request) -> bool {
        let path = request.path();
        self.config.critical_resources.iter().any(|resource| {
            if resource == "/" {
                path == "/" && !request.has_query()
            } else {
                path == resource || path.starts_with(resource.as_str())
            }
        })
    }
}
