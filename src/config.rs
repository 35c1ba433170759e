//! Configuration for the offline cache engine.
//!
//! All fields have defaults matching the shipped application shell, so a
//! host can start with `EngineConfig::default()` and override only what it
//! needs. The config is `Deserialize` so pattern tables can ship as JSON
//! alongside the app.
//!
//! # Example
//!
//! ```
//! use offline_kit::EngineConfig;
//!
//! let config = EngineConfig {
//!     release: "v2.1.0".into(),
//!     ..Default::default()
//! };
//! assert_eq!(config.partition_name(offline_kit::PartitionRole::Crisis), "crisis-v2.1.0");
//! ```

use crate::error::{Error, Result};
use serde::Deserialize;
use url::Url;

/// Logical role of a cache partition.
///
/// At most one partition per role is current at any time; superseded
/// partitions are garbage after activation completes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PartitionRole {
    Static,
    Dynamic,
    Crisis,
}

impl PartitionRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            PartitionRole::Static => "static",
            PartitionRole::Dynamic => "dynamic",
            PartitionRole::Crisis => "crisis",
        }
    }

    pub fn all() -> [PartitionRole; 3] {
        [
            PartitionRole::Static,
            PartitionRole::Dynamic,
            PartitionRole::Crisis,
        ]
    }
}

/// Origin endpoints for sync queue replay, one per deferred-action kind.
#[derive(Clone, Debug, Deserialize)]
pub struct SyncEndpoints {
    #[serde(default = "default_crisis_message_endpoint")]
    pub crisis_message: String,
    #[serde(default = "default_mood_entry_endpoint")]
    pub mood_entry: String,
    #[serde(default = "default_safety_plan_endpoint")]
    pub safety_plan_update: String,
}

impl Default for SyncEndpoints {
    fn default() -> Self {
        SyncEndpoints {
            crisis_message: default_crisis_message_endpoint(),
            mood_entry: default_mood_entry_endpoint(),
            safety_plan_update: default_safety_plan_endpoint(),
        }
    }
}

/// Configuration for the offline cache engine.
///
/// Pattern tables drive the request classifier; resource lists drive
/// install-time pre-population; `release` drives partition naming and the
/// post-activation eviction sweep.
#[derive(Clone, Debug, Deserialize)]
pub struct EngineConfig {
    /// Release version embedded in partition names (changes every deploy).
    #[serde(default = "default_release")]
    pub release: String,

    /// Base origin used to resolve relative resource paths during install
    /// pre-population and sync replay.
    #[serde(default = "default_origin")]
    pub origin: String,

    /// Path of the pre-cached offline fallback document.
    #[serde(default = "default_offline_fallback")]
    pub offline_fallback: String,

    /// URL substrings identifying crisis resources. Crisis matches win over
    /// everything else: availability during a crisis outranks freshness.
    #[serde(default = "default_crisis_patterns")]
    pub crisis_patterns: Vec<String>,

    /// Crisis resources pre-populated at install. Entries under
    /// `function_path` are backend endpoints and are skipped at install
    /// time, since they cannot be meaningfully pre-fetched.
    #[serde(default = "default_crisis_resources")]
    pub crisis_resources: Vec<String>,

    /// URL substrings for realtime/authenticated endpoints that must never
    /// serve stale data (chat, session, auth, user).
    #[serde(default = "default_network_first_patterns")]
    pub network_first_patterns: Vec<String>,

    /// Critical app-shell resources, matched exactly or by path prefix.
    /// The root path `/` matches only when the URL carries no query string.
    #[serde(default = "default_critical_resources")]
    pub critical_resources: Vec<String>,

    /// Extensions treated as static assets.
    #[serde(default = "default_static_extensions")]
    pub static_extensions: Vec<String>,

    /// URL substrings for dynamic content APIs (posts, chat media, wellness).
    #[serde(default = "default_dynamic_patterns")]
    pub dynamic_patterns: Vec<String>,

    /// Media extensions cached under the dynamic policy.
    #[serde(default = "default_media_extensions")]
    pub media_extensions: Vec<String>,

    /// Path prefix of backend function endpoints.
    #[serde(default = "default_function_path")]
    pub function_path: String,

    /// Sync queue replay endpoints.
    #[serde(default)]
    pub sync_endpoints: SyncEndpoints,
}

impl Default for EngineConfig {
    fn default() -> Self {
        EngineConfig {
            release: default_release(),
            origin: default_origin(),
            offline_fallback: default_offline_fallback(),
            crisis_patterns: default_crisis_patterns(),
            crisis_resources: default_crisis_resources(),
            network_first_patterns: default_network_first_patterns(),
            critical_resources: default_critical_resources(),
            static_extensions: default_static_extensions(),
            dynamic_patterns: default_dynamic_patterns(),
            media_extensions: default_media_extensions(),
            function_path: default_function_path(),
            sync_endpoints: SyncEndpoints::default(),
        }
    }
}

impl EngineConfig {
    /// Partition name for a role under the current release:
    /// `<role>-<release>`.
    pub fn partition_name(&self, role: PartitionRole) -> String {
        format!("{}-{}", role.as_str(), self.release)
    }

    /// The partition set that survives the activation sweep.
    pub fn current_partitions(&self) -> Vec<String> {
        PartitionRole::all()
            .iter()
            .map(|role| self.partition_name(*role))
            .collect()
    }

    /// Resolve a possibly-relative path against the configured origin.
    ///
    /// # Errors
    /// Returns `Err` if neither the path nor the origin yields a valid
    /// absolute URL.
    pub fn resolve_url(&self, path: &str) -> Result<Url> {
        if let Ok(url) = Url::parse(path) {
            return Ok(url);
        }
        let origin = Url::parse(&self.origin)
            .map_err(|e| Error::ConfigError(format!("invalid origin {}: {}", self.origin, e)))?;
        Ok(origin.join(path)?)
    }

    /// Whether a resource path points at a backend function endpoint.
    pub fn is_function_endpoint(&self, path: &str) -> bool {
        path.contains(&self.function_path)
    }
}

fn default_release() -> String {
    "v1.0.0".to_string()
}

fn default_origin() -> String {
    "https://app.local".to_string()
}

fn default_offline_fallback() -> String {
    "/offline.html".to_string()
}

fn default_crisis_patterns() -> Vec<String> {
    vec![
        "/crisis".to_string(),
        "/safety-plan".to_string(),
        "crisis-resources".to_string(),
        "safety-plan-data".to_string(),
        "emergency-contacts".to_string(),
    ]
}

fn default_crisis_resources() -> Vec<String> {
    vec![
        "/crisis".to_string(),
        "/crisis-resources".to_string(),
        "/safety-plan".to_string(),
        "/.netlify/functions/crisis-resources".to_string(),
        "/.netlify/functions/safety-plan-data".to_string(),
        "/.netlify/functions/emergency-contacts".to_string(),
    ]
}

fn default_network_first_patterns() -> Vec<String> {
    // Crisis API endpoints are absent here: the crisis pattern table
    // matches them at an earlier precedence step.
    vec![
        "/api/chat".to_string(),
        "/api/session".to_string(),
        "/api/auth".to_string(),
        "/api/user".to_string(),
    ]
}

fn default_critical_resources() -> Vec<String> {
    vec![
        "/".to_string(),
        "/index.html".to_string(),
        "/offline.html".to_string(),
        "/manifest.json".to_string(),
    ]
}

fn default_static_extensions() -> Vec<String> {
    ["css", "js", "woff", "woff2", "ttf", "ico"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

fn default_dynamic_patterns() -> Vec<String> {
    vec![
        "/.netlify/functions/".to_string(),
        "/api/posts".to_string(),
        "/api/wellness".to_string(),
    ]
}

fn default_media_extensions() -> Vec<String> {
    ["png", "jpg", "jpeg", "gif", "svg", "webp", "mp3", "mp4"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

fn default_function_path() -> String {
    "/.netlify/functions/".to_string()
}

fn default_crisis_message_endpoint() -> String {
    "/.netlify/functions/crisis-message".to_string()
}

fn default_mood_entry_endpoint() -> String {
    "/.netlify/functions/mood-entry".to_string()
}

fn default_safety_plan_endpoint() -> String {
    "/.netlify/functions/safety-plan-update".to_string()
}
