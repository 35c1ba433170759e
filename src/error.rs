//! Error types for the offline cache engine.

use std::fmt;

/// Result type for engine operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for the offline cache engine.
///
/// All engine operations return `Result<T>` where `Result` is defined as
/// `std::result::Result<T, Error>`. Different error variants represent
/// different failure modes:
#[derive(Debug, Clone)]
pub enum Error {
    /// Persistent store error (storage unavailable, quota exceeded, etc).
    ///
    /// Caching operations catch this at the call site and degrade to a
    /// no-op: the request still completes via the network.
    StoreError(String),

    /// Network fetch failed (connection refused, DNS, aborted transport).
    ///
    /// Drives fallback-to-cache or fallback-to-offline-page logic per
    /// strategy. A resolved non-2xx response is NOT a `NetworkError`;
    /// it is returned to the caller as a normal response.
    NetworkError(String),

    /// Serialization failed when encoding or decoding JSON.
    ///
    /// Raised for malformed sync payloads or control channel envelopes.
    SerializationError(String),

    /// A request could not be constructed (unparseable URL).
    InvalidRequest(String),

    /// Configuration error during engine construction.
    ///
    /// Common causes:
    /// - Invalid origin or endpoint URL
    /// - Empty release version
    ConfigError(String),

    /// Generic error with custom message.
    Other(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::StoreError(msg) => write!(f, "Store error: {}", msg),
            Error::NetworkError(msg) => write!(f, "Network error: {}", msg),
            Error::SerializationError(msg) => write!(f, "Serialization error: {}", msg),
            Error::InvalidRequest(msg) => write!(f, "Invalid request: {}", msg),
            Error::ConfigError(msg) => write!(f, "Config error: {}", msg),
            Error::Other(msg) => write!(f, "Error: {}", msg),
        }
    }
}

impl std::error::Error for Error {}

// ============================================================================
// Conversions from other error types
// ============================================================================

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::SerializationError(e.to_string())
    }
}

impl From<url::ParseError> for Error {
    fn from(e: url::ParseError) -> Self {
        Error::InvalidRequest(e.to_string())
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Error::StoreError(e.to_string())
    }
}

impl From<String> for Error {
    fn from(e: String) -> Self {
        Error::Other(e)
    }
}

impl From<&str> for Error {
    fn from(e: &str) -> Self {
        Error::Other(e.to_string())
    }
}
