//! Control channel wire format.
//!
//! The host application commands the engine out-of-band with JSON messages
//! of the shape `{ "type": string, "payload": object? }`. Replies travel
//! back over the host's reply port as `{ "success": true, ...data }` or
//! `{ "success": false, "error": string }`.
//!
//! The channel never throws across the message boundary: malformed JSON
//! and unknown message types are logged and ignored, producing no reply.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Message types understood by the engine.
pub const MSG_SKIP_WAITING: &str = "SKIP_WAITING";
pub const MSG_GET_VERSION: &str = "GET_VERSION";
pub const MSG_CLEAR_CACHE: &str = "CLEAR_CACHE";
pub const MSG_CACHE_CRISIS_RESOURCE: &str = "CACHE_CRISIS_RESOURCE";

/// Raw wire envelope.
#[derive(Debug, Deserialize)]
struct Envelope {
    #[serde(rename = "type")]
    kind: String,
    #[serde(default)]
    payload: Option<Value>,
}

/// A parsed control command.
#[derive(Clone, Debug, PartialEq)]
pub enum ControlMessage {
    /// Force immediate activation of an installed update.
    SkipWaiting,
    /// Report the current partition-version identifier.
    GetVersion,
    /// Delete all partitions regardless of name.
    ClearCache,
    /// Fetch a URL and store it into the crisis partition.
    CacheCrisisResource { url: String },
}

impl ControlMessage {
    /// Parse a wire message. Returns `None` (after logging) for malformed
    /// JSON, unknown types, and invalid payloads; the channel never
    /// surfaces an error for unrecognized input.
    pub fn parse(raw: &str) -> Option<ControlMessage> {
        let envelope: Envelope = match serde_json::from_str(raw) {
            Ok(envelope) => envelope,
            Err(e) => {
                warn!("control: malformed message ({}), ignoring", e);
                return None;
            }
        };

        match envelope.kind.as_str() {
            MSG_SKIP_WAITING => Some(ControlMessage::SkipWaiting),
            MSG_GET_VERSION => Some(ControlMessage::GetVersion),
            MSG_CLEAR_CACHE => Some(ControlMessage::ClearCache),
            MSG_CACHE_CRISIS_RESOURCE => {
                let url = envelope
                    .payload
                    .as_ref()
                    .and_then(|p| p.get("url"))
                    .and_then(Value::as_str);
                match url {
                    Some(url) => Some(ControlMessage::CacheCrisisResource {
                        url: url.to_string(),
                    }),
                    None => {
                        warn!("control: CACHE_CRISIS_RESOURCE without url payload, ignoring");
                        None
                    }
                }
            }
            other => {
                warn!("control: unknown message type {:?}, ignoring", other);
                None
            }
        }
    }
}

/// Reply delivered on the host's reply port.
#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct ControlReply {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ControlReply {
    pub fn ok() -> Self {
        ControlReply {
            success: true,
            version: None,
            error: None,
        }
    }

    pub fn with_version(version: &str) -> Self {
        ControlReply {
            success: true,
            version: Some(version.to_string()),
            error: None,
        }
    }

    pub fn err(message: &str) -> Self {
        ControlReply {
            success: false,
            version: None,
            error: Some(message.to_string()),
        }
    }

    /// Serialize for the reply port. Reply structure is infallible to
    /// encode, so this never panics in practice.
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| r#"{"success":false}"#.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_skip_waiting() {
        let msg = ControlMessage::parse(r#"{"type": "SKIP_WAITING"}"#);
        assert_eq!(msg, Some(ControlMessage::SkipWaiting));
    }

    #[test]
    fn test_parse_get_version() {
        let msg = ControlMessage::parse(r#"{"type": "GET_VERSION"}"#);
        assert_eq!(msg, Some(ControlMessage::GetVersion));
    }

    #[test]
    fn test_parse_cache_crisis_resource() {
        let msg = ControlMessage::parse(
            r#"{"type": "CACHE_CRISIS_RESOURCE", "payload": {"url": "/crisis"}}"#,
        );
        assert_eq!(
            msg,
            Some(ControlMessage::CacheCrisisResource {
                url: "/crisis".to_string()
            })
        );
    }

    #[test]
    fn test_missing_url_payload_ignored() {
        let msg = ControlMessage::parse(r#"{"type": "CACHE_CRISIS_RESOURCE"}"#);
        assert_eq!(msg, None);
    }

    #[test]
    fn test_unknown_type_ignored() {
        let msg = ControlMessage::parse(r#"{"type": "SELF_DESTRUCT"}"#);
        assert_eq!(msg, None);
    }

    #[test]
    fn test_malformed_json_ignored() {
        assert_eq!(ControlMessage::parse("not json at all"), None);
        assert_eq!(ControlMessage::parse(r#"{"no_type": true}"#), None);
    }

    #[test]
    fn test_reply_serialization() {
        assert_eq!(ControlReply::ok().to_json(), r#"{"success":true}"#);
        assert_eq!(
            ControlReply::with_version("v1.0.0").to_json(),
            r#"{"success":true,"version":"v1.0.0"}"#
        );
        assert_eq!(
            ControlReply::err("boom").to_json(),
            r#"{"success":false,"error":"boom"}"#
        );
    }
}
