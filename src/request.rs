//! Request and response types at the interception boundary.
//!
//! Every outbound request made by the hosted application is observable to
//! the engine as a [`Request`]: method, absolute URL, and navigation-mode
//! flag. The engine answers with either a passthrough or a substituted
//! [`Response`] built from cache, network, or the offline fallback page.
//!
//! Network response bodies are single-read in the host runtime, so any
//! component that both returns a response to a caller and persists it must
//! materialize two independent copies first. [`Response::snapshot`] and
//! [`StoredEntry::snapshot`] make that copy explicit.

use std::fmt;
use std::time::{SystemTime, UNIX_EPOCH};
use url::Url;

/// HTTP method of an intercepted request.
///
/// Only GET requests are ever cached; the engine ignores everything else at
/// classification time, but mutating methods still travel through the sync
/// queue replay path.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
    Head,
    Options,
    Patch,
}

impl Method {
    pub fn is_get(&self) -> bool {
        matches!(self, Method::Get)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Delete => "DELETE",
            Method::Head => "HEAD",
            Method::Options => "OPTIONS",
            Method::Patch => "PATCH",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How the request was initiated by the host.
///
/// Navigation requests (top-level page loads) are the only ones eligible
/// for offline-fallback-page substitution.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum RequestMode {
    /// Top-level document navigation.
    Navigate,
    /// Subresource, API call, or anything else.
    #[default]
    Subresource,
}

/// An intercepted outbound request.
#[derive(Clone, Debug)]
pub struct Request {
    method: Method,
    url: Url,
    mode: RequestMode,
    body: Option<Vec<u8>>,
}

impl Request {
    /// Build a request from a method and absolute URL string.
    ///
    /// The URL fragment is stripped so that request identity is stable
    /// regardless of in-page anchors.
    ///
    /// # Errors
    /// Returns `Err` if the URL cannot be parsed as an absolute URL.
    pub fn new(method: Method, url: &str) -> crate::error::Result<Self> {
        let mut url = Url::parse(url)?;
        url.set_fragment(None);
        Ok(Request {
            method,
            url,
            mode: RequestMode::default(),
            body: None,
        })
    }

    /// Convenience constructor for a GET subresource request.
    pub fn get(url: &str) -> crate::error::Result<Self> {
        Self::new(Method::Get, url)
    }

    /// Convenience constructor for a GET navigation request.
    pub fn navigate(url: &str) -> crate::error::Result<Self> {
        Ok(Self::new(Method::Get, url)?.with_mode(RequestMode::Navigate))
    }

    /// Convenience constructor for a POST with a JSON body.
    pub fn post_json(url: &str, body: &serde_json::Value) -> crate::error::Result<Self> {
        let mut req = Self::new(Method::Post, url)?;
        req.body = Some(serde_json::to_vec(body)?);
        Ok(req)
    }

    pub fn with_mode(mut self, mode: RequestMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn method(&self) -> Method {
        self.method
    }

    pub fn url(&self) -> &Url {
        &self.url
    }

    pub fn mode(&self) -> RequestMode {
        self.mode
    }

    pub fn is_navigation(&self) -> bool {
        self.mode == RequestMode::Navigate
    }

    pub fn body(&self) -> Option<&[u8]> {
        self.body.as_deref()
    }

    /// URL path component, always starting with `/`.
    pub fn path(&self) -> &str {
        self.url.path()
    }

    pub fn has_query(&self) -> bool {
        self.url.query().is_some()
    }

    /// Whether the request travels over a cacheable network scheme.
    pub fn is_http(&self) -> bool {
        matches!(self.url.scheme(), "http" | "https")
    }

    /// File extension of the final path segment, if any.
    pub fn extension(&self) -> Option<&str> {
        let segment = self.url.path_segments()?.next_back()?;
        match segment.rsplit_once('.') {
            Some((stem, ext)) if !stem.is_empty() && !ext.is_empty() => Some(ext),
            _ => None,
        }
    }

    /// Derived storage identity: method plus full URL (fragment already
    /// stripped). Only meaningful for GET requests; non-GET pairs are never
    /// stored.
    pub fn cache_key(&self) -> String {
        format!("{} {}", self.method, self.url)
    }
}

/// A network response observed or substituted at the boundary.
#[derive(Clone, Debug, PartialEq)]
pub struct Response {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    pub body: Vec<u8>,
}

impl Response {
    pub fn new(status: u16, body: Vec<u8>) -> Self {
        Response {
            status,
            headers: Vec::new(),
            body,
        }
    }

    /// A 200 response with a text/html body, used for offline fallback pages.
    pub fn html(body: &str) -> Self {
        Response {
            status: 200,
            headers: vec![("content-type".to_string(), "text/html".to_string())],
            body: body.as_bytes().to_vec(),
        }
    }

    /// A 200 response with a JSON body.
    pub fn json(body: &serde_json::Value) -> Self {
        Response {
            status: 200,
            headers: vec![("content-type".to_string(), "application/json".to_string())],
            body: body.to_string().into_bytes(),
        }
    }

    pub fn with_header(mut self, name: &str, value: &str) -> Self {
        self.headers.push((name.to_string(), value.to_string()));
        self
    }

    /// Strictly HTTP 200. This is the persistence gate for every strategy:
    /// partial-content and redirect responses are never written to the store.
    pub fn is_ok_status(&self) -> bool {
        self.status == 200
    }

    /// Any 2xx status. Used for sync delivery acknowledgement, not for
    /// cache population.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Materialize an independent copy of this response.
    ///
    /// Response bodies are single-read at the host boundary; callers that
    /// both return a response and persist it must snapshot before either
    /// consumer reads the body.
    pub fn snapshot(&self) -> Response {
        self.clone()
    }

    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(n, _)| n.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}

/// The unit of storage: a response payload snapshot plus its storage time.
///
/// Entries are immutable once read back; strategies that "update" an entry
/// replace it wholesale.
#[derive(Clone, Debug, PartialEq)]
pub struct StoredEntry {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    pub body: Vec<u8>,
    /// Epoch milliseconds at snapshot time.
    pub stored_at: u64,
}

impl StoredEntry {
    /// Snapshot a response for storage.
    pub fn snapshot(response: &Response) -> Self {
        let copy = response.snapshot();
        StoredEntry {
            status: copy.status,
            headers: copy.headers,
            body: copy.body,
            stored_at: now_millis(),
        }
    }

    /// Rehydrate the stored payload as a servable response.
    pub fn into_response(self) -> Response {
        Response {
            status: self.status,
            headers: self.headers,
            body: self.body,
        }
    }
}

/// Current time as epoch milliseconds.
pub(crate) fn now_millis() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_millis() as u64
}
