use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A failed HTTP exchange as delivered by a transport adapter
///
/// Adapters construct one event per failure from their transport's native
/// error representation and hand it to the dispatcher. Events are
/// consumed by a single handling pass and never retained.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawErrorEvent {
    /// HTTP status code (0 for pure network failures)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<u16>,
    /// HTTP status text
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status_text: Option<String>,
    /// Transport-level error message
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// Response body of unknown shape
    ///
    /// Adapters must pass malformed or unparseable bodies through rather
    /// than swallowing them; `None` means the transport delivered no body.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
    /// Raw stack trace text, when the transport surfaces one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stack: Option<String>,
    /// The request that produced this failure
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request: Option<RequestInfo>,
}

impl RawErrorEvent {
    /// Event carrying only a response body
    #[must_use]
    pub fn from_body(status: u16, data: Value) -> Self {
        Self {
            status: Some(status),
            data: Some(data),
            ..Self::default()
        }
    }

    /// URL of the originating request, when known
    #[must_use]
    pub fn request_url(&self) -> Option<&str> {
        self.request.as_ref().and_then(|r| r.url.as_deref())
    }
}

/// Descriptor of the HTTP request that produced a failure
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RequestInfo {
    /// HTTP method
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub method: Option<String>,
    /// Request URL
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// Request headers in insertion order
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub headers: IndexMap<String, String>,
    /// Request body, opaque to the core
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<Value>,
}

impl RequestInfo {
    /// Descriptor with only method and URL populated
    #[must_use]
    pub fn new(method: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            method: Some(method.into()),
            url: Some(url.into()),
            headers: IndexMap::new(),
            body: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn from_body_sets_status_and_data() {
        let event = RawErrorEvent::from_body(500, json!({"message": "boom"}));
        assert_eq!(event.status, Some(500));
        assert!(event.data.is_some());
        assert!(event.message.is_none());
    }

    #[test]
    fn request_descriptors_compare_by_value() {
        let mut a = RequestInfo::new("GET", "/api/items");
        a.headers.insert("accept".to_owned(), "application/json".to_owned());
        let mut b = RequestInfo::new("GET", "/api/items");
        b.headers.insert("accept".to_owned(), "application/json".to_owned());

        assert_eq!(a, b);

        b.body = Some(json!({"q": 1}));
        assert_ne!(a, b);
    }

    #[test]
    fn request_url_reads_through_descriptor() {
        let mut event = RawErrorEvent::default();
        assert_eq!(event.request_url(), None);

        event.request = Some(RequestInfo::new("POST", "/api/upload"));
        assert_eq!(event.request_url(), Some("/api/upload"));
    }
}
