use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::event::RequestInfo;

/// Backend framework dialects the parsers understand
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display, strum::EnumString)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum Framework {
    /// Symfony-style validation-problem documents with exception metadata
    #[default]
    Symfony,
    /// Laravel-style exception payloads carrying file/line and a trace array
    Laravel,
    /// Express-style flat `error`/`message` payloads
    Express,
    /// No framework shape recognized; produced by the shared fallback path
    Generic,
}

/// Unified, framework-independent error representation
///
/// Invariant: `title` and `message` are always non-empty. Consumers never
/// need to special-case absence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CanonicalError {
    /// Human headline
    pub title: String,
    /// Detail body
    pub message: String,
    /// HTTP status code, when known
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<u16>,
    /// Exception or type name reported by the backend
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_class: Option<String>,
    /// Stack frames in call order as received, innermost first
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub trace: Vec<StackFrame>,
    /// Originating request, carried through unchanged
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request: Option<RequestInfo>,
    /// Original response body, preserved for display and debugging
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub raw: Option<Value>,
    /// Which parser produced this error
    pub framework: Framework,
}

/// One entry in a call-stack trace
///
/// `raw` is always populated, even when no structured field could be
/// extracted from the source line.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StackFrame {
    /// File path; empty when the source line carried none
    #[serde(default)]
    pub file: String,
    /// Line number
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line: Option<u32>,
    /// Column number
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub column: Option<u32>,
    /// Function name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub function: Option<String>,
    /// Class name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub class: Option<String>,
    /// Namespace
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub namespace: Option<String>,
    /// Call type between class and function (`->` or `::`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub call_type: Option<String>,
    /// Call arguments, opaque
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub args: Option<Vec<Value>>,
    /// Full textual rendering of the frame
    #[serde(default)]
    pub raw: String,
}

impl StackFrame {
    /// Frame holding only the raw source line
    #[must_use]
    pub fn raw_only(line: impl Into<String>) -> Self {
        Self {
            raw: line.into(),
            ..Self::default()
        }
    }
}
