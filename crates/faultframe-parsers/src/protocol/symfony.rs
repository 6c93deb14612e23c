//! Symfony error document wire format
//!
//! Symfony's debug error handler emits an RFC 7807-style problem document
//! extended with the exception class and a structured trace.

use serde::Deserialize;
use serde_json::Value;

use super::{field, frames_field, status_field};

/// Symfony problem document with debug extensions
#[derive(Debug, Clone, Default)]
pub struct SymfonyErrorBody {
    /// Problem type URI
    pub problem_type: Option<String>,
    /// Short headline
    pub title: Option<String>,
    /// HTTP status code echoed in the body
    pub status: Option<u16>,
    /// Human-readable explanation
    pub detail: Option<String>,
    /// Fully-qualified exception class
    pub class: Option<String>,
    /// Structured stack trace
    pub trace: Vec<SymfonyFrame>,
}

impl SymfonyErrorBody {
    /// Read the document field by field, tolerating mistyped fields
    #[must_use]
    pub fn from_value(data: &Value) -> Self {
        let Value::Object(map) = data else {
            return Self::default();
        };

        Self {
            problem_type: field(map, "type"),
            title: field(map, "title"),
            status: status_field(map, "status"),
            detail: field(map, "detail"),
            class: field(map, "class"),
            trace: frames_field(map, "trace"),
        }
    }
}

/// One frame of a Symfony debug trace
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SymfonyFrame {
    /// Namespace portion of the class
    #[serde(default)]
    pub namespace: Option<String>,
    /// Class name without namespace
    #[serde(default)]
    pub short_class: Option<String>,
    /// Fully-qualified class name
    #[serde(default)]
    pub class: Option<String>,
    /// Call type (`->` or `::`)
    #[serde(default, rename = "type")]
    pub call_type: Option<String>,
    /// Function or method name
    #[serde(default)]
    pub function: Option<String>,
    /// Source file
    #[serde(default)]
    pub file: Option<String>,
    /// Source line
    #[serde(default)]
    pub line: Option<u32>,
    /// Call arguments
    #[serde(default)]
    pub args: Option<Vec<Value>>,
}
