//! Laravel error document wire format
//!
//! Laravel's debug-mode exception handler reports the exception class,
//! the throwing file/line, and a trace array.

use serde::Deserialize;
use serde_json::Value;

use super::{field, frames_field};

/// Laravel exception payload
#[derive(Debug, Clone, Default)]
pub struct LaravelErrorBody {
    /// Exception message
    pub message: Option<String>,
    /// Fully-qualified exception class
    pub exception: Option<String>,
    /// File the exception was thrown from
    pub file: Option<String>,
    /// Line the exception was thrown from
    pub line: Option<u32>,
    /// Stack trace
    pub trace: Vec<LaravelFrame>,
}

impl LaravelErrorBody {
    /// Read the payload field by field, tolerating mistyped fields
    #[must_use]
    pub fn from_value(data: &Value) -> Self {
        let Value::Object(map) = data else {
            return Self::default();
        };

        Self {
            message: field(map, "message"),
            exception: field(map, "exception"),
            file: field(map, "file"),
            line: field(map, "line"),
            trace: frames_field(map, "trace"),
        }
    }
}

/// One frame of a Laravel trace
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LaravelFrame {
    /// Source file
    #[serde(default)]
    pub file: Option<String>,
    /// Source line
    #[serde(default)]
    pub line: Option<u32>,
    /// Function or method name
    #[serde(default)]
    pub function: Option<String>,
    /// Class name
    #[serde(default)]
    pub class: Option<String>,
    /// Call type (`->` or `::`)
    #[serde(default, rename = "type")]
    pub call_type: Option<String>,
    /// Call arguments
    #[serde(default)]
    pub args: Option<Vec<Value>>,
}
